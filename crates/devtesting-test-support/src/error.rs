//! Test error — a comparable error type for stubs that fail.

use thiserror::Error;

/// An error distinguished only by its `id`, so tests can assert on exactly
/// which error a stub produced.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq, Hash)]
#[error("test error {id}")]
pub struct TestError {
    /// Identifies the error.
    pub id: u32,
}

impl TestError {
    /// Create a new `TestError` with the given id.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self { id }
    }
}
