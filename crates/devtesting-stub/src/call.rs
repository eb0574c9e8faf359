//! Recorded stub calls.

use std::convert::Infallible;

/// One recorded call: the arguments passed and the result returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call<A, R, E> {
    /// The arguments the stub was called with.
    pub arguments: A,
    /// The result the stub returned.
    pub result: Result<R, E>,
}

impl<A, E> Call<A, (), E> {
    /// The error the call failed with, or `None` if it succeeded.
    pub fn error(&self) -> Option<&E> {
        self.result.as_ref().err()
    }
}

impl<A, R> Call<A, R, Infallible> {
    /// The value the call returned.
    pub fn return_value(&self) -> &R {
        match &self.result {
            Ok(value) => value,
            Err(never) => match *never {},
        }
    }
}
