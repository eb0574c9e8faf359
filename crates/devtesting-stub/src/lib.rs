//! Devtesting Stub — call-recording test doubles.
//!
//! A [`ThrowingStub`] stands in for a function in tests. Each call records
//! its arguments and returns the next queued result, or the default result
//! once the queue is empty. [`Stub`] is the variant that cannot fail.
//!
//! ```
//! use devtesting_stub::Stub;
//!
//! let lookup: Stub<u32, String> = Stub::with_return_values("default".into(), ["first".into()]);
//!
//! assert_eq!(lookup.call(1), "first");
//! assert_eq!(lookup.call(2), "default");
//! assert_eq!(lookup.call_arguments(), [1, 2]);
//! ```

mod call;
mod stub;

pub use call::Call;
pub use stub::{Stub, ThrowingStub};
