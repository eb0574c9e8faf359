//! Call-recording stubs.

use std::collections::VecDeque;
use std::convert::Infallible;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::call::Call;

/// State guarded by the stub's lock.
#[derive(Debug)]
struct MutableProperties<A, R, E> {
    default_result: Result<R, E>,
    result_queue: VecDeque<Result<R, E>>,
    calls: Vec<Call<A, R, E>>,
}

/// A stub for a function that takes `A` and returns `Result<R, E>`.
///
/// Calls are serialized by an internal lock: concurrent callers each take a
/// distinct queued result (or the default) and see their call recorded in
/// the order the lock was acquired. Each accessor is atomic on its own, but
/// a sequence of accessor calls is not.
///
/// Use `()` for `A` when the stubbed function takes no arguments, and
/// bundle multiple arguments into a tuple.
#[derive(Debug)]
pub struct ThrowingStub<A, R, E> {
    properties: Mutex<MutableProperties<A, R, E>>,
}

/// A stub whose calls cannot fail.
pub type Stub<A, R> = ThrowingStub<A, R, Infallible>;

impl<A, R, E> ThrowingStub<A, R, E> {
    /// Create a stub that returns the queued results in order, then
    /// `default_result` once the queue is exhausted.
    pub fn new(
        default_result: Result<R, E>,
        result_queue: impl IntoIterator<Item = Result<R, E>>,
    ) -> Self {
        Self {
            properties: Mutex::new(MutableProperties {
                default_result,
                result_queue: result_queue.into_iter().collect(),
                calls: Vec::new(),
            }),
        }
    }

    /// Create a stub that succeeds with `value` by default.
    pub fn with_default_return_value(
        value: R,
        result_queue: impl IntoIterator<Item = Result<R, E>>,
    ) -> Self {
        Self::new(Ok(value), result_queue)
    }

    /// Create a stub that fails with `error` by default.
    pub fn with_default_error(
        error: E,
        result_queue: impl IntoIterator<Item = Result<R, E>>,
    ) -> Self {
        Self::new(Err(error), result_queue)
    }

    /// Replaces the result returned once the queue is empty.
    pub fn set_default_result(&self, default_result: Result<R, E>) {
        self.lock().default_result = default_result;
    }

    /// Replaces the queue of results.
    pub fn set_result_queue(&self, result_queue: impl IntoIterator<Item = Result<R, E>>) {
        self.lock().result_queue = result_queue.into_iter().collect();
    }

    /// Forgets every recorded call.
    pub fn clear_calls(&self) {
        self.lock().calls.clear();
    }

    /// Returns the number of recorded calls.
    pub fn call_count(&self) -> usize {
        self.lock().calls.len()
    }

    // The guarded state stays consistent even if a panic poisoned the lock,
    // so poisoning is ignored.
    fn lock(&self) -> MutexGuard<'_, MutableProperties<A, R, E>> {
        self.properties.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<A, R: Clone, E: Clone> ThrowingStub<A, R, E> {
    /// Calls the stub: takes the next queued result, or the default if the
    /// queue is empty, records the call, and returns the result.
    ///
    /// # Errors
    ///
    /// Returns the error from the taken result, if it is an error.
    pub fn try_call(&self, arguments: A) -> Result<R, E> {
        let (result, call_index, remaining) = {
            let mut properties = self.lock();
            let result = properties
                .result_queue
                .pop_front()
                .unwrap_or_else(|| properties.default_result.clone());

            properties.calls.push(Call {
                arguments,
                result: result.clone(),
            });
            (result, properties.calls.len() - 1, properties.result_queue.len())
        };

        tracing::trace!(call_index, remaining, failed = result.is_err(), "stub called");
        result
    }

    /// Returns the result used once the queue is empty.
    pub fn default_result(&self) -> Result<R, E> {
        self.lock().default_result.clone()
    }

    /// Returns the results still queued, next first.
    pub fn result_queue(&self) -> Vec<Result<R, E>> {
        self.lock().result_queue.iter().cloned().collect()
    }

    /// Returns the result of every recorded call, in call order.
    pub fn call_results(&self) -> Vec<Result<R, E>> {
        self.lock().calls.iter().map(|call| call.result.clone()).collect()
    }
}

impl<A: Clone, R, E> ThrowingStub<A, R, E> {
    /// Returns the arguments of every recorded call, in call order.
    pub fn call_arguments(&self) -> Vec<A> {
        self.lock().calls.iter().map(|call| call.arguments.clone()).collect()
    }
}

impl<A: Clone, R: Clone, E: Clone> ThrowingStub<A, R, E> {
    /// Returns every recorded call, in call order.
    pub fn calls(&self) -> Vec<Call<A, R, E>> {
        self.lock().calls.clone()
    }
}

impl<A, E> ThrowingStub<A, (), E> {
    /// Create a stub for a function with no return value. `None` means
    /// success, both for the default and for each queued entry.
    pub fn with_errors(
        default_error: Option<E>,
        error_queue: impl IntoIterator<Item = Option<E>>,
    ) -> Self {
        Self::new(
            error_as_result(default_error),
            error_queue.into_iter().map(error_as_result),
        )
    }
}

impl<A, E: Clone> ThrowingStub<A, (), E> {
    /// Returns the default error, or `None` if the default is success.
    pub fn default_error(&self) -> Option<E> {
        self.lock().default_result.clone().err()
    }

    /// Returns the queued errors, with `None` for queued successes.
    pub fn error_queue(&self) -> Vec<Option<E>> {
        self.lock()
            .result_queue
            .iter()
            .map(|result| result.clone().err())
            .collect()
    }

    /// Returns the error of every recorded call, with `None` for calls that
    /// succeeded.
    pub fn call_errors(&self) -> Vec<Option<E>> {
        self.lock()
            .calls
            .iter()
            .map(|call| call.error().cloned())
            .collect()
    }
}

impl<A, R> ThrowingStub<A, R, Infallible> {
    /// Create a stub that returns the queued values in order, then
    /// `default_return_value`.
    pub fn with_return_values(
        default_return_value: R,
        return_value_queue: impl IntoIterator<Item = R>,
    ) -> Self {
        Self::new(
            Ok(default_return_value),
            return_value_queue.into_iter().map(Ok),
        )
    }
}

impl<A, R: Clone> ThrowingStub<A, R, Infallible> {
    /// Calls the stub and returns the next queued value, or the default.
    pub fn call(&self, arguments: A) -> R {
        match self.try_call(arguments) {
            Ok(value) => value,
            Err(never) => match never {},
        }
    }

    /// Returns the value used once the queue is empty.
    pub fn default_return_value(&self) -> R {
        match &self.lock().default_result {
            Ok(value) => value.clone(),
            Err(never) => match *never {},
        }
    }

    /// Returns the values still queued, next first.
    pub fn return_value_queue(&self) -> Vec<R> {
        self.lock()
            .result_queue
            .iter()
            .map(|result| match result {
                Ok(value) => value.clone(),
                Err(never) => match *never {},
            })
            .collect()
    }

    /// Returns the value returned by every recorded call, in call order.
    pub fn call_return_values(&self) -> Vec<R> {
        self.lock()
            .calls
            .iter()
            .map(|call| call.return_value().clone())
            .collect()
    }
}

fn error_as_result<E>(error: Option<E>) -> Result<(), E> {
    error.map_or(Ok(()), Err)
}
