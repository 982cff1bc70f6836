//! # Fetch Handles
//!
//! An upstream read that is already in flight when it reaches the enrichment layer. The
//! handle is owned and awaited at most once; dropping it without awaiting is allowed and
//! is how the correlator skips a sibling fetch it does not need.

use crate::error::{MonitorError, MonitorResult};
use futures::future::{BoxFuture, FutureExt};
use std::fmt;
use std::future::{Future, IntoFuture};
use tokio::task::JoinHandle;

pub struct Fetch<T> {
    operation: &'static str,
    inner: BoxFuture<'static, MonitorResult<T>>,
}

impl<T: Send + 'static> Fetch<T> {
    /// Wrap any future producing the fetched value
    pub fn new<F>(operation: &'static str, future: F) -> Self
    where
        F: Future<Output = MonitorResult<T>> + Send + 'static,
    {
        Self {
            operation,
            inner: future.boxed(),
        }
    }

    /// Wrap a spawned task. A panicked or aborted task counts as a failed fetch.
    pub fn from_task(operation: &'static str, handle: JoinHandle<MonitorResult<T>>) -> Self {
        Self::new(operation, async move {
            match handle.await {
                Ok(result) => result,
                Err(join_error) => Err(MonitorError::upstream_fetch(operation, join_error)),
            }
        })
    }

    /// A fetch that has already completed successfully
    pub fn ready(operation: &'static str, value: T) -> Self {
        Self::new(operation, futures::future::ready(Ok(value)))
    }

    /// A fetch that has already failed
    pub fn failed(operation: &'static str, error: MonitorError) -> Self {
        Self::new(operation, futures::future::ready(Err(error)))
    }
}

impl<T> Fetch<T> {
    pub fn operation(&self) -> &'static str {
        self.operation
    }
}

impl<T> IntoFuture for Fetch<T> {
    type Output = MonitorResult<T>;
    type IntoFuture = BoxFuture<'static, MonitorResult<T>>;

    fn into_future(self) -> Self::IntoFuture {
        self.inner
    }
}

impl<T> fmt::Debug for Fetch<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fetch")
            .field("operation", &self.operation)
            .finish_non_exhaustive()
    }
}
