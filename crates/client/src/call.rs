//! Cancelable handle for an in-flight API call.
//!
//! Every endpoint method returns a [`Call`]. The request runs on its own
//! tokio task so the caller can cancel it from outside the awaiting
//! context (e.g. on component teardown) without racing the response.
//!
//! A call settles exactly once: fulfilled, failed, or cancelled.
//! Cancelling after settlement is a no-op, which tokio's abort semantics
//! guarantee directly. Dropping the handle detaches the task; it does
//! not cancel the request.

use std::future::{Future, IntoFuture};
use std::pin::Pin;

use tokio::task::{AbortHandle, JoinHandle};

use crate::error::ApiError;

/// A pending or settled API call.
///
/// Await the handle (or call [`Call::join`]) to obtain the result.
/// Cancellation surfaces as [`ApiError::Cancelled`].
#[derive(Debug)]
pub struct Call<T> {
    handle: JoinHandle<Result<T, ApiError>>,
}

/// A detached cancellation hook for a [`Call`].
///
/// Cheap to clone and safe to keep after the call settles.
#[derive(Debug, Clone)]
pub struct CancelHandle {
    inner: AbortHandle,
}

impl CancelHandle {
    /// Abort the underlying request if it has not settled yet.
    pub fn cancel(&self) {
        self.inner.abort();
    }

    /// Whether the call has settled (in any terminal state).
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.inner.is_finished()
    }
}

impl<T: Send + 'static> Call<T> {
    /// Spawn a request future onto the current runtime.
    ///
    /// Must be called within a tokio runtime.
    pub(crate) fn spawn<F>(future: F) -> Self
    where
        F: Future<Output = Result<T, ApiError>> + Send + 'static,
    {
        Self {
            handle: tokio::spawn(future),
        }
    }

    /// Abort the underlying request if it has not settled yet.
    ///
    /// The transport call is dropped mid-flight; awaiting the handle
    /// afterwards yields [`ApiError::Cancelled`]. No-op once settled.
    pub fn cancel(&self) {
        self.handle.abort();
    }

    /// A cancellation hook that can outlive the awaiting context.
    #[must_use]
    pub fn cancel_handle(&self) -> CancelHandle {
        CancelHandle {
            inner: self.handle.abort_handle(),
        }
    }

    /// Whether the call has settled (in any terminal state).
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Wait for the call to settle.
    ///
    /// # Errors
    ///
    /// Returns the call's [`ApiError`] on failure, or
    /// [`ApiError::Cancelled`] if the call was cancelled first.
    pub async fn join(self) -> Result<T, ApiError> {
        match self.handle.await {
            Ok(result) => result,
            Err(join_error) if join_error.is_panic() => {
                // A panic inside the request task belongs to the caller.
                std::panic::resume_unwind(join_error.into_panic())
            }
            Err(_) => Err(ApiError::Cancelled),
        }
    }
}

impl<T: Send + 'static> IntoFuture for Call<T> {
    type Output = Result<T, ApiError>;
    type IntoFuture = Pin<Box<dyn Future<Output = Self::Output> + Send>>;

    fn into_future(self) -> Self::IntoFuture {
        Box::pin(self.join())
    }
}
