//! Per-call execution context: cooperative cancellation plus an optional deadline

use std::future::Future;
use std::time::Duration;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use crate::error::{InferenceError, Operation, Result};

/// Execution context passed to every inference call.
///
/// Clones share the same cancellation token, so cancelling any clone
/// cancels all in-flight calls that were given one of them.
#[derive(Debug, Clone, Default)]
pub struct CallContext {
    token: CancellationToken,
    deadline: Option<Instant>,
}

impl CallContext {
    /// Context that is never cancelled and has no deadline
    pub fn new() -> Self {
        Self::default()
    }

    /// Context whose deadline is `timeout` from now
    pub fn with_timeout(timeout: Duration) -> Self {
        Self::new().deadline_at(Instant::now() + timeout)
    }

    /// Context bound to an existing cancellation token
    pub fn with_token(token: CancellationToken) -> Self {
        Self {
            token,
            deadline: None,
        }
    }

    /// Set an absolute deadline
    pub fn deadline_at(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Request cancellation of every call using this context
    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    pub fn cancellation_token(&self) -> &CancellationToken {
        &self.token
    }

    /// Drive `future` to completion unless the context is cancelled or its
    /// deadline passes first. The future is dropped on either outcome.
    pub(crate) async fn run<F, T>(&self, operation: Operation, future: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        if self.token.is_cancelled() {
            return Err(InferenceError::Cancelled { operation });
        }

        match self.deadline {
            Some(deadline) => {
                tokio::select! {
                    biased;
                    _ = self.token.cancelled() => Err(InferenceError::Cancelled { operation }),
                    _ = tokio::time::sleep_until(deadline) => {
                        Err(InferenceError::DeadlineExceeded { operation })
                    }
                    result = future => result,
                }
            }
            None => {
                tokio::select! {
                    biased;
                    _ = self.token.cancelled() => Err(InferenceError::Cancelled { operation }),
                    result = future => result,
                }
            }
        }
    }
}
