//! Cooperative cancellation for the prime search.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::error::{Result, RsaError};

/// Shared stop signal checked between candidate draws.
///
/// Clones share the same flag, so the owner of the timer can keep one clone
/// and hand another to the search. An optional deadline makes the token
/// expire on its own without anyone calling [`CancelToken::cancel`].
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
    deadline: Option<(Instant, Duration)>,
}

impl CancelToken {
    /// A token that only stops when cancelled explicitly.
    pub fn new() -> Self {
        Self::default()
    }

    /// A token that also expires `timeout` from now.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            cancelled: Arc::new(AtomicBool::new(false)),
            deadline: Some((Instant::now() + timeout, timeout)),
        }
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Ok while the search may continue.
    pub fn check(&self) -> Result<()> {
        if let Some((deadline, timeout)) = self.deadline {
            if Instant::now() >= deadline {
                return Err(RsaError::GenerationTimedOut(timeout));
            }
        }
        if self.is_cancelled() {
            return Err(RsaError::GenerationCancelled);
        }
        Ok(())
    }
}
