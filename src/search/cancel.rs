//! Cooperative cancellation for long-running searches
//!
//! The solvers poll a [`StopCondition`] once per frontier pop (best-first) or
//! once per generation (genetic). A stopped search returns whatever it has
//! gathered so far.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

/// Shared flag that lets another thread (or a UI callback) abort a search
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request that any search holding this token stop at its next poll
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

/// Combination of an optional cancel token and an optional deadline
#[derive(Debug, Clone)]
pub struct StopCondition {
    token: Option<CancelToken>,
    deadline: Option<Instant>,
}

impl StopCondition {
    /// Never stops
    pub fn none() -> Self {
        Self {
            token: None,
            deadline: None,
        }
    }

    pub fn new(token: Option<CancelToken>, timeout: Option<Duration>) -> Self {
        Self {
            token,
            deadline: timeout.map(|t| Instant::now() + t),
        }
    }

    pub fn should_stop(&self) -> bool {
        if let Some(token) = &self.token {
            if token.is_cancelled() {
                return true;
            }
        }
        if let Some(deadline) = self.deadline {
            if Instant::now() >= deadline {
                return true;
            }
        }
        false
    }
}

impl Default for StopCondition {
    fn default() -> Self {
        Self::none()
    }
}
