//! Wall-clock budget shared by both engines.

use std::time::{Duration, Instant};

/// A start instant plus an optional budget.
///
/// Engines re-measure elapsed time on every check, so the budget is honored
/// no matter how long a single iteration takes.
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    start: Instant,
    budget: Option<Duration>,
}

impl Deadline {
    /// A deadline starting now that expires after `budget`.
    #[must_use]
    pub fn after(budget: Duration) -> Self {
        Self {
            start: Instant::now(),
            budget: Some(budget),
        }
    }

    /// A deadline that never expires.
    #[must_use]
    pub fn unbounded() -> Self {
        Self {
            start: Instant::now(),
            budget: None,
        }
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    #[must_use]
    pub fn budget(&self) -> Option<Duration> {
        self.budget
    }

    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.budget.is_some_and(|b| self.start.elapsed() >= b)
    }
}
