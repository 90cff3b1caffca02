//! Online walk statistics that drive action selection.
//!
//! Per-action counters are indexed by position in the problem's flat action
//! list and grow on demand, so one tracker can outlive a single problem.

use std::collections::BTreeSet;

use serde::Serialize;

/// How a single random walk ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WalkEnd {
    /// Reached a goal state mid-walk.
    Goal,
    /// Ran all steps without getting stuck.
    Completed,
    /// Stopped at a state with no applicable action.
    DeadEnd,
}

impl WalkEnd {
    #[must_use]
    pub fn is_dead_end(self) -> bool {
        matches!(self, Self::DeadEnd)
    }
}

/// Counters accumulated across walks.
///
/// Invariant: for every action index `a`, `successful_walks[a] +
/// failed_walks[a]` equals the number of recorded walks that used `a`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WalkStatistics {
    successful_walks: Vec<u64>,
    failed_walks: Vec<u64>,
    helpful_action_counts: Vec<u64>,
    total_random_walks: u64,
    dead_end_walks: u64,
    total_branching_factor: u64,
    branching_factor_samples: u64,
}

impl WalkStatistics {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a tracker from aggregate counters only, leaving per-action
    /// tables empty.
    #[must_use]
    pub fn from_counters(
        total_random_walks: u64,
        dead_end_walks: u64,
        total_branching_factor: u64,
        branching_factor_samples: u64,
    ) -> Self {
        Self {
            total_random_walks,
            dead_end_walks,
            total_branching_factor,
            branching_factor_samples,
            ..Self::default()
        }
    }

    /// Record the number of applicable actions seen at one walk step.
    pub fn record_branching(&mut self, applicable: usize) {
        self.total_branching_factor += applicable as u64;
        self.branching_factor_samples += 1;
    }

    /// Record one finished walk and credit every action it used exactly once.
    pub fn record_walk(&mut self, used: &BTreeSet<usize>, end: WalkEnd) {
        self.total_random_walks += 1;
        if end.is_dead_end() {
            self.dead_end_walks += 1;
        }
        let table = if end.is_dead_end() {
            &mut self.failed_walks
        } else {
            &mut self.successful_walks
        };
        for &action in used {
            bump(table, action);
        }
    }

    /// Count `action` as helpful (it lowered `h` from a walk endpoint).
    pub fn record_helpful(&mut self, action: usize) {
        bump(&mut self.helpful_action_counts, action);
    }

    #[must_use]
    pub fn successful_walks(&self, action: usize) -> u64 {
        self.successful_walks.get(action).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn failed_walks(&self, action: usize) -> u64 {
        self.failed_walks.get(action).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn helpful_count(&self, action: usize) -> u64 {
        self.helpful_action_counts.get(action).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn total_random_walks(&self) -> u64 {
        self.total_random_walks
    }

    #[must_use]
    pub fn dead_end_walks(&self) -> u64 {
        self.dead_end_walks
    }

    #[must_use]
    pub fn branching_factor_samples(&self) -> u64 {
        self.branching_factor_samples
    }

    /// Fraction of recorded walks that dead-ended, `0` before any walk.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn dead_end_ratio(&self) -> f64 {
        if self.total_random_walks == 0 {
            0.0
        } else {
            self.dead_end_walks as f64 / self.total_random_walks as f64
        }
    }

    /// Mean applicable-action count per sampled step, `0` before any sample.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn mean_branching_factor(&self) -> f64 {
        if self.branching_factor_samples == 0 {
            0.0
        } else {
            self.total_branching_factor as f64 / self.branching_factor_samples as f64
        }
    }

    /// Dead-end avoidance score `-failed / (successful + failed)`, in
    /// `[-1, 0]`. Unseen actions score `0`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn mda_score(&self, action: usize) -> f64 {
        let failed = self.failed_walks(action);
        let seen = self.successful_walks(action) + failed;
        if seen == 0 {
            0.0
        } else {
            -(failed as f64) / seen as f64
        }
    }

    /// Clear every counter.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

fn bump(table: &mut Vec<u64>, action: usize) {
    if table.len() <= action {
        table.resize(action + 1, 0);
    }
    table[action] += 1;
}
