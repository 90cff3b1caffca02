//! Action-selection policies for random walks.
//!
//! [`SelectionPolicy`] is chosen per walk from a [`WalkStatistics`]
//! snapshot and then picks one action index per step. Each variant is a
//! pure function of the applicable list, the statistics, and the RNG.

use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use crate::policy::WalkPolicy;
use crate::stats::WalkStatistics;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SelectionPolicy {
    /// Uniform random choice.
    Uniform,
    /// Monte-Carlo dead-end avoidance (MDA): prefer actions that rarely led
    /// to dead-ended walks.
    DeadEndAvoidance,
    /// Monte-Carlo helpful actions (MHA): prefer actions that often lowered
    /// the heuristic at walk endpoints.
    HelpfulActionBias,
}

impl SelectionPolicy {
    /// Decide the policy for the next walk.
    ///
    /// Dead-end avoidance wins once at least `min_walk_samples` walks are
    /// recorded and their dead-end ratio exceeds the threshold. Otherwise
    /// helpful-action bias applies once at least `min_branching_samples`
    /// steps are recorded and the mean branching factor exceeds its
    /// threshold. Otherwise uniform.
    #[must_use]
    pub fn choose(stats: &WalkStatistics, policy: &WalkPolicy) -> Self {
        if stats.total_random_walks() >= policy.min_walk_samples
            && stats.dead_end_ratio() > policy.dead_end_ratio_threshold
        {
            return Self::DeadEndAvoidance;
        }
        if stats.branching_factor_samples() >= policy.min_branching_samples
            && stats.mean_branching_factor() > policy.branching_threshold
        {
            return Self::HelpfulActionBias;
        }
        Self::Uniform
    }

    /// Pick one of `applicable`. Returns `None` only if `applicable` is
    /// empty.
    pub fn select<R: Rng + ?Sized>(
        self,
        applicable: &[usize],
        stats: &WalkStatistics,
        rng: &mut R,
    ) -> Option<usize> {
        match self {
            Self::Uniform => select_uniform(applicable, rng),
            Self::DeadEndAvoidance => select_dead_end_avoidance(applicable, stats, rng),
            Self::HelpfulActionBias => select_helpful(applicable, stats, rng),
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Uniform => "uniform",
            Self::DeadEndAvoidance => "mda",
            Self::HelpfulActionBias => "mha",
        }
    }
}

impl fmt::Display for SelectionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn select_uniform<R: Rng + ?Sized>(applicable: &[usize], rng: &mut R) -> Option<usize> {
    applicable.choose(rng).copied()
}

/// Highest `mda_score`; ties (including all-unseen) broken uniformly.
fn select_dead_end_avoidance<R: Rng + ?Sized>(
    applicable: &[usize],
    stats: &WalkStatistics,
    rng: &mut R,
) -> Option<usize> {
    let best = applicable
        .iter()
        .map(|&a| stats.mda_score(a))
        .fold(f64::NEG_INFINITY, f64::max);
    let tied: Vec<usize> = applicable
        .iter()
        .copied()
        .filter(|&a| stats.mda_score(a) >= best)
        .collect();
    tied.choose(rng).copied()
}

/// Highest positive helpful count; ties broken uniformly. Falls back to
/// uniform over all of `applicable` when no action has a positive count.
fn select_helpful<R: Rng + ?Sized>(
    applicable: &[usize],
    stats: &WalkStatistics,
    rng: &mut R,
) -> Option<usize> {
    let best = applicable
        .iter()
        .map(|&a| stats.helpful_count(a))
        .max()
        .unwrap_or(0);
    if best == 0 {
        return select_uniform(applicable, rng);
    }
    let tied: Vec<usize> = applicable
        .iter()
        .copied()
        .filter(|&a| stats.helpful_count(a) == best)
        .collect();
    tied.choose(rng).copied()
}
