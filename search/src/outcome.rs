//! Search outcomes: plan, termination reason, and engine counters.
//!
//! Every engine run produces a [`SearchOutcome`], whether or not a plan was
//! found. Failure to find a plan is a normal outcome, never an error.

use std::time::Duration;

use serde::Serialize;

use crate::plan::Plan;

/// Why the search terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TerminationReason {
    /// A goal-satisfying node was reached.
    GoalReached,
    /// The open list emptied without reaching a goal.
    FrontierExhausted,
    /// The wall-clock budget ran out.
    TimedOut,
    /// `max_expansions` budget was hit.
    ExpansionBudgetExceeded,
    /// `max_rounds` budget was hit.
    RoundBudgetExceeded,
    /// The initial state is not a goal and has no applicable action.
    DeadEndRoot,
}

impl TerminationReason {
    #[must_use]
    pub fn is_goal_reached(self) -> bool {
        matches!(self, Self::GoalReached)
    }

    /// `true` when the engine proved no plan exists, as opposed to giving up
    /// on a budget.
    #[must_use]
    pub fn is_proven_unsolvable(self) -> bool {
        matches!(self, Self::FrontierExhausted | Self::DeadEndRoot)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::GoalReached => "goal_reached",
            Self::FrontierExhausted => "frontier_exhausted",
            Self::TimedOut => "timed_out",
            Self::ExpansionBudgetExceeded => "expansion_budget_exceeded",
            Self::RoundBudgetExceeded => "round_budget_exceeded",
            Self::DeadEndRoot => "dead_end_root",
        }
    }
}

/// A* counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AStarCounters {
    pub expansions: u64,
    pub generated: u64,
    /// Popped nodes whose state was already closed.
    pub duplicates_skipped: u64,
    /// Expanded nodes with no applicable action.
    pub dead_ends: u64,
    pub frontier_high_water: u64,
}

/// Adaptive walk counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct WalkCounters {
    pub rounds: u64,
    pub restarts: u64,
    pub walks: u64,
    pub goal_walks: u64,
}

/// Engine-specific counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "engine", rename_all = "snake_case")]
pub enum EngineCounters {
    AStar(AStarCounters),
    AdaptiveWalk(WalkCounters),
}

/// Result of one engine run.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// The plan, present exactly when `termination` is `GoalReached`.
    pub plan: Option<Plan>,
    pub termination: TerminationReason,
    pub elapsed: Duration,
    pub counters: EngineCounters,
}

impl SearchOutcome {
    #[must_use]
    pub fn is_goal_reached(&self) -> bool {
        self.termination.is_goal_reached()
    }
}
