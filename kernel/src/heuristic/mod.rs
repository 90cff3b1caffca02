//! Heuristic library: distance-to-goal estimators for search guidance.
//!
//! Depends on `model` only. Engines consume heuristics through the
//! [`StateHeuristic`] trait and never look at a concrete estimator.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::model::condition::Condition;
use crate::model::problem::Problem;
use crate::model::state::State;

pub mod relaxed;
pub mod simple;

/// Trait for state evaluators.
///
/// # Contract
///
/// - The returned estimate is `>= 0`. `0` should mean the goal holds, though
///   engines do not rely on it.
/// - `f64::INFINITY` means the goal is unreachable even under relaxation.
/// - Estimation must be a pure function of `(state, goal)`.
pub trait StateHeuristic {
    fn estimate(&self, state: &State, goal: &Condition) -> f64;
}

/// Names of the heuristics the planner can be configured with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HeuristicName {
    /// `0` on goal states, `1` elsewhere.
    Blind,
    /// Number of unsatisfied goal literals.
    GoalCount,
    /// Delete-relaxed `h_max`: admissible.
    Max,
    /// Delete-relaxed additive `h_add`.
    Sum,
    /// Relaxed-plan length (FF).
    #[default]
    FastForward,
}

/// Failure to resolve a heuristic name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeuristicError {
    #[error("unknown heuristic `{name}` (expected one of: {})", HeuristicName::ALL_NAMES.join(", "))]
    UnknownHeuristic { name: String },
}

impl HeuristicName {
    /// Every heuristic, in declaration order.
    pub const ALL: [Self; 5] = [Self::Blind, Self::GoalCount, Self::Max, Self::Sum, Self::FastForward];

    /// Canonical names, in declaration order.
    pub const ALL_NAMES: [&'static str; 5] = ["BLIND", "GOAL_COUNT", "MAX", "SUM", "FAST_FORWARD"];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Blind => "BLIND",
            Self::GoalCount => "GOAL_COUNT",
            Self::Max => "MAX",
            Self::Sum => "SUM",
            Self::FastForward => "FAST_FORWARD",
        }
    }

    /// Instantiate the named heuristic for `problem`.
    #[must_use]
    pub fn build(self, problem: &Problem) -> Box<dyn StateHeuristic> {
        match self {
            Self::Blind => Box::new(simple::BlindHeuristic),
            Self::GoalCount => Box::new(simple::GoalCountHeuristic),
            Self::Max => Box::new(relaxed::MaxHeuristic::new(problem)),
            Self::Sum => Box::new(relaxed::AdditiveHeuristic::new(problem)),
            Self::FastForward => Box::new(relaxed::FastForwardHeuristic::new(problem)),
        }
    }
}

impl fmt::Display for HeuristicName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HeuristicName {
    type Err = HeuristicError;

    /// Case-insensitive; `-` and `_` are interchangeable.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase().replace('-', "_");
        match normalized.as_str() {
            "BLIND" => Ok(Self::Blind),
            "GOAL_COUNT" => Ok(Self::GoalCount),
            "MAX" => Ok(Self::Max),
            "SUM" => Ok(Self::Sum),
            "FAST_FORWARD" | "FF" => Ok(Self::FastForward),
            _ => Err(HeuristicError::UnknownHeuristic {
                name: s.to_string(),
            }),
        }
    }
}
