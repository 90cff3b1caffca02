//! Problem-independent heuristics.

use crate::heuristic::StateHeuristic;
use crate::model::condition::Condition;
use crate::model::state::State;

/// `0` if the goal holds, `1` otherwise. Turns weighted A* into uniform-cost
/// search.
#[derive(Debug, Clone, Copy)]
pub struct BlindHeuristic;

impl StateHeuristic for BlindHeuristic {
    fn estimate(&self, state: &State, goal: &Condition) -> f64 {
        if state.satisfy(goal) {
            0.0
        } else {
            1.0
        }
    }
}

/// Number of goal literals the state violates.
#[derive(Debug, Clone, Copy)]
pub struct GoalCountHeuristic;

impl StateHeuristic for GoalCountHeuristic {
    #[allow(clippy::cast_precision_loss)]
    fn estimate(&self, state: &State, goal: &Condition) -> f64 {
        let missing = goal.positive().iter().filter(|&f| !state.holds(f)).count();
        let violated = goal.negative().iter().filter(|&f| state.holds(f)).count();
        (missing + violated) as f64
    }
}
