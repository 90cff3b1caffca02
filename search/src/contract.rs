//! Search engine contract trait.

use meander_kernel::heuristic::StateHeuristic;
use meander_kernel::model::problem::Problem;

use crate::deadline::Deadline;
use crate::outcome::SearchOutcome;

/// Trait implemented by every search strategy.
///
/// # Contract
///
/// - `search` reads `problem` and `heuristic` only; all state mutation
///   happens on private copies inside the engine.
/// - `search` always returns an outcome. A missing plan is reported through
///   [`SearchOutcome::termination`], never by panicking.
/// - `deadline` is checked cooperatively at loop boundaries. Once it has
///   expired the engine stops and reports `TimedOut`.
/// - A returned plan replays from `problem.initial_state()` to a goal state.
pub trait SearchEngine {
    /// Short engine identifier used in logs and reports.
    fn name(&self) -> &'static str;

    /// Run the engine on `problem` until it finds a plan or stops.
    fn search(
        &mut self,
        problem: &Problem,
        heuristic: &dyn StateHeuristic,
        deadline: Deadline,
    ) -> SearchOutcome;
}
