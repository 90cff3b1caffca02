//! Weighted A* over grounded problems.
//!
//! Nodes are ordered by `f = weight * h + g` with ties broken by lower `h`
//! and then by creation order. States are closed when popped. A state that
//! is rediscovered more cheaply while still open is not reopened, so weight
//! `1` with an admissible heuristic is optimal only up to that limitation.

use meander_kernel::heuristic::StateHeuristic;
use meander_kernel::model::problem::Problem;
use tracing::debug;

use crate::contract::SearchEngine;
use crate::deadline::Deadline;
use crate::error::SearchError;
use crate::frontier::BestFirstFrontier;
use crate::node::{NodeArena, NodeId, SearchNode};
use crate::outcome::{AStarCounters, EngineCounters, SearchOutcome, TerminationReason};
use crate::plan::extract_plan;
use crate::policy::SearchPolicy;

/// Weighted best-first search engine.
#[derive(Debug, Clone)]
pub struct AStarEngine {
    policy: SearchPolicy,
}

impl AStarEngine {
    /// Create an engine after validating `policy`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidWeight`] for a negative or non-finite
    /// weight.
    pub fn new(policy: SearchPolicy) -> Result<Self, SearchError> {
        policy.validate()?;
        Ok(Self { policy })
    }

    #[must_use]
    pub fn policy(&self) -> &SearchPolicy {
        &self.policy
    }

    /// Run the search and keep the node arena.
    fn run(
        &self,
        problem: &Problem,
        heuristic: &dyn StateHeuristic,
        deadline: Deadline,
    ) -> (SearchOutcome, NodeArena) {
        let mut run = Run {
            problem,
            heuristic,
            weight: self.policy.heuristic_weight,
            arena: NodeArena::new(),
            frontier: BestFirstFrontier::new(),
            counters: AStarCounters::default(),
        };
        let (termination, goal) = run.expand_until_done(&self.policy, deadline);
        run.counters.frontier_high_water = run.frontier.high_water();

        let plan = goal.map(|id| extract_plan(&run.arena, id, problem));
        let outcome = SearchOutcome {
            plan,
            termination,
            elapsed: deadline.elapsed(),
            counters: EngineCounters::AStar(run.counters),
        };
        debug!(
            termination = termination.as_str(),
            expansions = run.counters.expansions,
            generated = run.counters.generated,
            "astar finished"
        );
        (outcome, run.arena)
    }
}

impl SearchEngine for AStarEngine {
    fn name(&self) -> &'static str {
        "astar"
    }

    fn search(
        &mut self,
        problem: &Problem,
        heuristic: &dyn StateHeuristic,
        deadline: Deadline,
    ) -> SearchOutcome {
        self.run(problem, heuristic, deadline).0
    }
}

/// Run weighted A* once with `policy`.
///
/// # Errors
///
/// Returns [`SearchError`] only for pre-flight policy validation failures.
/// All runtime terminations return `Ok(SearchOutcome)`.
pub fn astar(
    problem: &Problem,
    heuristic: &dyn StateHeuristic,
    policy: &SearchPolicy,
    deadline: Deadline,
) -> Result<SearchOutcome, SearchError> {
    let mut engine = AStarEngine::new(policy.clone())?;
    Ok(engine.search(problem, heuristic, deadline))
}

/// Mutable state of one A* run.
struct Run<'a> {
    problem: &'a Problem,
    heuristic: &'a dyn StateHeuristic,
    weight: f64,
    arena: NodeArena,
    frontier: BestFirstFrontier,
    counters: AStarCounters,
}

impl Run<'_> {
    fn expand_until_done(
        &mut self,
        policy: &SearchPolicy,
        deadline: Deadline,
    ) -> (TerminationReason, Option<NodeId>) {
        let goal = self.problem.goal();
        let root_state = self.problem.initial_state().clone();
        let root_h = self.heuristic.estimate(&root_state, goal);
        let root = self.arena.push(SearchNode::root(root_state, root_h));
        debug!(h = root_h, weight = self.weight, "astar started");

        if self.problem.is_goal(self.arena[root].state()) {
            return (TerminationReason::GoalReached, Some(root));
        }
        if self.problem.is_dead_end(self.arena[root].state()) {
            return (TerminationReason::DeadEndRoot, None);
        }
        self.frontier.push(root, &self.arena[root], self.weight);

        loop {
            if deadline.is_expired() {
                return (TerminationReason::TimedOut, None);
            }
            if policy
                .max_expansions
                .is_some_and(|max| self.counters.expansions >= max)
            {
                return (TerminationReason::ExpansionBudgetExceeded, None);
            }
            let Some(current) = self.frontier.pop() else {
                return (TerminationReason::FrontierExhausted, None);
            };
            if !self.frontier.close(self.arena[current].state()) {
                self.counters.duplicates_skipped += 1;
                continue;
            }
            if self.problem.is_goal(self.arena[current].state()) {
                return (TerminationReason::GoalReached, Some(current));
            }
            self.expand(current);
        }
    }

    /// Generate every successor of `id` whose state is not closed and push
    /// it onto the frontier.
    fn expand(&mut self, id: NodeId) {
        self.counters.expansions += 1;
        let goal = self.problem.goal();
        let current = &self.arena[id];
        let applicable = self.problem.applicable_actions(current.state());
        if applicable.is_empty() {
            self.counters.dead_ends += 1;
            return;
        }

        let mut children = Vec::with_capacity(applicable.len());
        for index in applicable {
            let action = &self.problem.actions()[index];
            let mut child = current.detached_copy();
            for ce in action.conditional_effects() {
                // Effect conditions are read from the parent state.
                if current.satisfy(&ce.condition) {
                    child.apply(&ce.effect);
                }
            }
            self.counters.generated += 1;
            if self.frontier.is_closed(child.state()) {
                continue;
            }
            child.set_parent(Some(id));
            child.set_action(Some(index));
            child.set_g_cost(current.g_cost() + 1);
            child.set_depth(current.depth() + 1);
            child.set_h_cost(self.heuristic.estimate(child.state(), goal));
            children.push(child);
        }

        for child in children {
            let child_id = self.arena.push(child);
            self.frontier.push(child_id, &self.arena[child_id], self.weight);
        }
    }
}
