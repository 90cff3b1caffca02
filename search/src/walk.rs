//! Adaptive random-walk search.
//!
//! Each round runs a batch of bounded random walks from the current node and
//! moves to the walk endpoint with the lowest heuristic value. The engine
//! restarts from the initial state when the current node is a dead end or
//! when too many rounds pass without improving on the best `h` seen so far.
//!
//! Walk statistics live on the engine and persist across `search` calls
//! until [`AdaptiveWalkEngine::reset_statistics`] is called.

use std::collections::BTreeSet;

use meander_kernel::heuristic::StateHeuristic;
use meander_kernel::model::problem::Problem;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use crate::contract::SearchEngine;
use crate::deadline::Deadline;
use crate::error::SearchError;
use crate::node::{NodeArena, NodeId, SearchNode};
use crate::outcome::{EngineCounters, SearchOutcome, TerminationReason, WalkCounters};
use crate::plan::extract_plan;
use crate::policy::WalkPolicy;
use crate::selector::SelectionPolicy;
use crate::stats::{WalkEnd, WalkStatistics};

/// What one `find_best_node` round produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// A walk reached a goal node.
    Goal(NodeId),
    /// All walks finished; this is the lowest-`h` endpoint (or the start).
    Best(NodeId),
    /// The deadline expired between walks; carries the best node so far.
    Interrupted(NodeId),
}

/// Random-walk engine with statistics-driven action selection.
#[derive(Debug, Clone)]
pub struct AdaptiveWalkEngine {
    policy: WalkPolicy,
    stats: WalkStatistics,
    rng: StdRng,
    active: Option<SelectionPolicy>,
}

impl AdaptiveWalkEngine {
    /// Create an engine after validating `policy`. The RNG is seeded from
    /// `policy.seed`, or from entropy when unset.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidWalkPolicy`] naming the offending field.
    pub fn new(policy: WalkPolicy) -> Result<Self, SearchError> {
        policy.validate()?;
        let rng = match policy.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Self {
            policy,
            stats: WalkStatistics::new(),
            rng,
            active: None,
        })
    }

    #[must_use]
    pub fn policy(&self) -> &WalkPolicy {
        &self.policy
    }

    #[must_use]
    pub fn statistics(&self) -> &WalkStatistics {
        &self.stats
    }

    pub fn reset_statistics(&mut self) {
        self.stats.reset();
        self.active = None;
    }

    /// Run `policy.num_walks` random walks of up to `policy.walk_length`
    /// steps from `start`.
    ///
    /// Walk nodes are appended to `arena`. Nodes of walks whose endpoint is
    /// not kept are truncated away again, so `arena` only grows by the
    /// lineage of kept endpoints.
    pub fn find_best_node(
        &mut self,
        problem: &Problem,
        heuristic: &dyn StateHeuristic,
        arena: &mut NodeArena,
        start: NodeId,
        deadline: Deadline,
        counters: &mut WalkCounters,
    ) -> RoundOutcome {
        let mut best: Option<(NodeId, f64)> = None;

        for _ in 0..self.policy.num_walks {
            if deadline.is_expired() {
                return RoundOutcome::Interrupted(best.map_or(start, |(id, _)| id));
            }
            let selection = self.select_policy();
            counters.walks += 1;

            let mark = arena.len();
            let (endpoint, end, used) = self.walk(problem, heuristic, arena, start, selection);
            self.stats.record_walk(&used, end);

            if end == WalkEnd::Goal {
                counters.goal_walks += 1;
                self.scan_helpful(problem, heuristic, &arena[endpoint]);
                return RoundOutcome::Goal(endpoint);
            }
            if !end.is_dead_end() {
                self.scan_helpful(problem, heuristic, &arena[endpoint]);
            }

            let h = arena[endpoint].h_cost();
            if best.map_or(true, |(_, best_h)| h < best_h) {
                best = Some((endpoint, h));
            } else {
                arena.truncate(mark);
            }
        }

        RoundOutcome::Best(best.map_or(start, |(id, _)| id))
    }

    /// Decide the policy for the next walk and log switches.
    fn select_policy(&mut self) -> SelectionPolicy {
        let selection = SelectionPolicy::choose(&self.stats, &self.policy);
        if self.active != Some(selection) {
            debug!(
                policy = %selection,
                walks = self.stats.total_random_walks(),
                dead_end_ratio = self.stats.dead_end_ratio(),
                mean_branching = self.stats.mean_branching_factor(),
                "selection policy switched"
            );
            self.active = Some(selection);
        }
        selection
    }

    /// One walk from `start`. Returns the endpoint, how the walk ended, and
    /// the set of action indices it used.
    fn walk(
        &mut self,
        problem: &Problem,
        heuristic: &dyn StateHeuristic,
        arena: &mut NodeArena,
        start: NodeId,
        selection: SelectionPolicy,
    ) -> (NodeId, WalkEnd, BTreeSet<usize>) {
        let mut used = BTreeSet::new();
        let mut node = start;
        for _ in 0..self.policy.walk_length {
            let state = arena[node].state();
            if problem.is_dead_end(state) {
                self.stats.record_branching(0);
                return (node, WalkEnd::DeadEnd, used);
            }
            let applicable = problem.applicable_actions(state);
            self.stats.record_branching(applicable.len());
            let Some(action) = selection.select(&applicable, &self.stats, &mut self.rng) else {
                return (node, WalkEnd::DeadEnd, used);
            };
            let child = successor_node(problem, heuristic, arena, node, action);
            node = arena.push(child);
            used.insert(action);
            if problem.is_goal(arena[node].state()) {
                return (node, WalkEnd::Goal, used);
            }
        }
        (node, WalkEnd::Completed, used)
    }

    /// Credit every applicable action whose successor strictly lowers `h`
    /// below the endpoint's own value.
    fn scan_helpful(&mut self, problem: &Problem, heuristic: &dyn StateHeuristic, endpoint: &SearchNode) {
        let goal = problem.goal();
        for index in problem.applicable_actions(endpoint.state()) {
            let next = problem.actions()[index].successor(endpoint.state());
            if heuristic.estimate(&next, goal) < endpoint.h_cost() {
                self.stats.record_helpful(index);
            }
        }
    }
}

impl SearchEngine for AdaptiveWalkEngine {
    fn name(&self) -> &'static str {
        "adaptive_walk"
    }

    fn search(
        &mut self,
        problem: &Problem,
        heuristic: &dyn StateHeuristic,
        deadline: Deadline,
    ) -> SearchOutcome {
        let mut counters = WalkCounters::default();
        let (termination, goal, arena) = self.run(problem, heuristic, deadline, &mut counters);
        let plan = goal.map(|id| extract_plan(&arena, id, problem));
        debug!(
            termination = termination.as_str(),
            rounds = counters.rounds,
            restarts = counters.restarts,
            walks = counters.walks,
            "adaptive walk finished"
        );
        SearchOutcome {
            plan,
            termination,
            elapsed: deadline.elapsed(),
            counters: EngineCounters::AdaptiveWalk(counters),
        }
    }
}

impl AdaptiveWalkEngine {
    fn run(
        &mut self,
        problem: &Problem,
        heuristic: &dyn StateHeuristic,
        deadline: Deadline,
        counters: &mut WalkCounters,
    ) -> (TerminationReason, Option<NodeId>, NodeArena) {
        let goal = problem.goal();
        let initial = problem.initial_state();
        let root_h = heuristic.estimate(initial, goal);
        let fresh_root = || SearchNode::root(initial.clone(), root_h);

        let mut arena = NodeArena::new();
        let mut current = arena.push(fresh_root());
        if problem.is_goal(initial) {
            return (TerminationReason::GoalReached, Some(current), arena);
        }
        if problem.is_dead_end(initial) {
            return (TerminationReason::DeadEndRoot, None, arena);
        }

        let mut best_h = root_h;
        let mut stagnation = 0u32;
        loop {
            if deadline.is_expired() {
                return (TerminationReason::TimedOut, None, arena);
            }
            if self
                .policy
                .max_rounds
                .is_some_and(|max| counters.rounds >= max)
            {
                return (TerminationReason::RoundBudgetExceeded, None, arena);
            }
            if stagnation > self.policy.max_stagnation || problem.is_dead_end(arena[current].state()) {
                debug!(stagnation, best_h, "restarting from initial state");
                arena = NodeArena::new();
                current = arena.push(fresh_root());
                stagnation = 0;
                counters.restarts += 1;
            }

            counters.rounds += 1;
            match self.find_best_node(problem, heuristic, &mut arena, current, deadline, counters) {
                RoundOutcome::Goal(id) => {
                    debug!(
                        rounds = counters.rounds,
                        depth = arena[id].depth(),
                        "walk reached goal"
                    );
                    return (TerminationReason::GoalReached, Some(id), arena);
                }
                RoundOutcome::Interrupted(id) => {
                    debug!(
                        rounds = counters.rounds,
                        round_best_h = arena[id].h_cost(),
                        best_h,
                        "deadline hit mid-round"
                    );
                    return (TerminationReason::TimedOut, None, arena);
                }
                RoundOutcome::Best(id) => {
                    let (compacted, kept) = arena.retain_lineage(id);
                    arena = compacted;
                    current = kept;
                    let h = arena[current].h_cost();
                    if h < best_h {
                        best_h = h;
                        stagnation = 0;
                    } else {
                        stagnation += 1;
                    }
                }
            }
        }
    }
}

/// Build the successor of `parent` under `action`, applying every
/// conditional effect whose condition holds in the parent state.
fn successor_node(
    problem: &Problem,
    heuristic: &dyn StateHeuristic,
    arena: &NodeArena,
    parent: NodeId,
    action: usize,
) -> SearchNode {
    let from = &arena[parent];
    let mut child = from.detached_copy();
    for ce in problem.actions()[action].conditional_effects() {
        if from.satisfy(&ce.condition) {
            child.apply(&ce.effect);
        }
    }
    child.set_parent(Some(parent));
    child.set_action(Some(action));
    child.set_g_cost(from.g_cost() + 1);
    child.set_depth(from.depth() + 1);
    child.set_h_cost(heuristic.estimate(child.state(), problem.goal()));
    child
}
