//! ADAPTIVE-WALK: random-walk engine acceptance.
//!
//! Solvability on the fixture worlds, dead-end detection at the root,
//! seeded determinism, and the round primitive `find_best_node` used
//! directly against an arena.

use std::time::Duration;

use meander_harness::worlds::{chain, dead_end, gripper, switchboard};
use meander_kernel::heuristic::{HeuristicName, StateHeuristic};
use meander_search::contract::SearchEngine;
use meander_search::deadline::Deadline;
use meander_search::node::{NodeArena, SearchNode};
use meander_search::outcome::{EngineCounters, TerminationReason, WalkCounters};
use meander_search::policy::WalkPolicy;
use meander_search::walk::{AdaptiveWalkEngine, RoundOutcome};

fn engine(seed: u64) -> AdaptiveWalkEngine {
    AdaptiveWalkEngine::new(WalkPolicy {
        seed: Some(seed),
        ..WalkPolicy::default()
    })
    .expect("valid policy")
}

fn deadline() -> Deadline {
    Deadline::after(Duration::from_secs(60))
}

#[test]
fn solves_chain() {
    let problem = chain::problem();
    let h = HeuristicName::FastForward.build(&problem);
    let outcome = engine(1).search(&problem, h.as_ref(), deadline());
    assert_eq!(outcome.termination, TerminationReason::GoalReached);
    assert_eq!(outcome.plan.expect("plan").action_names(), vec!["A", "B"]);
}

#[test]
fn solves_gripper_and_switchboard() {
    for problem in [gripper::problem(2), switchboard::problem(4)] {
        let h = HeuristicName::FastForward.build(&problem);
        let outcome = engine(9).search(&problem, h.as_ref(), deadline());
        let plan = outcome.plan.expect("solvable world");
        assert!(plan.validate(&problem).is_ok());
    }
}

#[test]
fn dead_end_root_reported_without_walking() {
    let problem = dead_end::problem();
    let h = HeuristicName::FastForward.build(&problem);
    let mut walker = engine(3);
    let outcome = walker.search(&problem, h.as_ref(), deadline());
    assert_eq!(outcome.termination, TerminationReason::DeadEndRoot);
    assert_eq!(walker.statistics().total_random_walks(), 0);
}

#[test]
fn same_seed_same_plan() {
    let problem = gripper::problem(3);
    let h = HeuristicName::FastForward.build(&problem);
    let first = engine(42).search(&problem, h.as_ref(), deadline());
    let second = engine(42).search(&problem, h.as_ref(), deadline());
    assert_eq!(
        first.plan.map(|p| p.action_indices()),
        second.plan.map(|p| p.action_indices())
    );
    assert_eq!(first.counters, second.counters);
}

#[test]
fn expired_deadline_times_out() {
    let problem = gripper::problem(3);
    let h = HeuristicName::FastForward.build(&problem);
    let outcome = engine(5).search(&problem, h.as_ref(), Deadline::after(Duration::ZERO));
    assert_eq!(outcome.termination, TerminationReason::TimedOut);
    assert!(outcome.plan.is_none());
}

#[test]
fn counters_report_walks() {
    let problem = switchboard::problem(3);
    let h = HeuristicName::FastForward.build(&problem);
    let mut walker = engine(11);
    let outcome = walker.search(&problem, h.as_ref(), deadline());
    let EngineCounters::AdaptiveWalk(c) = outcome.counters else {
        panic!("wrong engine counters");
    };
    assert!(c.rounds >= 1);
    assert_eq!(c.goal_walks, 1);
    assert_eq!(c.walks, walker.statistics().total_random_walks());
}

#[test]
fn find_best_node_keeps_only_kept_lineage() {
    let problem = gripper::problem(2);
    let h = HeuristicName::FastForward.build(&problem);
    let mut walker = AdaptiveWalkEngine::new(WalkPolicy {
        num_walks: 20,
        walk_length: 3,
        seed: Some(8),
        ..WalkPolicy::default()
    })
    .expect("valid policy");

    let root_state = problem.initial_state().clone();
    let root_h = h.estimate(&root_state, problem.goal());
    let mut arena = NodeArena::new();
    let root = arena.push(SearchNode::root(root_state, root_h));
    let mut counters = WalkCounters::default();

    let outcome = walker.find_best_node(&problem, h.as_ref(), &mut arena, root, deadline(), &mut counters);
    assert_eq!(counters.walks, 20);
    match outcome {
        RoundOutcome::Best(id) | RoundOutcome::Goal(id) => {
            let lineage = arena.lineage(id);
            assert_eq!(lineage.first(), Some(&root));
            assert!(lineage.len() <= 4);
        }
        RoundOutcome::Interrupted(_) => panic!("deadline was generous"),
    }
}

#[test]
fn invalid_walk_policy_rejected() {
    let bad = WalkPolicy {
        num_walks: 0,
        ..WalkPolicy::default()
    };
    assert!(AdaptiveWalkEngine::new(bad).is_err());
}
