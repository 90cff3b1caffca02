//! ASTAR: weighted A* acceptance.
//!
//! Covers the observable contract of the best-first engine through its
//! public entry point: plan shape on the chain world, optimality at
//! weight 0, the termination reasons, and the expansion counters.

use std::time::Duration;

use meander_harness::worlds::{chain, dead_end, gripper, WorldName};
use meander_kernel::heuristic::HeuristicName;
use meander_search::astar::{astar, AStarEngine};
use meander_search::contract::SearchEngine;
use meander_search::deadline::Deadline;
use meander_search::error::SearchError;
use meander_search::outcome::{EngineCounters, TerminationReason};
use meander_search::policy::SearchPolicy;

fn policy(weight: f64) -> SearchPolicy {
    SearchPolicy {
        heuristic_weight: weight,
        ..SearchPolicy::default()
    }
}

fn deadline() -> Deadline {
    Deadline::after(Duration::from_secs(60))
}

#[test]
fn chain_plan_is_a_then_b() {
    let problem = chain::problem();
    let h = HeuristicName::FastForward.build(&problem);
    let outcome = astar(&problem, h.as_ref(), &policy(1.0), deadline()).expect("valid policy");
    assert_eq!(outcome.termination, TerminationReason::GoalReached);
    assert_eq!(outcome.plan.expect("plan").action_names(), vec!["A", "B"]);
}

#[test]
fn weight_zero_finds_optimal_gripper_plan() {
    // 2 balls: pick, pick, move, drop, drop.
    let problem = gripper::problem(2);
    let h = HeuristicName::Blind.build(&problem);
    let outcome = astar(&problem, h.as_ref(), &policy(0.0), deadline()).expect("valid policy");
    assert_eq!(outcome.plan.expect("plan").len(), 5);
}

#[test]
fn weighted_search_stays_valid() {
    let problem = gripper::problem(3);
    for weight in [1.0, 2.0, 5.0] {
        let h = HeuristicName::FastForward.build(&problem);
        let outcome = astar(&problem, h.as_ref(), &policy(weight), deadline()).expect("valid policy");
        let plan = outcome.plan.expect("gripper(3) solvable");
        assert!(plan.validate(&problem).is_ok(), "weight {weight}");
    }
}

#[test]
fn dead_end_root_is_reported() {
    let problem = dead_end::problem();
    let h = HeuristicName::FastForward.build(&problem);
    let outcome = astar(&problem, h.as_ref(), &policy(1.0), deadline()).expect("valid policy");
    assert_eq!(outcome.termination, TerminationReason::DeadEndRoot);
    assert!(outcome.termination.is_proven_unsolvable());
    assert!(outcome.plan.is_none());
}

#[test]
fn expired_deadline_times_out() {
    let problem = gripper::problem(4);
    let h = HeuristicName::Blind.build(&problem);
    let outcome = astar(
        &problem,
        h.as_ref(),
        &policy(1.0),
        Deadline::after(Duration::ZERO),
    )
    .expect("valid policy");
    assert_eq!(outcome.termination, TerminationReason::TimedOut);
    assert!(outcome.plan.is_none());
}

#[test]
fn expansion_budget_is_honored() {
    let problem = gripper::problem(4);
    let h = HeuristicName::Blind.build(&problem);
    let budget = SearchPolicy {
        heuristic_weight: 1.0,
        max_expansions: Some(3),
    };
    let outcome = astar(&problem, h.as_ref(), &budget, deadline()).expect("valid policy");
    assert_eq!(outcome.termination, TerminationReason::ExpansionBudgetExceeded);
    match outcome.counters {
        EngineCounters::AStar(c) => assert_eq!(c.expansions, 3),
        EngineCounters::AdaptiveWalk(_) => panic!("wrong engine counters"),
    }
}

#[test]
fn counters_are_consistent() {
    let problem = WorldName::Switchboard.build(4);
    let h = HeuristicName::GoalCount.build(&problem);
    let outcome = astar(&problem, h.as_ref(), &policy(1.0), deadline()).expect("valid policy");
    let EngineCounters::AStar(c) = outcome.counters else {
        panic!("wrong engine counters");
    };
    assert!(c.expansions >= 1);
    assert!(c.generated >= c.expansions);
    assert!(c.frontier_high_water >= 1);
}

#[test]
fn engine_trait_object_matches_free_function() {
    let problem = gripper::problem(2);
    let h = HeuristicName::Max.build(&problem);
    let mut engine = AStarEngine::new(policy(1.0)).expect("valid policy");
    let dyn_engine: &mut dyn SearchEngine = &mut engine;
    assert_eq!(dyn_engine.name(), "astar");
    let via_trait = dyn_engine.search(&problem, h.as_ref(), deadline());
    let via_fn = astar(&problem, h.as_ref(), &policy(1.0), deadline()).expect("valid policy");
    assert_eq!(
        via_trait.plan.map(|p| p.action_indices()),
        via_fn.plan.map(|p| p.action_indices())
    );
}

#[test]
fn invalid_weights_rejected() {
    for weight in [-1.0, f64::NAN, f64::INFINITY] {
        assert!(matches!(
            AStarEngine::new(policy(weight)),
            Err(SearchError::InvalidWeight { .. })
        ));
    }
}
