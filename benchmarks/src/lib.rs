//! Shared helpers for meander benchmark suites.

use std::time::Duration;

use meander_harness::worlds::WorldName;
use meander_kernel::heuristic::StateHeuristic;
use meander_kernel::model::problem::Problem;
use meander_search::deadline::Deadline;
use meander_search::node::{NodeArena, NodeId, SearchNode};

/// A named benchmark problem.
pub struct Regime {
    pub name: &'static str,
    pub problem: Problem,
}

/// The fixed set of problems the macro suites run against.
///
/// Sizes are chosen so one A* run stays in the low milliseconds.
#[must_use]
pub fn regimes() -> Vec<Regime> {
    vec![
        Regime {
            name: "chain",
            problem: WorldName::Chain.build(0),
        },
        Regime {
            name: "gripper_3",
            problem: WorldName::Gripper.build(3),
        },
        Regime {
            name: "gripper_5",
            problem: WorldName::Gripper.build(5),
        },
        Regime {
            name: "switchboard_6",
            problem: WorldName::Switchboard.build(6),
        },
    ]
}

/// A deadline generous enough that benchmarks never time out.
#[must_use]
pub fn bench_deadline() -> Deadline {
    Deadline::after(Duration::from_secs(600))
}

/// A fresh arena holding only the root node of `problem`.
#[must_use]
pub fn root_arena(problem: &Problem, heuristic: &dyn StateHeuristic) -> (NodeArena, NodeId) {
    let initial = problem.initial_state().clone();
    let h = heuristic.estimate(&initial, problem.goal());
    let mut arena = NodeArena::new();
    let root = arena.push(SearchNode::root(initial, h));
    (arena, root)
}
