//! PLAN-VALIDITY: every plan the planner returns replays to a goal state.
//!
//! Each solvable fixture world is solved under both strategies and the
//! returned plan is replayed action by action against the problem,
//! independently of the engine that produced it.

use meander_harness::config::{PlannerConfig, Strategy};
use meander_harness::runner::Planner;
use meander_harness::worlds::WorldName;
use meander_kernel::heuristic::HeuristicName;
use meander_kernel::model::problem::Problem;
use meander_search::plan::Plan;

const SOLVABLE: [(WorldName, usize); 4] = [
    (WorldName::Chain, 0),
    (WorldName::Gripper, 2),
    (WorldName::Switchboard, 3),
    (WorldName::Switchboard, 5),
];

fn config(strategy: Strategy, heuristic: HeuristicName) -> PlannerConfig {
    PlannerConfig {
        strategy,
        heuristic: heuristic.as_str().to_string(),
        seed: Some(17),
        timeout_secs: 60,
        ..PlannerConfig::default()
    }
}

/// Replay `plan` step by step, checking each precondition.
fn replay(problem: &Problem, plan: &Plan) {
    let mut state = problem.initial_state().clone();
    for (step, index) in plan.action_indices().into_iter().enumerate() {
        let action = &problem.actions()[index];
        assert!(
            action.is_applicable(&state),
            "step {step}: `{}` not applicable",
            action.name()
        );
        state = action.successor(&state);
    }
    assert!(problem.is_goal(&state), "plan does not reach the goal");
}

#[test]
fn astar_plans_replay_for_every_heuristic() {
    for (world, size) in SOLVABLE {
        let problem = world.build(size);
        for heuristic in HeuristicName::ALL {
            let mut planner = Planner::new(config(Strategy::Astar, heuristic)).expect("config");
            let report = planner.solve(&problem);
            let plan = report
                .plan
                .unwrap_or_else(|| panic!("{world}({size}) unsolved with {heuristic}"));
            replay(&problem, &plan);
            assert!(plan.validate(&problem).is_ok());
        }
    }
}

#[test]
fn walk_plans_replay() {
    for (world, size) in SOLVABLE {
        let problem = world.build(size);
        let mut planner =
            Planner::new(config(Strategy::AdaptiveWalk, HeuristicName::FastForward)).expect("config");
        let report = planner.solve(&problem);
        let plan = report
            .plan
            .unwrap_or_else(|| panic!("{world}({size}) unsolved: {}", report.termination.as_str()));
        replay(&problem, &plan);
    }
}

#[test]
fn plan_text_form_reparses_to_same_plan() {
    let problem = WorldName::Gripper.build(2);
    let mut planner = Planner::new(config(Strategy::Astar, HeuristicName::FastForward)).expect("config");
    let plan = planner.solve(&problem).plan.expect("gripper(2) solvable");

    let text = plan.to_string();
    let reparsed = Plan::from_action_names(&problem, text.lines()).expect("names resolve");
    assert_eq!(reparsed.action_indices(), plan.action_indices());
}

#[test]
fn truncated_plan_fails_validation() {
    let problem = WorldName::Gripper.build(2);
    let mut planner = Planner::new(config(Strategy::Astar, HeuristicName::Max)).expect("config");
    let plan = planner.solve(&problem).plan.expect("gripper(2) solvable");

    let mut indices = plan.action_indices();
    indices.pop();
    let truncated = Plan::from_indices(&problem, indices).expect("indices valid");
    assert!(truncated.validate(&problem).is_err());
}
