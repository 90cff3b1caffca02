//! PROBLEM-FILES: JSON problem files on disk.
//!
//! Fixture worlds exported to JSON reload into equivalent problems, the
//! digest binds the exact file bytes, and malformed files fail with a
//! typed error instead of a panic.

use std::fs;

use meander_harness::config::{PlannerConfig, Strategy};
use meander_harness::problem_file::{load_problem, problem_digest, ProblemFile, ProblemFileError};
use meander_harness::runner::Planner;
use meander_harness::worlds::WorldName;
use meander_kernel::model::error::ModelError;

fn export(world: WorldName, size: usize) -> String {
    ProblemFile::from_problem(&world.build(size))
        .to_json_pretty()
        .expect("serialize world")
}

#[test]
fn every_world_reloads_equivalently() {
    let temp = tempfile::tempdir().expect("tempdir");
    for world in WorldName::ALL {
        let original = world.build(3);
        let path = temp.path().join(format!("{world}.json"));
        fs::write(&path, export(world, 3)).expect("write world");

        let loaded = load_problem(&path).expect("load world");
        assert_eq!(loaded.problem.fluent_count(), original.fluent_count(), "{world}");
        assert_eq!(loaded.problem.initial_state(), original.initial_state(), "{world}");
        assert_eq!(loaded.problem.goal(), original.goal(), "{world}");
        let names = |p: &meander_kernel::model::problem::Problem| -> Vec<String> {
            p.actions().iter().map(|a| a.name().to_string()).collect()
        };
        assert_eq!(names(&loaded.problem), names(&original), "{world}");
    }
}

#[test]
fn loaded_problem_solves_like_the_built_one() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = temp.path().join("gripper.json");
    fs::write(&path, export(WorldName::Gripper, 2)).expect("write world");
    let loaded = load_problem(&path).expect("load world");

    let config = PlannerConfig {
        strategy: Strategy::Astar,
        ..PlannerConfig::default()
    };
    let from_file = Planner::new(config.clone()).expect("config").solve(&loaded.problem);
    let built = Planner::new(config).expect("config").solve(&WorldName::Gripper.build(2));
    assert_eq!(
        from_file.plan.map(|p| p.action_indices()),
        built.plan.map(|p| p.action_indices())
    );
}

#[test]
fn digest_binds_file_bytes() {
    let temp = tempfile::tempdir().expect("tempdir");
    let json = export(WorldName::Switchboard, 3);
    let path = temp.path().join("switchboard.json");
    fs::write(&path, &json).expect("write world");
    let first = load_problem(&path).expect("load world");
    assert_eq!(first.digest, problem_digest(json.as_bytes()));

    // Same problem, different bytes: the digest must change.
    fs::write(&path, format!("{json}\n")).expect("rewrite world");
    let second = load_problem(&path).expect("reload world");
    assert_ne!(first.digest, second.digest);
}

#[test]
fn export_is_stable() {
    assert_eq!(export(WorldName::Gripper, 2), export(WorldName::Gripper, 2));
}

#[test]
fn undeclared_fluent_in_action_is_model_error() {
    let json = r#"{
        "fluents": ["p"],
        "goal": {"pos": ["p"]},
        "actions": [{"name": "a", "effects": [{"add": ["q"]}]}]
    }"#;
    let err = ProblemFile::from_json_str(json)
        .expect("well-formed JSON")
        .to_problem()
        .unwrap_err();
    assert!(matches!(
        err,
        ProblemFileError::Model(ModelError::UnknownFluent { .. })
    ));
}

#[test]
fn missing_goal_is_json_error() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = temp.path().join("broken.json");
    fs::write(&path, r#"{"fluents": ["p"], "init": ["p"]}"#).expect("write file");
    assert!(matches!(load_problem(&path), Err(ProblemFileError::Json(_))));
}
