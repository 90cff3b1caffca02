//! CONFIG: planner configuration loading and validation.
//!
//! Invalid weights and timeouts are rejected before any search starts,
//! TOML files round-trip, and CLI-style overrides win over file values.

use std::fs;

use meander_harness::config::{
    apply_overrides, load_config, read_config, ConfigError, ConfigOverrides, PlannerConfig, Strategy,
};
use meander_harness::runner::{solve, Planner};
use meander_harness::worlds::chain;
use meander_kernel::heuristic::HeuristicName;

#[test]
fn defaults_are_valid() {
    let cfg = PlannerConfig::default();
    assert!(cfg.validate().is_ok());
    assert!((cfg.heuristic_weight - 1.0).abs() < f64::EPSILON);
    assert_eq!(cfg.heuristic_name().expect("default heuristic"), HeuristicName::FastForward);
}

#[test]
fn non_positive_weight_rejected_before_search() {
    for weight in [0.0, -2.5, f64::NAN] {
        let cfg = PlannerConfig {
            heuristic_weight: weight,
            ..PlannerConfig::default()
        };
        assert!(matches!(
            solve(cfg, &chain::problem()),
            Err(ConfigError::InvalidWeight { .. })
        ));
    }
}

#[test]
fn zero_timeout_rejected() {
    let cfg = PlannerConfig {
        timeout_secs: 0,
        ..PlannerConfig::default()
    };
    assert!(matches!(Planner::new(cfg), Err(ConfigError::ZeroTimeout)));
}

#[test]
fn unknown_heuristic_rejected() {
    let cfg = PlannerConfig {
        heuristic: "LANDMARK".to_string(),
        ..PlannerConfig::default()
    };
    assert!(matches!(Planner::new(cfg), Err(ConfigError::Heuristic(_))));
}

#[test]
fn toml_file_loads_with_walk_section() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = temp.path().join("planner.toml");
    fs::write(
        &path,
        r#"
heuristic = "MAX"
heuristic_weight = 2.0
strategy = "astar"
timeout_secs = 30

[walk]
num_walks = 50
walk_length = 4
"#,
    )
    .expect("write config");

    let cfg = load_config(&path).expect("valid config");
    assert_eq!(cfg.heuristic_name().expect("heuristic"), HeuristicName::Max);
    assert_eq!(cfg.strategy, Strategy::Astar);
    assert_eq!(cfg.walk.num_walks, 50);
    assert_eq!(cfg.walk.walk_length, 4);
    assert_eq!(cfg.walk.max_stagnation, 10);
}

#[test]
fn invalid_walk_section_rejected_on_load() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = temp.path().join("planner.toml");
    fs::write(&path, "[walk]\ndead_end_ratio_threshold = 1.5\n").expect("write config");
    assert!(matches!(load_config(&path), Err(ConfigError::Policy(_))));
}

#[test]
fn missing_file_yields_defaults() {
    let temp = tempfile::tempdir().expect("tempdir");
    let cfg = load_config(&temp.path().join("absent.toml")).expect("defaults");
    assert_eq!(cfg, PlannerConfig::default());
}

#[test]
fn explicit_missing_file_is_an_error() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = temp.path().join("absent.toml");
    assert!(matches!(read_config(&path), Err(ConfigError::Read { .. })));
    assert!(load_config(&path).is_ok(), "lenient loader still defaults");
}

#[test]
fn overrides_win_and_revalidate() {
    let base = PlannerConfig::default();
    let merged = apply_overrides(
        base.clone(),
        &ConfigOverrides {
            heuristic: Some("goal_count".to_string()),
            strategy: Some(Strategy::Astar),
            seed: Some(3),
            ..ConfigOverrides::default()
        },
    )
    .expect("valid overrides");
    assert_eq!(merged.heuristic_name().expect("heuristic"), HeuristicName::GoalCount);
    assert_eq!(merged.strategy, Strategy::Astar);
    assert_eq!(merged.walk_policy().seed, Some(3));

    let rejected = apply_overrides(
        base,
        &ConfigOverrides {
            heuristic_weight: Some(0.0),
            ..ConfigOverrides::default()
        },
    );
    assert!(matches!(rejected, Err(ConfigError::InvalidWeight { .. })));
}
