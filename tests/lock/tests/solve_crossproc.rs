//! SOLVE-CROSSPROC: cross-process determinism of seeded solves.
//!
//! Spawns the `solve_fixture` binary under several environment variants
//! and asserts that all produce identical output. A seeded solve must not
//! depend on cwd, locale, or hash seeding.

use std::process::Command;

/// Run the fixture binary with the given cwd and environment overrides.
/// Returns stdout as a string.
fn run_variant(args: &[&str], work_dir: &str, env_overrides: &[(&str, &str)]) -> String {
    let mut command = Command::new(env!("CARGO_BIN_EXE_solve_fixture"));
    command.args(args).current_dir(work_dir);

    command
        .env_remove("LC_ALL")
        .env_remove("LC_COLLATE")
        .env_remove("LANG")
        .env_remove("LANGUAGE");
    for &(key, val) in env_overrides {
        command.env(key, val);
    }

    let output = command
        .output()
        .unwrap_or_else(|e| panic!("failed to spawn solve_fixture: {e}"));
    assert!(
        output.status.success(),
        "solve_fixture failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("stdout is UTF-8")
}

fn assert_stable(args: &[&str]) -> String {
    let temp = tempfile::tempdir().expect("tempdir");
    let temp_dir = temp.path().to_string_lossy().to_string();
    let manifest_dir = env!("CARGO_MANIFEST_DIR");

    let baseline = run_variant(args, manifest_dir, &[]);
    let variants = [
        run_variant(args, &temp_dir, &[]),
        run_variant(args, manifest_dir, &[("LC_ALL", "C"), ("LANG", "C")]),
        run_variant(args, manifest_dir, &[("LANG", "en_US.UTF-8"), ("RUST_LOG", "trace")]),
    ];
    for (i, variant) in variants.iter().enumerate() {
        assert_eq!(&baseline, variant, "variant {i} diverged for {args:?}");
    }
    baseline
}

fn field<'a>(output: &'a str, key: &str) -> &'a str {
    output
        .lines()
        .find_map(|line| line.strip_prefix(key).and_then(|rest| rest.strip_prefix('=')))
        .unwrap_or_else(|| panic!("missing `{key}` in output:\n{output}"))
}

#[test]
fn walk_solve_is_stable_across_processes() {
    let out = assert_stable(&["gripper", "3", "walk", "1234"]);
    assert_eq!(field(&out, "termination"), "goal_reached");
}

#[test]
fn astar_solve_is_stable_across_processes() {
    let out = assert_stable(&["switchboard", "5", "astar", "0"]);
    assert_eq!(field(&out, "termination"), "goal_reached");
    assert_ne!(field(&out, "plan"), "none");
}

#[test]
fn dead_end_is_stable_across_processes() {
    let out = assert_stable(&["dead_end", "0", "walk", "7"]);
    assert_eq!(field(&out, "termination"), "dead_end_root");
    assert_eq!(field(&out, "plan"), "none");
}

#[test]
fn different_seeds_share_problem_digest() {
    let a = run_variant(&["gripper", "2", "walk", "1"], env!("CARGO_MANIFEST_DIR"), &[]);
    let b = run_variant(&["gripper", "2", "walk", "2"], env!("CARGO_MANIFEST_DIR"), &[]);
    assert_eq!(field(&a, "problem_digest"), field(&b, "problem_digest"));
}
