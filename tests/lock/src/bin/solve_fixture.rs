//! Binary that solves a fixture world with a fixed seed and prints
//! deterministic output lines for cross-process verification.
//!
//! Usage: `solve_fixture <world> <size> <astar|walk> <seed>`
//!
//! Output: key=value lines (see source for format).

use meander_harness::config::{PlannerConfig, Strategy};
use meander_harness::problem_file::{problem_digest, ProblemFile};
use meander_harness::runner::Planner;
use meander_harness::worlds::WorldName;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    assert!(args.len() == 5, "usage: solve_fixture <world> <size> <strategy> <seed>");
    let world: WorldName = args[1].parse().expect("world name");
    let size: usize = args[2].parse().expect("world size");
    let strategy: Strategy = args[3].parse().expect("strategy");
    let seed: u64 = args[4].parse().expect("seed");

    let problem = world.build(size);
    let json = ProblemFile::from_problem(&problem)
        .to_json_pretty()
        .expect("serialize world");

    let mut planner = Planner::new(PlannerConfig {
        strategy,
        seed: Some(seed),
        timeout_secs: 60,
        ..PlannerConfig::default()
    })
    .expect("valid config");
    let report = planner.solve(&problem);

    println!("problem_digest={}", problem_digest(json.as_bytes()));
    println!("termination={}", report.termination.as_str());
    match &report.plan {
        Some(plan) => {
            println!("plan_length={}", plan.len());
            println!("plan={}", plan.action_names().join(","));
        }
        None => println!("plan=none"),
    }
    println!(
        "counters={}",
        serde_json::to_string(&report.counters).expect("serialize counters")
    );
}
