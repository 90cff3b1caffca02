//! `meander`: solve grounded planning problems from the command line.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use meander_harness::config::{apply_overrides, read_config, ConfigOverrides, PlannerConfig, Strategy};
use meander_harness::exit_codes;
use meander_harness::logging;
use meander_harness::problem_file::{load_problem, ProblemFile};
use meander_harness::runner::Planner;
use meander_harness::worlds::WorldName;
use meander_search::plan::Plan;

#[derive(Parser)]
#[command(name = "meander", version, about = "Heuristic state-space planner")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Search for a plan and print it.
    Solve {
        /// Problem file (JSON).
        problem: PathBuf,
        /// Heuristic: BLIND, GOAL_COUNT, MAX, SUM, FAST_FORWARD.
        #[arg(short = 'e', long)]
        heuristic: Option<String>,
        /// Heuristic weight (> 0).
        #[arg(short, long)]
        weight: Option<f64>,
        /// Timeout in seconds.
        #[arg(short, long)]
        timeout: Option<u64>,
        /// Search strategy: astar or walk.
        #[arg(short, long)]
        strategy: Option<Strategy>,
        /// Seed for the walk engine RNG.
        #[arg(long)]
        seed: Option<u64>,
        /// Planner config (TOML). CLI flags override its values.
        #[arg(long)]
        config: Option<PathBuf>,
        /// Print a JSON report instead of the plan text.
        #[arg(long)]
        json: bool,
    },
    /// Replay a plan file against a problem.
    Validate {
        problem: PathBuf,
        /// One action name per line; `(name)` and `;` comments accepted.
        plan: PathBuf,
    },
    /// Print a built-in fixture world as a problem file.
    World {
        name: WorldName,
        /// Balls for gripper, lamps for switchboard.
        #[arg(short = 'n', long, default_value_t = 4)]
        size: usize,
    },
}

fn main() {
    logging::init("info");
    match run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("error: {err:#}");
            std::process::exit(exit_codes::INVALID);
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    match cli.command {
        Command::Solve {
            problem,
            heuristic,
            weight,
            timeout,
            strategy,
            seed,
            config,
            json,
        } => {
            let overrides = ConfigOverrides {
                heuristic,
                heuristic_weight: weight,
                timeout_secs: timeout,
                strategy,
                seed,
            };
            cmd_solve(&problem, config.as_deref(), &overrides, json)
        }
        Command::Validate { problem, plan } => cmd_validate(&problem, &plan),
        Command::World { name, size } => cmd_world(name, size),
    }
}

fn cmd_solve(
    problem_path: &Path,
    config_path: Option<&Path>,
    overrides: &ConfigOverrides,
    json: bool,
) -> Result<i32> {
    let base = match config_path {
        Some(path) => read_config(path).with_context(|| format!("load config {}", path.display()))?,
        None => PlannerConfig::default(),
    };
    let config = apply_overrides(base, overrides).context("invalid configuration")?;
    let loaded = load_problem(problem_path)
        .with_context(|| format!("load problem {}", problem_path.display()))?;

    let mut planner = Planner::new(config).context("invalid configuration")?;
    let report = planner.solve(&loaded.problem).with_digest(loaded.digest);

    if json {
        let payload = serde_json::to_string_pretty(&report.to_json()).context("serialize report")?;
        println!("{payload}");
    } else if let Some(plan) = &report.plan {
        print!("{plan}");
    } else {
        println!("; no plan found ({})", report.termination.as_str());
    }

    Ok(if report.is_solved() {
        exit_codes::OK
    } else {
        exit_codes::NO_PLAN
    })
}

fn cmd_validate(problem_path: &Path, plan_path: &Path) -> Result<i32> {
    let loaded = load_problem(problem_path)
        .with_context(|| format!("load problem {}", problem_path.display()))?;
    let text = fs::read_to_string(plan_path)
        .with_context(|| format!("read plan {}", plan_path.display()))?;
    let lines = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with(';'));

    let verdict = Plan::from_action_names(&loaded.problem, lines)
        .and_then(|plan| plan.validate(&loaded.problem).map(|_| plan));
    match verdict {
        Ok(plan) => {
            println!("valid plan of {} steps", plan.len());
            Ok(exit_codes::OK)
        }
        Err(err) => {
            println!("invalid plan: {err}");
            Ok(exit_codes::INVALID)
        }
    }
}

fn cmd_world(name: WorldName, size: usize) -> Result<i32> {
    let file = ProblemFile::from_problem(&name.build(size));
    print!("{}", file.to_json_pretty().context("serialize world")?);
    Ok(exit_codes::OK)
}
