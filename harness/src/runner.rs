//! Planner façade: configuration in, solve report out.
//!
//! # Pipeline
//!
//! ```text
//! PlannerConfig::validate() → HeuristicName::build(problem)
//!   → Deadline::after(timeout) → engine.search() → SolveReport
//! ```
//!
//! The walk engine is created once per [`Planner`] and reused, so its
//! statistics carry over between `solve` calls until
//! [`Planner::reset_statistics`] is called.

use std::time::Duration;

use meander_kernel::heuristic::HeuristicName;
use meander_kernel::model::problem::Problem;
use meander_search::astar::AStarEngine;
use meander_search::contract::SearchEngine;
use meander_search::deadline::Deadline;
use meander_search::outcome::{EngineCounters, SearchOutcome, TerminationReason};
use meander_search::plan::Plan;
use meander_search::stats::WalkStatistics;
use meander_search::walk::AdaptiveWalkEngine;
use tracing::{info, warn};

use crate::config::{ConfigError, PlannerConfig, Strategy};

/// What one `solve` call produced.
#[derive(Debug, Clone)]
pub struct SolveReport {
    pub plan: Option<Plan>,
    pub termination: TerminationReason,
    pub elapsed: Duration,
    pub counters: EngineCounters,
    pub strategy: Strategy,
    pub heuristic: HeuristicName,
    /// Digest of the problem source, when known.
    pub problem_digest: Option<String>,
}

impl SolveReport {
    fn from_outcome(outcome: SearchOutcome, strategy: Strategy, heuristic: HeuristicName) -> Self {
        Self {
            plan: outcome.plan,
            termination: outcome.termination,
            elapsed: outcome.elapsed,
            counters: outcome.counters,
            strategy,
            heuristic,
            problem_digest: None,
        }
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.plan.is_some()
    }

    #[must_use]
    pub fn with_digest(mut self, digest: impl Into<String>) -> Self {
        self.problem_digest = Some(digest.into());
        self
    }

    /// Convert to a `serde_json::Value` for the `--json` output.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "counters": self.counters,
            "elapsed_ms": u64::try_from(self.elapsed.as_millis()).unwrap_or(u64::MAX),
            "heuristic": self.heuristic.as_str(),
            "plan": self.plan.as_ref().map(Plan::action_names),
            "plan_length": self.plan.as_ref().map(Plan::len),
            "problem_digest": self.problem_digest,
            "strategy": self.strategy.as_str(),
            "termination": self.termination.as_str(),
        })
    }
}

/// Configured planner holding a persistent walk engine.
#[derive(Debug)]
pub struct Planner {
    config: PlannerConfig,
    heuristic: HeuristicName,
    astar: AStarEngine,
    walk: AdaptiveWalkEngine,
}

impl Planner {
    /// Validate `config` and build both engines.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the configuration is invalid. No search is
    /// started in that case.
    pub fn new(config: PlannerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let heuristic = config.heuristic_name()?;
        let astar = AStarEngine::new(config.search_policy())?;
        let walk = AdaptiveWalkEngine::new(config.walk_policy())?;
        Ok(Self {
            config,
            heuristic,
            astar,
            walk,
        })
    }

    #[must_use]
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Statistics accumulated by the walk engine so far.
    #[must_use]
    pub fn walk_statistics(&self) -> &WalkStatistics {
        self.walk.statistics()
    }

    pub fn reset_statistics(&mut self) {
        self.walk.reset_statistics();
    }

    /// Search for a plan under the configured strategy and timeout.
    ///
    /// Failure to find a plan is reported via [`SolveReport::termination`],
    /// not as an error.
    pub fn solve(&mut self, problem: &Problem) -> SolveReport {
        let strategy = self.config.strategy;
        let heuristic = self.heuristic.build(problem);
        let engine: &mut dyn SearchEngine = match strategy {
            Strategy::Astar => &mut self.astar,
            Strategy::AdaptiveWalk => &mut self.walk,
        };

        info!(
            engine = engine.name(),
            heuristic = %self.heuristic,
            weight = self.config.heuristic_weight,
            timeout_secs = self.config.timeout_secs,
            actions = problem.actions().len(),
            fluents = problem.fluent_count(),
            "search started"
        );
        let outcome = engine.search(problem, heuristic.as_ref(), Deadline::after(self.config.timeout()));
        let elapsed_ms = u64::try_from(outcome.elapsed.as_millis()).unwrap_or(u64::MAX);
        match &outcome.plan {
            Some(plan) => info!(
                engine = engine.name(),
                elapsed_ms,
                plan_length = plan.len(),
                "search succeeded"
            ),
            None => warn!(
                engine = engine.name(),
                elapsed_ms,
                termination = outcome.termination.as_str(),
                "search failed"
            ),
        }
        SolveReport::from_outcome(outcome, strategy, self.heuristic)
    }
}

/// Build a planner from `config` and solve `problem` once.
///
/// # Errors
///
/// Returns [`ConfigError`] if the configuration is invalid.
pub fn solve(config: PlannerConfig, problem: &Problem) -> Result<SolveReport, ConfigError> {
    Ok(Planner::new(config)?.solve(problem))
}
