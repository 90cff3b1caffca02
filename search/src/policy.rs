//! Search policy types.

use serde::{Deserialize, Serialize};

use crate::error::SearchError;

/// Budget and ordering configuration for the A* engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchPolicy {
    /// Multiplier on `h` in `f = weight * h + g`. `0` orders by path cost
    /// alone; values above `1` bias toward greedy search.
    pub heuristic_weight: f64,
    /// Hard cap on node expansions. `None` means unlimited.
    pub max_expansions: Option<u64>,
}

impl SearchPolicy {
    /// Validate the policy before a search starts.
    ///
    /// The search layer accepts `weight = 0`; the configuration layer is
    /// stricter and requires a positive weight.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidWeight`] if the weight is negative,
    /// `NaN`, or infinite.
    pub fn validate(&self) -> Result<(), SearchError> {
        if !self.heuristic_weight.is_finite() || self.heuristic_weight < 0.0 {
            return Err(SearchError::InvalidWeight {
                weight: self.heuristic_weight,
            });
        }
        Ok(())
    }
}

impl Default for SearchPolicy {
    fn default() -> Self {
        Self {
            heuristic_weight: 1.0,
            max_expansions: None,
        }
    }
}

/// Walk budget, restart, and policy-switch thresholds for the adaptive walk
/// engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WalkPolicy {
    /// Walks per `find_best_node` round.
    pub num_walks: u32,
    /// Maximum steps per walk.
    pub walk_length: u32,
    /// Restart once the no-improvement counter exceeds this.
    pub max_stagnation: u32,
    /// Dead-end walk ratio above which dead-end avoidance kicks in.
    pub dead_end_ratio_threshold: f64,
    /// Mean branching factor above which helpful-action bias kicks in.
    pub branching_threshold: f64,
    /// Walks that must be observed before the dead-end ratio is trusted.
    pub min_walk_samples: u64,
    /// Branching samples that must be observed before the mean is trusted.
    pub min_branching_samples: u64,
    /// Cap on outer rounds. `None` means unlimited.
    pub max_rounds: Option<u64>,
    /// RNG seed. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl WalkPolicy {
    /// Validate the policy before a search starts.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidWalkPolicy`] naming the first offending
    /// field.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.num_walks == 0 {
            return Err(invalid("num_walks", "must be at least 1"));
        }
        if self.walk_length == 0 {
            return Err(invalid("walk_length", "must be at least 1"));
        }
        if !(0.0..=1.0).contains(&self.dead_end_ratio_threshold) {
            return Err(invalid(
                "dead_end_ratio_threshold",
                format!("must lie in [0, 1], got {}", self.dead_end_ratio_threshold),
            ));
        }
        if !self.branching_threshold.is_finite() || self.branching_threshold < 0.0 {
            return Err(invalid(
                "branching_threshold",
                format!("must be finite and non-negative, got {}", self.branching_threshold),
            ));
        }
        if self.max_rounds == Some(0) {
            return Err(invalid("max_rounds", "must be at least 1 when set"));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, detail: impl Into<String>) -> SearchError {
    SearchError::InvalidWalkPolicy {
        field,
        detail: detail.into(),
    }
}

impl Default for WalkPolicy {
    fn default() -> Self {
        Self {
            num_walks: 2000,
            walk_length: 10,
            max_stagnation: 10,
            dead_end_ratio_threshold: 0.3,
            branching_threshold: 100.0,
            min_walk_samples: 100,
            min_branching_samples: 100,
            max_rounds: None,
            seed: None,
        }
    }
}
