//! Planner configuration loaded from TOML.
//!
//! Missing fields take their defaults. Validation happens once, before any
//! search starts; an invalid configuration never reaches an engine.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use meander_kernel::heuristic::{HeuristicError, HeuristicName};
use meander_search::error::SearchError;
use meander_search::policy::{SearchPolicy, WalkPolicy};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a configuration was rejected.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("heuristic weight must be finite and > 0, got {weight}")]
    InvalidWeight { weight: f64 },
    #[error("timeout_secs must be > 0")]
    ZeroTimeout,
    #[error("unknown strategy `{name}` (expected `astar` or `walk`)")]
    UnknownStrategy { name: String },
    #[error(transparent)]
    Heuristic(#[from] HeuristicError),
    #[error(transparent)]
    Policy(#[from] SearchError),
    #[error("read {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parse {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("serialize config")]
    Serialize(#[from] toml::ser::Error),
}

/// Which engine `solve` runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    #[serde(alias = "a_star")]
    Astar,
    #[default]
    #[serde(alias = "walk")]
    AdaptiveWalk,
}

impl Strategy {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Astar => "astar",
            Self::AdaptiveWalk => "walk",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "astar" | "a_star" => Ok(Self::Astar),
            "walk" | "adaptive_walk" | "mrw" => Ok(Self::AdaptiveWalk),
            _ => Err(ConfigError::UnknownStrategy { name: s.to_string() }),
        }
    }
}

/// Planner configuration (TOML).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PlannerConfig {
    /// Heuristic name, parsed case-insensitively (`FAST_FORWARD`, `max`, ...).
    pub heuristic: String,
    pub heuristic_weight: f64,
    /// Wall-clock search budget in seconds.
    pub timeout_secs: u64,
    pub strategy: Strategy,
    /// Walk RNG seed. Overrides `walk.seed` when set.
    pub seed: Option<u64>,
    /// A* expansion cap.
    pub max_expansions: Option<u64>,
    pub walk: WalkPolicy,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            heuristic: HeuristicName::default().as_str().to_string(),
            heuristic_weight: 1.0,
            timeout_secs: 600,
            strategy: Strategy::default(),
            seed: None,
            max_expansions: None,
            walk: WalkPolicy::default(),
        }
    }
}

impl PlannerConfig {
    /// Check every field. The first failure wins.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for a non-positive weight, a zero timeout, an
    /// unknown heuristic, or an invalid walk policy.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.heuristic_weight.is_finite() || self.heuristic_weight <= 0.0 {
            return Err(ConfigError::InvalidWeight {
                weight: self.heuristic_weight,
            });
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        self.heuristic_name()?;
        self.search_policy().validate()?;
        self.walk_policy().validate()?;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::Heuristic`] for an unknown name.
    pub fn heuristic_name(&self) -> Result<HeuristicName, ConfigError> {
        Ok(self.heuristic.parse()?)
    }

    #[must_use]
    pub fn search_policy(&self) -> SearchPolicy {
        SearchPolicy {
            heuristic_weight: self.heuristic_weight,
            max_expansions: self.max_expansions,
        }
    }

    /// The walk policy with the top-level seed applied.
    #[must_use]
    pub fn walk_policy(&self) -> WalkPolicy {
        WalkPolicy {
            seed: self.seed.or(self.walk.seed),
            ..self.walk.clone()
        }
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Parse and validate a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML, or any validation
    /// error.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let cfg: Self = toml::from_str(contents).map_err(|source| ConfigError::Parse {
            path: PathBuf::from("<inline>"),
            source,
        })?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::Serialize`] if TOML encoding fails.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        let mut buf = toml::to_string_pretty(self)?;
        buf.push('\n');
        Ok(buf)
    }
}

/// Load config from a TOML file, falling back to defaults when it is absent.
///
/// Use [`read_config`] for paths the user named explicitly.
///
/// # Errors
///
/// Returns [`ConfigError`] if an existing file cannot be read or parsed, or
/// fails validation.
pub fn load_config(path: &Path) -> Result<PlannerConfig, ConfigError> {
    if !path.exists() {
        let cfg = PlannerConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    read_config(path)
}

/// Read a config file that must exist.
///
/// # Errors
///
/// Returns [`ConfigError::Read`] if the file is missing or unreadable,
/// [`ConfigError::Parse`] on malformed TOML, or a validation error.
pub fn read_config(path: &Path) -> Result<PlannerConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let cfg: PlannerConfig = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    cfg.validate()?;
    Ok(cfg)
}

/// Command-line overrides applied on top of a loaded config.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigOverrides {
    pub heuristic: Option<String>,
    pub heuristic_weight: Option<f64>,
    pub timeout_secs: Option<u64>,
    pub strategy: Option<Strategy>,
    pub seed: Option<u64>,
}

/// Apply overrides to the base config and re-validate.
///
/// # Errors
///
/// Returns [`ConfigError`] if the merged config is invalid.
pub fn apply_overrides(
    mut base: PlannerConfig,
    overrides: &ConfigOverrides,
) -> Result<PlannerConfig, ConfigError> {
    if let Some(heuristic) = &overrides.heuristic {
        base.heuristic.clone_from(heuristic);
    }
    if let Some(weight) = overrides.heuristic_weight {
        base.heuristic_weight = weight;
    }
    if let Some(timeout) = overrides.timeout_secs {
        base.timeout_secs = timeout;
    }
    if let Some(strategy) = overrides.strategy {
        base.strategy = strategy;
    }
    if let Some(seed) = overrides.seed {
        base.seed = Some(seed);
    }
    base.validate()?;
    Ok(base)
}
