//! JSON problem files.
//!
//! ```json
//! {
//!   "fluents": ["s0", "s1", "goal"],
//!   "init": ["s0"],
//!   "goal": { "pos": ["goal"], "neg": [] },
//!   "actions": [
//!     { "name": "A", "pre": { "pos": ["s0"] },
//!       "effects": [{ "when": {}, "add": ["s1"], "del": ["s0"] }] }
//!   ]
//! }
//! ```
//!
//! Fluents are referenced by name; every name must be declared in
//! `fluents`.

use std::fs;
use std::path::{Path, PathBuf};

use meander_kernel::model::condition::Condition;
use meander_kernel::model::error::ModelError;
use meander_kernel::model::fluent_set::FluentSet;
use meander_kernel::model::problem::{ActionSpec, EffectSpec, Literals, Problem, ProblemBuilder};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProblemFileError {
    #[error("read {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed problem JSON")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Model(#[from] ModelError),
}

/// Positive and negative literal names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LiteralsFile {
    pub pos: Vec<String>,
    pub neg: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EffectFile {
    pub when: LiteralsFile,
    pub add: Vec<String>,
    pub del: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ActionFile {
    pub name: String,
    #[serde(default)]
    pub pre: LiteralsFile,
    #[serde(default)]
    pub effects: Vec<EffectFile>,
}

/// On-disk form of a grounded problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProblemFile {
    pub fluents: Vec<String>,
    #[serde(default)]
    pub init: Vec<String>,
    pub goal: LiteralsFile,
    #[serde(default)]
    pub actions: Vec<ActionFile>,
}

impl ProblemFile {
    /// Parse a problem file from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ProblemFileError::Json`] for malformed input.
    pub fn from_json_str(json: &str) -> Result<Self, ProblemFileError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Resolve names and build the grounded problem.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::DuplicateFluent`] for a fluent declared twice,
    /// [`ModelError::UnknownFluent`] for an undeclared name, or any other
    /// builder validation failure.
    pub fn to_problem(&self) -> Result<Problem, ProblemFileError> {
        let mut b = ProblemBuilder::new();
        for name in &self.fluents {
            b.declare_fluent(name.as_str())?;
        }
        let init = resolve(&b, &self.init, "initial state")?;
        b.initial(init);
        let goal = resolve_literals(&b, &self.goal, "goal")?;
        b.goal(goal);
        for action in &self.actions {
            let context = format!("action `{}`", action.name);
            let precondition = resolve_literals(&b, &action.pre, &context)?;
            let effects = action
                .effects
                .iter()
                .map(|e| {
                    Ok(EffectSpec {
                        when: resolve_literals(&b, &e.when, &context)?,
                        add: resolve(&b, &e.add, &context)?,
                        delete: resolve(&b, &e.del, &context)?,
                    })
                })
                .collect::<Result<Vec<_>, ModelError>>()?;
            b.action(ActionSpec {
                name: action.name.clone(),
                precondition,
                effects,
            });
        }
        Ok(b.build()?)
    }

    /// The file form of an in-memory problem.
    #[must_use]
    pub fn from_problem(problem: &Problem) -> Self {
        let names = |set: &FluentSet| -> Vec<String> {
            set.iter()
                .filter_map(|f| problem.fluent_name(f).map(str::to_string))
                .collect()
        };
        let literals = |c: &Condition| LiteralsFile {
            pos: names(c.positive()),
            neg: names(c.negative()),
        };
        Self {
            fluents: (0..problem.fluent_count())
                .filter_map(|f| problem.fluent_name(f).map(str::to_string))
                .collect(),
            init: names(problem.initial_state().fluents()),
            goal: literals(problem.goal()),
            actions: problem
                .actions()
                .iter()
                .map(|a| ActionFile {
                    name: a.name().to_string(),
                    pre: literals(a.precondition()),
                    effects: a
                        .conditional_effects()
                        .iter()
                        .map(|ce| EffectFile {
                            when: literals(&ce.condition),
                            add: names(ce.effect.add_set()),
                            del: names(ce.effect.delete_set()),
                        })
                        .collect(),
                })
                .collect(),
        }
    }

    /// # Errors
    ///
    /// Returns [`ProblemFileError::Json`] if encoding fails.
    pub fn to_json_pretty(&self) -> Result<String, ProblemFileError> {
        let mut buf = serde_json::to_string_pretty(self)?;
        buf.push('\n');
        Ok(buf)
    }
}

fn resolve(b: &ProblemBuilder, names: &[String], context: &str) -> Result<Vec<usize>, ModelError> {
    names.iter().map(|n| b.lookup(n, context)).collect()
}

fn resolve_literals(
    b: &ProblemBuilder,
    literals: &LiteralsFile,
    context: &str,
) -> Result<Literals, ModelError> {
    Ok(Literals {
        positive: resolve(b, &literals.pos, context)?,
        negative: resolve(b, &literals.neg, context)?,
    })
}

/// A loaded problem plus the digest of its source bytes.
#[derive(Debug, Clone)]
pub struct LoadedProblem {
    pub problem: Problem,
    /// Hex-encoded SHA-256 of the file bytes.
    pub digest: String,
}

/// Hex-encoded SHA-256 of `bytes`.
#[must_use]
pub fn problem_digest(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}

/// Read, parse, and build a problem file.
///
/// # Errors
///
/// Returns [`ProblemFileError`] for I/O, JSON, or model failures.
pub fn load_problem(path: &Path) -> Result<LoadedProblem, ProblemFileError> {
    let bytes = fs::read(path).map_err(|source| ProblemFileError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let file: ProblemFile = serde_json::from_slice(&bytes)?;
    Ok(LoadedProblem {
        problem: file.to_problem()?,
        digest: problem_digest(&bytes),
    })
}
