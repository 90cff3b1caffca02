//! Typed search errors.
//!
//! `SearchError` represents pre-flight failures only. Runtime terminations
//! (goal, exhaustion, timeout, budgets, dead-end root) are expressed via
//! [`crate::outcome::TerminationReason`] and are never errors.

use thiserror::Error;

/// Typed failure for pre-flight policy validation.
///
/// These errors are returned before search execution begins. No
/// [`crate::outcome::SearchOutcome`] is produced because no search steps
/// were taken.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SearchError {
    #[error("heuristic weight must be finite and non-negative, got {weight}")]
    InvalidWeight { weight: f64 },
    #[error("walk policy field `{field}` is invalid: {detail}")]
    InvalidWalkPolicy { field: &'static str, detail: String },
}

/// Why a plan failed replay against its problem.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanValidationError {
    #[error("step {step}: action index {index} does not exist")]
    UnknownActionIndex { step: usize, index: usize },
    #[error("step {step}: no action named `{name}`")]
    UnknownActionName { step: usize, name: String },
    #[error("step {step}: precondition of `{action}` does not hold")]
    PreconditionNotMet { step: usize, action: String },
    #[error("plan ends in a state that does not satisfy the goal")]
    GoalNotReached,
}
