//! Typed model construction errors.

use thiserror::Error;

/// Failure while assembling a [`crate::model::problem::Problem`].
///
/// Construction is fail-closed: a problem that refers to an undeclared
/// fluent is never built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("fluent index {index} out of range ({fluent_count} fluents declared) in {context}")]
    FluentOutOfRange {
        index: usize,
        fluent_count: usize,
        context: String,
    },
    #[error("fluent `{name}` declared twice")]
    DuplicateFluent { name: String },
    #[error("unknown fluent `{name}` in {context}")]
    UnknownFluent { name: String, context: String },
    #[error("action #{index} has an empty name")]
    EmptyActionName { index: usize },
    #[error("no goal condition was set")]
    MissingGoal,
}
