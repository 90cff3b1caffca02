//! Stable exit codes for the `meander` CLI.

/// A plan was found, or a plan validated.
pub const OK: i32 = 0;
/// Invalid input: bad config, unreadable problem, or a rejected plan.
pub const INVALID: i32 = 1;
/// The search finished without a plan.
pub const NO_PLAN: i32 = 2;
