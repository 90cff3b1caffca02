//! Model module: the grounded planning problem.
//!
//! This is the foundational layer. No other kernel module is imported here.

pub mod action;
pub mod condition;
pub mod error;
pub mod fluent_set;
pub mod problem;
pub mod state;
