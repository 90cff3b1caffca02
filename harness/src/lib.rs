//! Meander Harness: configuration, problem files, and the planner façade.
//!
//! The harness turns a [`PlannerConfig`](config::PlannerConfig) and a
//! grounded problem into a [`SolveReport`](runner::SolveReport). It does NOT
//! implement search; it selects and drives an engine from `meander_search`.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod exit_codes;
pub mod logging;
pub mod problem_file;
pub mod runner;
pub mod worlds;
