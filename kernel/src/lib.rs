//! Meander Kernel: the grounded planning model and its heuristic library.
//!
//! # API Surface
//!
//! - [`model`] -- fluents, states, conditions, conditional effects, ground
//!   actions, and the [`model::problem::Problem`] that bundles them
//! - [`heuristic`] -- the [`heuristic::StateHeuristic`] trait and the named
//!   heuristics the planner can be configured with
//!
//! # Module Dependency Direction
//!
//! `model` ← `heuristic`
//!
//! One-way only. The model knows nothing about distance estimates.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod heuristic;
pub mod model;
