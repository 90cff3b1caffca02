//! Meander Search: weighted A* and adaptive random-walk search over grounded
//! planning problems.
//!
//! This crate provides the search layer. It depends only on `meander_kernel`
//! and does NOT depend on `meander_harness`.
//!
//! # Crate dependency graph
//!
//! ```text
//! meander_kernel  ←  meander_search  ←  meander_harness
//! (model, h(s))      (engines, nodes)    (config, CLI, worlds)
//! ```
//!
//! # Key types
//!
//! - [`SearchNode`](node::SearchNode) / [`NodeArena`](node::NodeArena) -- search tree storage with
//!   non-owning parent handles
//! - [`BestFirstFrontier`](frontier::BestFirstFrontier) -- `f = w·h + g` open list plus closed set
//! - [`AStarEngine`](astar::AStarEngine) -- weighted best-first search
//! - [`AdaptiveWalkEngine`](walk::AdaptiveWalkEngine) -- random walks with restart and
//!   statistics-driven [`SelectionPolicy`](selector::SelectionPolicy)
//! - [`SearchEngine`](contract::SearchEngine) -- the seam both engines implement
//! - [`SearchOutcome`](outcome::SearchOutcome) -- plan, termination reason, counters

#![forbid(unsafe_code)]

pub mod astar;
pub mod contract;
pub mod deadline;
pub mod error;
pub mod frontier;
pub mod node;
pub mod outcome;
pub mod plan;
pub mod policy;
pub mod selector;
pub mod stats;
pub mod walk;

#[cfg(test)]
pub(crate) mod test_problems;
