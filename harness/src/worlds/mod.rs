//! Fixture worlds: small grounded problems built in code.
//!
//! Each world exposes a `problem` constructor. [`WorldName`] resolves a world
//! by name for the CLI, tests, and benchmarks.

use std::fmt;
use std::str::FromStr;

use meander_kernel::model::problem::Problem;
use thiserror::Error;

pub mod chain;
pub mod dead_end;
pub mod gripper;
pub mod switchboard;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown world `{name}` (expected chain, dead_end, gripper, or switchboard)")]
pub struct UnknownWorld {
    pub name: String,
}

/// Worlds available by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorldName {
    Chain,
    DeadEnd,
    Gripper,
    Switchboard,
}

impl WorldName {
    pub const ALL: [Self; 4] = [Self::Chain, Self::DeadEnd, Self::Gripper, Self::Switchboard];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Chain => "chain",
            Self::DeadEnd => "dead_end",
            Self::Gripper => "gripper",
            Self::Switchboard => "switchboard",
        }
    }

    /// Build the world. `size` scales `gripper` (balls) and `switchboard`
    /// (lamps) and is ignored by the fixed worlds.
    #[must_use]
    pub fn build(self, size: usize) -> Problem {
        match self {
            Self::Chain => chain::problem(),
            Self::DeadEnd => dead_end::problem(),
            Self::Gripper => gripper::problem(size),
            Self::Switchboard => switchboard::problem(size),
        }
    }
}

impl fmt::Display for WorldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorldName {
    type Err = UnknownWorld;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "chain" => Ok(Self::Chain),
            "dead_end" => Ok(Self::DeadEnd),
            "gripper" => Ok(Self::Gripper),
            "switchboard" => Ok(Self::Switchboard),
            _ => Err(UnknownWorld { name: s.to_string() }),
        }
    }
}
