//! `State`: the set of fluents that hold in one world configuration.
//!
//! # Equality semantics
//!
//! `State` derives `Eq` and `Hash` over its fluent contents only. Search
//! duplicate detection keys on this and nothing else.

use crate::model::condition::{Condition, Effect};
use crate::model::fluent_set::FluentSet;

/// A world state under the closed-world assumption: a fluent holds iff it
/// is a member.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct State {
    fluents: FluentSet,
}

impl State {
    /// The empty state over `width` fluents.
    #[must_use]
    pub fn empty(width: usize) -> Self {
        Self {
            fluents: FluentSet::new(width),
        }
    }

    #[must_use]
    pub fn from_fluents(fluents: FluentSet) -> Self {
        Self { fluents }
    }

    /// Does `fluent` hold in this state?
    #[must_use]
    pub fn holds(&self, fluent: usize) -> bool {
        self.fluents.contains(fluent)
    }

    /// Does this state satisfy `condition`?
    #[must_use]
    pub fn satisfy(&self, condition: &Condition) -> bool {
        condition.is_satisfied_by(self)
    }

    /// Apply an effect in place: deletes first, then adds.
    ///
    /// Add-after-delete means an effect that both adds and deletes the same
    /// fluent leaves it true.
    pub fn apply(&mut self, effect: &Effect) {
        self.fluents.difference_with(effect.delete_set());
        self.fluents.union_with(effect.add_set());
    }

    #[must_use]
    pub fn fluents(&self) -> &FluentSet {
        &self.fluents
    }

    /// Fluent width of the owning problem.
    #[must_use]
    pub fn width(&self) -> usize {
        self.fluents.width()
    }
}
