//! Ground actions.

use crate::model::condition::{Condition, ConditionalEffect};
use crate::model::state::State;

/// A fully instantiated operator: a precondition plus conditional effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    name: String,
    precondition: Condition,
    effects: Vec<ConditionalEffect>,
}

impl Action {
    #[must_use]
    pub fn new(name: impl Into<String>, precondition: Condition, effects: Vec<ConditionalEffect>) -> Self {
        Self {
            name: name.into(),
            precondition,
            effects,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn precondition(&self) -> &Condition {
        &self.precondition
    }

    #[must_use]
    pub fn conditional_effects(&self) -> &[ConditionalEffect] {
        &self.effects
    }

    #[must_use]
    pub fn is_applicable(&self, state: &State) -> bool {
        state.satisfy(&self.precondition)
    }

    /// Build the successor of `state` under this action.
    ///
    /// Every effect condition is evaluated against `state` (the source), not
    /// against the partially updated copy, so effect order never matters for
    /// which effects fire. Does not check the precondition.
    #[must_use]
    pub fn successor(&self, state: &State) -> State {
        let mut next = state.clone();
        for ce in &self.effects {
            if state.satisfy(&ce.condition) {
                next.apply(&ce.effect);
            }
        }
        next
    }
}
