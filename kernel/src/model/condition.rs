//! Conditions, effects, and conditional effects.

use crate::model::fluent_set::FluentSet;
use crate::model::state::State;

/// A conjunction of literals: every `positive` fluent must hold and no
/// `negative` fluent may hold. The empty condition is always satisfied.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Condition {
    positive: FluentSet,
    negative: FluentSet,
}

impl Condition {
    #[must_use]
    pub fn new(positive: FluentSet, negative: FluentSet) -> Self {
        Self { positive, negative }
    }

    /// The always-true condition over `width` fluents.
    #[must_use]
    pub fn always(width: usize) -> Self {
        Self::new(FluentSet::new(width), FluentSet::new(width))
    }

    #[must_use]
    pub fn is_satisfied_by(&self, state: &State) -> bool {
        self.positive.is_subset(state.fluents()) && self.negative.is_disjoint(state.fluents())
    }

    #[must_use]
    pub fn positive(&self) -> &FluentSet {
        &self.positive
    }

    #[must_use]
    pub fn negative(&self) -> &FluentSet {
        &self.negative
    }

    /// `true` if the condition has no literal at all.
    #[must_use]
    pub fn is_trivial(&self) -> bool {
        self.positive.is_empty() && self.negative.is_empty()
    }
}

/// Unconditional add/delete lists.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Effect {
    add: FluentSet,
    delete: FluentSet,
}

impl Effect {
    #[must_use]
    pub fn new(add: FluentSet, delete: FluentSet) -> Self {
        Self { add, delete }
    }

    #[must_use]
    pub fn add_set(&self) -> &FluentSet {
        &self.add
    }

    #[must_use]
    pub fn delete_set(&self) -> &FluentSet {
        &self.delete
    }
}

/// An effect that fires only when its condition holds in the source state.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConditionalEffect {
    pub condition: Condition,
    pub effect: Effect,
}

impl ConditionalEffect {
    #[must_use]
    pub fn new(condition: Condition, effect: Effect) -> Self {
        Self { condition, effect }
    }

    /// An effect guarded by the always-true condition.
    #[must_use]
    pub fn unconditional(effect: Effect) -> Self {
        let width = effect.add_set().width();
        Self::new(Condition::always(width), effect)
    }
}
