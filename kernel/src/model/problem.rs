//! `Problem`: a grounded planning task, and the builder that validates it.
//!
//! The problem is read-only during search. Engines share it by reference and
//! only ever mutate private copies of its states.

use std::collections::HashMap;

use crate::model::action::Action;
use crate::model::condition::{Condition, ConditionalEffect, Effect};
use crate::model::error::ModelError;
use crate::model::fluent_set::FluentSet;
use crate::model::state::State;

/// A grounded planning problem: fluent vocabulary, initial state, goal, and
/// the flat action list. Action identity everywhere in the planner is the
/// position in [`Problem::actions`].
#[derive(Debug, Clone)]
pub struct Problem {
    fluents: Vec<String>,
    initial: State,
    goal: Condition,
    actions: Vec<Action>,
}

impl Problem {
    #[must_use]
    pub fn fluent_count(&self) -> usize {
        self.fluents.len()
    }

    #[must_use]
    pub fn fluent_name(&self, fluent: usize) -> Option<&str> {
        self.fluents.get(fluent).map(String::as_str)
    }

    #[must_use]
    pub fn fluent_index(&self, name: &str) -> Option<usize> {
        self.fluents.iter().position(|f| f == name)
    }

    #[must_use]
    pub fn initial_state(&self) -> &State {
        &self.initial
    }

    #[must_use]
    pub fn goal(&self) -> &Condition {
        &self.goal
    }

    #[must_use]
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    #[must_use]
    pub fn action(&self, index: usize) -> Option<&Action> {
        self.actions.get(index)
    }

    /// Indices of every action applicable in `state`, in list order.
    #[must_use]
    pub fn applicable_actions(&self, state: &State) -> Vec<usize> {
        self.actions
            .iter()
            .enumerate()
            .filter(|(_, a)| a.is_applicable(state))
            .map(|(i, _)| i)
            .collect()
    }

    /// A dead end is a state with no applicable action.
    ///
    /// Every engine uses this predicate; walk termination and walk restart
    /// must never disagree about what a dead end is.
    #[must_use]
    pub fn is_dead_end(&self, state: &State) -> bool {
        !self.actions.iter().any(|a| a.is_applicable(state))
    }

    #[must_use]
    pub fn is_goal(&self, state: &State) -> bool {
        state.satisfy(&self.goal)
    }

    /// Names of the fluents that hold in `state`, in index order.
    #[must_use]
    pub fn describe_state(&self, state: &State) -> Vec<&str> {
        state
            .fluents()
            .iter()
            .filter_map(|f| self.fluent_name(f))
            .collect()
    }
}

/// Index-based literal lists, resolved to [`FluentSet`]s at build time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Literals {
    pub positive: Vec<usize>,
    pub negative: Vec<usize>,
}

impl Literals {
    #[must_use]
    pub fn positive(fluents: impl IntoIterator<Item = usize>) -> Self {
        Self {
            positive: fluents.into_iter().collect(),
            negative: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_negative(mut self, fluents: impl IntoIterator<Item = usize>) -> Self {
        self.negative.extend(fluents);
        self
    }
}

/// One conditional effect before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EffectSpec {
    pub when: Literals,
    pub add: Vec<usize>,
    pub delete: Vec<usize>,
}

impl EffectSpec {
    #[must_use]
    pub fn unconditional(add: impl IntoIterator<Item = usize>, delete: impl IntoIterator<Item = usize>) -> Self {
        Self {
            when: Literals::default(),
            add: add.into_iter().collect(),
            delete: delete.into_iter().collect(),
        }
    }
}

/// One ground action before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionSpec {
    pub name: String,
    pub precondition: Literals,
    pub effects: Vec<EffectSpec>,
}

/// Incremental, validating constructor for [`Problem`].
///
/// Fluents are interned by name; index-based specs are checked against the
/// final vocabulary in [`ProblemBuilder::build`].
#[derive(Debug, Clone, Default)]
pub struct ProblemBuilder {
    fluents: Vec<String>,
    by_name: HashMap<String, usize>,
    initial: Vec<usize>,
    goal: Option<Literals>,
    actions: Vec<ActionSpec>,
}

impl ProblemBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern a fluent name, returning its index.
    pub fn fluent(&mut self, name: impl Into<String>) -> usize {
        let name = name.into();
        if let Some(&i) = self.by_name.get(&name) {
            return i;
        }
        let i = self.fluents.len();
        self.by_name.insert(name.clone(), i);
        self.fluents.push(name);
        i
    }

    /// Declare a fluent that must not exist yet.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::DuplicateFluent`] if `name` was already interned.
    pub fn declare_fluent(&mut self, name: impl Into<String>) -> Result<usize, ModelError> {
        let name = name.into();
        if self.by_name.contains_key(&name) {
            return Err(ModelError::DuplicateFluent { name });
        }
        Ok(self.fluent(name))
    }

    /// Look up an already-interned fluent.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::UnknownFluent`] if `name` was never declared.
    pub fn lookup(&self, name: &str, context: &str) -> Result<usize, ModelError> {
        self.by_name
            .get(name)
            .copied()
            .ok_or_else(|| ModelError::UnknownFluent {
                name: name.to_string(),
                context: context.to_string(),
            })
    }

    pub fn initial(&mut self, fluents: impl IntoIterator<Item = usize>) -> &mut Self {
        self.initial.extend(fluents);
        self
    }

    pub fn goal(&mut self, goal: Literals) -> &mut Self {
        self.goal = Some(goal);
        self
    }

    pub fn action(&mut self, action: ActionSpec) -> &mut Self {
        self.actions.push(action);
        self
    }

    /// Validate every index and assemble the problem.
    ///
    /// # Errors
    ///
    /// - [`ModelError::MissingGoal`] if no goal was set
    /// - [`ModelError::EmptyActionName`] for an unnamed action
    /// - [`ModelError::FluentOutOfRange`] for any index past the vocabulary
    pub fn build(&self) -> Result<Problem, ModelError> {
        let width = self.fluents.len();
        let goal_spec = self.goal.as_ref().ok_or(ModelError::MissingGoal)?;

        let initial = State::from_fluents(to_set(width, &self.initial, "initial state")?);
        let goal = to_condition(width, goal_spec, "goal")?;

        let mut actions = Vec::with_capacity(self.actions.len());
        for (index, spec) in self.actions.iter().enumerate() {
            if spec.name.trim().is_empty() {
                return Err(ModelError::EmptyActionName { index });
            }
            let context = format!("action `{}`", spec.name);
            let precondition = to_condition(width, &spec.precondition, &context)?;
            let mut effects = Vec::with_capacity(spec.effects.len());
            for e in &spec.effects {
                effects.push(ConditionalEffect::new(
                    to_condition(width, &e.when, &context)?,
                    Effect::new(to_set(width, &e.add, &context)?, to_set(width, &e.delete, &context)?),
                ));
            }
            actions.push(Action::new(spec.name.clone(), precondition, effects));
        }

        Ok(Problem {
            fluents: self.fluents.clone(),
            initial,
            goal,
            actions,
        })
    }
}

fn to_set(width: usize, indices: &[usize], context: &str) -> Result<FluentSet, ModelError> {
    if let Some(&index) = indices.iter().find(|&&i| i >= width) {
        return Err(ModelError::FluentOutOfRange {
            index,
            fluent_count: width,
            context: context.to_string(),
        });
    }
    Ok(FluentSet::from_indices(width, indices.iter().copied()))
}

fn to_condition(width: usize, literals: &Literals, context: &str) -> Result<Condition, ModelError> {
    Ok(Condition::new(
        to_set(width, &literals.positive, context)?,
        to_set(width, &literals.negative, context)?,
    ))
}
