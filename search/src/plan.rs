//! Plans: extraction from the search tree and replay validation.

use std::fmt;

use meander_kernel::model::problem::Problem;
use meander_kernel::model::state::State;
use serde::Serialize;

use crate::error::PlanValidationError;
use crate::node::{NodeArena, NodeId};

/// One applied action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanStep {
    /// Position in the problem's flat action list.
    pub action_index: usize,
    pub name: String,
}

/// An ordered, gap-free action sequence from the initial state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Plan {
    steps: Vec<PlanStep>,
}

impl Plan {
    /// Build a plan from action indices, resolving names against `problem`.
    ///
    /// # Errors
    ///
    /// Returns [`PlanValidationError::UnknownActionIndex`] for an index the
    /// problem does not have.
    pub fn from_indices(
        problem: &Problem,
        indices: impl IntoIterator<Item = usize>,
    ) -> Result<Self, PlanValidationError> {
        let steps = indices
            .into_iter()
            .enumerate()
            .map(|(step, index)| {
                problem
                    .action(index)
                    .map(|a| PlanStep {
                        action_index: index,
                        name: a.name().to_string(),
                    })
                    .ok_or(PlanValidationError::UnknownActionIndex { step, index })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { steps })
    }

    /// Build a plan from action names. Names may be wrapped in parentheses,
    /// as in the text form produced by [`fmt::Display`].
    ///
    /// # Errors
    ///
    /// Returns [`PlanValidationError::UnknownActionName`] for a name the
    /// problem does not have. When names repeat, the first action wins.
    pub fn from_action_names<'a>(
        problem: &Problem,
        names: impl IntoIterator<Item = &'a str>,
    ) -> Result<Self, PlanValidationError> {
        let steps = names
            .into_iter()
            .enumerate()
            .map(|(step, raw)| {
                let name = raw.trim().trim_start_matches('(').trim_end_matches(')').trim();
                problem
                    .actions()
                    .iter()
                    .position(|a| a.name() == name)
                    .map(|action_index| PlanStep {
                        action_index,
                        name: name.to_string(),
                    })
                    .ok_or_else(|| PlanValidationError::UnknownActionName {
                        step,
                        name: name.to_string(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { steps })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    #[must_use]
    pub fn steps(&self) -> &[PlanStep] {
        &self.steps
    }

    #[must_use]
    pub fn action_indices(&self) -> Vec<usize> {
        self.steps.iter().map(|s| s.action_index).collect()
    }

    #[must_use]
    pub fn action_names(&self) -> Vec<&str> {
        self.steps.iter().map(|s| s.name.as_str()).collect()
    }

    /// Replay the plan from the initial state, checking every precondition
    /// and the goal at the end. Returns the final state.
    ///
    /// # Errors
    ///
    /// Returns the first replay failure.
    pub fn validate(&self, problem: &Problem) -> Result<State, PlanValidationError> {
        let mut state = problem.initial_state().clone();
        for (step, plan_step) in self.steps.iter().enumerate() {
            let action = problem.action(plan_step.action_index).ok_or(
                PlanValidationError::UnknownActionIndex {
                    step,
                    index: plan_step.action_index,
                },
            )?;
            if !action.is_applicable(&state) {
                return Err(PlanValidationError::PreconditionNotMet {
                    step,
                    action: action.name().to_string(),
                });
            }
            state = action.successor(&state);
        }
        if !problem.is_goal(&state) {
            return Err(PlanValidationError::GoalNotReached);
        }
        Ok(state)
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for step in &self.steps {
            writeln!(f, "({})", step.name)?;
        }
        Ok(())
    }
}

/// Walk parent handles from `goal` back to the root and return the actions
/// in execution order.
///
/// A root-only path yields the empty plan.
#[must_use]
pub fn extract_plan(arena: &NodeArena, goal: NodeId, problem: &Problem) -> Plan {
    let steps = arena
        .lineage(goal)
        .into_iter()
        .filter_map(|id| arena[id].action())
        .map(|action_index| PlanStep {
            action_index,
            name: problem
                .action(action_index)
                .map(|a| a.name().to_string())
                .unwrap_or_default(),
        })
        .collect();
    Plan { steps }
}
