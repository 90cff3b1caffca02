//! Delete-relaxation heuristics: `h_max`, `h_add`, and FF.
//!
//! Each conditional effect becomes one relaxed operator whose precondition is
//! the action precondition plus the effect condition (positive literals
//! only). Delete lists and negative literals are ignored.

use crate::heuristic::StateHeuristic;
use crate::model::condition::Condition;
use crate::model::problem::Problem;
use crate::model::state::State;

#[derive(Debug, Clone)]
struct RelaxedOp {
    action: usize,
    pre: Vec<usize>,
    add: Vec<usize>,
}

/// How precondition costs combine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Aggregate {
    Max,
    Sum,
}

impl Aggregate {
    fn combine<I: IntoIterator<Item = f64>>(self, costs: I) -> f64 {
        match self {
            Self::Max => costs.into_iter().fold(0.0, f64::max),
            Self::Sum => costs.into_iter().sum(),
        }
    }
}

/// The relaxed operator table, built once per problem.
#[derive(Debug, Clone)]
struct RelaxedTask {
    width: usize,
    ops: Vec<RelaxedOp>,
}

/// Per-fluent cost and best supporter after a fixpoint run.
struct Fixpoint {
    cost: Vec<f64>,
    supporter: Vec<Option<usize>>,
}

impl RelaxedTask {
    fn new(problem: &Problem) -> Self {
        let mut ops = Vec::new();
        for (index, action) in problem.actions().iter().enumerate() {
            let base: Vec<usize> = action.precondition().positive().iter().collect();
            for ce in action.conditional_effects() {
                let add: Vec<usize> = ce.effect.add_set().iter().collect();
                if add.is_empty() {
                    continue;
                }
                let mut pre = base.clone();
                pre.extend(ce.condition.positive().iter());
                pre.sort_unstable();
                pre.dedup();
                ops.push(RelaxedOp { action: index, pre, add });
            }
        }
        Self {
            width: problem.fluent_count(),
            ops,
        }
    }

    /// Bellman-Ford style fixpoint over unit-cost relaxed operators.
    fn fixpoint(&self, state: &State, aggregate: Aggregate) -> Fixpoint {
        let mut cost = vec![f64::INFINITY; self.width];
        let mut supporter = vec![None; self.width];
        for f in state.fluents().iter() {
            cost[f] = 0.0;
        }

        let mut changed = true;
        while changed {
            changed = false;
            for (op_index, op) in self.ops.iter().enumerate() {
                let pre_cost = aggregate.combine(op.pre.iter().map(|&f| cost[f]));
                if !pre_cost.is_finite() {
                    continue;
                }
                let reach = pre_cost + 1.0;
                for &f in &op.add {
                    if reach < cost[f] {
                        cost[f] = reach;
                        supporter[f] = Some(op_index);
                        changed = true;
                    }
                }
            }
        }
        Fixpoint { cost, supporter }
    }

    fn goal_cost(fixpoint: &Fixpoint, goal: &Condition, aggregate: Aggregate) -> f64 {
        aggregate.combine(goal.positive().iter().map(|f| fixpoint.cost[f]))
    }
}

/// Admissible `h_max`: cost of the most expensive goal fluent.
#[derive(Debug, Clone)]
pub struct MaxHeuristic {
    task: RelaxedTask,
}

impl MaxHeuristic {
    #[must_use]
    pub fn new(problem: &Problem) -> Self {
        Self {
            task: RelaxedTask::new(problem),
        }
    }
}

impl StateHeuristic for MaxHeuristic {
    fn estimate(&self, state: &State, goal: &Condition) -> f64 {
        let fp = self.task.fixpoint(state, Aggregate::Max);
        RelaxedTask::goal_cost(&fp, goal, Aggregate::Max)
    }
}

/// Additive `h_add`: sum of goal fluent costs. Not admissible.
#[derive(Debug, Clone)]
pub struct AdditiveHeuristic {
    task: RelaxedTask,
}

impl AdditiveHeuristic {
    #[must_use]
    pub fn new(problem: &Problem) -> Self {
        Self {
            task: RelaxedTask::new(problem),
        }
    }
}

impl StateHeuristic for AdditiveHeuristic {
    fn estimate(&self, state: &State, goal: &Condition) -> f64 {
        let fp = self.task.fixpoint(state, Aggregate::Sum);
        RelaxedTask::goal_cost(&fp, goal, Aggregate::Sum)
    }
}

/// FF: number of distinct actions in a relaxed plan extracted from `h_add`
/// best supporters.
#[derive(Debug, Clone)]
pub struct FastForwardHeuristic {
    task: RelaxedTask,
}

impl FastForwardHeuristic {
    #[must_use]
    pub fn new(problem: &Problem) -> Self {
        Self {
            task: RelaxedTask::new(problem),
        }
    }
}

impl StateHeuristic for FastForwardHeuristic {
    #[allow(clippy::cast_precision_loss)]
    fn estimate(&self, state: &State, goal: &Condition) -> f64 {
        let fp = self.task.fixpoint(state, Aggregate::Sum);
        if !RelaxedTask::goal_cost(&fp, goal, Aggregate::Sum).is_finite() {
            return f64::INFINITY;
        }

        let mut in_plan = vec![false; self.task.ops.len()];
        let action_count = self.task.ops.iter().map(|op| op.action + 1).max().unwrap_or(0);
        let mut actions_used = vec![false; action_count];
        let mut expanded = vec![false; self.task.width];
        let mut open: Vec<usize> = goal.positive().iter().collect();

        while let Some(f) = open.pop() {
            if expanded[f] {
                continue;
            }
            expanded[f] = true;
            // Fluents true in the state have no supporter and cost nothing.
            let Some(op_index) = fp.supporter[f] else {
                continue;
            };
            if in_plan[op_index] {
                continue;
            }
            in_plan[op_index] = true;
            let op = &self.task.ops[op_index];
            actions_used[op.action] = true;
            open.extend(op.pre.iter().copied());
        }

        actions_used.iter().filter(|&&used| used).count() as f64
    }
}
