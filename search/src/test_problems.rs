//! Small grounded problems shared by unit tests.

use meander_kernel::model::problem::{ActionSpec, EffectSpec, Literals, Problem, ProblemBuilder};

/// `S0 -A-> S1 -B-> Sgoal`. `A` needs `s0`, `B` needs `s1`.
pub(crate) fn chain_problem() -> Problem {
    let mut b = ProblemBuilder::new();
    let s0 = b.fluent("s0");
    let s1 = b.fluent("s1");
    let sg = b.fluent("sgoal");
    b.initial([s0]);
    b.goal(Literals::positive([sg]));
    b.action(ActionSpec {
        name: "A".into(),
        precondition: Literals::positive([s0]),
        effects: vec![EffectSpec::unconditional([s1], [s0])],
    });
    b.action(ActionSpec {
        name: "B".into(),
        precondition: Literals::positive([s1]),
        effects: vec![EffectSpec::unconditional([sg], [s1])],
    });
    b.build().expect("chain problem is well formed")
}

/// No action is ever applicable from the initial state.
pub(crate) fn dead_end_problem() -> Problem {
    let mut b = ProblemBuilder::new();
    let start = b.fluent("start");
    let key = b.fluent("key");
    let goal = b.fluent("goal");
    b.initial([start]);
    b.goal(Literals::positive([goal]));
    b.action(ActionSpec {
        name: "unlock".into(),
        precondition: Literals::positive([key]),
        effects: vec![EffectSpec::unconditional([goal], [])],
    });
    b.build().expect("dead-end problem is well formed")
}

/// A trap: `fall` leads to a state with no applicable action, `step_i`
/// walks a line of `len` fluents to the goal.
pub(crate) fn trap_line_problem(len: usize) -> Problem {
    let mut b = ProblemBuilder::new();
    let cells: Vec<usize> = (0..=len).map(|i| b.fluent(format!("at{i}"))).collect();
    let pit = b.fluent("pit");
    b.initial([cells[0]]);
    b.goal(Literals::positive([cells[len]]));
    for i in 0..len {
        b.action(ActionSpec {
            name: format!("step{i}"),
            precondition: Literals::positive([cells[i]]),
            effects: vec![EffectSpec::unconditional([cells[i + 1]], [cells[i]])],
        });
        b.action(ActionSpec {
            name: format!("fall{i}"),
            precondition: Literals::positive([cells[i]]),
            effects: vec![EffectSpec::unconditional([pit], [cells[i]])],
        });
    }
    b.build().expect("trap line problem is well formed")
}
