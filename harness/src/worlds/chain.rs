//! `chain`: `S0 -A-> S1 -B-> Sgoal`, the smallest problem with a unique
//! two-step plan.

use meander_kernel::model::problem::{ActionSpec, EffectSpec, Literals, Problem, ProblemBuilder};

#[must_use]
pub fn problem() -> Problem {
    let mut b = ProblemBuilder::new();
    let s0 = b.fluent("s0");
    let s1 = b.fluent("s1");
    let goal = b.fluent("sgoal");
    b.initial([s0]);
    b.goal(Literals::positive([goal]));
    b.action(ActionSpec {
        name: "A".into(),
        precondition: Literals::positive([s0]),
        effects: vec![EffectSpec::unconditional([s1], [s0])],
    });
    b.action(ActionSpec {
        name: "B".into(),
        precondition: Literals::positive([s1]),
        effects: vec![EffectSpec::unconditional([goal], [s1])],
    });
    // Every index above comes from this builder.
    b.build().unwrap_or_else(|e| unreachable!("chain world is well formed: {e}"))
}
