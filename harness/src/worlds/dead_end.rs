//! `dead_end`: no action is applicable in the initial state.

use meander_kernel::model::problem::{ActionSpec, EffectSpec, Literals, Problem, ProblemBuilder};

#[must_use]
pub fn problem() -> Problem {
    let mut b = ProblemBuilder::new();
    let start = b.fluent("start");
    let key = b.fluent("has_key");
    let open = b.fluent("door_open");
    b.initial([start]);
    b.goal(Literals::positive([open]));
    b.action(ActionSpec {
        name: "unlock".into(),
        precondition: Literals::positive([key]),
        effects: vec![EffectSpec::unconditional([open], [])],
    });
    b.build().unwrap_or_else(|e| unreachable!("dead_end world is well formed: {e}"))
}
