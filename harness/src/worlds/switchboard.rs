//! `switchboard(n)`: `n` lamps, all initially off. `toggle_i` flips lamp `i`
//! and, when it exists, lamp `i + 1`. The goal is every lamp on.
//!
//! Flips are conditional effects, so the world exercises effect conditions
//! that are evaluated against the source state, including negative ones.

use meander_kernel::model::problem::{ActionSpec, EffectSpec, Literals, Problem, ProblemBuilder};

#[must_use]
pub fn problem(lamps: usize) -> Problem {
    let mut b = ProblemBuilder::new();
    let on: Vec<usize> = (0..lamps).map(|i| b.fluent(format!("lamp{i}_on"))).collect();
    b.goal(Literals::positive(on.iter().copied()));

    for i in 0..lamps {
        let mut effects = Vec::new();
        for &lamp in on.iter().skip(i).take(2) {
            effects.push(EffectSpec {
                when: Literals::positive([lamp]),
                add: Vec::new(),
                delete: vec![lamp],
            });
            effects.push(EffectSpec {
                when: Literals::default().with_negative([lamp]),
                add: vec![lamp],
                delete: Vec::new(),
            });
        }
        b.action(ActionSpec {
            name: format!("toggle{i}"),
            precondition: Literals::default(),
            effects,
        });
    }
    b.build().unwrap_or_else(|e| unreachable!("switchboard world is well formed: {e}"))
}
