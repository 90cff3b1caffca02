//! `gripper(n)`: a robot with two grippers moves `n` balls from room `a` to
//! room `b`.
//!
//! Optimal plan length is `n * 2 + ceil(n / 2) * 2 - 1` for `n >= 1`: every
//! ball is picked and dropped once, and each trip carrying two balls needs a
//! move there and (except the last) a move back.

use meander_kernel::model::problem::{ActionSpec, EffectSpec, Literals, Problem, ProblemBuilder};

const ROOMS: [&str; 2] = ["a", "b"];
const GRIPPERS: [&str; 2] = ["left", "right"];

#[must_use]
pub fn problem(balls: usize) -> Problem {
    let mut b = ProblemBuilder::new();
    let robby: Vec<usize> = ROOMS.iter().map(|r| b.fluent(format!("at_robby_{r}"))).collect();
    let free: Vec<usize> = GRIPPERS.iter().map(|g| b.fluent(format!("free_{g}"))).collect();
    let at: Vec<Vec<usize>> = (0..balls)
        .map(|i| ROOMS.iter().map(|r| b.fluent(format!("at_ball{i}_{r}"))).collect())
        .collect();
    let carry: Vec<Vec<usize>> = (0..balls)
        .map(|i| GRIPPERS.iter().map(|g| b.fluent(format!("carry_ball{i}_{g}"))).collect())
        .collect();

    b.initial([robby[0], free[0], free[1]]);
    b.initial(at.iter().map(|rooms| rooms[0]));
    b.goal(Literals::positive(at.iter().map(|rooms| rooms[1])));

    for (from, to) in [(0, 1), (1, 0)] {
        b.action(ActionSpec {
            name: format!("move_{}_{}", ROOMS[from], ROOMS[to]),
            precondition: Literals::positive([robby[from]]),
            effects: vec![EffectSpec::unconditional([robby[to]], [robby[from]])],
        });
    }
    for ball in 0..balls {
        for room in 0..ROOMS.len() {
            for gripper in 0..GRIPPERS.len() {
                b.action(ActionSpec {
                    name: format!("pick_ball{ball}_{}_{}", ROOMS[room], GRIPPERS[gripper]),
                    precondition: Literals::positive([at[ball][room], robby[room], free[gripper]]),
                    effects: vec![EffectSpec::unconditional(
                        [carry[ball][gripper]],
                        [at[ball][room], free[gripper]],
                    )],
                });
                b.action(ActionSpec {
                    name: format!("drop_ball{ball}_{}_{}", ROOMS[room], GRIPPERS[gripper]),
                    precondition: Literals::positive([carry[ball][gripper], robby[room]]),
                    effects: vec![EffectSpec::unconditional(
                        [at[ball][room], free[gripper]],
                        [carry[ball][gripper]],
                    )],
                });
            }
        }
    }
    b.build().unwrap_or_else(|e| unreachable!("gripper world is well formed: {e}"))
}
