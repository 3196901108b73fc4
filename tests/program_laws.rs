//! Law tests for the program algebra, observed through evaluation.
//!
//! The pure cases run under proptest; the effectful cases compare the full
//! observable behavior (console output plus result) of both sides of each
//! law against scripted environments.

use freeprog::dsl::console::{self, Console};
use freeprog::program::{EffectError, Program};
use proptest::prelude::*;
use rstest::rstest;
use std::collections::VecDeque;

#[derive(Default)]
struct Script {
    input: VecDeque<String>,
    output: Vec<String>,
}

impl Script {
    fn with_input(lines: &[&str]) -> Self {
        Self {
            input: lines.iter().map(ToString::to_string).collect(),
            output: Vec::new(),
        }
    }
}

impl Console for Script {
    fn write_line(&mut self, line: &str) -> Result<(), EffectError> {
        self.output.push(line.to_string());
        Ok(())
    }

    fn read_line(&mut self) -> Result<String, EffectError> {
        self.input.pop_front().ok_or(EffectError::Io {
            message: "no more scripted input".to_string(),
        })
    }
}

proptest! {
    #[test]
    fn prop_left_identity(value in any::<i32>()) {
        let f = |x: i32| Program::<(), i32>::done(x.wrapping_mul(3));

        let left = Program::<(), i32>::done(value).flat_map(f);
        let right = f(value);

        prop_assert_eq!(left.eval(&mut ()), right.eval(&mut ()));
    }

    #[test]
    fn prop_right_identity(value in any::<i32>()) {
        let result = Program::<(), i32>::done(value).flat_map(Program::done);
        prop_assert_eq!(result.eval(&mut ()), Ok(value));
    }

    #[test]
    fn prop_associativity(value in any::<i32>()) {
        fn f(x: i32) -> Program<(), i32> {
            Program::done(x.wrapping_add(1))
        }
        fn g(x: i32) -> Program<(), i32> {
            Program::done(x.wrapping_mul(2))
        }

        let left = Program::<(), i32>::done(value).flat_map(f).flat_map(g);
        let right = Program::<(), i32>::done(value).flat_map(|x| f(x).flat_map(g));

        prop_assert_eq!(left.eval(&mut ()), right.eval(&mut ()));
    }
}

#[rstest]
fn left_identity_holds_with_effects() {
    let f = |name: String| console::say_hello(name);

    let left = Program::done("Ada".to_string()).flat_map(f);
    let right = f("Ada".to_string());

    let mut left_script = Script::default();
    let mut right_script = Script::default();
    assert_eq!(left.eval(&mut left_script), right.eval(&mut right_script));
    assert_eq!(left_script.output, right_script.output);
}

#[rstest]
fn right_identity_holds_with_effects() {
    let left: Program<Script, String> = console::read_line().flat_map(Program::done);
    let right: Program<Script, String> = console::read_line();

    let mut left_script = Script::with_input(&["Ada"]);
    let mut right_script = Script::with_input(&["Ada"]);
    assert_eq!(left.eval(&mut left_script), right.eval(&mut right_script));
    assert_eq!(left_script.input, right_script.input);
}

#[rstest]
fn associativity_holds_with_effects() {
    fn p() -> Program<Script, ()> {
        console::write_line("p")
    }
    fn f((): ()) -> Program<Script, ()> {
        console::write_line("f")
    }
    fn g((): ()) -> Program<Script, ()> {
        console::write_line("g")
    }

    let left = p().flat_map(f).flat_map(g);
    let right = p().flat_map(|x| f(x).flat_map(g));

    let mut left_script = Script::default();
    let mut right_script = Script::default();
    assert_eq!(left.eval(&mut left_script), right.eval(&mut right_script));
    assert_eq!(left_script.output, right_script.output);
    assert_eq!(left_script.output, ["p", "f", "g"]);
}

#[rstest]
fn zip_observes_left_effects_strictly_first() {
    let program = console::write_line("left").zip(console::write_line("right"));

    let mut script = Script::default();
    assert_eq!(program.eval(&mut script), Ok(((), ())));
    assert_eq!(script.output, ["left", "right"]);
}

#[rstest]
fn map2_consumes_input_left_to_right() {
    let program = console::read_line().map2(console::read_line(), |first, second| {
        format!("{first},{second}")
    });

    let mut script = Script::with_input(&["a", "b"]);
    assert_eq!(program.eval(&mut script), Ok("a,b".to_string()));
}
