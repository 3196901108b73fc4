//! Scenario tests for the guessing game.
//!
//! The environment stacks all three capabilities the game needs: a
//! scripted console, a PRNG pinned to one draw, and the secret cell.

use freeprog::demo::game;
use freeprog::dsl::cell::Cell;
use freeprog::dsl::console::Console;
use freeprog::dsl::random::Random;
use freeprog::program::EffectError;
use rstest::rstest;
use std::collections::VecDeque;

struct GameEnv {
    input: VecDeque<String>,
    output: Vec<String>,
    draw: i32,
    secret: i32,
}

impl GameEnv {
    fn new(draw: i32, input: &[&str]) -> Self {
        Self {
            input: input.iter().map(ToString::to_string).collect(),
            output: Vec::new(),
            draw,
            secret: 0,
        }
    }
}

impl Console for GameEnv {
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

impl Random for GameEnv {
    fn next_int(&mut self, _bound: i32) -> i32 {
        self.draw
    }
}

impl Cell for GameEnv {
    fn get(&self) -> i32 {
        self.secret
    }

    fn set(&mut self, value: i32) {
        self.secret = value;
    }
}

#[rstest]
fn wrong_guess_then_right_guess_wins_after_two_reads() {
    let mut environment = GameEnv::new(4, &["3", "4"]);

    let program = game::play_or_exit("y".to_string());
    assert_eq!(program.eval(&mut environment), Ok(()));

    assert_eq!(
        environment.output,
        ["Enter a number", "Enter a number", "YOU WIN!!"]
    );
    assert!(environment.input.is_empty());
}

#[rstest]
fn immediate_right_guess_wins_after_one_read() {
    let mut environment = GameEnv::new(7, &["7"]);

    assert_eq!(
        game::play_or_exit("y".to_string()).eval(&mut environment),
        Ok(())
    );
    assert_eq!(environment.output, ["Enter a number", "YOU WIN!!"]);
}

#[rstest]
fn full_session_greets_then_plays() {
    let mut environment = GameEnv::new(4, &["Ada", "y", "4"]);

    assert_eq!(game::play().eval(&mut environment), Ok(()));
    assert_eq!(
        environment.output,
        [
            "What's your name?",
            "Hello Ada",
            "Do you want to play a game? (Y/y)",
            "Enter a number",
            "YOU WIN!!"
        ]
    );
}

#[rstest]
fn uppercase_answer_also_starts_a_round() {
    let mut environment = GameEnv::new(2, &["Ada", "Y", "2"]);

    assert_eq!(game::play().eval(&mut environment), Ok(()));
    assert_eq!(environment.output.last().map(String::as_str), Some("YOU WIN!!"));
}

#[rstest]
fn declining_says_goodbye() {
    let mut environment = GameEnv::new(4, &["Ada", "n"]);

    assert_eq!(game::play().eval(&mut environment), Ok(()));
    assert_eq!(
        environment.output,
        [
            "What's your name?",
            "Hello Ada",
            "Do you want to play a game? (Y/y)",
            "Bye!"
        ]
    );
}

#[rstest]
fn new_secret_stores_the_draw_in_the_cell() {
    let mut environment = GameEnv::new(6, &[]);

    assert_eq!(game::new_secret().eval(&mut environment), Ok(()));
    assert_eq!(environment.secret, 6);
}

#[rstest]
fn non_numeric_guess_aborts_with_invalid_input() {
    let mut environment = GameEnv::new(4, &["a number"]);

    assert_eq!(
        game::play_or_exit("y".to_string()).eval(&mut environment),
        Err(EffectError::InvalidInput {
            input: "a number".to_string(),
            expected: "a decimal integer",
        })
    );
}
