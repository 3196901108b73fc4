//! A number guessing game over console, randomness and the state cell.
//!
//! The secret is a PRNG draw stored in the cell; every round reads it back
//! and compares. Each flow names exactly the capabilities it touches, so
//! the full game needs an environment with all three:
//! `S: Console + Random + Cell`.

use crate::dsl::cell::{self, Cell};
use crate::dsl::console::{self, Console, parse_int};
use crate::dsl::random::{self, Random};
use crate::program::Program;

/// Secrets are drawn from `[0, SECRET_BOUND)`.
const SECRET_BOUND: i32 = 10;

/// Draws a fresh secret and stores it in the cell.
pub fn new_secret<S>() -> Program<S, ()>
where
    S: Random + Cell + 'static,
{
    random::next_int(SECRET_BOUND).flat_map(cell::set_value)
}

/// Whether `guess` matches the stored secret.
pub fn check_guess<S>(guess: i32) -> Program<S, bool>
where
    S: Cell + 'static,
{
    cell::get_value().map(move |secret| secret == guess)
}

/// Asks for guesses until one matches the secret.
pub fn game_loop<S>() -> Program<S, ()>
where
    S: Console + Cell + 'static,
{
    console::prompt("Enter a number")
        .try_map(|line| parse_int(&line))
        .flat_map(check_guess)
        .flat_map(win_or_continue)
}

/// Ends the game on a correct guess, asks again otherwise.
pub fn win_or_continue<S>(correct: bool) -> Program<S, ()>
where
    S: Console + Cell + 'static,
{
    if correct {
        console::write_line("YOU WIN!!")
    } else {
        game_loop()
    }
}

/// Starts a round on `y`/`Y`, says goodbye otherwise.
pub fn play_or_exit<S>(answer: String) -> Program<S, ()>
where
    S: Console + Random + Cell + 'static,
{
    if answer.eq_ignore_ascii_case("y") {
        new_secret().then(game_loop())
    } else {
        console::write_line("Bye!")
    }
}

/// The full session: greet by name, then offer a game.
pub fn play<S>() -> Program<S, ()>
where
    S: Console + Random + Cell + 'static,
{
    console::prompt("What's your name?")
        .flat_map(console::say_hello)
        .then(console::prompt("Do you want to play a game? (Y/y)"))
        .flat_map(play_or_exit)
}
