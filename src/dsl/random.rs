//! Randomness effects: draw one uniformly distributed integer.

use std::any::Any;

use rand::Rng;

use crate::program::{Effect, EffectError, Program};

/// Capability an environment must provide to interpret randomness leaves.
pub trait Random {
    /// Returns a uniformly distributed integer in `[0, bound)`.
    ///
    /// Non-cryptographic; no seeding contract is fixed. The interpreter
    /// only calls this with a positive `bound`.
    fn next_int(&mut self, bound: i32) -> i32;
}

/// The one randomness leaf.
struct NextInt {
    bound: i32,
}

impl<S: Random> Effect<S> for NextInt {
    fn describe(&self) -> &'static str {
        "random.next_int"
    }

    fn handle(self: Box<Self>, environment: &mut S) -> Result<Box<dyn Any>, EffectError> {
        if self.bound <= 0 {
            return Err(EffectError::InvalidState {
                description: format!("next_int bound must be positive, got {}", self.bound),
            });
        }
        Ok(Box::new(environment.next_int(self.bound)))
    }
}

/// A program that draws a uniformly distributed integer in `[0, bound)`.
///
/// A non-positive `bound` is rejected at evaluation time with
/// [`EffectError::InvalidState`].
pub fn next_int<S>(bound: i32) -> Program<S, i32>
where
    S: Random + 'static,
{
    Program::from_effect(NextInt { bound })
}

/// Thread-local, non-cryptographic generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl ThreadRandom {
    /// Creates a new `ThreadRandom`.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Random for ThreadRandom {
    fn next_int(&mut self, bound: i32) -> i32 {
        rand::thread_rng().gen_range(0..bound)
    }
}
