//! State-cell effects: read and write a single integer slot.
//!
//! The cell is the smallest possible mutable state an environment can
//! carry; the guessing game uses it to remember the secret between one
//! loop iteration and the next.

use std::any::Any;

use crate::program::{Effect, EffectError, Program};

/// Capability an environment must provide to interpret cell leaves.
pub trait Cell {
    /// Returns the current value.
    fn get(&self) -> i32;

    /// Replaces the current value.
    fn set(&mut self, value: i32);
}

/// The cell leaves.
enum CellEffect {
    GetValue,
    SetValue { value: i32 },
}

impl<S: Cell> Effect<S> for CellEffect {
    fn describe(&self) -> &'static str {
        match self {
            Self::GetValue => "cell.get",
            Self::SetValue { .. } => "cell.set",
        }
    }

    fn handle(self: Box<Self>, environment: &mut S) -> Result<Box<dyn Any>, EffectError> {
        match *self {
            Self::GetValue => Ok(Box::new(environment.get())),
            Self::SetValue { value } => {
                environment.set(value);
                Ok(Box::new(()))
            }
        }
    }
}

/// A program that reads the current cell value.
pub fn get_value<S>() -> Program<S, i32>
where
    S: Cell + 'static,
{
    Program::from_effect(CellEffect::GetValue)
}

/// A program that replaces the cell value.
pub fn set_value<S>(value: i32) -> Program<S, ()>
where
    S: Cell + 'static,
{
    Program::from_effect(CellEffect::SetValue { value })
}

/// A single mutable integer slot.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct IntCell {
    value: i32,
}

impl IntCell {
    /// Creates a cell holding `value`.
    #[must_use]
    pub const fn new(value: i32) -> Self {
        Self { value }
    }
}

impl Cell for IntCell {
    fn get(&self) -> i32 {
        self.value
    }

    fn set(&mut self, value: i32) {
        self.value = value;
    }
}
