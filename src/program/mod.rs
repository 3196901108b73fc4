//! The effect tree and its interpreter.
//!
//! A [`Program`] describes a computation without running it: terminal
//! values, sequencing nodes, and effect leaves. The [`Effect`] trait is the
//! seam between the tree and the environment: each leaf family implements
//! it once, and [`Program::eval`] drives the whole reduction.
//!
//! # Examples
//!
//! ```rust
//! use freeprog::program::Program;
//!
//! let program: Program<(), i32> = Program::done(21).map(|x| x * 2);
//! assert_eq!(program.eval(&mut ()), Ok(42));
//! ```

mod error;
mod interpreter;
mod tree;

pub use error::EffectError;
pub use tree::{Effect, Program};
