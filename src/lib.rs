//! # freeprog
//!
//! Programs as data: composable effect descriptions, capability-based
//! environments, and a stack-safe interpreter.
//!
//! ## Overview
//!
//! A [`program::Program`] is an immutable description of a computation:
//! a tree of primitive effect requests (write a line, read a line, draw a
//! random number, read or write a state cell, mutate an in-memory
//! repository) glued together with sequencing combinators. Nothing happens
//! while the tree is built; evaluation is a separate step that threads a
//! caller-supplied environment through every node.
//!
//! - **Effect tree**: [`program::Program`] with `done`, `map`, `flat_map`,
//!   `then`, `map2`, `zip` and fallible variants.
//! - **Capability leaves**: [`dsl`] defines one module per effect family,
//!   each with a capability trait the environment must implement.
//! - **Interpreter**: [`program::Program::eval`] reduces any tree with an
//!   explicit trampoline, so co-recursive "loop" programs run in constant
//!   native stack space.
//! - **Demo flows**: [`demo`] builds a guessing game and a TODO menu out of
//!   the built-in families.
//!
//! ## Example
//!
//! ```rust
//! use freeprog::dsl::console::{self, Console};
//! use freeprog::program::EffectError;
//!
//! struct Script {
//!     input: Vec<String>,
//!     output: Vec<String>,
//! }
//!
//! impl Console for Script {
//!     fn write_line(&mut self, line: &str) -> Result<(), EffectError> {
//!         self.output.push(line.to_string());
//!         Ok(())
//!     }
//!
//!     fn read_line(&mut self) -> Result<String, EffectError> {
//!         self.input.pop().ok_or(EffectError::Io {
//!             message: "no more input".to_string(),
//!         })
//!     }
//! }
//!
//! let program = console::prompt("What's your name?").flat_map(console::say_hello);
//!
//! let mut script = Script {
//!     input: vec!["Ada".to_string()],
//!     output: Vec::new(),
//! };
//! program.eval(&mut script).expect("script covers every read");
//! assert_eq!(script.output, ["What's your name?", "Hello Ada"]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the program type, the error type and the capability traits.
///
/// # Usage
///
/// ```rust
/// use freeprog::prelude::*;
/// ```
pub mod prelude {
    pub use crate::dsl::cell::Cell;
    pub use crate::dsl::console::Console;
    pub use crate::dsl::random::Random;
    pub use crate::dsl::todo::{Repository, TodoEntity, TodoStatus};
    pub use crate::program::{Effect, EffectError, Program};
}

pub mod demo;
pub mod dsl;
pub mod program;
