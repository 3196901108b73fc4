//! Error types for program interpretation.
//!
//! Errors are not part of the program algebra: there is no failure
//! variant and no catch combinator. They travel through the interpreter's
//! `Result` channel instead: the first error produced by a leaf or by a
//! fallible continuation unwinds the trampoline and becomes the return
//! value of [`eval`](crate::program::Program::eval).

use std::fmt::{self, Display, Formatter};

/// Represents errors that can abort a program run.
///
/// # Examples
///
/// ```rust
/// use freeprog::program::EffectError;
///
/// let error = EffectError::NotFound { id: 7 };
/// assert_eq!(format!("{error}"), "no entity with id 7");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EffectError {
    /// Captured text input could not be converted to the requested value.
    InvalidInput {
        /// The offending input, verbatim.
        input: String,
        /// What the input was expected to be.
        expected: &'static str,
    },
    /// No entity with the requested id exists in the repository.
    NotFound {
        /// The id that was looked up.
        id: i32,
    },
    /// The program reached a state it has no transition for.
    InvalidState {
        /// What went wrong.
        description: String,
    },
    /// The underlying input or output stream failed.
    Io {
        /// The stream failure, rendered.
        message: String,
    },
    /// A reduction step received a value of an unexpected runtime type.
    ///
    /// Unreachable through the built-in constructors; indicates a
    /// hand-written [`Effect`](crate::program::Effect) implementation whose
    /// `handle` returned a value of the wrong type.
    TypeMismatch {
        /// Which step observed the mismatch.
        context: &'static str,
    },
}

impl Display for EffectError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput { input, expected } => {
                write!(formatter, "invalid input {input:?}: expected {expected}")
            }
            Self::NotFound { id } => write!(formatter, "no entity with id {id}"),
            Self::InvalidState { description } => {
                write!(formatter, "invalid state: {description}")
            }
            Self::Io { message } => write!(formatter, "input/output failure: {message}"),
            Self::TypeMismatch { context } => {
                write!(formatter, "type mismatch in {context}")
            }
        }
    }
}

impl std::error::Error for EffectError {}

impl From<std::io::Error> for EffectError {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: error.to_string(),
        }
    }
}
