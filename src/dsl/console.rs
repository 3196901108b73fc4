//! Console effects: write one line, read one line.
//!
//! # Examples
//!
//! ```rust
//! use freeprog::dsl::console::{self, Console};
//! use freeprog::program::EffectError;
//!
//! struct Fixed;
//!
//! impl Console for Fixed {
//!     fn write_line(&mut self, _line: &str) -> Result<(), EffectError> {
//!         Ok(())
//!     }
//!
//!     fn read_line(&mut self) -> Result<String, EffectError> {
//!         Ok("Ada".to_string())
//!     }
//! }
//!
//! let program = console::prompt("What's your name?");
//! assert_eq!(program.eval(&mut Fixed), Ok("Ada".to_string()));
//! ```

use std::any::Any;
use std::io::{self, BufRead, Write};

use crate::program::{Effect, EffectError, Program};

/// Capability an environment must provide to interpret console leaves.
pub trait Console {
    /// Writes one line plus newline to the output stream.
    ///
    /// # Errors
    ///
    /// [`EffectError::Io`] if the stream fails.
    fn write_line(&mut self, line: &str) -> Result<(), EffectError>;

    /// Blocks until one newline-terminated line is available on the input
    /// stream and returns it without its terminator.
    ///
    /// # Errors
    ///
    /// [`EffectError::Io`] if the stream fails or is exhausted.
    fn read_line(&mut self) -> Result<String, EffectError>;
}

/// The console leaves: each carries only the literal data of its operation.
enum ConsoleEffect {
    WriteLine(String),
    ReadLine,
}

impl<S: Console> Effect<S> for ConsoleEffect {
    fn describe(&self) -> &'static str {
        match self {
            Self::WriteLine(_) => "console.write_line",
            Self::ReadLine => "console.read_line",
        }
    }

    fn handle(self: Box<Self>, environment: &mut S) -> Result<Box<dyn Any>, EffectError> {
        match *self {
            Self::WriteLine(line) => {
                environment.write_line(&line)?;
                Ok(Box::new(()))
            }
            Self::ReadLine => environment
                .read_line()
                .map(|line| Box::new(line) as Box<dyn Any>),
        }
    }
}

/// A program that writes one line to the console.
pub fn write_line<S>(line: impl Into<String>) -> Program<S, ()>
where
    S: Console + 'static,
{
    Program::from_effect(ConsoleEffect::WriteLine(line.into()))
}

/// A program that reads one line from the console.
pub fn read_line<S>() -> Program<S, String>
where
    S: Console + 'static,
{
    Program::from_effect(ConsoleEffect::ReadLine)
}

/// Writes `question`, then reads the answer.
pub fn prompt<S>(question: impl Into<String>) -> Program<S, String>
where
    S: Console + 'static,
{
    write_line(question).then(read_line())
}

/// Greets `name` on the console.
pub fn say_hello<S>(name: String) -> Program<S, ()>
where
    S: Console + 'static,
{
    write_line(format!("Hello {name}"))
}

/// Converts one captured console line to a decimal integer.
///
/// # Errors
///
/// [`EffectError::InvalidInput`] carrying the offending line; no silent
/// coercion happens anywhere.
pub fn parse_int(line: &str) -> Result<i32, EffectError> {
    line.trim().parse().map_err(|_| EffectError::InvalidInput {
        input: line.to_string(),
        expected: "a decimal integer",
    })
}

/// The process console: stdout for writes, stdin for reads.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdConsole;

impl StdConsole {
    /// Creates a new `StdConsole`.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Console for StdConsole {
    fn write_line(&mut self, line: &str) -> Result<(), EffectError> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{line}")?;
        stdout.flush()?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<String, EffectError> {
        let mut buffer = String::new();
        let bytes = io::stdin().lock().read_line(&mut buffer)?;
        if bytes == 0 {
            return Err(EffectError::Io {
                message: "unexpected end of input".to_string(),
            });
        }
        while buffer.ends_with('\n') || buffer.ends_with('\r') {
            buffer.pop();
        }
        Ok(buffer)
    }
}
