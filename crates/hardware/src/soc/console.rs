//! Console devices for trap services.
//!
//! The print and read-integer trap services talk to a [`Console`]. Two
//! implementations are provided: [`StdConsole`] on the host's standard
//! streams, and [`BufferConsole`], which replays scripted input and captures
//! output in memory.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use crate::common::SimError;

/// Character I/O used by trap services.
pub trait Console {
    /// Writes `s` to the console output.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Console`] if the output cannot be written.
    fn write_str(&mut self, s: &str) -> Result<(), SimError>;

    /// Reads one line of input, without the trailing newline.
    ///
    /// Returns `Ok(None)` at end of input.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Console`] if the input cannot be read.
    fn read_line(&mut self) -> Result<Option<String>, SimError>;
}

/// Console on the host's stdin/stdout.
#[derive(Debug, Default)]
pub struct StdConsole;

impl StdConsole {
    /// Creates a console on the standard streams.
    pub const fn new() -> Self {
        Self
    }
}

impl Console for StdConsole {
    fn write_str(&mut self, s: &str) -> Result<(), SimError> {
        let mut out = io::stdout().lock();
        out.write_all(s.as_bytes())
            .and_then(|()| out.flush())
            .map_err(|e| SimError::Console(e.to_string()))
    }

    fn read_line(&mut self) -> Result<Option<String>, SimError> {
        let mut line = String::new();
        let n = io::stdin()
            .lock()
            .read_line(&mut line)
            .map_err(|e| SimError::Console(e.to_string()))?;
        if n == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_owned()))
    }
}

/// In-memory console with scripted input.
///
/// # Examples
///
/// ```
/// use mipsim_core::soc::console::{BufferConsole, Console};
///
/// let mut console = BufferConsole::with_input(["42"]);
/// console.write_str("? ").unwrap();
/// assert_eq!(console.read_line().unwrap().as_deref(), Some("42"));
/// assert_eq!(console.read_line().unwrap(), None);
/// assert_eq!(console.output(), "? ");
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BufferConsole {
    input: VecDeque<String>,
    output: String,
}

impl BufferConsole {
    /// Creates a console with no input.
    pub const fn new() -> Self {
        Self {
            input: VecDeque::new(),
            output: String::new(),
        }
    }

    /// Creates a console that will answer reads with `lines`, in order.
    pub fn with_input<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: lines.into_iter().map(Into::into).collect(),
            output: String::new(),
        }
    }

    /// Everything written so far.
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Queues another line of input.
    pub fn push_input(&mut self, line: impl Into<String>) {
        self.input.push_back(line.into());
    }
}

impl Console for BufferConsole {
    fn write_str(&mut self, s: &str) -> Result<(), SimError> {
        self.output.push_str(s);
        Ok(())
    }

    fn read_line(&mut self) -> Result<Option<String>, SimError> {
        Ok(self.input.pop_front())
    }
}
