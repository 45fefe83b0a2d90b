//! Error types.

use serde::Serialize;

use crate::limits::LimitExceeded;
use crate::outcome::{ExpectedSet, Failure};
use crate::position::{LineCol, line_info_at};
use crate::printer::ParseErrorPrinter;

/// A failed parse, reported at the furthest position reached.
///
/// Displays as `expected 'x' at 0:3` or `expected one of 'a', 'b' at 0:3`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("expected {expected} at {location}")]
pub struct ParseError {
    pub expected: ExpectedSet,
    /// Byte offset into the input.
    pub position: usize,
    pub location: LineCol,
}

impl ParseError {
    /// Build an error from the top-level failure of a parse over `text`.
    pub fn from_failure(text: &str, failure: Failure) -> Self {
        let location = line_info_at(text, failure.furthest).unwrap_or_default();
        Self {
            expected: failure.expected,
            position: failure.furthest,
            location,
        }
    }

    pub fn printer<'e, 's>(&'e self, source: &'s str) -> ParseErrorPrinter<'e, 's> {
        ParseErrorPrinter::new(self, source)
    }

    /// Render the error with a source excerpt.
    pub fn render(&self, source: &str) -> String {
        self.printer(source).render()
    }
}

/// Errors that can occur while running a parser with fuel limits.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Execution fuel exhausted (too many parser invocations).
    #[error("execution limit exceeded")]
    ExecFuelExhausted,

    /// Recursion fuel exhausted (grammar recursed too deeply).
    #[error("recursion limit exceeded")]
    RecursionLimitExceeded,
}

impl From<LimitExceeded> for Error {
    fn from(limit: LimitExceeded) -> Self {
        match limit {
            LimitExceeded::ExecFuel => Error::ExecFuelExhausted,
            LimitExceeded::Recursion => Error::RecursionLimitExceeded,
        }
    }
}

/// Result type for limited parses.
pub type Result<T> = std::result::Result<T, Error>;

/// Invalid parser construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid regex `{pattern}`: {message}")]
    InvalidRegex { pattern: String, message: String },

    #[error("regex `{pattern}` has no capture group {group}")]
    UnknownGroup { pattern: String, group: String },

    #[error("choice requires at least one alternative")]
    EmptyChoice,

    #[error("sequence requires at least one parser")]
    EmptySequence,

    #[error("invalid repetition bounds: min {min} exceeds max {max}")]
    InvalidBounds { min: usize, max: usize },

    #[error("empty repetition range {start}..{end}")]
    EmptyRange { start: usize, end: usize },

    #[error("field `{0}` declared twice")]
    DuplicateField(String),
}

/// Invalid position passed to [`line_info_at`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PositionError {
    #[error("position {position} is past the end of a {len}-byte input")]
    OutOfBounds { position: usize, len: usize },

    #[error("position {position} is not on a char boundary")]
    NotCharBoundary { position: usize },
}
