//! Parse positions.

use std::fmt;
use std::sync::Arc;

use crate::input::{Input, Session};
use crate::outcome::Outcome;
use crate::position::{LineCol, line_info_at};

/// A position in an [`Input`].
///
/// States are cheap to copy; advancing produces a new state and never
/// mutates the input. The position is a byte offset on a char boundary and
/// never exceeds the input length.
#[derive(Clone, Copy)]
pub struct ParseState<'a> {
    input: &'a Input<'a>,
    pos: usize,
}

impl<'a> ParseState<'a> {
    pub fn start(input: &'a Input<'a>) -> Self {
        Self { input, pos: 0 }
    }

    /// The same input at another position.
    pub fn at(self, pos: usize) -> Self {
        debug_assert!(
            pos <= self.input.len() && self.input.text().is_char_boundary(pos),
            "position {pos} is not a char boundary of a {}-byte input",
            self.input.len()
        );
        Self { pos, ..self }
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn input(&self) -> &'a Input<'a> {
        self.input
    }

    pub fn session(&self) -> &'a Session {
        self.input.session()
    }

    /// The whole input text.
    pub fn text(&self) -> &'a str {
        self.input.text()
    }

    /// Text from the current position to the end.
    pub fn rest(&self) -> &'a str {
        &self.input.text()[self.pos..]
    }

    pub fn is_eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    pub fn peek_char(&self) -> Option<char> {
        self.rest().chars().next()
    }

    pub fn line_col(&self) -> LineCol {
        line_info_at(self.text(), self.pos).unwrap_or_default()
    }

    /// Zero-width success at this position.
    pub fn success<T>(&self, value: T) -> Outcome<T> {
        Outcome::success(self.pos, value)
    }

    /// Failure at this position.
    pub fn failure<T>(&self, label: impl Into<Arc<str>>) -> Outcome<T> {
        Outcome::failure(self.pos, label)
    }
}

impl fmt::Debug for ParseState<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rest: String = self.rest().chars().take(16).collect();
        f.debug_struct("ParseState")
            .field("pos", &self.pos)
            .field("rest", &rest)
            .finish()
    }
}
