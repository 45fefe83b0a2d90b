//! Parsers written as ordinary code.
//!
//! ```
//! use plait_lib::{regex, stateful, string};
//!
//! let number = regex(r"\d+").map(|n| n.parse::<u32>().unwrap_or_default());
//! let range = stateful(move |cursor| {
//!     let low = cursor.apply(&number)?;
//!     cursor.apply(&string(".."))?;
//!     let high = cursor.apply(&number)?;
//!     if high < low {
//!         return cursor.fail("an ascending range");
//!     }
//!     Ok(low..=high)
//! });
//!
//! assert_eq!(range.parse("3..7").unwrap(), 3..=7);
//! assert!(range.parse("7..3").is_err());
//! ```

use std::sync::Arc;

use plait_core::{Failure, Outcome, ParseState, Success};

use crate::parser::Parser;

/// Threads a position through a sequence of [`apply`](Cursor::apply) calls.
pub struct Cursor<'a> {
    state: ParseState<'a>,
    furthest: Option<Failure>,
}

impl<'a> Cursor<'a> {
    /// Run `parser` at the current position and advance past it.
    ///
    /// Errors carry the furthest failure of this and every earlier call.
    pub fn apply<T: 'static>(&mut self, parser: &Parser<T>) -> Result<T, Failure> {
        match parser.run(self.state).aggregate(self.furthest.take()) {
            Outcome::Success(step) => {
                self.state = self.state.at(step.next);
                self.furthest = step.furthest;
                Ok(step.value)
            }
            Outcome::Failure(failure) => Err(failure),
        }
    }

    /// Fail at the current position with `label`.
    pub fn fail<T>(&mut self, label: impl Into<Arc<str>>) -> Result<T, Failure> {
        let failure = Failure::new(self.state.pos(), label);
        Err(match self.furthest.take() {
            Some(furthest) => failure.merge(furthest),
            None => failure,
        })
    }

    pub fn pos(&self) -> usize {
        self.state.pos()
    }

    pub fn state(&self) -> ParseState<'a> {
        self.state
    }
}

/// Build a parser from a function that drives a [`Cursor`].
///
/// Early exit with `?` on the first failed `apply` returns that failure
/// from the parser.
pub fn stateful<T: 'static>(
    f: impl for<'a> Fn(&mut Cursor<'a>) -> Result<T, Failure> + Send + Sync + 'static,
) -> Parser<T> {
    Parser::new(move |state| {
        let mut cursor = Cursor {
            state,
            furthest: None,
        };
        match f(&mut cursor) {
            Ok(value) => Outcome::Success(Success {
                value,
                next: cursor.state.pos(),
                furthest: cursor.furthest,
            }),
            Err(failure) => Outcome::Failure(failure),
        }
    })
}
