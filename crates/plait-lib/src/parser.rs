//! The `Parser` value and its entry points.

use std::fmt;
use std::sync::Arc;

use plait_core::{Input, Outcome, ParseError, ParseState, Success};

use crate::primitives::eof;

type ParseFn<T> = Arc<dyn for<'a> Fn(ParseState<'a>) -> Outcome<T> + Send + Sync>;

/// A parser producing values of type `T`.
///
/// Parsers are immutable and cheap to clone; every combinator builds a new
/// parser around its children. Parsing holds no state outside the
/// [`ParseState`] chain of a single call, so a parser may be shared freely
/// between threads.
pub struct Parser<T> {
    parse_fn: ParseFn<T>,
}

impl<T> Clone for Parser<T> {
    fn clone(&self) -> Self {
        Parser {
            parse_fn: Arc::clone(&self.parse_fn),
        }
    }
}

impl<T> fmt::Debug for Parser<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Parser")
            .field("output", &std::any::type_name::<T>())
            .finish_non_exhaustive()
    }
}

impl<T: 'static> Parser<T> {
    /// Wrap a parse function.
    ///
    /// The function must not report a success position before the state it
    /// was given, nor a failure position before it.
    pub fn new(f: impl for<'a> Fn(ParseState<'a>) -> Outcome<T> + Send + Sync + 'static) -> Self {
        Parser {
            parse_fn: Arc::new(f),
        }
    }

    /// Run at `state`, charging one unit of execution fuel.
    ///
    /// Once the session is halted by a fuel limit every invocation fails
    /// immediately.
    pub fn run(&self, state: ParseState<'_>) -> Outcome<T> {
        if !state.session().consume_exec_fuel() {
            return state.failure(HALTED);
        }
        (self.parse_fn)(state)
    }

    /// Parse all of `text`.
    ///
    /// Fails unless the parser consumes the input to its end.
    pub fn parse(&self, text: &str) -> Result<T, ParseError> {
        let input = Input::new(text);
        let outcome = self.clone().skip(eof()).run(input.start());
        finish(text, outcome).map(|success| success.value)
    }

    /// Parse the longest prefix of `text` this parser accepts.
    ///
    /// Returns the value and the unconsumed remainder.
    pub fn parse_partial<'s>(&self, text: &'s str) -> Result<(T, &'s str), ParseError> {
        let input = Input::new(text);
        let success = finish(text, self.run(input.start()))?;
        Ok((success.value, &text[success.next..]))
    }

    /// Report enter/success/failure of this parser to the session tracer.
    pub fn named(self, name: impl Into<Arc<str>>) -> Parser<T> {
        let name: Arc<str> = name.into();
        Parser::new(move |state| traced(&name, state, |state| self.run(state)))
    }
}

/// Label of the failure returned after a fuel limit halts the parse.
pub(crate) const HALTED: &str = "<halted>";

pub(crate) fn finish<T>(text: &str, outcome: Outcome<T>) -> Result<Success<T>, ParseError> {
    outcome
        .into_result()
        .map_err(|failure| ParseError::from_failure(text, failure))
}

/// Run `f` at `state`, reporting it to the tracer under `name`.
pub(crate) fn traced<'a, T>(
    name: &str,
    state: ParseState<'a>,
    f: impl FnOnce(ParseState<'a>) -> Outcome<T>,
) -> Outcome<T> {
    let session = state.session();
    if !session.is_tracing() {
        return f(state);
    }

    session.trace(|t| t.trace_enter(name, state.pos()));
    let outcome = f(state);
    match &outcome {
        Outcome::Success(success) => {
            session.trace(|t| t.trace_success(name, state.pos(), success.next))
        }
        Outcome::Failure(failure) => session.trace(|t| t.trace_failure(name, failure)),
    }
    outcome
}
