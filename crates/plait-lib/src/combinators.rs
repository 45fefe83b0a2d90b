//! The combinator algebra.
//!
//! Every combinator threads the furthest failure of each attempt it makes
//! into its own outcome, successful or not, so the failure reported at the
//! top of a parse names everything viable at the deepest point reached.

use std::sync::Arc;

use plait_core::{ConfigError, Failure, Outcome, Success, merge_failures};

use crate::invariants::ensure_config;
use crate::parser::{Parser, traced};
use crate::primitives::padding;

/// Marks repetition without an upper bound.
const UNBOUNDED: usize = usize::MAX;

impl<T: 'static> Parser<T> {
    /// Transform the value of a success.
    pub fn map<U: 'static>(self, f: impl Fn(T) -> U + Send + Sync + 'static) -> Parser<U> {
        Parser::new(move |state| self.run(state).map(&f))
    }

    /// Replace the value of a success.
    pub fn to<U>(self, value: U) -> Parser<U>
    where
        U: Clone + Send + Sync + 'static,
    {
        self.map(move |_| value.clone())
    }

    /// Choose the next parser from the value of this one.
    pub fn bind<U: 'static>(
        self,
        f: impl Fn(T) -> Parser<U> + Send + Sync + 'static,
    ) -> Parser<U> {
        Parser::new(move |state| match self.run(state) {
            Outcome::Success(first) => f(first.value)
                .run(state.at(first.next))
                .aggregate(first.furthest),
            Outcome::Failure(failure) => failure.into(),
        })
    }

    /// Run `self` then `other`, keeping `other`'s value.
    pub fn then<U: 'static>(self, other: Parser<U>) -> Parser<U> {
        Parser::new(move |state| match self.run(state) {
            Outcome::Success(first) => other.run(state.at(first.next)).aggregate(first.furthest),
            Outcome::Failure(failure) => failure.into(),
        })
    }

    /// Run `self` then `other`, keeping `self`'s value.
    pub fn skip<U: 'static>(self, other: Parser<U>) -> Parser<T> {
        Parser::new(move |state| match self.run(state) {
            Outcome::Success(first) => other
                .run(state.at(first.next))
                .aggregate(first.furthest)
                .map(|_| first.value),
            Outcome::Failure(failure) => failure.into(),
        })
    }

    /// Run `self` then `other`, keeping both values.
    pub fn pair<U: 'static>(self, other: Parser<U>) -> Parser<(T, U)> {
        Parser::new(move |state| match self.run(state) {
            Outcome::Success(first) => other
                .run(state.at(first.next))
                .aggregate(first.furthest)
                .map(|second| (first.value, second)),
            Outcome::Failure(failure) => failure.into(),
        })
    }

    /// Ordered choice: `other` is tried from the same position only if
    /// `self` fails.
    pub fn or(self, other: Parser<T>) -> Parser<T> {
        Parser::new(move |state| match self.run(state) {
            Outcome::Failure(failure) => {
                state.session().trace(|t| t.trace_backtrack(state.pos()));
                other.run(state).aggregate(Some(failure))
            }
            success => success,
        })
    }

    /// Exactly `n` repetitions.
    pub fn times(self, n: usize) -> Parser<Vec<T>> {
        self.repeat(n, n)
    }

    /// Between `min` and `max` repetitions, greedily.
    ///
    /// # Panics
    ///
    /// If `min > max`.
    pub fn times_between(self, min: usize, max: usize) -> Parser<Vec<T>> {
        ensure_config(self.try_times_between(min, max))
    }

    pub fn try_times_between(self, min: usize, max: usize) -> Result<Parser<Vec<T>>, ConfigError> {
        check_bounds(min, max)?;
        Ok(self.repeat(min, max))
    }

    /// Zero or more repetitions.
    pub fn many(self) -> Parser<Vec<T>> {
        self.repeat(0, UNBOUNDED)
    }

    pub fn at_least(self, n: usize) -> Parser<Vec<T>> {
        self.repeat(n, UNBOUNDED)
    }

    pub fn at_most(self, n: usize) -> Parser<Vec<T>> {
        self.repeat(0, n)
    }

    pub(crate) fn repeat(self, min: usize, max: usize) -> Parser<Vec<T>> {
        Parser::new(move |state| {
            let mut values = Vec::new();
            let mut pos = state.pos();
            let mut furthest: Option<Failure> = None;

            while values.len() < max {
                match self.run(state.at(pos)) {
                    Outcome::Success(step) => {
                        let stalled = step.next == pos;
                        furthest = merge_failures(furthest, step.furthest);
                        values.push(step.value);
                        pos = step.next;
                        // a zero-width item would repeat forever
                        if stalled && max == UNBOUNDED && values.len() >= min {
                            break;
                        }
                    }
                    Outcome::Failure(failure) => {
                        if values.len() < min {
                            return Outcome::Failure(failure).aggregate(furthest);
                        }
                        furthest = merge_failures(furthest, Some(failure));
                        break;
                    }
                }
            }

            Outcome::Success(Success {
                value: values,
                next: pos,
                furthest,
            })
        })
    }

    /// Zero or one occurrence.
    pub fn optional(self) -> Parser<Option<T>> {
        Parser::new(move |state| match self.run(state) {
            Outcome::Failure(failure) => state.success(None).aggregate(Some(failure)),
            success => success.map(Some),
        })
    }

    /// Zero or one occurrence, substituting `default` when absent.
    pub fn optional_or(self, default: T) -> Parser<T>
    where
        T: Clone + Send + Sync,
    {
        self.optional()
            .map(move |value| value.unwrap_or_else(|| default.clone()))
    }

    /// Repeat `self` until `other` matches, without consuming `other`.
    ///
    /// `other` is tried before every item. The parse fails when more than
    /// `max` items would be needed, or when an item fails before `min`
    /// items were read.
    ///
    /// # Panics
    ///
    /// If `min > max`.
    pub fn until<U: 'static>(self, other: Parser<U>, min: usize, max: usize) -> Parser<Vec<T>> {
        ensure_config(check_bounds(min, max));
        self.scan_until(other, min, max, false)
            .map(|(values, _)| values)
    }

    /// Like [`until`](Self::until), but consumes the terminator and returns
    /// it with the items.
    pub fn until_consuming<U: 'static>(
        self,
        other: Parser<U>,
        min: usize,
        max: usize,
    ) -> Parser<(Vec<T>, U)> {
        ensure_config(check_bounds(min, max));
        self.scan_until(other, min, max, true)
    }

    fn scan_until<U: 'static>(
        self,
        other: Parser<U>,
        min: usize,
        max: usize,
        consume: bool,
    ) -> Parser<(Vec<T>, U)> {
        Parser::new(move |state| {
            let mut values = Vec::new();
            let mut pos = state.pos();
            let mut furthest: Option<Failure> = None;

            loop {
                let (ended, terminator_context) = match other.run(state.at(pos)) {
                    Outcome::Success(end) if values.len() >= min => {
                        let (next, furthest) = if consume {
                            (end.next, merge_failures(furthest, end.furthest))
                        } else {
                            (pos, furthest)
                        };
                        return Outcome::Success(Success {
                            value: (values, end.value),
                            next,
                            furthest,
                        });
                    }
                    outcome => (outcome.is_success(), outcome.into_furthest()),
                };

                if values.len() >= max {
                    return state.at(pos).failure(format!("at most {max} items"));
                }

                match self.run(state.at(pos)) {
                    Outcome::Success(step) => {
                        let stalled = step.next == pos;
                        furthest = merge_failures(furthest, step.furthest);
                        values.push(step.value);
                        pos = step.next;
                        // a terminator that already matched only waits for `min`
                        if stalled
                            && max == UNBOUNDED
                            && !ended
                            && let Some(failure) = terminator_context
                        {
                            return Outcome::Failure(failure).aggregate(furthest);
                        }
                    }
                    Outcome::Failure(failure) if values.len() >= min => {
                        return Outcome::Failure(failure)
                            .aggregate(merge_failures(terminator_context, furthest));
                    }
                    Outcome::Failure(_) => {
                        let got = values.len();
                        return state
                            .at(pos)
                            .failure(format!("at least {min} items; got {got} item(s)"));
                    }
                }
            }
        })
    }

    /// Zero or more items separated by `sep`.
    pub fn sep_by<S: 'static>(self, sep: Parser<S>) -> Parser<Vec<T>> {
        self.sep_by_between(sep, 0, UNBOUNDED)
    }

    /// Between `min` and `max` items separated by `sep`. Leading and
    /// trailing separators are not consumed.
    ///
    /// # Panics
    ///
    /// If `min > max`.
    pub fn sep_by_between<S: 'static>(self, sep: Parser<S>, min: usize, max: usize) -> Parser<Vec<T>> {
        ensure_config(check_bounds(min, max));
        if max == 0 {
            return empty_list();
        }

        let rest_max = if max == UNBOUNDED { UNBOUNDED } else { max - 1 };
        let rest = sep.then(self.clone()).repeat(min.saturating_sub(1), rest_max);
        let items = self.pair(rest).map(|(first, mut rest)| {
            rest.insert(0, first);
            rest
        });

        if min == 0 { items.or(empty_list()) } else { items }
    }

    /// On failure, report `label` at the starting position instead of the
    /// labels of the inner parsers.
    pub fn desc(self, label: impl Into<Arc<str>>) -> Parser<T> {
        let label: Arc<str> = label.into();
        Parser::new(move |state| {
            traced(&label, state, |state| match self.run(state) {
                Outcome::Failure(_) => state.failure(label.clone()),
                success => success,
            })
        })
    }

    /// Negative lookahead: succeed without consuming input exactly when
    /// `self` fails, yielding that failure.
    pub fn should_fail(self, label: impl Into<Arc<str>>) -> Parser<Failure> {
        let label: Arc<str> = label.into();
        Parser::new(move |state| match self.run(state) {
            Outcome::Success(_) => state.failure(label.clone()),
            Outcome::Failure(failure) => state.success(failure),
        })
    }

    /// Positive lookahead: succeed without consuming input.
    pub fn peek(self) -> Parser<T> {
        Parser::new(move |state| match self.run(state) {
            Outcome::Success(success) => state.success(success.value),
            failure => failure,
        })
    }

    pub fn list(self) -> Parser<Vec<T>> {
        self.map(|value| vec![value])
    }

    pub fn tuple(self) -> Parser<(T,)> {
        self.map(|value| (value,))
    }

    /// One item per key, each paired with its key in order.
    pub fn zip<K>(self, keys: Vec<K>) -> Parser<Vec<(K, T)>>
    where
        K: Clone + Send + Sync + 'static,
    {
        let n = keys.len();
        self.times(n)
            .map(move |values| keys.iter().cloned().zip(values).collect())
    }

    /// Join a list of string-like items.
    pub fn concat<I>(self) -> Parser<String>
    where
        T: IntoIterator<Item = I>,
        String: FromIterator<I>,
    {
        self.map(|items| items.into_iter().collect())
    }

    /// Consume trailing whitespace.
    pub fn lexeme(self) -> Parser<T> {
        self.skip(padding())
    }

    /// Consume trailing `trivia`.
    pub fn lexeme_with<S: 'static>(self, trivia: Parser<S>) -> Parser<T> {
        self.skip(trivia)
    }
}

/// Run every parser in order, collecting their values.
///
/// # Panics
///
/// If `parsers` is empty.
pub fn sequence<T: 'static>(parsers: Vec<Parser<T>>) -> Parser<Vec<T>> {
    ensure_config(try_sequence(parsers))
}

pub fn try_sequence<T: 'static>(parsers: Vec<Parser<T>>) -> Result<Parser<Vec<T>>, ConfigError> {
    if parsers.is_empty() {
        return Err(ConfigError::EmptySequence);
    }

    Ok(Parser::new(move |state| {
        let mut values = Vec::with_capacity(parsers.len());
        let mut pos = state.pos();
        let mut furthest: Option<Failure> = None;

        for parser in &parsers {
            match parser.run(state.at(pos)) {
                Outcome::Success(step) => {
                    furthest = merge_failures(furthest, step.furthest);
                    values.push(step.value);
                    pos = step.next;
                }
                Outcome::Failure(failure) => return Outcome::Failure(failure).aggregate(furthest),
            }
        }

        Outcome::Success(Success {
            value: values,
            next: pos,
            furthest,
        })
    }))
}

/// Ordered choice over `parsers`; the first success wins.
///
/// # Panics
///
/// If `parsers` is empty.
pub fn choice<T: 'static>(parsers: Vec<Parser<T>>) -> Parser<T> {
    ensure_config(try_choice(parsers))
}

pub fn try_choice<T: 'static>(parsers: Vec<Parser<T>>) -> Result<Parser<T>, ConfigError> {
    parsers
        .into_iter()
        .reduce(Parser::or)
        .ok_or(ConfigError::EmptyChoice)
}

pub(crate) fn check_bounds(min: usize, max: usize) -> Result<(), ConfigError> {
    if min > max {
        return Err(ConfigError::InvalidBounds { min, max });
    }
    Ok(())
}

fn empty_list<T: 'static>() -> Parser<Vec<T>> {
    Parser::new(|state| state.success(Vec::new()))
}
