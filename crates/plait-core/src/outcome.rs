//! Parse outcomes and furthest-failure aggregation.
//!
//! Every parser invocation yields an [`Outcome`]. Successes carry the value,
//! the next position and the deepest failure seen while producing them;
//! failures carry only the deepest failure. Combinators fold outcomes together
//! with [`Outcome::aggregate`] so the failure reported at the top names every
//! alternative that was viable at the single deepest position reached.

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use serde::{Serialize, Serializer};

/// Expectation labels recorded at a single input position.
///
/// Labels are kept sorted so rendering is deterministic.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ExpectedSet {
    labels: BTreeSet<Arc<str>>,
}

impl ExpectedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct a set holding one label.
    pub fn single(label: impl Into<Arc<str>>) -> Self {
        let mut labels = BTreeSet::new();
        labels.insert(label.into());
        Self { labels }
    }

    pub fn insert(&mut self, label: impl Into<Arc<str>>) {
        self.labels.insert(label.into());
    }

    pub fn union(mut self, other: ExpectedSet) -> Self {
        self.labels.extend(other.labels);
        self
    }

    pub fn contains(&self, label: &str) -> bool {
        self.labels.contains(label)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Labels in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.labels.iter().map(|label| &**label)
    }
}

impl<S: Into<Arc<str>>> FromIterator<S> for ExpectedSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            labels: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl fmt::Display for ExpectedSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut labels = self.iter();
        let Some(first) = labels.next() else {
            return f.write_str("<unreported>");
        };
        if self.labels.len() == 1 {
            return write!(f, "'{first}'");
        }
        write!(f, "one of '{first}'")?;
        for label in labels {
            write!(f, ", '{label}'")?;
        }
        Ok(())
    }
}

impl Serialize for ExpectedSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

/// The deepest point a parse attempt reached before failing.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Failure {
    /// Byte offset of the deepest failure.
    pub furthest: usize,
    /// Everything that would have been accepted at `furthest`.
    pub expected: ExpectedSet,
}

impl Failure {
    pub fn new(position: usize, label: impl Into<Arc<str>>) -> Self {
        Self {
            furthest: position,
            expected: ExpectedSet::single(label),
        }
    }

    /// Keep the deeper failure; on a tie, union the labels.
    pub fn merge(self, other: Failure) -> Failure {
        match self.furthest.cmp(&other.furthest) {
            Ordering::Greater => self,
            Ordering::Less => other,
            Ordering::Equal => Failure {
                furthest: self.furthest,
                expected: self.expected.union(other.expected),
            },
        }
    }
}

/// Merge two optional failure contexts.
pub fn merge_failures(a: Option<Failure>, b: Option<Failure>) -> Option<Failure> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.merge(b)),
        (a, None) => a,
        (None, b) => b,
    }
}

/// A successful parse step.
#[derive(Clone, Debug, PartialEq)]
pub struct Success<T> {
    pub value: T,
    /// Position where parsing continues.
    pub next: usize,
    /// Deepest failure encountered on the way, if any.
    pub furthest: Option<Failure>,
}

/// Result of running a parser at one position.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome<T> {
    Success(Success<T>),
    Failure(Failure),
}

impl<T> Outcome<T> {
    pub fn success(next: usize, value: T) -> Self {
        Outcome::Success(Success {
            value,
            next,
            furthest: None,
        })
    }

    pub fn failure(position: usize, label: impl Into<Arc<str>>) -> Self {
        Outcome::Failure(Failure::new(position, label))
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Outcome::Success(success) => Some(&success.value),
            Outcome::Failure(_) => None,
        }
    }

    /// Position after a success.
    pub fn next(&self) -> Option<usize> {
        match self {
            Outcome::Success(success) => Some(success.next),
            Outcome::Failure(_) => None,
        }
    }

    /// The failure context: the failure itself, or the deepest failure a
    /// success passed over.
    pub fn furthest(&self) -> Option<&Failure> {
        match self {
            Outcome::Success(success) => success.furthest.as_ref(),
            Outcome::Failure(failure) => Some(failure),
        }
    }

    pub fn into_furthest(self) -> Option<Failure> {
        match self {
            Outcome::Success(success) => success.furthest,
            Outcome::Failure(failure) => Some(failure),
        }
    }

    /// Fold a prior failure context into this outcome.
    ///
    /// The deeper failure wins; failures at the same position union their
    /// labels. Success or failure status is never changed.
    pub fn aggregate(self, other: Option<Failure>) -> Self {
        let Some(other) = other else {
            return self;
        };
        match self {
            Outcome::Success(mut success) => {
                success.furthest = merge_failures(success.furthest, Some(other));
                Outcome::Success(success)
            }
            Outcome::Failure(failure) => Outcome::Failure(failure.merge(other)),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Outcome::Success(Success {
                value,
                next,
                furthest,
            }) => Outcome::Success(Success {
                value: f(value),
                next,
                furthest,
            }),
            Outcome::Failure(failure) => Outcome::Failure(failure),
        }
    }

    pub fn into_result(self) -> Result<Success<T>, Failure> {
        match self {
            Outcome::Success(success) => Ok(success),
            Outcome::Failure(failure) => Err(failure),
        }
    }
}

impl<T> From<Failure> for Outcome<T> {
    fn from(failure: Failure) -> Self {
        Outcome::Failure(failure)
    }
}
