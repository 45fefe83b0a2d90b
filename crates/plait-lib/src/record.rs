//! Records assembled from named field parsers.
//!
//! Each field pairs a parser with a setter on the record type. The record is
//! parsed either with its fields in declaration order or with the fields in
//! any order, each exactly once.
//!
//! ```
//! use plait_lib::{Record, regex, whitespace};
//!
//! #[derive(Debug, Default, PartialEq)]
//! struct Person {
//!     name: String,
//!     age: u32,
//! }
//!
//! let person = Record::<Person>::new()
//!     .field("name", regex("[a-zA-Z]+").lexeme(), |p, name| p.name = name)
//!     .field("age", regex(r"\d+").map(|n| n.parse::<u32>().unwrap_or(0)).lexeme(), |p, age| p.age = age)
//!     .permutation();
//!
//! let parsed = person.parse("42 Ada").unwrap();
//! assert_eq!(parsed, Person { name: "Ada".into(), age: 42 });
//! ```

use std::sync::Arc;

use indexmap::IndexMap;
use plait_core::{ConfigError, ExpectedSet, Failure, Outcome, Success, merge_failures};

use crate::combinators::sequence;
use crate::invariants::ensure_config;
use crate::parser::Parser;

type Assign<B> = Box<dyn FnOnce(&mut B)>;

/// Builder for a record parser over `B`.
pub struct Record<B> {
    fields: IndexMap<String, Parser<Assign<B>>>,
}

impl<B: Default + 'static> Default for Record<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: Default + 'static> Record<B> {
    pub fn new() -> Self {
        Record {
            fields: IndexMap::new(),
        }
    }

    /// Add a field parsed by `parser` and stored by `setter`.
    ///
    /// # Panics
    ///
    /// If a field named `name` already exists.
    pub fn field<V: 'static>(
        self,
        name: impl Into<String>,
        parser: Parser<V>,
        setter: impl Fn(&mut B, V) + Send + Sync + 'static,
    ) -> Self {
        ensure_config(self.try_field(name, parser, setter))
    }

    pub fn try_field<V: 'static>(
        mut self,
        name: impl Into<String>,
        parser: Parser<V>,
        setter: impl Fn(&mut B, V) + Send + Sync + 'static,
    ) -> Result<Self, ConfigError> {
        let name = name.into();
        if self.fields.contains_key(&name) {
            return Err(ConfigError::DuplicateField(name));
        }

        let setter = Arc::new(setter);
        let assign = parser.map(move |value| -> Assign<B> {
            let setter = Arc::clone(&setter);
            Box::new(move |record: &mut B| setter(record, value))
        });
        self.fields.insert(name, assign);
        Ok(self)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.fields.keys().map(String::as_str)
    }

    /// Parse every field in declaration order.
    pub fn sequence(self) -> Parser<B> {
        if self.fields.is_empty() {
            return Parser::new(|state| state.success(B::default()));
        }
        sequence(self.fields.into_values().collect()).map(build)
    }

    /// Parse every field exactly once, in any order.
    ///
    /// At each position the remaining fields are tried in declaration
    /// order and the first that matches is taken.
    pub fn permutation(self) -> Parser<B> {
        let fields: Vec<Parser<Assign<B>>> = self.fields.into_values().collect();
        Parser::new(move |state| {
            let mut remaining: Vec<&Parser<Assign<B>>> = fields.iter().collect();
            let mut assigns = Vec::with_capacity(fields.len());
            let mut pos = state.pos();
            let mut furthest: Option<Failure> = None;

            while !remaining.is_empty() {
                let mut round = Failure {
                    furthest: pos,
                    expected: ExpectedSet::new(),
                };
                let mut matched = None;
                for (i, field) in remaining.iter().enumerate() {
                    match field.run(state.at(pos)) {
                        Outcome::Success(step) => {
                            matched = Some((i, step));
                            break;
                        }
                        Outcome::Failure(failure) => round = round.merge(failure),
                    }
                }

                let Some((i, step)) = matched else {
                    return Outcome::Failure(round).aggregate(furthest);
                };
                if !round.expected.is_empty() {
                    furthest = merge_failures(furthest, Some(round));
                }
                furthest = merge_failures(furthest, step.furthest);
                assigns.push(step.value);
                pos = step.next;
                remaining.remove(i);
            }

            Outcome::Success(Success {
                value: build(assigns),
                next: pos,
                furthest,
            })
        })
    }
}

fn build<B: Default>(assigns: Vec<Assign<B>>) -> B {
    let mut record = B::default();
    for assign in assigns {
        assign(&mut record);
    }
    record
}
