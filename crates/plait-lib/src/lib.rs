//! Plait: composable parser combinators with backtracking and
//! furthest-failure error reporting.
//!
//! # Example
//!
//! ```
//! use plait_lib::{regex, string};
//!
//! let number = regex(r"-?\d+").map(|n| n.parse::<i64>().unwrap_or_default());
//! let list = string("[") >> number.sep_by(string(",").lexeme()) << string("]");
//!
//! assert_eq!(list.parse("[1, 2, 3]").unwrap(), vec![1, 2, 3]);
//!
//! let err = list.parse("[1, x]").unwrap_err();
//! assert_eq!(err.to_string(), r"expected '-?\d+' at 0:4");
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

mod combinators;
mod forward;
mod invariants;
mod ops;
mod parser;
mod primitives;
mod record;
mod regex;
mod runner;
mod stateful;
mod tuples;

#[cfg(test)]
mod parser_tests;
#[cfg(test)]
mod primitives_tests;
#[cfg(test)]
mod record_tests;
#[cfg(test)]
mod regex_tests;
#[cfg(test)]
mod tuples_tests;

pub use combinators::{choice, sequence, try_choice, try_sequence};
pub use forward::{Forward, lazy, recursive};
pub use ops::{Concat, RepeatBounds};
pub use parser::Parser;
pub use primitives::{
    any_char, char_from, decimal_digit, digit, eof, fail, from_variants, index, letter,
    line_info, padding, string, string_from, string_with, success, test_char, try_string_from,
    whitespace,
};
pub use record::Record;
pub use regex::{
    Group, Regex, RegexFlags, compiled_regex, regex, regex_group, regex_groups, regex_with,
    try_regex, try_regex_group, try_regex_groups, try_regex_with,
};
pub use runner::Runner;
pub use stateful::{Cursor, stateful};
pub use tuples::{Append, TupleFn};

pub use plait_core::{
    ConfigError, Error, ExpectedSet, Failure, FuelLimits, Input, LimitExceeded, LineCol,
    Outcome, ParseError, ParseErrorPrinter, ParseState, PositionError, PrintTracer, Result,
    Session, SharedTracer, Success, Tracer, Verbosity, line_info_at,
};
