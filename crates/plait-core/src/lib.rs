//! Data model for plait parser combinators.
//!
//! This crate holds everything a parser touches at runtime that is not a
//! parser itself: the input and its session, positions, outcomes with
//! furthest-failure aggregation, line/column computation, errors, resource
//! limits and tracing. The combinators live in `plait-lib`.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

mod error;
mod input;
mod limits;
mod outcome;
mod position;
mod printer;
mod state;
mod trace;

#[cfg(test)]
mod error_tests;
#[cfg(test)]
mod position_tests;

pub use error::{ConfigError, Error, ParseError, PositionError, Result};
pub use input::{Input, Session, SharedTracer};
pub use limits::{FuelLimits, LimitExceeded};
pub use outcome::{ExpectedSet, Failure, Outcome, Success, merge_failures};
pub use position::{LineCol, line_info_at};
pub use printer::ParseErrorPrinter;
pub use state::ParseState;
pub use trace::{PrintTracer, Tracer, Verbosity};
