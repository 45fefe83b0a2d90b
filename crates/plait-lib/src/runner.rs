//! Parsing with fuel limits and tracing.

use std::rc::Rc;

use plait_core::{FuelLimits, Input, Outcome, Result, Session, SharedTracer, Success};

use crate::parser::{Parser, finish};
use crate::primitives::eof;

/// Builder for limited, optionally traced parses.
///
/// ```
/// use plait_lib::{Error, Runner, string};
///
/// let many_a = string("a").many();
/// let runner = Runner::new().exec_fuel(10);
///
/// assert!(runner.parse(&many_a, "aaa").is_ok());
/// assert!(matches!(runner.parse(&many_a, &"a".repeat(100)), Err(Error::ExecFuelExhausted)));
/// ```
#[derive(Default)]
pub struct Runner {
    limits: FuelLimits,
    tracer: Option<SharedTracer>,
}

impl Runner {
    /// Create a runner with no limits and no tracer.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn limits(mut self, limits: FuelLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Set the execution fuel limit.
    pub fn exec_fuel(mut self, fuel: u32) -> Self {
        self.limits = self.limits.exec_fuel(fuel);
        self
    }

    /// Set the recursion limit.
    pub fn recursion_limit(mut self, limit: u32) -> Self {
        self.limits = self.limits.recursion_limit(limit);
        self
    }

    /// Install a tracer for every parse run by this runner.
    pub fn tracer(mut self, tracer: SharedTracer) -> Self {
        self.tracer = Some(tracer);
        self
    }

    /// Parse all of `text`.
    pub fn parse<T: 'static>(&self, parser: &Parser<T>, text: &str) -> Result<T> {
        let input = self.input(text);
        let outcome = parser.clone().skip(eof()).run(input.start());
        Self::finish(&input, outcome).map(|success| success.value)
    }

    /// Parse the longest prefix of `text`.
    pub fn parse_partial<'s, T: 'static>(
        &self,
        parser: &Parser<T>,
        text: &'s str,
    ) -> Result<(T, &'s str)> {
        let input = self.input(text);
        let success = Self::finish(&input, parser.run(input.start()))?;
        Ok((success.value, &text[success.next..]))
    }

    fn input<'s>(&self, text: &'s str) -> Input<'s> {
        let mut session = Session::new(self.limits);
        if let Some(tracer) = &self.tracer {
            session = session.with_tracer(Rc::clone(tracer));
        }
        Input::with_session(text, session)
    }

    fn finish<T>(input: &Input<'_>, outcome: Outcome<T>) -> Result<Success<T>> {
        if let Some(limit) = input.session().fatal() {
            return Err(limit.into());
        }
        Ok(finish(input.text(), outcome)?)
    }
}
