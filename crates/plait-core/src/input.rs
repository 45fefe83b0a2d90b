//! The input buffer and the per-parse session state that travels with it.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use crate::limits::{FuelLimits, LimitExceeded};
use crate::state::ParseState;
use crate::trace::Tracer;

/// Shared handle to a tracer.
pub type SharedTracer = Rc<RefCell<dyn Tracer>>;

/// Mutable bookkeeping for one parse: remaining fuel, recursion depth, the
/// fatal limit error (if any) and the tracer.
///
/// A session belongs to exactly one parse and is never shared across threads.
pub struct Session {
    limits: FuelLimits,
    exec_fuel: Cell<Option<u32>>,
    depth: Cell<u32>,
    fatal: Cell<Option<LimitExceeded>>,
    tracer: Option<SharedTracer>,
}

impl Session {
    pub fn new(limits: FuelLimits) -> Self {
        Self {
            limits,
            exec_fuel: Cell::new(limits.exec_fuel),
            depth: Cell::new(0),
            fatal: Cell::new(None),
            tracer: None,
        }
    }

    pub fn with_tracer(mut self, tracer: SharedTracer) -> Self {
        self.tracer = Some(tracer);
        self
    }

    pub fn limits(&self) -> FuelLimits {
        self.limits
    }

    /// The limit that halted this parse, if any.
    pub fn fatal(&self) -> Option<LimitExceeded> {
        self.fatal.get()
    }

    pub fn is_halted(&self) -> bool {
        self.fatal.get().is_some()
    }

    /// Charge one unit of execution fuel.
    ///
    /// Returns `false` once the parse is halted, either now or earlier.
    pub fn consume_exec_fuel(&self) -> bool {
        if self.is_halted() {
            return false;
        }
        match self.exec_fuel.get() {
            None => true,
            Some(0) => {
                self.halt(LimitExceeded::ExecFuel);
                false
            }
            Some(remaining) => {
                self.exec_fuel.set(Some(remaining - 1));
                true
            }
        }
    }

    /// Fuel spent so far, when a budget is set.
    pub fn exec_fuel_consumed(&self) -> Option<u32> {
        let budget = self.limits.exec_fuel?;
        Some(budget - self.exec_fuel.get().unwrap_or(0))
    }

    /// Enter one level of recursion.
    ///
    /// Returns `false` (and halts) when the limit would be exceeded. The depth
    /// is only incremented on success; pair each `true` with
    /// [`exit_recursion`](Self::exit_recursion).
    pub fn enter_recursion(&self) -> bool {
        if self.is_halted() {
            return false;
        }
        let depth = self.depth.get();
        if let Some(limit) = self.limits.recursion_limit
            && depth >= limit
        {
            self.halt(LimitExceeded::Recursion);
            return false;
        }
        self.depth.set(depth + 1);
        true
    }

    pub fn exit_recursion(&self) {
        self.depth.set(self.depth.get().saturating_sub(1));
    }

    pub fn depth(&self) -> u32 {
        self.depth.get()
    }

    fn halt(&self, limit: LimitExceeded) {
        if self.fatal.get().is_none() {
            self.fatal.set(Some(limit));
            self.trace(|t| t.trace_limit(limit));
        }
    }

    pub fn is_tracing(&self) -> bool {
        self.tracer.is_some()
    }

    /// Run `f` against the tracer, if one is installed.
    pub fn trace(&self, f: impl FnOnce(&mut dyn Tracer)) {
        if let Some(tracer) = &self.tracer {
            f(&mut *tracer.borrow_mut());
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(FuelLimits::default())
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("limits", &self.limits)
            .field("exec_fuel", &self.exec_fuel.get())
            .field("depth", &self.depth.get())
            .field("fatal", &self.fatal.get())
            .field("tracing", &self.tracer.is_some())
            .finish()
    }
}

/// Immutable text being parsed, plus its session.
#[derive(Debug)]
pub struct Input<'src> {
    text: &'src str,
    session: Session,
}

impl<'src> Input<'src> {
    pub fn new(text: &'src str) -> Self {
        Self::with_session(text, Session::default())
    }

    pub fn with_session(text: &'src str, session: Session) -> Self {
        Self { text, session }
    }

    pub fn text(&self) -> &'src str {
        self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// State positioned at the start of the input.
    pub fn start(&self) -> ParseState<'_> {
        ParseState::start(self)
    }
}
