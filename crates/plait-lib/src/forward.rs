//! Forward references for recursive grammars.
//!
//! A [`Forward`] is declared first, referenced while the grammar is built,
//! and defined once the real parser exists. The reference resolves at parse
//! time, so grammars may refer to themselves or to peers defined later.
//! Left recursion is not supported: a forward reference reached again at the
//! same position without consuming input recurses until the recursion limit
//! (or the stack) runs out.
//!
//! A defined grammar that refers to itself keeps itself alive; grammars are
//! meant to be built once and reused.

use std::sync::{Arc, OnceLock};

use plait_core::Session;

use crate::invariants::{forward_redefined, undefined_forward};
use crate::parser::{HALTED, Parser, traced};

/// A parser declared now and defined later.
pub struct Forward<T> {
    cell: Arc<OnceLock<Parser<T>>>,
    name: Option<Arc<str>>,
}

impl<T> Clone for Forward<T> {
    fn clone(&self) -> Self {
        Forward {
            cell: Arc::clone(&self.cell),
            name: self.name.clone(),
        }
    }
}

impl<T: 'static> Default for Forward<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: 'static> Forward<T> {
    pub fn new() -> Self {
        Forward {
            cell: Arc::new(OnceLock::new()),
            name: None,
        }
    }

    /// A forward reference reported to the tracer under `name`.
    pub fn named(name: impl Into<Arc<str>>) -> Self {
        Forward {
            cell: Arc::new(OnceLock::new()),
            name: Some(name.into()),
        }
    }

    /// A parser that runs whatever this reference is defined as.
    ///
    /// # Panics
    ///
    /// When invoked before [`define`](Self::define).
    pub fn parser(&self) -> Parser<T> {
        let cell = Arc::clone(&self.cell);
        let name = self.name.clone();
        Parser::new(move |state| {
            let session = state.session();
            if !session.enter_recursion() {
                return state.failure(HALTED);
            }
            let _depth = DepthGuard(session);

            let Some(parser) = cell.get() else {
                undefined_forward(name.as_deref());
            };
            match &name {
                Some(name) => traced(name, state, |state| parser.run(state)),
                None => parser.run(state),
            }
        })
    }

    /// # Panics
    ///
    /// If already defined.
    pub fn define(&self, parser: Parser<T>) {
        if self.cell.set(parser).is_err() {
            forward_redefined(self.name.as_deref());
        }
    }

    pub fn is_defined(&self) -> bool {
        self.cell.get().is_some()
    }
}

struct DepthGuard<'a>(&'a Session);

impl Drop for DepthGuard<'_> {
    fn drop(&mut self) {
        self.0.exit_recursion();
    }
}

/// Build a self-referential parser.
///
/// `f` receives a reference to the parser it is building.
pub fn recursive<T: 'static>(f: impl FnOnce(Parser<T>) -> Parser<T>) -> Parser<T> {
    let forward = Forward::new();
    let parser = f(forward.parser());
    forward.define(parser.clone());
    parser
}

/// A parser built by `f` on first use.
///
/// Lets grammar functions refer to each other (or themselves) without
/// building the whole graph eagerly.
pub fn lazy<T: 'static>(f: impl Fn() -> Parser<T> + Send + Sync + 'static) -> Parser<T> {
    let cell = OnceLock::new();
    Parser::new(move |state| {
        let session = state.session();
        if !session.enter_recursion() {
            return state.failure(HALTED);
        }
        let _depth = DepthGuard(session);

        cell.get_or_init(&f).run(state)
    })
}
