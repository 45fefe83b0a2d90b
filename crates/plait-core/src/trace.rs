//! Tracing infrastructure for debugging grammars.
//!
//! Parsers report events only at named boundaries: parsers wrapped with
//! `named` or `desc`, named forward references, and alternations that
//! backtrack. A parse without a tracer pays a single `Option` check per
//! boundary.

use crate::limits::LimitExceeded;
use crate::outcome::Failure;

/// Verbosity level for trace output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Verbosity {
    /// Enter, success and failure of named parsers.
    #[default]
    Default,
    /// Also backtracks and the labels of every failure.
    Verbose,
}

/// Tracer trait for parse instrumentation.
///
/// Each method is called at a specific point during parsing:
/// - `trace_enter` - before a named parser runs
/// - `trace_success` - after it succeeds
/// - `trace_failure` - after it fails
/// - `trace_backtrack` - when an alternation retries from a position
/// - `trace_limit` - when a fuel limit halts the parse
pub trait Tracer {
    fn trace_enter(&mut self, name: &str, pos: usize);

    fn trace_success(&mut self, name: &str, start: usize, next: usize);

    fn trace_failure(&mut self, name: &str, failure: &Failure);

    fn trace_backtrack(&mut self, pos: usize);

    fn trace_limit(&mut self, limit: LimitExceeded);
}

/// Tracer that collects human-readable lines.
#[derive(Debug, Default)]
pub struct PrintTracer {
    verbosity: Verbosity,
    depth: usize,
    lines: Vec<String>,
}

impl PrintTracer {
    pub fn new(verbosity: Verbosity) -> Self {
        Self {
            verbosity,
            depth: 0,
            lines: Vec::new(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn render(&self) -> String {
        self.lines.join("\n")
    }

    /// Print collected lines to stderr.
    pub fn print(&self) {
        for line in &self.lines {
            eprintln!("{line}");
        }
    }

    fn push(&mut self, line: String) {
        let indent = "  ".repeat(self.depth);
        self.lines.push(format!("{indent}{line}"));
    }
}

impl Tracer for PrintTracer {
    fn trace_enter(&mut self, name: &str, pos: usize) {
        self.push(format!("> {name} @{pos}"));
        self.depth += 1;
    }

    fn trace_success(&mut self, name: &str, start: usize, next: usize) {
        self.depth = self.depth.saturating_sub(1);
        self.push(format!("+ {name} {start}..{next}"));
    }

    fn trace_failure(&mut self, name: &str, failure: &Failure) {
        self.depth = self.depth.saturating_sub(1);
        if self.verbosity == Verbosity::Verbose {
            self.push(format!(
                "- {name} @{} expected {}",
                failure.furthest, failure.expected
            ));
        } else {
            self.push(format!("- {name}"));
        }
    }

    fn trace_backtrack(&mut self, pos: usize) {
        if self.verbosity == Verbosity::Verbose {
            self.push(format!("~ backtrack @{pos}"));
        }
    }

    fn trace_limit(&mut self, limit: LimitExceeded) {
        self.push(format!("! {limit}"));
    }
}
