//! Resource limits for a single parse.

/// Fuel limits for parsing.
///
/// Both limits default to unlimited. Execution fuel is consumed once per
/// parser invocation; the recursion limit bounds how deeply forward
/// references may nest.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FuelLimits {
    /// Maximum parser invocations.
    pub(crate) exec_fuel: Option<u32>,
    /// Maximum nesting of forward references.
    pub(crate) recursion_limit: Option<u32>,
}

impl FuelLimits {
    /// Create new fuel limits with no bounds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the execution fuel limit.
    pub fn exec_fuel(mut self, fuel: u32) -> Self {
        self.exec_fuel = Some(fuel);
        self
    }

    /// Set the recursion limit.
    pub fn recursion_limit(mut self, limit: u32) -> Self {
        self.recursion_limit = Some(limit);
        self
    }

    pub fn get_exec_fuel(&self) -> Option<u32> {
        self.exec_fuel
    }
    pub fn get_recursion_limit(&self) -> Option<u32> {
        self.recursion_limit
    }
}

/// Which limit halted a parse.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LimitExceeded {
    #[error("execution limit exceeded")]
    ExecFuel,

    #[error("recursion limit exceeded")]
    Recursion,
}
