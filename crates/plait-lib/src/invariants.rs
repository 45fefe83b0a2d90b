//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use plait_core::ConfigError;

/// Unwrap a construction result, panicking on misuse.
pub(crate) fn ensure_config<T>(result: Result<T, ConfigError>) -> T {
    result.unwrap_or_else(|err| panic!("invalid parser: {err}"))
}

pub(crate) fn undefined_forward(name: Option<&str>) -> ! {
    match name {
        Some(name) => panic!("forward parser `{name}` invoked before it was defined"),
        None => panic!("forward parser invoked before it was defined"),
    }
}

pub(crate) fn forward_redefined(name: Option<&str>) -> ! {
    match name {
        Some(name) => panic!("forward parser `{name}` defined twice"),
        None => panic!("forward parser defined twice"),
    }
}
