//! Diagnostics sink for recovered lookup failures.

use crate::source::{FragmentTarget, LookupError};

/// Receives lookup failures that were recovered during descriptor
/// construction.
pub trait DiagnosticsSink: Send + Sync {
    fn lookup_failed(&self, target: &FragmentTarget<'_>, error: &LookupError);
}

/// Reports failures as `tracing` error events
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl DiagnosticsSink for TracingDiagnostics {
    fn lookup_failed(&self, target: &FragmentTarget<'_>, error: &LookupError) {
        tracing::error!(
            target: "route_template::lookup",
            element = %target,
            error = %error,
            "Route fragment lookup failed, treating fragment as absent"
        );
    }
}

/// Discards every failure
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentDiagnostics;

impl DiagnosticsSink for SilentDiagnostics {
    fn lookup_failed(&self, _target: &FragmentTarget<'_>, _error: &LookupError) {}
}
