use tracing::{Level, error, warn};

use crate::diagnostics::{Diagnostic, DiagnosticsSink};

/// Sink that emits each diagnostic as a `tracing` event.
///
/// The offending label key is attached as the structured `key` field.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl DiagnosticsSink for TracingDiagnostics {
    fn report(&self, diagnostic: Diagnostic) {
        if diagnostic.level() == Level::WARN {
            warn!(key = diagnostic.key(), "{diagnostic}");
        } else {
            error!(key = diagnostic.key(), "{diagnostic}");
        }
    }
}
