use std::sync::Arc;

use super::Diagnostic;

/// Destination for extraction diagnostics.
///
/// Implementations must not influence extraction results; a sink only observes.
/// Handles are shared across threads, so implementations are `Send + Sync`.
pub trait DiagnosticsSink: Send + Sync + 'static {
    /// Record one diagnostic.
    ///
    /// Called once per offending label, in label iteration order.
    fn report(&self, diagnostic: Diagnostic);
}

/// Shared handle to a diagnostics sink.
pub type DiagnosticsHandle = Arc<dyn DiagnosticsSink>;
