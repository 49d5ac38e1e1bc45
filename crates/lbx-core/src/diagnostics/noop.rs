use crate::diagnostics::{Diagnostic, DiagnosticsSink};

/// Sink that discards every diagnostic.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpDiagnostics;

impl DiagnosticsSink for NoOpDiagnostics {
    #[inline(always)]
    fn report(&self, _: Diagnostic) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noop_diagnostics_is_zero_size() {
        assert_eq!(std::mem::size_of::<NoOpDiagnostics>(), 0);
    }
}
