use std::sync::{Mutex, PoisonError};

use crate::diagnostics::{Diagnostic, DiagnosticsSink};

/// Sink that keeps every diagnostic in memory.
///
/// Useful for callers that surface label problems to users, and for tests.
#[derive(Debug, Default)]
pub struct CollectingDiagnostics {
    items: Mutex<Vec<Diagnostic>>,
}

impl CollectingDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything reported so far, in report order.
    pub fn snapshot(&self) -> Vec<Diagnostic> {
        self.items
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Drain everything reported so far.
    pub fn take(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.items.lock().unwrap_or_else(PoisonError::into_inner))
    }

    pub fn len(&self) -> usize {
        self.items
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DiagnosticsSink for CollectingDiagnostics {
    fn report(&self, diagnostic: Diagnostic) {
        self.items
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(diagnostic);
    }
}
