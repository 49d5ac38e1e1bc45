//! Diagnostics reporting for label extraction.
//!
//! Extraction never fails as a whole: malformed keys, unknown fields and undecodable values are reported
//! through a [`DiagnosticsSink`] and skipped. Sinks (tracing, in-memory, no-op) are injected by the caller.
mod backend;
pub use backend::{DiagnosticsHandle, DiagnosticsSink};

mod collect;
pub use collect::CollectingDiagnostics;

mod noop;
pub use noop::NoOpDiagnostics;

mod log;
pub use log::TracingDiagnostics;

use std::sync::Arc;

use tracing::Level;
use lbx_model::RecordKind;
use thiserror::Error;

/// A problem found in one label, reported instead of aborting extraction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Diagnostic {
    /// Key carries the kind prefix but does not split into exactly `<group>.<field>`.
    #[error("invalid {kind} label: {key}, sub-match: {captures:?}")]
    MalformedKey {
        kind: RecordKind,
        key: String,
        captures: Vec<String>,
    },

    /// Key splits correctly but the field suffix is not one the kind knows.
    #[error("invalid {kind} label: {key}")]
    UnknownField { kind: RecordKind, key: String },

    /// Field is recognized but its value does not decode; the field keeps its default.
    #[error("unable to parse {key:?}: {value:?}. {reason}")]
    DecodeFailed {
        key: String,
        value: String,
        reason: String,
    },

    /// Single-label read failed to decode; the caller's default is used instead.
    #[error("unable to parse {key:?}: {value:?}, falling back to {fallback}. {reason}")]
    Fallback {
        key: String,
        value: String,
        fallback: String,
        reason: String,
    },

    /// One `name:value` entry of a map label could not be split.
    #[error("could not load {key:?}: {entry:?}, skipping")]
    MapEntrySkipped { key: String, entry: String },

    /// A deprecated label name is in use.
    #[error("deprecated configuration found: {deprecated}. Please use {current}.")]
    Deprecated { deprecated: String, current: String },
}

impl Diagnostic {
    /// Label key the diagnostic is about.
    pub fn key(&self) -> &str {
        match self {
            Diagnostic::MalformedKey { key, .. }
            | Diagnostic::UnknownField { key, .. }
            | Diagnostic::DecodeFailed { key, .. }
            | Diagnostic::Fallback { key, .. }
            | Diagnostic::MapEntrySkipped { key, .. } => key,
            Diagnostic::Deprecated { deprecated, .. } => deprecated,
        }
    }

    /// Severity used when the diagnostic is logged.
    pub fn level(&self) -> Level {
        match self {
            Diagnostic::MapEntrySkipped { .. } | Diagnostic::Deprecated { .. } => Level::WARN,
            _ => Level::ERROR,
        }
    }
}

/// Create a handle that logs diagnostics through `tracing`.
#[inline]
pub fn tracing_diagnostics() -> DiagnosticsHandle {
    Arc::new(TracingDiagnostics)
}

/// Create a handle that drops every diagnostic.
#[inline]
pub fn noop_diagnostics() -> DiagnosticsHandle {
    Arc::new(NoOpDiagnostics)
}
