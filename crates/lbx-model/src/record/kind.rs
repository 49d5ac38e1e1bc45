use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of grouped record assembled from labels.
///
/// Used to tag diagnostics and errors with the extraction that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RecordKind {
    /// Named error page (`<ns>.frontend.errors.<name>.<field>`).
    ErrorPage,
    /// Named rate set (`<ns>.frontend.rateLimit.rateSet.<name>.<field>`).
    RateLimit,
}

impl RecordKind {
    /// Returns the kind as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::ErrorPage => "error page",
            RecordKind::RateLimit => "rate limit",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
