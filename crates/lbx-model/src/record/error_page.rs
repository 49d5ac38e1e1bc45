use std::{collections::BTreeMap, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

#[cfg(feature = "schema")]
use schemars::JsonSchema;

use crate::{
    GroupName, RecordKind,
    error::{ModelError, ModelResult},
};

/// Error pages keyed by page name.
pub type ErrorPages = BTreeMap<GroupName, ErrorPage>;

/// Custom error page served by a backend when the upstream answers with a matching status.
#[derive(Default, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct ErrorPage {
    /// Status matchers in label order (`"500"`, `"502-504"`, ...).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub status: Vec<String>,
    /// Backend that renders the page.
    #[serde(default)]
    pub backend: String,
    /// Path template requested from the backend (e.g. `/{status}.html`).
    #[serde(default)]
    pub query: String,
}

/// Field suffix accepted in an error page label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorPageField {
    /// `status`: comma separated status matchers.
    Status,
    /// `query`: path template.
    Query,
    /// `backend`: backend name.
    Backend,
}

impl ErrorPageField {
    /// Returns the label suffix for this field.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorPageField::Status => "status",
            ErrorPageField::Query => "query",
            ErrorPageField::Backend => "backend",
        }
    }
}

impl fmt::Display for ErrorPageField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ErrorPageField {
    type Err = ModelError;
    fn from_str(s: &str) -> ModelResult<Self> {
        match s {
            "status" => Ok(ErrorPageField::Status),
            "query" => Ok(ErrorPageField::Query),
            "backend" => Ok(ErrorPageField::Backend),
            other => Err(ModelError::UnknownField {
                kind: RecordKind::ErrorPage,
                field: other.to_string(),
            }),
        }
    }
}
