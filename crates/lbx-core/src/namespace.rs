use lbx_model::{
    BASE_FRONTEND_ERROR_PAGE, BASE_FRONTEND_RATE_LIMIT, DEFAULT_NAMESPACE,
    SUFFIX_RATE_LIMIT_EXTRACTOR_FUNC,
};
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Leading key segments shared by every recognized label.
///
/// Keys are built as `<prefix>.` or, when a segment is set, `<prefix>.<segment>.`,
/// followed by the kind-specific fragment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelNamespace {
    /// Root namespace, may itself contain dots (e.g. `"com.example.proxy"`).
    pub prefix: String,
    /// Optional single-segment scope for labels of one named service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segment: Option<String>,
}

impl Default for LabelNamespace {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_NAMESPACE.to_string(),
            segment: None,
        }
    }
}

impl LabelNamespace {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            segment: None,
        }
    }

    /// Scope keys to one segment.
    pub fn with_segment(mut self, segment: impl Into<String>) -> Self {
        self.segment = Some(segment.into());
        self
    }

    /// Check that keys built from this namespace are well formed.
    pub fn validate(&self) -> CoreResult<()> {
        validate_part("prefix", &self.prefix)?;
        if let Some(segment) = &self.segment {
            validate_part("segment", segment)?;
            if segment.contains('.') {
                return Err(CoreError::InvalidNamespace(format!(
                    "segment must be a single key segment, got {segment:?}"
                )));
            }
        }
        Ok(())
    }

    /// Root of every key, ending with a dot.
    pub fn root(&self) -> String {
        match &self.segment {
            Some(segment) => format!("{}.{}.", self.prefix, segment),
            None => format!("{}.", self.prefix),
        }
    }

    /// Prefix of error page labels.
    pub fn error_page_prefix(&self) -> String {
        self.root() + BASE_FRONTEND_ERROR_PAGE
    }

    /// Prefix of rate set labels.
    pub fn rate_set_prefix(&self) -> String {
        self.root() + BASE_FRONTEND_RATE_LIMIT
    }

    /// Key of the label gating rate limit extraction.
    pub fn rate_limit_extractor_func_key(&self) -> String {
        self.root() + SUFFIX_RATE_LIMIT_EXTRACTOR_FUNC
    }
}

fn validate_part(what: &str, value: &str) -> CoreResult<()> {
    if value.is_empty() {
        return Err(CoreError::InvalidNamespace(format!("{what} is empty")));
    }
    if value.chars().any(char::is_whitespace) {
        return Err(CoreError::InvalidNamespace(format!(
            "{what} contains whitespace: {value:?}"
        )));
    }
    if value.starts_with('.') || value.ends_with('.') || value.contains("..") {
        return Err(CoreError::InvalidNamespace(format!(
            "{what} has an empty key segment: {value:?}"
        )));
    }
    Ok(())
}
