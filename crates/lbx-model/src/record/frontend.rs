use serde::{Deserialize, Serialize};

#[cfg(feature = "schema")]
use schemars::JsonSchema;

use crate::{ErrorPages, RateLimit};

/// Grouped frontend configuration decoded from one label set.
///
/// Each part is `None` when the corresponding feature is not configured by any label.
#[derive(Default, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct FrontendConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_pages: Option<ErrorPages>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate_limit: Option<RateLimit>,
}

impl FrontendConfig {
    /// Returns `true` if neither error pages nor a rate limit were found.
    pub fn is_empty(&self) -> bool {
        self.error_pages.is_none() && self.rate_limit.is_none()
    }
}
