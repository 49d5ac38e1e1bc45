//! Well-known label key fragments.
//!
//! Full keys are assembled at runtime from a namespace (and optional segment)
//! followed by one of the fragments below, e.g. `traefik.` + [`BASE_FRONTEND_ERROR_PAGE`].

/// Namespace used when none is configured.
pub const DEFAULT_NAMESPACE: &str = "traefik";

/// Key fragment preceding `<page>.<field>` for error page labels.
pub const BASE_FRONTEND_ERROR_PAGE: &str = "frontend.errors.";

/// Key fragment preceding `<limit>.<field>` for rate limit labels.
pub const BASE_FRONTEND_RATE_LIMIT: &str = "frontend.rateLimit.rateSet.";

/// Key fragment of the label that must be set for any rate limit to be built.
///
/// It sits outside [`BASE_FRONTEND_RATE_LIMIT`], so it is never mistaken for a rate set field.
pub const SUFFIX_RATE_LIMIT_EXTRACTOR_FUNC: &str = "frontend.rateLimit.extractorFunc";
