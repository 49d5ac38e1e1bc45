mod labels;
pub use labels::Labels;

mod constants;
pub use constants::{
    BASE_FRONTEND_ERROR_PAGE, BASE_FRONTEND_RATE_LIMIT, DEFAULT_NAMESPACE,
    SUFFIX_RATE_LIMIT_EXTRACTOR_FUNC,
};

/// Name of one grouped sub-configuration (e.g. one error page, one rate set).
///
/// Taken verbatim from the label key segment between the kind prefix and the field suffix.
pub type GroupName = String;
