mod domain;
pub use domain::{GroupName, Labels};
pub use domain::{
    BASE_FRONTEND_ERROR_PAGE, BASE_FRONTEND_RATE_LIMIT, DEFAULT_NAMESPACE,
    SUFFIX_RATE_LIMIT_EXTRACTOR_FUNC,
};

mod error;
pub use error::{ModelError, ModelResult};

mod record;
pub use record::{
    ErrorPage, ErrorPageField, ErrorPages, FrontendConfig, Rate, RateField, RateLimit, RateSet,
    RecordKind,
};
