mod kind;
pub use kind::RecordKind;

mod error_page;
pub use error_page::{ErrorPage, ErrorPageField, ErrorPages};

mod rate;
pub use rate::{Rate, RateField, RateLimit, RateSet};

mod frontend;
pub use frontend::FrontendConfig;
