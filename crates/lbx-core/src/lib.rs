pub mod accessor;
pub mod decode;
pub mod diagnostics;
pub mod error;
pub mod extract;
pub mod extractor;
pub mod matcher;
pub mod namespace;

pub mod prelude {
    pub use crate::accessor::LabelReader;
    pub use crate::diagnostics::{Diagnostic, DiagnosticsHandle, DiagnosticsSink};
    pub use crate::error::{CoreError, DecodeError};
    pub use crate::extract::{GroupRecord, extract_groups, parse_error_pages, parse_rate_sets};
    pub use crate::extractor::Extractor;
    pub use crate::matcher::{KeyMatch, KeyPattern, match_key};
    pub use crate::namespace::LabelNamespace;
}
