//! Grouped extraction: folding a flat label set into named multi-field records.
//!
//! [`extract_groups`] drives [`match_key`] over every label, lazily creates one record per group name
//! and hands each recognized field to [`GroupRecord::assign`]. Every failure stays local to its label.
mod error_page;
pub use error_page::parse_error_pages;

mod rate;
pub use rate::parse_rate_sets;

use std::{collections::BTreeMap, str::FromStr};

use lbx_model::{GroupName, Labels, ModelError, RecordKind};
use tracing::{debug, instrument, trace};

use crate::{
    diagnostics::{Diagnostic, DiagnosticsSink},
    error::DecodeError,
    matcher::{KeyMatch, KeyPattern, match_key},
};

/// Record type assembled by grouped extraction.
pub trait GroupRecord: Default {
    /// Closed set of field suffixes this record accepts.
    type Field: FromStr<Err = ModelError> + Copy;

    /// Kind reported in diagnostics.
    const KIND: RecordKind;

    /// Skip labels with an empty value before matching, without reporting them.
    const SKIP_EMPTY_VALUES: bool = false;

    /// Decode `raw` and store it in `field`.
    ///
    /// On error the record must be left untouched.
    fn assign(&mut self, field: Self::Field, raw: &str) -> Result<(), DecodeError>;
}

/// Extract every group of `R` found under `prefix`.
///
/// Returns `None` when no group was created, never an empty map.
#[instrument(level = "trace", skip_all, fields(kind = R::KIND.as_str(), prefix = %prefix))]
pub fn extract_groups<R: GroupRecord>(
    labels: &Labels,
    prefix: &str,
    pattern: &KeyPattern,
    sink: &dyn DiagnosticsSink,
) -> Option<BTreeMap<GroupName, R>> {
    let mut groups: Option<BTreeMap<GroupName, R>> = None;

    for (key, raw) in labels.iter() {
        if R::SKIP_EMPTY_VALUES && raw.is_empty() {
            continue;
        }

        let (group, field) = match match_key(key, prefix, pattern) {
            KeyMatch::NoMatch => continue,
            KeyMatch::Malformed { captures } => {
                sink.report(Diagnostic::MalformedKey {
                    kind: R::KIND,
                    key: key.to_string(),
                    captures,
                });
                continue;
            }
            KeyMatch::Matched { group, field } => (group, field),
        };

        let Ok(field) = field.parse::<R::Field>() else {
            sink.report(Diagnostic::UnknownField {
                kind: R::KIND,
                key: key.to_string(),
            });
            continue;
        };

        let record = groups
            .get_or_insert_with(BTreeMap::new)
            .entry(group.to_string())
            .or_default();

        match record.assign(field, raw) {
            Ok(()) => trace!(key, group, "label applied"),
            Err(e) => sink.report(Diagnostic::DecodeFailed {
                key: key.to_string(),
                value: raw.to_string(),
                reason: e.to_string(),
            }),
        }
    }

    if let Some(found) = &groups {
        debug!(groups = found.len(), "grouped labels extracted");
    }
    groups
}
