use lbx_model::{Labels, Rate, RateField, RateSet, RecordKind};

use crate::{
    decode::{parse_duration, parse_i64},
    diagnostics::DiagnosticsSink,
    error::DecodeError,
    extract::{GroupRecord, extract_groups},
    matcher::KeyPattern,
};

impl GroupRecord for Rate {
    type Field = RateField;
    const KIND: RecordKind = RecordKind::RateLimit;
    const SKIP_EMPTY_VALUES: bool = true;

    fn assign(&mut self, field: RateField, raw: &str) -> Result<(), DecodeError> {
        match field {
            RateField::Period => self.period = parse_duration(raw)?,
            RateField::Average => self.average = parse_i64(raw)?,
            RateField::Burst => self.burst = parse_i64(raw)?,
        }
        Ok(())
    }
}

/// Rate sets under `prefix`, keyed by limit name.
///
/// Labels with empty values are ignored.
pub fn parse_rate_sets(
    labels: &Labels,
    prefix: &str,
    pattern: &KeyPattern,
    sink: &dyn DiagnosticsSink,
) -> Option<RateSet> {
    extract_groups::<Rate>(labels, prefix, pattern, sink)
}
