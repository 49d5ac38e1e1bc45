//! Typed reads of single labels.
//!
//! A label counts as set only when its value is non-empty. Values that fail to decode fall back to the
//! caller's default and are reported through the sink.
use std::{collections::BTreeMap, fmt::Display};

use lbx_model::Labels;

use crate::{
    decode::{canonical_header_key, parse_bool, parse_i32, parse_i64, split_and_trim},
    diagnostics::{Diagnostic, DiagnosticsSink},
    error::DecodeError,
};

const MAP_ENTRY_SEPARATOR: &str = "||";
const MAP_KEY_VALUE_SEPARATOR: char = ':';
const LIST_SEPARATOR: char = ',';

/// Read-only view over a label set that reports decode problems to a sink.
#[derive(Clone, Copy)]
pub struct LabelReader<'a> {
    labels: &'a Labels,
    sink: &'a dyn DiagnosticsSink,
}

impl<'a> LabelReader<'a> {
    pub fn new(labels: &'a Labels, sink: &'a dyn DiagnosticsSink) -> Self {
        Self { labels, sink }
    }

    /// Underlying label set.
    pub fn labels(&self) -> &'a Labels {
        self.labels
    }

    /// Value of `key` if present and non-empty.
    fn value(&self, key: &str) -> Option<&'a str> {
        self.labels.get(key).filter(|v| !v.is_empty())
    }

    /// `true` if `key` is present with a non-empty value.
    pub fn has(&self, key: &str) -> bool {
        self.value(key).is_some()
    }

    /// `true` if some key starting with `prefix` has a non-empty value.
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.labels.with_prefix(prefix).any(|(_, v)| !v.is_empty())
    }

    /// Value of `key`, or `default` when unset.
    pub fn string(&self, key: &str, default: &str) -> String {
        self.value(key).unwrap_or(default).to_string()
    }

    /// Boolean value of `key`, or `default` when unset or undecodable.
    pub fn bool(&self, key: &str, default: bool) -> bool {
        self.decode_or(key, default, parse_bool)
    }

    /// 32-bit integer value of `key`, or `default` when unset or undecodable.
    pub fn int(&self, key: &str, default: i32) -> i32 {
        self.decode_or(key, default, parse_i32)
    }

    /// 64-bit integer value of `key`, or `default` when unset or undecodable.
    pub fn int64(&self, key: &str, default: i64) -> i64 {
        self.decode_or(key, default, parse_i64)
    }

    /// Comma separated list stored in `key`, trimmed, empty items dropped.
    pub fn slice(&self, key: &str) -> Vec<String> {
        self.value(key)
            .map(|v| split_and_trim(v, LIST_SEPARATOR))
            .unwrap_or_default()
    }

    /// Map stored in `key` as `Name1:value1||Name2:value2`.
    ///
    /// Names are trimmed and canonicalized as HTTP header names, values are trimmed.
    /// Entries without a `:` are reported and skipped; `None` if no entry survives.
    pub fn map(&self, key: &str) -> Option<BTreeMap<String, String>> {
        let raw = self.value(key)?;

        let mut out = BTreeMap::new();
        for entry in raw.split(MAP_ENTRY_SEPARATOR) {
            match entry.split_once(MAP_KEY_VALUE_SEPARATOR) {
                Some((name, value)) => {
                    out.insert(
                        canonical_header_key(name.trim()),
                        value.trim().to_string(),
                    );
                }
                None => self.sink.report(Diagnostic::MapEntrySkipped {
                    key: key.to_string(),
                    entry: entry.to_string(),
                }),
            }
        }

        (!out.is_empty()).then_some(out)
    }

    /// Resolve a label that was renamed.
    ///
    /// Reports every use of `deprecated`. The `current` key wins when both are set.
    pub fn resolve_alias(&self, current: &str, deprecated: &str) -> Option<&'a str> {
        if self.labels.get(deprecated).is_some() {
            self.sink.report(Diagnostic::Deprecated {
                deprecated: deprecated.to_string(),
                current: current.to_string(),
            });
        }

        self.value(current).or_else(|| self.value(deprecated))
    }

    fn decode_or<T, F>(&self, key: &str, default: T, decode: F) -> T
    where
        T: Display,
        F: FnOnce(&str) -> Result<T, DecodeError>,
    {
        let Some(raw) = self.value(key) else {
            return default;
        };

        decode(raw).unwrap_or_else(|e| {
            self.sink.report(Diagnostic::Fallback {
                key: key.to_string(),
                value: raw.to_string(),
                fallback: default.to_string(),
                reason: e.to_string(),
            });
            default
        })
    }
}
