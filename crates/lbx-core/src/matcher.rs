//! Splitting of label keys into `(group, field)` pairs.
//!
//! A key is first filtered by a plain prefix (cheap reject for unrelated labels), then matched
//! against a two-capture [`KeyPattern`]. The result is a tagged [`KeyMatch`]; reporting is left
//! to the caller.
use std::fmt;

use regex::Regex;

use crate::error::{CoreError, CoreResult};

/// Compiled pattern splitting a label key into a group name and a field name.
///
/// Well-formed patterns have exactly two capture groups: group name first, field name second.
/// Patterns with any other shape are accepted but make every candidate key [`KeyMatch::Malformed`].
#[derive(Debug, Clone)]
pub struct KeyPattern(Regex);

impl KeyPattern {
    /// Compile an arbitrary pattern.
    pub fn new(expr: &str) -> CoreResult<Self> {
        Regex::new(expr)
            .map(Self)
            .map_err(|e| CoreError::InvalidPattern(e.to_string()))
    }

    /// Standard pattern for keys shaped `<prefix><group>.<field>`.
    ///
    /// Group and field are single key segments: no dots and no spaces.
    pub fn for_prefix(prefix: &str) -> CoreResult<Self> {
        Self::new(&format!(
            r"^{}(?P<name>[^ .]+)\.(?P<field>[^ .]+)$",
            regex::escape(prefix)
        ))
    }

    /// The source expression.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for KeyPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of matching one label key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyMatch<'a> {
    /// Key does not carry the prefix. Not a candidate, nothing to report.
    NoMatch,
    /// Key carries the prefix but did not split into exactly two captures.
    ///
    /// `captures` holds the whole match followed by every capture group
    /// (empty strings for groups that did not participate), or nothing if the pattern did not match.
    Malformed { captures: Vec<String> },
    /// Key split cleanly.
    Matched { group: &'a str, field: &'a str },
}

/// Match a single key against `prefix` and `pattern`.
pub fn match_key<'a>(key: &'a str, prefix: &str, pattern: &KeyPattern) -> KeyMatch<'a> {
    if !key.starts_with(prefix) {
        return KeyMatch::NoMatch;
    }

    let Some(caps) = pattern.0.captures(key) else {
        return KeyMatch::Malformed {
            captures: Vec::new(),
        };
    };

    // Slot 0 is the whole match.
    if caps.len() == 3 {
        if let (Some(group), Some(field)) = (caps.get(1), caps.get(2)) {
            return KeyMatch::Matched {
                group: group.as_str(),
                field: field.as_str(),
            };
        }
    }

    KeyMatch::Malformed {
        captures: caps
            .iter()
            .map(|m| m.map(|m| m.as_str().to_string()).unwrap_or_default())
            .collect(),
    }
}
