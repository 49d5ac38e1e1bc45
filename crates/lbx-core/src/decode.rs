//! Value decoders shared by grouped extraction and the accessor layer.
//!
//! Every decoder is pure and returns a [`DecodeError`] instead of guessing.
use std::time::Duration;

use crate::error::DecodeError;

/// Parses a duration label value.
///
/// A bare integer counts seconds (`"10"` is ten seconds). Anything else must be a
/// unit-suffixed duration understood by `humantime` (`"300ms"`, `"1m30s"`, `"2h"`).
pub fn parse_duration(raw: &str) -> Result<Duration, DecodeError> {
    if let Ok(secs) = raw.parse::<i64>() {
        return u64::try_from(secs)
            .map(Duration::from_secs)
            .map_err(|_| DecodeError::Duration(format!("negative duration {raw:?}")));
    }

    humantime::parse_duration(raw).map_err(|e| DecodeError::Duration(e.to_string()))
}

/// Parses a base-10 signed 64-bit integer. A leading sign is accepted.
pub fn parse_i64(raw: &str) -> Result<i64, DecodeError> {
    Ok(raw.parse::<i64>()?)
}

/// Parses a base-10 signed 32-bit integer. A leading sign is accepted.
pub fn parse_i32(raw: &str) -> Result<i32, DecodeError> {
    Ok(raw.parse::<i32>()?)
}

/// Parses a boolean using the spellings container tooling commonly emits.
///
/// Accepts `1 t T TRUE true True` and `0 f F FALSE false False`.
pub fn parse_bool(raw: &str) -> Result<bool, DecodeError> {
    match raw {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        other => Err(DecodeError::Bool(other.to_string())),
    }
}

/// Splits on `sep`, trims each piece and drops the empty ones. Order is kept, duplicates are not removed.
pub fn split_and_trim(raw: &str, sep: char) -> Vec<String> {
    raw.split(sep)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Canonical HTTP header spelling: first letter and every letter after `-` upper-cased, the rest lower-cased.
///
/// Keys containing characters that are not valid in a header name are returned unchanged.
pub fn canonical_header_key(key: &str) -> String {
    if key.is_empty() || !key.bytes().all(is_token_byte) {
        return key.to_string();
    }

    let mut upper = true;
    key.chars()
        .map(|c| {
            let out = if upper {
                c.to_ascii_uppercase()
            } else {
                c.to_ascii_lowercase()
            };
            upper = c == '-';
            out
        })
        .collect()
}

fn is_token_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b"!#$%&'*+-.^_`|~".contains(&b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_bare_integer_is_seconds() {
        assert_eq!(parse_duration("10").unwrap(), Duration::from_secs(10));
        assert_eq!(parse_duration("0").unwrap(), Duration::ZERO);
    }

    #[test]
    fn duration_with_units() {
        assert_eq!(parse_duration("300ms").unwrap(), Duration::from_millis(300));
        assert_eq!(parse_duration("3s").unwrap(), Duration::from_secs(3));
        assert_eq!(parse_duration("1m30s").unwrap(), Duration::from_secs(90));
        assert_eq!(parse_duration("2h").unwrap(), Duration::from_secs(7200));
    }

    #[test]
    fn duration_rejects_garbage_and_negatives() {
        for bad in ["", "bad", "s", "-5", "10 parsecs"] {
            let err = parse_duration(bad).unwrap_err();
            assert!(
                matches!(err, DecodeError::Duration(_)),
                "expected Duration error for {bad:?}, got {err:?}"
            );
        }
    }

    #[test]
    fn i64_accepts_sign_and_rejects_junk() {
        assert_eq!(parse_i64("100").unwrap(), 100);
        assert_eq!(parse_i64("+7").unwrap(), 7);
        assert_eq!(parse_i64("-3").unwrap(), -3);
        assert!(matches!(parse_i64("1.5"), Err(DecodeError::Integer(_))));
        assert!(matches!(parse_i64(""), Err(DecodeError::Integer(_))));
        assert!(matches!(parse_i64(" 1"), Err(DecodeError::Integer(_))));
    }

    #[test]
    fn i32_overflow_is_an_error() {
        assert_eq!(parse_i32("2147483647").unwrap(), i32::MAX);
        assert!(parse_i32("2147483648").is_err());
    }

    #[test]
    fn bool_spellings() {
        for t in ["1", "t", "T", "TRUE", "true", "True"] {
            assert!(parse_bool(t).unwrap(), "{t}");
        }
        for f in ["0", "f", "F", "FALSE", "false", "False"] {
            assert!(!parse_bool(f).unwrap(), "{f}");
        }
        assert_eq!(
            parse_bool("yes").unwrap_err(),
            DecodeError::Bool("yes".into())
        );
    }

    #[test]
    fn split_trims_keeps_order_and_duplicates() {
        assert_eq!(
            split_and_trim("500,502, 503", ','),
            vec!["500", "502", "503"]
        );
        assert_eq!(split_and_trim("b, a, b", ','), vec!["b", "a", "b"]);
        assert_eq!(split_and_trim(" , ,x,", ','), vec!["x"]);
        assert!(split_and_trim("", ',').is_empty());
    }

    #[test]
    fn header_keys_are_canonicalized() {
        assert_eq!(canonical_header_key("x-forwarded-for"), "X-Forwarded-For");
        assert_eq!(canonical_header_key("CONTENT-TYPE"), "Content-Type");
        assert_eq!(canonical_header_key("has space"), "has space");
        assert_eq!(canonical_header_key(""), "");
    }
}
