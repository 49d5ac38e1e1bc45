use std::{collections::BTreeMap, fmt, str::FromStr, time::Duration};

use serde::{Deserialize, Serialize};

#[cfg(feature = "schema")]
use schemars::JsonSchema;

use crate::{
    GroupName, RecordKind,
    error::{ModelError, ModelResult},
};

/// Rate sets keyed by limit name.
pub type RateSet = BTreeMap<GroupName, Rate>;

/// One token-bucket rate: `average` requests per `period`, allowing bursts up to `burst`.
///
/// Fields that could not be decoded from labels keep their zero value.
#[derive(Default, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct Rate {
    /// Window the average is measured over.
    #[serde(default, with = "humantime_serde")]
    #[cfg_attr(feature = "schema", schemars(with = "String"))]
    pub period: Duration,
    /// Allowed requests per period.
    #[serde(default)]
    pub average: i64,
    /// Maximum bucket size.
    #[serde(default)]
    pub burst: i64,
}

/// Field suffix accepted in a rate set label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RateField {
    Period,
    Average,
    Burst,
}

impl RateField {
    /// Returns the label suffix for this field.
    pub fn as_str(&self) -> &'static str {
        match self {
            RateField::Period => "period",
            RateField::Average => "average",
            RateField::Burst => "burst",
        }
    }
}

impl fmt::Display for RateField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RateField {
    type Err = ModelError;
    fn from_str(s: &str) -> ModelResult<Self> {
        match s {
            "period" => Ok(RateField::Period),
            "average" => Ok(RateField::Average),
            "burst" => Ok(RateField::Burst),
            other => Err(ModelError::UnknownField {
                kind: RecordKind::RateLimit,
                field: other.to_string(),
            }),
        }
    }
}

/// Frontend rate limiting configuration.
///
/// Only built when an extractor function is configured; `rate_set` stays `None`
/// when no rate set label was recognized.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct RateLimit {
    /// Request property used to bucket clients (e.g. `client.ip`, `request.host`).
    pub extractor_func: String,
    /// Named rates applied to every bucket.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate_set: Option<RateSet>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_suffixes() {
        assert_eq!("period".parse::<RateField>().unwrap(), RateField::Period);
        assert_eq!("average".parse::<RateField>().unwrap(), RateField::Average);
        assert_eq!("burst".parse::<RateField>().unwrap(), RateField::Burst);
    }

    #[test]
    fn rejects_unknown_suffix() {
        let err = "extractorFunc".parse::<RateField>().unwrap_err();
        assert_eq!(err.to_string(), "unknown rate limit field: extractorFunc");
    }

    #[test]
    fn default_rate_is_zero() {
        let rate = Rate::default();
        assert_eq!(rate.period, Duration::ZERO);
        assert_eq!(rate.average, 0);
        assert_eq!(rate.burst, 0);
    }

    #[test]
    fn period_serializes_as_human_duration() {
        let rate = Rate {
            period: Duration::from_secs(90),
            average: 100,
            burst: 200,
        };

        let json = serde_json::to_string(&rate).unwrap();
        assert!(json.contains("\"period\":\"1m 30s\""), "got {json}");

        let back: Rate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, rate);
    }

    #[test]
    fn rate_limit_omits_missing_rate_set() {
        let limit = RateLimit {
            extractor_func: "client.ip".into(),
            rate_set: None,
        };

        let json = serde_json::to_string(&limit).unwrap();
        assert_eq!(json, r#"{"extractorFunc":"client.ip"}"#);
    }
}
