use std::{fmt, str::FromStr, sync::OnceLock};

use serde::{Deserialize, Serialize};
use time::{OffsetDateTime, UtcOffset, format_description::well_known::Rfc3339};
use tracing_subscriber::fmt::{format::Writer, time::FormatTime};

use crate::logger::error::LoggerError;

/// Local offset, detected once per process.
static LOCAL_OFFSET: OnceLock<UtcOffset> = OnceLock::new();

/// Timezone of log timestamps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoggerTimeZone {
    #[default]
    Utc,
    /// System timezone; see [`init_local_offset`].
    Local,
}

impl FromStr for LoggerTimeZone {
    type Err = LoggerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "utc" => Ok(Self::Utc),
            "local" => Ok(Self::Local),
            _ => Err(LoggerError::InvalidTimeZone(s.to_string())),
        }
    }
}

impl fmt::Display for LoggerTimeZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LoggerTimeZone::Utc => "utc",
            LoggerTimeZone::Local => "local",
        })
    }
}

/// Detects and caches the local UTC offset.
///
/// Offset detection is unreliable once other threads exist on most Unix platforms,
/// so call this at the top of `main()`. Falls back to UTC if detection fails.
pub fn init_local_offset() -> UtcOffset {
    *LOCAL_OFFSET.get_or_init(|| UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC))
}

/// RFC 3339 timestamp formatter for `tracing-subscriber`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggerClock {
    tz: LoggerTimeZone,
}

impl LoggerClock {
    pub fn new(tz: LoggerTimeZone) -> Self {
        Self { tz }
    }

    fn offset(&self) -> UtcOffset {
        match self.tz {
            LoggerTimeZone::Utc => UtcOffset::UTC,
            LoggerTimeZone::Local => init_local_offset(),
        }
    }

    fn stamp(&self, at: OffsetDateTime) -> String {
        at.to_offset(self.offset())
            .format(&Rfc3339)
            .unwrap_or_else(|_| "<invalid-time>".to_string())
    }
}

impl FormatTime for LoggerClock {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        write!(w, "{} ", self.stamp(OffsetDateTime::now_utc()))
    }
}
