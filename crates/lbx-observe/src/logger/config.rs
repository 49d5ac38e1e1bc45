use serde::{Deserialize, Serialize};
use std::io::IsTerminal;

use crate::logger::object::{LoggerFormat, LoggerLevel, LoggerTimeZone};

/// Logger configuration.
///
/// Every field is optional when deserializing; missing ones take their defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Output format.
    pub format: LoggerFormat,
    /// `EnvFilter` expression (e.g. `"info"`, `"lbx_core=trace,warn"`).
    pub level: LoggerLevel,
    /// Timezone of event timestamps.
    pub tz: LoggerTimeZone,
    /// Include the event target (module path) in each line.
    pub with_targets: bool,
    /// Allow ANSI colors in text output.
    pub use_color: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            format: LoggerFormat::default(),
            level: LoggerLevel::default(),
            tz: LoggerTimeZone::default(),
            with_targets: true,
            use_color: true,
        }
    }
}

impl LoggerConfig {
    /// Colors are used only when enabled in config and stderr is a terminal.
    ///
    /// Evaluated at logger initialization, so redirection is detected at that moment.
    pub fn should_use_color(&self) -> bool {
        self.use_color && std::io::stderr().is_terminal()
    }
}
