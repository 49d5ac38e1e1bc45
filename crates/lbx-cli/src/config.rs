use std::{fs, path::Path};

use anyhow::Context;
use lbx_core::namespace::LabelNamespace;
use lbx_model::Labels;
use lbx_observe::{LoggerConfig, LoggerFormat, LoggerLevel};
use serde::{Deserialize, Serialize};

use crate::Cli;

/// Contents of the `--config` file. Every section is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    pub logger: LoggerConfig,
    pub namespace: LabelNamespace,
}

impl CliConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("invalid config file {}", path.display()))
    }

    /// Apply command-line overrides on top of the file values.
    pub fn merge(mut self, cli: &Cli) -> anyhow::Result<Self> {
        if let Some(level) = &cli.log_level {
            self.logger.level = LoggerLevel::new(level.as_str())?;
        }
        if let Some(format) = &cli.log_format {
            self.logger.format = format.parse::<LoggerFormat>()?;
        }
        if let Some(prefix) = &cli.namespace {
            self.namespace.prefix = prefix.clone();
        }
        if let Some(segment) = &cli.segment {
            self.namespace.segment = Some(segment.clone());
        }
        Ok(self)
    }
}

/// Reads a label set stored as a flat JSON object of strings.
pub fn load_labels(path: &Path) -> anyhow::Result<Labels> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read labels file {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("invalid labels file {}", path.display()))
}
