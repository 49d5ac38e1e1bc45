use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, info};

use lbx_core::{diagnostics::tracing_diagnostics, extractor::Extractor};
use lbx_observe::{LoggerTimeZone, init_local_offset, init_logger};

mod config;

use config::{CliConfig, load_labels};

/// Assemble grouped frontend configuration from a label set.
#[derive(Debug, Parser)]
#[command(name = "lbx", version)]
struct Cli {
    /// JSON object of label keys to values
    #[arg(short, long)]
    labels: PathBuf,

    /// JSON config file with `logger` and `namespace` sections
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Root label namespace (default: traefik)
    #[arg(short, long)]
    namespace: Option<String>,

    /// Only read labels scoped to this segment
    #[arg(short, long)]
    segment: Option<String>,

    /// Log filter, e.g. `info` or `lbx_core=debug,warn`
    #[arg(long)]
    log_level: Option<String>,

    /// Log format (text, json, journald)
    #[arg(long)]
    log_format: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // 1) config
    let file = match &cli.config {
        Some(path) => CliConfig::load(path)?,
        None => CliConfig::default(),
    };
    let cfg = file.merge(&cli)?;

    // 2) logger
    if cfg.logger.tz == LoggerTimeZone::Local {
        init_local_offset();
    }
    init_logger(&cfg.logger)?;
    debug!(namespace = %cfg.namespace.root(), "logger initialized");

    // 3) labels
    let labels = load_labels(&cli.labels)?;
    info!(path = %cli.labels.display(), count = labels.len(), "labels loaded");

    // 4) extraction
    let extractor = Extractor::new(cfg.namespace, tracing_diagnostics())
        .context("invalid label namespace")?;
    let frontend = extractor.frontend(&labels);

    println!("{}", serde_json::to_string_pretty(&frontend)?);
    Ok(())
}
