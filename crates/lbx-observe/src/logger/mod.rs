mod config;
mod error;
mod init;
mod object;

pub use config::LoggerConfig;
pub use error::{LoggerError, LoggerResult};
pub use object::{LoggerClock, LoggerFormat, LoggerLevel, LoggerTimeZone, init_local_offset};

/// Installs the global tracing subscriber described by `cfg`.
///
/// Call once per process; a second call returns [`LoggerError::AlreadyInitialized`].
///
/// With [`LoggerTimeZone::Local`], call [`init_local_offset`] first, before any thread is spawned,
/// otherwise timestamps may fall back to UTC.
///
/// # Examples
/// ```rust
/// use lbx_observe::{LoggerConfig, init_logger};
///
/// let config = LoggerConfig::default();
/// init_logger(&config).expect("logger");
///
/// tracing::info!("logger ready");
/// ```
pub fn init_logger(cfg: &LoggerConfig) -> LoggerResult<()> {
    match cfg.format {
        LoggerFormat::Text => init::text(cfg),
        LoggerFormat::Json => init::json(cfg),
        LoggerFormat::Journald => init::journald(cfg),
    }
}
