//! Logging setup shared by lbx binaries.
//!
//! Installs a global `tracing` subscriber from a serializable [`LoggerConfig`].
mod logger;
pub use logger::*;
