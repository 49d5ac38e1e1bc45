pub mod format;
pub use format::LoggerFormat;

pub mod level;
pub use level::LoggerLevel;

pub mod clock;
pub use clock::{LoggerClock, LoggerTimeZone, init_local_offset};
