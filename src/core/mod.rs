//! Core logger types

pub mod error;
pub mod log_level;
pub mod logger;
pub mod timestamp;

pub use error::{LoggerError, Result};
pub use log_level::{LogLevel, ANSI_RESET};
pub use logger::{global, set_color_disabled, set_level, set_timestamp_disabled, Logger, Stream};
pub use timestamp::{format_timestamp, TIMESTAMP_FORMAT};
