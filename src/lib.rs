//! # Termlog
//!
//! A minimal leveled, colorized console logger with optional timestamps.
//!
//! Messages carry one of four levels (`Debug < Info < Warn < Error`); only
//! messages at or above the process-wide threshold are emitted. Debug, info,
//! and warning messages go to stdout, errors to stderr. Each line is
//! prefixed with its level, optionally prepended with a local timestamp, and
//! optionally wrapped in an ANSI color pair.
//!
//! ## Features
//!
//! - **Level gating**: one threshold, suppressed calls are free no-ops
//! - **Two fixed streams**: errors on stderr, everything else on stdout
//! - **Colorized**: per-level ANSI colors, cleanly disabled with one toggle
//! - **Thread safe**: threshold and toggles can be changed from any thread
//!
//! ```
//! use termlog::{infof, warn, LogLevel};
//!
//! termlog::set_level(LogLevel::Info);
//! warn!("disk", "almost", "full")?;
//! infof!("listening on port {}", 8080)?;
//! # Ok::<(), termlog::LoggerError>(())
//! ```

pub mod core;
pub mod macros;

pub mod prelude {
    pub use crate::core::{
        global, set_color_disabled, set_level, set_timestamp_disabled, LogLevel, Logger,
        LoggerError, Result, Stream,
    };
}

pub use core::{
    format_timestamp, global, set_color_disabled, set_level, set_timestamp_disabled, LogLevel,
    Logger, LoggerError, Result, Stream, ANSI_RESET, TIMESTAMP_FORMAT,
};
