//! Main logger implementation

use super::error::{LoggerError, Result};
use super::log_level::{LogLevel, ANSI_RESET};
use super::timestamp;
use chrono::{DateTime, Local};
use parking_lot::RwLock;
use std::fmt;
use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};

/// One of the two fixed output destinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

impl Stream {
    /// Destination for a given level: errors go to stderr, everything else
    /// to stdout.
    #[must_use]
    pub fn for_level(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => Stream::Stderr,
            _ => Stream::Stdout,
        }
    }
}

impl fmt::Display for Stream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stream::Stdout => write!(f, "stdout"),
            Stream::Stderr => write!(f, "stderr"),
        }
    }
}

/// Leveled console logger.
///
/// Holds the threshold level and the two formatting toggles. A call below
/// the threshold writes nothing and reports success; everything else is
/// rendered as `[color][timestamp - ]PREFIX message\n[reset]` and written
/// once to the level's fixed stream.
///
/// The threshold and toggles are individually consistent under concurrent
/// use, but a `set_level` racing an in-flight call may or may not affect
/// that call.
pub struct Logger {
    level: RwLock<LogLevel>,
    color_disabled: AtomicBool,
    timestamp_disabled: AtomicBool,
}

impl Logger {
    /// Create a logger with the default state: threshold `Debug`, color and
    /// timestamps enabled.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            level: RwLock::new(LogLevel::Debug),
            color_disabled: AtomicBool::new(false),
            timestamp_disabled: AtomicBool::new(false),
        }
    }

    /// Replace the threshold level. Takes effect on subsequent calls only.
    pub fn set_level(&self, level: LogLevel) {
        *self.level.write() = level;
    }

    /// Current threshold level.
    pub fn level(&self) -> LogLevel {
        *self.level.read()
    }

    /// Disable or re-enable colorized output.
    pub fn set_color_disabled(&self, disabled: bool) {
        self.color_disabled.store(disabled, Ordering::Relaxed);
    }

    pub fn color_disabled(&self) -> bool {
        self.color_disabled.load(Ordering::Relaxed)
    }

    /// Disable or re-enable the prepended timestamp.
    pub fn set_timestamp_disabled(&self, disabled: bool) {
        self.timestamp_disabled.store(disabled, Ordering::Relaxed);
    }

    pub fn timestamp_disabled(&self) -> bool {
        self.timestamp_disabled.load(Ordering::Relaxed)
    }

    /// Whether a message at `level` would currently be emitted.
    pub fn enabled(&self, level: LogLevel) -> bool {
        level >= *self.level.read()
    }

    /// Log a message at `level` to its fixed stream.
    ///
    /// A failed stream write is returned to the caller and never retried.
    pub fn log(&self, level: LogLevel, message: impl fmt::Display) -> Result<()> {
        match Stream::for_level(level) {
            Stream::Stdout => self.write_line(&mut io::stdout().lock(), level, message),
            Stream::Stderr => self.write_line(&mut io::stderr().lock(), level, message),
        }
    }

    /// Log a debug message to stdout.
    #[inline]
    pub fn debug(&self, message: impl fmt::Display) -> Result<()> {
        self.log(LogLevel::Debug, message)
    }

    /// Log an informational message to stdout.
    #[inline]
    pub fn info(&self, message: impl fmt::Display) -> Result<()> {
        self.log(LogLevel::Info, message)
    }

    /// Log a warning message to stdout.
    #[inline]
    pub fn warn(&self, message: impl fmt::Display) -> Result<()> {
        self.log(LogLevel::Warn, message)
    }

    /// Log an error message to stderr.
    #[inline]
    pub fn error(&self, message: impl fmt::Display) -> Result<()> {
        self.log(LogLevel::Error, message)
    }

    /// Gate, render, and write one line.
    fn write_line<W: Write>(
        &self,
        writer: &mut W,
        level: LogLevel,
        message: impl fmt::Display,
    ) -> Result<()> {
        if !self.enabled(level) {
            return Ok(());
        }

        let line = self.render(level, &message.to_string(), Local::now());
        let stream = Stream::for_level(level);
        writer
            .write_all(line.as_bytes())
            .and_then(|()| writer.flush())
            .map_err(|source| LoggerError::write(stream, source))
    }

    /// Apply the formatting pipeline: level prefix, optional timestamp,
    /// optional color wrap. The reset lands after the trailing newline so
    /// the whole line is wrapped.
    fn render(&self, level: LogLevel, message: &str, now: DateTime<Local>) -> String {
        let mut line = format!("{}{}\n", level.prefix(), message);
        if !self.timestamp_disabled() {
            line = format!("{} - {}", timestamp::format_timestamp(&now), line);
        }
        if !self.color_disabled() {
            line = format!("{}{}{}", level.color_code(), line, ANSI_RESET);
        }
        line
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

static GLOBAL: Logger = Logger::new();

/// The process-wide logger that the free functions and macros target.
pub fn global() -> &'static Logger {
    &GLOBAL
}

/// Replace the global threshold level.
pub fn set_level(level: LogLevel) {
    GLOBAL.set_level(level);
}

/// Disable or re-enable colorized output globally.
pub fn set_color_disabled(disabled: bool) {
    GLOBAL.set_color_disabled(disabled);
}

/// Disable or re-enable prepended timestamps globally.
pub fn set_timestamp_disabled(disabled: bool) {
    GLOBAL.set_timestamp_disabled(disabled);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Local> {
        Local
            .with_ymd_and_hms(2025, 1, 8, 10, 30, 45)
            .single()
            .expect("valid datetime")
    }

    /// Logger with color and timestamps off, for byte-exact assertions.
    fn plain(threshold: LogLevel) -> Logger {
        let logger = Logger::new();
        logger.set_level(threshold);
        logger.set_color_disabled(true);
        logger.set_timestamp_disabled(true);
        logger
    }

    fn captured(logger: &Logger, level: LogLevel, message: &str) -> Vec<u8> {
        let mut buf = Vec::new();
        logger
            .write_line(&mut buf, level, message)
            .expect("write to buffer");
        buf
    }

    #[test]
    fn test_default_state() {
        let logger = Logger::new();
        assert_eq!(logger.level(), LogLevel::Debug);
        assert!(!logger.color_disabled());
        assert!(!logger.timestamp_disabled());
    }

    #[test]
    fn test_below_threshold_writes_nothing() {
        let logger = plain(LogLevel::Warn);
        assert!(captured(&logger, LogLevel::Debug, "skip").is_empty());
        assert!(captured(&logger, LogLevel::Info, "skip").is_empty());
    }

    #[test]
    fn test_at_and_above_threshold_write_prefixed_line() {
        let logger = plain(LogLevel::Warn);
        assert_eq!(
            captured(&logger, LogLevel::Warn, "careful"),
            b"WARNING: careful\n"
        );
        assert_eq!(captured(&logger, LogLevel::Error, "boom"), b"ERROR: boom\n");
    }

    #[test]
    fn test_prefix_per_level() {
        let logger = plain(LogLevel::Debug);
        assert_eq!(captured(&logger, LogLevel::Debug, "d"), b"DEBUG: d\n");
        assert_eq!(captured(&logger, LogLevel::Info, "i"), b"INFO: i\n");
        assert_eq!(captured(&logger, LogLevel::Warn, "w"), b"WARNING: w\n");
        assert_eq!(captured(&logger, LogLevel::Error, "e"), b"ERROR: e\n");
    }

    #[test]
    fn test_timestamp_segment() {
        let logger = Logger::new();
        logger.set_color_disabled(true);

        assert_eq!(
            logger.render(LogLevel::Info, "ready", fixed_now()),
            "2025/01/08 10:30:45 - INFO: ready\n"
        );

        logger.set_timestamp_disabled(true);
        assert_eq!(
            logger.render(LogLevel::Info, "ready", fixed_now()),
            "INFO: ready\n"
        );

        logger.set_timestamp_disabled(false);
        assert_eq!(
            logger.render(LogLevel::Info, "ready", fixed_now()),
            "2025/01/08 10:30:45 - INFO: ready\n"
        );
    }

    #[test]
    fn test_color_wraps_whole_line() {
        let logger = Logger::new();
        logger.set_timestamp_disabled(true);

        assert_eq!(
            logger.render(LogLevel::Warn, "careful", fixed_now()),
            "\x1b[33mWARNING: careful\n\x1b[0m"
        );
        assert_eq!(
            logger.render(LogLevel::Error, "boom", fixed_now()),
            "\x1b[31mERROR: boom\n\x1b[0m"
        );
    }

    #[test]
    fn test_color_applied_outside_timestamp() {
        let logger = Logger::new();
        assert_eq!(
            logger.render(LogLevel::Debug, "tick", fixed_now()),
            "\x1b[34m2025/01/08 10:30:45 - DEBUG: tick\n\x1b[0m"
        );
    }

    #[test]
    fn test_color_disabled_emits_no_escape_bytes() {
        let logger = Logger::new();
        logger.set_color_disabled(true);
        let line = logger.render(LogLevel::Debug, "plain", fixed_now());
        assert!(!line.contains('\x1b'));
    }

    #[test]
    fn test_stream_for_level() {
        assert_eq!(Stream::for_level(LogLevel::Debug), Stream::Stdout);
        assert_eq!(Stream::for_level(LogLevel::Info), Stream::Stdout);
        assert_eq!(Stream::for_level(LogLevel::Warn), Stream::Stdout);
        assert_eq!(Stream::for_level(LogLevel::Error), Stream::Stderr);
    }

    #[test]
    fn test_setters_are_idempotent() {
        let logger = Logger::new();

        logger.set_level(LogLevel::Warn);
        logger.set_level(LogLevel::Warn);
        assert_eq!(logger.level(), LogLevel::Warn);

        logger.set_color_disabled(true);
        logger.set_color_disabled(true);
        assert!(logger.color_disabled());

        logger.set_timestamp_disabled(true);
        logger.set_timestamp_disabled(true);
        assert!(logger.timestamp_disabled());
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "broken pipe"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_failure_is_surfaced() {
        let logger = plain(LogLevel::Debug);
        let err = logger
            .write_line(&mut FailingWriter, LogLevel::Error, "boom")
            .unwrap_err();
        assert_eq!(err.to_string(), "write to stderr failed: broken pipe");
    }

    #[test]
    fn test_suppressed_call_never_touches_the_writer() {
        let logger = plain(LogLevel::Error);
        logger
            .write_line(&mut FailingWriter, LogLevel::Debug, "skip")
            .expect("suppressed call succeeds");
    }
}
