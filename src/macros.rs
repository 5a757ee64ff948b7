//! Logging macros for the global logger.
//!
//! The plain macros (`debug!`, `info!`, `warn!`, `error!`) take any number
//! of values, render each with its `Display` implementation, and join them
//! with single spaces. The `*f` variants take a format template plus
//! arguments, like `format!`. Every macro returns the crate
//! [`Result`](crate::Result); a call below the current threshold is a
//! successful no-op.
//!
//! # Examples
//!
//! ```
//! use termlog::{info, infof};
//!
//! info!("server", "started")?;
//!
//! let port = 8080;
//! infof!("listening on port {}", port)?;
//! # Ok::<(), termlog::LoggerError>(())
//! ```

/// Join values with single spaces using their `Display` representations.
#[doc(hidden)]
#[macro_export]
macro_rules! __join {
    ($first:expr $(, $rest:expr)* $(,)?) => {{
        let mut joined = ::std::string::String::new();
        {
            use ::std::fmt::Write as _;
            let _ = ::std::write!(joined, "{}", $first);
            $(let _ = ::std::write!(joined, " {}", $rest);)*
        }
        joined
    }};
}

/// Log a formatted message at an explicit level.
///
/// # Examples
///
/// ```
/// use termlog::{log, LogLevel};
///
/// log!(LogLevel::Info, "simple message")?;
/// log!(LogLevel::Error, "error code: {}", 500)?;
/// # Ok::<(), termlog::LoggerError>(())
/// ```
#[macro_export]
macro_rules! log {
    ($level:expr, $($arg:tt)+) => {
        $crate::global().log($level, format!($($arg)+))
    };
}

/// Log values at debug level, space-joined, to stdout.
///
/// # Examples
///
/// ```
/// use termlog::debug;
///
/// debug!("debug information")?;
/// debug!("counter value:", 10)?;
/// # Ok::<(), termlog::LoggerError>(())
/// ```
#[macro_export]
macro_rules! debug {
    ($($arg:expr),+ $(,)?) => {
        $crate::global().log($crate::LogLevel::Debug, $crate::__join!($($arg),+))
    };
}

/// Log a formatted message at debug level to stdout.
///
/// # Examples
///
/// ```
/// use termlog::debugf;
///
/// debugf!("counter value: {}", 10)?;
/// # Ok::<(), termlog::LoggerError>(())
/// ```
#[macro_export]
macro_rules! debugf {
    ($($arg:tt)+) => {
        $crate::log!($crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log values at info level, space-joined, to stdout.
///
/// # Examples
///
/// ```
/// use termlog::info;
///
/// info!("application started")?;
/// info!("processing", 100, "items")?;
/// # Ok::<(), termlog::LoggerError>(())
/// ```
#[macro_export]
macro_rules! info {
    ($($arg:expr),+ $(,)?) => {
        $crate::global().log($crate::LogLevel::Info, $crate::__join!($($arg),+))
    };
}

/// Log a formatted message at info level to stdout.
///
/// # Examples
///
/// ```
/// use termlog::infof;
///
/// infof!("processing {} items", 100)?;
/// # Ok::<(), termlog::LoggerError>(())
/// ```
#[macro_export]
macro_rules! infof {
    ($($arg:tt)+) => {
        $crate::log!($crate::LogLevel::Info, $($arg)+)
    };
}

/// Log values at warning level, space-joined, to stdout.
///
/// # Examples
///
/// ```
/// use termlog::warn;
///
/// warn!("low disk space")?;
/// warn!("retry", 3, "of", 5)?;
/// # Ok::<(), termlog::LoggerError>(())
/// ```
#[macro_export]
macro_rules! warn {
    ($($arg:expr),+ $(,)?) => {
        $crate::global().log($crate::LogLevel::Warn, $crate::__join!($($arg),+))
    };
}

/// Log a formatted message at warning level to stdout.
///
/// # Examples
///
/// ```
/// use termlog::warnf;
///
/// warnf!("retry attempt {} of {}", 3, 5)?;
/// # Ok::<(), termlog::LoggerError>(())
/// ```
#[macro_export]
macro_rules! warnf {
    ($($arg:tt)+) => {
        $crate::log!($crate::LogLevel::Warn, $($arg)+)
    };
}

/// Log values at error level, space-joined, to stderr.
///
/// # Examples
///
/// ```
/// use termlog::error;
///
/// error!("failed to connect")?;
/// error!("exit code:", 1)?;
/// # Ok::<(), termlog::LoggerError>(())
/// ```
#[macro_export]
macro_rules! error {
    ($($arg:expr),+ $(,)?) => {
        $crate::global().log($crate::LogLevel::Error, $crate::__join!($($arg),+))
    };
}

/// Log a formatted message at error level to stderr.
///
/// # Examples
///
/// ```
/// use termlog::errorf;
///
/// errorf!("error code: {}, message: {}", 500, "internal error")?;
/// # Ok::<(), termlog::LoggerError>(())
/// ```
#[macro_export]
macro_rules! errorf {
    ($($arg:tt)+) => {
        $crate::log!($crate::LogLevel::Error, $($arg)+)
    };
}
