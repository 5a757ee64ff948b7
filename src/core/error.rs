//! Error types for the logger

use super::logger::Stream;

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// The underlying stream rejected the write
    #[error("write to {stream} failed: {source}")]
    Write {
        stream: Stream,
        #[source]
        source: std::io::Error,
    },
}

impl LoggerError {
    /// Create a write failure for the given stream
    pub fn write(stream: Stream, source: std::io::Error) -> Self {
        LoggerError::Write { stream, source }
    }
}
