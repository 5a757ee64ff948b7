//! Timestamp formatting for log lines

use chrono::{DateTime, Local};

/// Layout of the optional line timestamp: `YYYY/MM/DD hh:mm:ss`, 24-hour
/// local time.
pub const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Format a timestamp using the fixed log line layout.
#[must_use]
pub fn format_timestamp(datetime: &DateTime<Local>) -> String {
    datetime.format(TIMESTAMP_FORMAT).to_string()
}
