//! Date helper functions

use chrono::{DateTime, Local, TimeZone};
use std::time::SystemTime;

/// Convert a filesystem timestamp into local time
pub fn from_system_time(time: SystemTime) -> DateTime<Local> {
    DateTime::<Local>::from(time)
}

/// Format a date with a strftime pattern
///
/// # Examples
/// ```ignore
/// format_date(&date, "%-d/%-m/%Y") // -> "15/1/2024"
/// ```
pub fn format_date<Tz: TimeZone>(date: &DateTime<Tz>, format: &str) -> String
where
    Tz::Offset: std::fmt::Display,
{
    date.format(format).to_string()
}
