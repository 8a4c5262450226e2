// File: crates/chart-helpers/src/time_format.rs
// Summary: Multi-scale date labels for time axes (coarsest unit that still distinguishes the instant).

use std::fmt;

use chrono::{DateTime, Datelike, TimeZone, Timelike, Utc, Weekday};

use crate::error::{ChartHelpersError, Result};

/// Granularity picked for a time-axis label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DateLabel {
    Millisecond,
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Year,
}

impl DateLabel {
    /// Checks run finest-first; the first unit with a non-zero component wins.
    pub fn for_datetime<Tz: TimeZone>(dt: &DateTime<Tz>) -> Self {
        if dt.timestamp_subsec_millis() % 1000 != 0 {
            DateLabel::Millisecond
        } else if dt.second() != 0 {
            DateLabel::Second
        } else if dt.minute() != 0 {
            DateLabel::Minute
        } else if dt.hour() != 0 {
            DateLabel::Hour
        } else if dt.weekday() != Weekday::Sun && dt.day() != 1 {
            DateLabel::Day
        } else if dt.day() != 1 {
            DateLabel::Week
        } else if dt.month() != 1 {
            DateLabel::Month
        } else {
            DateLabel::Year
        }
    }

    /// chrono `strftime` pattern for this granularity.
    pub const fn pattern(self) -> &'static str {
        match self {
            DateLabel::Millisecond => ".%3f",
            DateLabel::Second => ":%S",
            DateLabel::Minute => "%I:%M",
            DateLabel::Hour => "%I %p",
            DateLabel::Day => "%a %d",
            DateLabel::Week => "%b %d",
            DateLabel::Month => "%B",
            DateLabel::Year => "%Y",
        }
    }
}

/// Format `dt` as a time-axis label, e.g. `.250`, `:05`, `03 PM`, `Tue 09`, `March`, `2024`.
/// Components are read in `dt`'s own time zone.
pub fn format_date<Tz>(dt: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    dt.format(DateLabel::for_datetime(dt).pattern()).to_string()
}

/// [`format_date`] for a UTC epoch-millisecond timestamp.
pub fn format_timestamp_millis(ms: i64) -> Result<String> {
    let dt = DateTime::<Utc>::from_timestamp_millis(ms).ok_or(ChartHelpersError::TimestampOutOfRange(ms))?;
    Ok(format_date(&dt))
}
