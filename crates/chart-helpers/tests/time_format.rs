// File: crates/chart-helpers/tests/time_format.rs
// Purpose: Multi-scale date labels, one case per granularity.

use chart_helpers::{format_date, format_timestamp_millis, ChartHelpersError, DateLabel};
use chrono::{DateTime, FixedOffset, TimeZone, Utc};

fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
}

#[test]
fn label_per_granularity() {
    let with_ms = utc(2024, 3, 5, 15, 30, 5) + chrono::Duration::milliseconds(250);
    assert_eq!(format_date(&with_ms), ".250");
    assert_eq!(format_date(&utc(2024, 3, 5, 15, 30, 5)), ":05");
    assert_eq!(format_date(&utc(2024, 3, 5, 15, 30, 0)), "03:30");
    assert_eq!(format_date(&utc(2024, 3, 5, 15, 0, 0)), "03 PM");
    // 2024-01-09 is a Tuesday
    assert_eq!(format_date(&utc(2024, 1, 9, 0, 0, 0)), "Tue 09");
    // 2024-01-07 is a Sunday
    assert_eq!(format_date(&utc(2024, 1, 7, 0, 0, 0)), "Jan 07");
    assert_eq!(format_date(&utc(2024, 3, 1, 0, 0, 0)), "March");
    assert_eq!(format_date(&utc(2024, 1, 1, 0, 0, 0)), "2024");
}

#[test]
fn label_uses_the_datetime_time_zone() {
    // midnight UTC is 02:00 at +02:00
    let tz = FixedOffset::east_opt(2 * 3600).unwrap();
    let dt = utc(2024, 1, 1, 0, 0, 0).with_timezone(&tz);
    assert_eq!(DateLabel::for_datetime(&dt), DateLabel::Hour);
    assert_eq!(format_date(&dt), "02 AM");
}

#[test]
fn timestamp_millis() {
    // 2024-01-01T00:00:00Z
    assert_eq!(format_timestamp_millis(1_704_067_200_000).unwrap(), "2024");
    assert_eq!(format_timestamp_millis(1_704_067_200_250).unwrap(), ".250");
    assert!(matches!(
        format_timestamp_millis(i64::MAX),
        Err(ChartHelpersError::TimestampOutOfRange(i64::MAX))
    ));
}
