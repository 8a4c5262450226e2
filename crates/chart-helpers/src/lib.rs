// File: crates/chart-helpers/src/lib.rs
// Summary: Library entry point; exports the chart data helpers (field extraction, extrema, ticks, transforms, date labels).

pub mod error;
pub mod fields;
pub mod record;
pub mod ticks;
pub mod time_format;
pub mod transform;

mod number;

pub use error::{ChartHelpersError, Result};
pub use fields::{by_fields, group_by_fields, max_by_fields, max_by_fields_stacked, min_by_fields, Fields};
pub use record::{records_from_json, FieldValue, Record};
pub use ticks::{discrete_tick_indices, discrete_ticks};
pub use time_format::{format_date, format_timestamp_millis, DateLabel};
pub use transform::{transform_from_center, Transform};
