// File: crates/chart-helpers/src/number.rs
// Summary: Shortest-form number display shared by transform strings and field values.

use std::fmt;

/// Displays an `f64` without a trailing `.0` and with negative zero folded to `0`.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Num(pub(crate) f64);

impl fmt::Display for Num {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = self.0;
        if v.is_nan() {
            f.write_str("NaN")
        } else if v.is_infinite() {
            f.write_str(if v > 0.0 { "Infinity" } else { "-Infinity" })
        } else {
            // -0.0 + 0.0 == +0.0
            write!(f, "{}", v + 0.0)
        }
    }
}
