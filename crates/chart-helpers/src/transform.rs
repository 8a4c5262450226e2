// File: crates/chart-helpers/src/transform.rs
// Summary: SVG translate+scale transform used to zoom chart content about its center.

use std::fmt;

use crate::number::Num;

/// A `translate(tx, ty) scale(s)` transform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub translate_x: f64,
    pub translate_y: f64,
    pub scale: f64,
}

impl Transform {
    /// Translation is `x - width * scale` horizontally and `y - height * scale` vertically.
    pub fn from_center(x: f64, y: f64, width: f64, height: f64, scale: f64) -> Self {
        Self {
            translate_x: x - width * scale,
            translate_y: y - height * scale,
            scale,
        }
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "translate({}, {}) scale({})",
            Num(self.translate_x),
            Num(self.translate_y),
            Num(self.scale)
        )
    }
}

/// String form of [`Transform::from_center`], ready for an SVG `transform` attribute.
pub fn transform_from_center(x: f64, y: f64, width: f64, height: f64, scale: f64) -> String {
    Transform::from_center(x, y, width, height, scale).to_string()
}
