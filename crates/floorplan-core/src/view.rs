//! Pan/zoom transform from world feet to editing pixels.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::{MAX_ZOOM, MIN_ZOOM};

/// The active view transform.
///
/// `canvas = world * pixels_per_foot(editing_dpi) * scale + translate`.
/// The scale is clamped to `[MIN_ZOOM, MAX_ZOOM]` by every mutator; the
/// translation is unbounded. Deserialization clamps the scale as well.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "ViewTransformFields")]
pub struct ViewTransform {
    pub(crate) scale: f64,
    pub translate_x: f64,
    pub translate_y: f64,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ViewTransformFields {
    scale: f64,
    translate_x: f64,
    translate_y: f64,
}

impl From<ViewTransformFields> for ViewTransform {
    fn from(fields: ViewTransformFields) -> Self {
        ViewTransform::new(fields.scale, fields.translate_x, fields.translate_y)
    }
}

impl ViewTransform {
    /// Creates a transform, clamping `scale` into the allowed zoom range.
    pub fn new(scale: f64, translate_x: f64, translate_y: f64) -> Self {
        Self {
            scale: clamp_zoom(scale),
            translate_x,
            translate_y,
        }
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Sets the scale, clamped to `[MIN_ZOOM, MAX_ZOOM]`.
    pub fn set_scale(&mut self, scale: f64) {
        self.scale = clamp_zoom(scale);
    }

    pub fn set_translate(&mut self, x: f64, y: f64) {
        self.translate_x = x;
        self.translate_y = y;
    }

    pub fn translate_by(&mut self, dx: f64, dy: f64) {
        self.translate_x += dx;
        self.translate_y += dy;
    }
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self {
            scale: 1.0,
            translate_x: 0.0,
            translate_y: 0.0,
        }
    }
}

impl fmt::Display for ViewTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Zoom: {:.2}x | Pan: ({:.1}, {:.1})",
            self.scale, self.translate_x, self.translate_y
        )
    }
}

/// Clamps a zoom value into `[MIN_ZOOM, MAX_ZOOM]`. NaN maps to 1.0.
pub fn clamp_zoom(scale: f64) -> f64 {
    if scale.is_nan() {
        return 1.0;
    }
    scale.clamp(MIN_ZOOM, MAX_ZOOM)
}
