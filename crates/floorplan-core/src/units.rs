//! Scaling laws between world feet, export pixels and editing pixels.
//!
//! Everything here is a pure formula built on a single law:
//! `pixels_per_foot = dpi / PLOT_SCALE`. Export DPI and on-screen zoom never
//! touch each other; they only meet in world feet.
//!
//! Non-positive DPI or a zero view scale is a caller bug and trips a debug
//! assertion.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::{A2_HEIGHT_MM, A2_WIDTH_MM, MM_PER_INCH, PLOT_SCALE};
use crate::point::{CanvasPoint, ExportPoint, PlanePoint, WorldPoint};
use crate::view::ViewTransform;

/// Integer pixel size of an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelDimensions {
    pub width: u32,
    pub height: u32,
}

impl fmt::Display for PixelDimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} × {} px", self.width, self.height)
    }
}

/// Pixels per world foot at the given DPI.
pub fn pixels_per_foot(dpi: f64) -> f64 {
    debug_assert!(dpi.is_finite() && dpi > 0.0, "dpi must be positive, got {dpi}");
    dpi / PLOT_SCALE
}

/// Pixel size of an A2 sheet at the given DPI, rounded to whole pixels.
///
/// ```
/// use floorplan_core::units::a2_dimensions;
///
/// let dims = a2_dimensions(96.0);
/// assert_eq!((dims.width, dims.height), (1587, 2245));
/// ```
pub fn a2_dimensions(dpi: f64) -> PixelDimensions {
    debug_assert!(dpi.is_finite() && dpi > 0.0, "dpi must be positive, got {dpi}");
    PixelDimensions {
        width: mm_to_px(A2_WIDTH_MM, dpi).round() as u32,
        height: mm_to_px(A2_HEIGHT_MM, dpi).round() as u32,
    }
}

/// Converts a physical stroke width to pixels at the given DPI (no rounding).
pub fn stroke_mm_to_px(stroke_mm: f64, dpi: f64) -> f64 {
    mm_to_px(stroke_mm, dpi)
}

fn mm_to_px(mm: f64, dpi: f64) -> f64 {
    (mm / MM_PER_INCH) * dpi
}

/// Maps a world point to export-image pixels.
///
/// Formula:
/// ```text
/// px = origin + world * pixels_per_foot(dpi)
/// ```
pub fn world_to_export(point: WorldPoint, dpi: f64, origin: ExportPoint) -> ExportPoint {
    let ppf = pixels_per_foot(dpi);
    ExportPoint::new(origin.x + point.x * ppf, origin.y + point.y * ppf)
}

/// Inverse of [`world_to_export`].
pub fn export_to_world(point: ExportPoint, dpi: f64, origin: ExportPoint) -> WorldPoint {
    let ppf = pixels_per_foot(dpi);
    WorldPoint::new((point.x - origin.x) / ppf, (point.y - origin.y) / ppf)
}

/// Maps a world point to editing-canvas pixels through the view transform.
///
/// Formula:
/// ```text
/// canvas = world * pixels_per_foot(editing_dpi) * scale + translate
/// ```
pub fn world_to_canvas(point: WorldPoint, view: &ViewTransform, editing_dpi: f64) -> CanvasPoint {
    let ppf = pixels_per_foot(editing_dpi);
    CanvasPoint::new(
        point.x * ppf * view.scale() + view.translate_x,
        point.y * ppf * view.scale() + view.translate_y,
    )
}

/// Inverse of [`world_to_canvas`].
pub fn canvas_to_world(point: CanvasPoint, view: &ViewTransform, editing_dpi: f64) -> WorldPoint {
    debug_assert!(view.scale() != 0.0, "view scale must be non-zero");
    let ppf = pixels_per_foot(editing_dpi);
    let px_x = (point.x - view.translate_x) / view.scale();
    let px_y = (point.y - view.translate_y) / view.scale();
    WorldPoint::new(px_x / ppf, px_y / ppf)
}

/// Euclidean distance between two points of the same space.
pub fn distance<P: PlanePoint>(p1: P, p2: P) -> f64 {
    p1.distance_to(&p2)
}

/// Formats a length in feet for display, always with two decimals.
pub fn format_feet(value: f64) -> String {
    format!("{:.2}", value)
}
