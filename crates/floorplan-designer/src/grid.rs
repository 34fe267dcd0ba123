//! Background grid covering the A2 sheet.

use floorplan_core::{a2_dimensions, pixels_per_foot, CanvasPoint, WorldPoint};

use crate::snapping::GridSettings;
use crate::viewport::Viewport;

const MAJOR_EPSILON: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridAxis {
    Vertical,
    Horizontal,
}

/// One grid line in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLine {
    pub axis: GridAxis,
    /// World coordinate of the line along its perpendicular axis, in feet.
    pub world_ft: f64,
    pub start: CanvasPoint,
    pub end: CanvasPoint,
    pub major: bool,
}

/// Size of the A2 sheet at `dpi`, in world feet.
pub fn sheet_size_ft(dpi: f64) -> (f64, f64) {
    let dims = a2_dimensions(dpi);
    let ppf = pixels_per_foot(dpi);
    (dims.width as f64 / ppf, dims.height as f64 / ppf)
}

fn is_major(value: f64, major_spacing: f64) -> bool {
    let ratio = value / major_spacing;
    (ratio - ratio.round()).abs() < MAJOR_EPSILON
}

/// Generates the vertical then horizontal grid lines spanning the sheet.
///
/// Lines sit at multiples of `spacing_ft` from the world origin. Returns an
/// empty list when the grid is disabled or the settings do not validate.
pub fn grid_lines(settings: &GridSettings, viewport: &Viewport) -> Vec<GridLine> {
    if !settings.enabled || settings.validate().is_err() {
        return Vec::new();
    }

    let (width_ft, height_ft) = sheet_size_ft(viewport.editing_dpi());
    let spacing = settings.spacing_ft;
    let mut lines = Vec::new();

    let columns = (width_ft / spacing + MAJOR_EPSILON).floor() as usize;
    for i in 0..=columns {
        let x = i as f64 * spacing;
        lines.push(GridLine {
            axis: GridAxis::Vertical,
            world_ft: x,
            start: viewport.world_to_canvas(WorldPoint::new(x, 0.0)),
            end: viewport.world_to_canvas(WorldPoint::new(x, height_ft)),
            major: is_major(x, settings.major_spacing_ft),
        });
    }

    let rows = (height_ft / spacing + MAJOR_EPSILON).floor() as usize;
    for i in 0..=rows {
        let y = i as f64 * spacing;
        lines.push(GridLine {
            axis: GridAxis::Horizontal,
            world_ft: y,
            start: viewport.world_to_canvas(WorldPoint::new(0.0, y)),
            end: viewport.world_to_canvas(WorldPoint::new(width_ft, y)),
            major: is_major(y, settings.major_spacing_ft),
        });
    }

    tracing::trace!(count = lines.len(), "generated grid lines");
    lines
}
