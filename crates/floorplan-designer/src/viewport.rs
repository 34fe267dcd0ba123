//! Viewport for the editing canvas.
//!
//! Wraps a [`ViewTransform`] together with the canvas size and the editing
//! DPI, and implements the pan/zoom interactions on top of the scaling laws
//! in `floorplan_core::units`.

use std::fmt;

use floorplan_core::constants::{
    DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, DEFAULT_EDITING_DPI, VIEW_PADDING,
    WHEEL_ZOOM_STEP, ZOOM_STEP,
};
use floorplan_core::view::clamp_zoom;
use floorplan_core::{
    a2_dimensions, canvas_to_world, pixels_per_foot, world_to_canvas, CanvasPoint, ViewTransform,
    WorldPoint,
};

use crate::model::Bounds;

/// Direction of a wheel event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelDirection {
    /// Wheel rolled away from the user (negative delta).
    In,
    /// Wheel rolled toward the user (positive delta).
    Out,
}

impl WheelDirection {
    /// Positive deltas zoom out, everything else zooms in.
    pub fn from_delta(delta_y: f64) -> Self {
        if delta_y > 0.0 {
            WheelDirection::Out
        } else {
            WheelDirection::In
        }
    }
}

/// Partial update for [`Viewport::set_view_transform`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ViewUpdate {
    pub scale: Option<f64>,
    pub translate_x: Option<f64>,
    pub translate_y: Option<f64>,
}

/// View transform plus the canvas it maps onto.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    transform: ViewTransform,
    canvas_width: f64,
    canvas_height: f64,
    editing_dpi: f64,
}

impl Viewport {
    pub fn new(canvas_width: f64, canvas_height: f64) -> Self {
        Self {
            transform: ViewTransform::default(),
            canvas_width,
            canvas_height,
            editing_dpi: DEFAULT_EDITING_DPI,
        }
    }

    pub fn canvas_width(&self) -> f64 {
        self.canvas_width
    }

    pub fn canvas_height(&self) -> f64 {
        self.canvas_height
    }

    /// Sets the canvas dimensions (typically called when the host resizes).
    pub fn set_canvas_size(&mut self, width: f64, height: f64) {
        debug_assert!(width > 0.0 && height > 0.0, "canvas size must be positive");
        self.canvas_width = width;
        self.canvas_height = height;
    }

    pub fn editing_dpi(&self) -> f64 {
        self.editing_dpi
    }

    pub fn transform(&self) -> &ViewTransform {
        &self.transform
    }

    pub fn zoom(&self) -> f64 {
        self.transform.scale()
    }

    /// Merges `update` into the current transform. The scale is clamped.
    pub fn set_view_transform(&mut self, update: ViewUpdate) {
        if let Some(scale) = update.scale {
            self.transform.set_scale(scale);
        }
        if let Some(x) = update.translate_x {
            self.transform.translate_x = x;
        }
        if let Some(y) = update.translate_y {
            self.transform.translate_y = y;
        }
    }

    /// Multiplies the zoom by [`ZOOM_STEP`]; the translation is unchanged.
    pub fn zoom_in(&mut self) {
        self.transform.set_scale(self.zoom() * ZOOM_STEP);
    }

    /// Divides the zoom by [`ZOOM_STEP`]; the translation is unchanged.
    pub fn zoom_out(&mut self) {
        self.transform.set_scale(self.zoom() / ZOOM_STEP);
    }

    /// Zooms by `factor` around `pointer`, keeping the world point under the
    /// pointer at the same canvas position.
    ///
    /// Formula:
    /// ```text
    /// anchor    = (pointer - translate) / old_scale
    /// translate = pointer - anchor * new_scale
    /// ```
    pub fn zoom_at(&mut self, pointer: CanvasPoint, factor: f64) {
        let old_scale = self.zoom();
        let anchor_x = (pointer.x - self.transform.translate_x) / old_scale;
        let anchor_y = (pointer.y - self.transform.translate_y) / old_scale;

        let new_scale = clamp_zoom(old_scale * factor);
        self.transform.set_scale(new_scale);
        self.transform.set_translate(
            pointer.x - anchor_x * new_scale,
            pointer.y - anchor_y * new_scale,
        );
    }

    /// Applies one wheel notch at `pointer` using [`WHEEL_ZOOM_STEP`].
    pub fn wheel_zoom(&mut self, pointer: CanvasPoint, direction: WheelDirection) {
        let factor = match direction {
            WheelDirection::In => WHEEL_ZOOM_STEP,
            WheelDirection::Out => 1.0 / WHEEL_ZOOM_STEP,
        };
        self.zoom_at(pointer, factor);
    }

    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.transform.translate_by(dx, dy);
    }

    /// Centers the A2 sheet (at the editing DPI) in the canvas at the current
    /// zoom.
    pub fn center_sheet(&mut self) {
        let sheet = a2_dimensions(self.editing_dpi);
        let scale = self.zoom();
        self.transform.set_translate(
            (self.canvas_width - sheet.width as f64 * scale) / 2.0,
            (self.canvas_height - sheet.height as f64 * scale) / 2.0,
        );
    }

    /// Fits `bounds` into the canvas, leaving `padding` (fraction of the canvas,
    /// 0.0 - 0.5) on every side. Degenerate bounds are ignored.
    pub fn fit_to_bounds(&mut self, bounds: &Bounds, padding: f64) {
        if bounds.width <= 0.0 || bounds.height <= 0.0 {
            return;
        }

        let ppf = pixels_per_foot(self.editing_dpi);
        let width_px = bounds.width * ppf;
        let height_px = bounds.height * ppf;

        let padding_factor = 1.0 - padding * 2.0;
        let zoom_x = self.canvas_width * padding_factor / width_px;
        let zoom_y = self.canvas_height * padding_factor / height_px;
        let new_zoom = clamp_zoom(zoom_x.min(zoom_y));

        self.transform.set_scale(new_zoom);
        let center = bounds.center;
        self.transform.set_translate(
            self.canvas_width / 2.0 - center.x * ppf * new_zoom,
            self.canvas_height / 2.0 - center.y * ppf * new_zoom,
        );
    }

    /// [`Self::fit_to_bounds`] with the default padding.
    pub fn fit_to_view(&mut self, bounds: &Bounds) {
        self.fit_to_bounds(bounds, VIEW_PADDING);
    }

    pub fn world_to_canvas(&self, point: WorldPoint) -> CanvasPoint {
        world_to_canvas(point, &self.transform, self.editing_dpi)
    }

    pub fn canvas_to_world(&self, point: CanvasPoint) -> WorldPoint {
        canvas_to_world(point, &self.transform, self.editing_dpi)
    }

    /// Converts a length in world feet to canvas pixels at the current zoom.
    pub fn feet_to_canvas_px(&self, feet: f64) -> f64 {
        feet * pixels_per_foot(self.editing_dpi) * self.zoom()
    }

    /// Resets to 1:1 zoom at the origin.
    pub fn reset(&mut self) {
        self.transform = ViewTransform::default();
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.transform, f)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(DEFAULT_CANVAS_WIDTH, DEFAULT_CANVAS_HEIGHT)
    }
}
