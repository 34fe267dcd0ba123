//! Viewport operations (zoom, pan, grid, snap) for designer state.

use floorplan_core::{CanvasPoint, GeometryError};

use super::DesignerState;
use crate::grid::{grid_lines, GridLine};
use crate::snapping::{GridSettings, SnapSettings};
use crate::viewport::{ViewUpdate, WheelDirection};

impl DesignerState {
    pub fn set_view_transform(&mut self, update: ViewUpdate) {
        self.viewport.set_view_transform(update);
    }

    pub fn zoom_in(&mut self) {
        self.viewport.zoom_in();
    }

    pub fn zoom_out(&mut self) {
        self.viewport.zoom_out();
    }

    /// Wheel zoom anchored at `pointer`; positive `delta_y` zooms out.
    pub fn wheel_zoom(&mut self, pointer: CanvasPoint, delta_y: f64) {
        self.viewport
            .wheel_zoom(pointer, WheelDirection::from_delta(delta_y));
    }

    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.viewport.pan_by(dx, dy);
    }

    pub fn center_sheet(&mut self) {
        self.viewport.center_sheet();
    }

    /// Fits every shape into the canvas. Returns false when there is nothing
    /// to fit.
    pub fn zoom_to_fit(&mut self) -> bool {
        match self.content_bounds() {
            Ok(bounds) => {
                self.viewport.fit_to_view(&bounds);
                true
            }
            Err(_) => false,
        }
    }

    pub fn toggle_grid(&mut self) {
        self.show_grid = !self.show_grid;
    }

    pub fn toggle_snap(&mut self) {
        self.snap.enabled = !self.snap.enabled;
    }

    /// Toggles pan mode, dropping any pan drag in progress.
    pub fn toggle_pan_mode(&mut self) {
        self.pan_mode = !self.pan_mode;
        self.pan_session.cancel();
    }

    pub fn grid_settings(&self) -> &GridSettings {
        &self.grid
    }

    pub fn set_grid_settings(&mut self, grid: GridSettings) -> Result<(), GeometryError> {
        grid.validate()?;
        self.grid = grid;
        Ok(())
    }

    pub fn snap_settings(&self) -> &SnapSettings {
        &self.snap
    }

    pub fn set_snap_settings(&mut self, snap: SnapSettings) -> Result<(), GeometryError> {
        snap.validate()?;
        self.snap = snap;
        Ok(())
    }

    /// Grid lines to draw, empty when the grid is hidden or disabled.
    pub fn visible_grid_lines(&self) -> Vec<GridLine> {
        if !self.show_grid {
            return Vec::new();
        }
        grid_lines(&self.grid, &self.viewport)
    }
}
