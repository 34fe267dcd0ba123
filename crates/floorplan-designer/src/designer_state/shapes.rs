//! Shape operations (add, delete, update, templates) for designer state.

use floorplan_core::{GeometryError, Result};

use super::DesignerState;
use crate::commands::DesignerCommand;
use crate::model::{Bounds, Shape, ShapeId, ShapePatch};
use crate::templates::{HouseTemplate, PlotPreset};

impl DesignerState {
    /// Adds a shape and returns its id.
    pub fn add_shape(&mut self, shape: Shape) -> Result<ShapeId> {
        let id = shape.id().clone();
        self.dispatch(DesignerCommand::AddShape(shape))?;
        Ok(id)
    }

    pub fn delete_shape(&mut self, id: &ShapeId) -> Result<()> {
        self.dispatch(DesignerCommand::DeleteShape(id.clone()))
    }

    /// Deletes every selected shape as a single step. No-op when nothing is
    /// selected.
    pub fn delete_selected(&mut self) -> Result<()> {
        if self.selection.is_empty() {
            return Ok(());
        }
        let ids: Vec<ShapeId> = self.selected_shapes().map(|s| s.id().clone()).collect();
        self.dispatch(DesignerCommand::DeleteShapes(ids))
    }

    /// Applies a partial update. Not checkpointed under the default policy;
    /// call [`DesignerState::end_gesture`] to make a finished edit undoable.
    pub fn update_shape(&mut self, id: &ShapeId, patch: ShapePatch) -> Result<()> {
        if patch.is_empty() {
            return Ok(());
        }
        self.dispatch(DesignerCommand::UpdateShape {
            id: id.clone(),
            patch,
        })
    }

    /// Closes an edit gesture (drag, property edit) so it can be undone.
    pub fn end_gesture(&mut self) -> Result<()> {
        self.dispatch(DesignerCommand::EndGesture)
    }

    pub fn clear_shapes(&mut self) -> Result<()> {
        self.dispatch(DesignerCommand::ClearShapes)
    }

    /// Adds the boundary rectangle for `preset`.
    pub fn add_plot(&mut self, preset: PlotPreset) -> Result<ShapeId> {
        let shape = preset.build()?;
        tracing::info!(preset = %preset, "plot added");
        self.add_shape(shape)
    }

    /// Adds the building outline for `template`.
    pub fn add_house(&mut self, template: HouseTemplate) -> Result<ShapeId> {
        let shape = template.build()?;
        tracing::info!(template = template.label(), "house added");
        self.add_shape(shape)
    }

    /// Bounding box of all shapes, or an error when there are none.
    pub fn content_bounds(&self) -> std::result::Result<Bounds, GeometryError> {
        let mut shapes = self.shapes.iter();
        let first = shapes.next().ok_or(GeometryError::EmptyVertices)?.bounds()?;
        shapes.try_fold(first, |acc, shape| -> std::result::Result<Bounds, GeometryError> {
            Ok(acc.union(&shape.bounds()?))
        })
    }
}
