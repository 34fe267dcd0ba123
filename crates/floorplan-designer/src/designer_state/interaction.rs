//! Pointer events routed through the active tool.

use floorplan_core::Result;

use super::DesignerState;
use crate::annotations::{edge_labels, handles, EdgeLabel, Handle};
use crate::tools::{PointerEvent, ToolAction, ToolContext, ToolStyle};

impl DesignerState {
    /// Feeds a pointer event to the active tool (or the pan tool while pan
    /// mode is on) and applies what it produces.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> Result<()> {
        let ctx = ToolContext {
            viewport: &self.viewport,
            snap: &self.snap,
            grid: &self.grid,
            shapes: &self.shapes,
        };
        let session = if self.pan_mode {
            &mut self.pan_session
        } else {
            &mut self.session
        };
        let actions = session.handle(&event, &ctx)?;
        self.apply_actions(actions)
    }

    /// Completes a multi-click gesture such as a polygon.
    pub fn finish_gesture(&mut self) -> Result<()> {
        match self.session.finish()? {
            Some(action) => self.apply_actions(vec![action]),
            None => Ok(()),
        }
    }

    pub fn cancel_gesture(&mut self) {
        self.session.cancel();
        self.pan_session.cancel();
    }

    pub fn set_tool_style(&mut self, style: ToolStyle) {
        self.session.set_style(style);
    }

    fn apply_actions(&mut self, actions: Vec<ToolAction>) -> Result<()> {
        for action in actions {
            match action {
                ToolAction::Command(command) => self.dispatch(command)?,
                ToolAction::Select { id, multi } => {
                    self.select_shape(&id, multi);
                }
                ToolAction::ClearSelection => self.clear_selection(),
                ToolAction::Pan { dx, dy } => self.viewport.pan_by(dx, dy),
                ToolAction::Measured(measurement) => {
                    tracing::debug!(length = %measurement.label(), "measured");
                    self.last_measurement = Some(measurement);
                }
            }
        }
        Ok(())
    }

    /// Edge-length labels for every shape.
    pub fn edge_labels(&self) -> Vec<(&crate::model::ShapeId, Vec<EdgeLabel>)> {
        self.shapes
            .iter()
            .map(|s| (s.id(), edge_labels(s)))
            .collect()
    }

    /// Edit handles for the selected shapes.
    pub fn selection_handles(&self) -> Vec<Handle> {
        self.selected_shapes().flat_map(handles).collect()
    }
}
