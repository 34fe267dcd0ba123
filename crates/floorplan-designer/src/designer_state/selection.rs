//! Selection operations for designer state.

use std::collections::HashSet;

use super::DesignerState;
use crate::model::{Shape, ShapeId};

impl DesignerState {
    pub fn selection(&self) -> &HashSet<ShapeId> {
        &self.selection
    }

    pub fn is_selected(&self, id: &ShapeId) -> bool {
        self.selection.contains(id)
    }

    /// Selected shapes in drawing order.
    pub fn selected_shapes(&self) -> impl Iterator<Item = &Shape> {
        self.shapes
            .iter()
            .filter(|s| self.selection.contains(s.id()))
    }

    /// Selects `id`. With `multi` the id's membership is toggled and the rest
    /// of the selection kept; otherwise it replaces the selection. Unknown ids
    /// are ignored.
    pub fn select_shape(&mut self, id: &ShapeId, multi: bool) -> bool {
        if self.shape(id).is_none() {
            tracing::debug!(id = %id, "ignoring selection of unknown shape");
            return false;
        }
        if multi {
            if !self.selection.remove(id) {
                self.selection.insert(id.clone());
            }
        } else {
            self.selection.clear();
            self.selection.insert(id.clone());
        }
        true
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    pub fn select_all(&mut self) {
        self.selection = self.shapes.iter().map(|s| s.id().clone()).collect();
    }

    /// Drops selected ids that no longer name a shape.
    pub(crate) fn prune_selection(&mut self) {
        let shapes = &self.shapes;
        self.selection
            .retain(|id| shapes.iter().any(|s| s.id() == id));
    }
}
