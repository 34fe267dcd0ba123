//! Designer state: the single store the wizard UI drives.
//!
//! This module is split into submodules:
//! - `shapes`: shape commands, templates and queries
//! - `selection`: selection set operations
//! - `viewport`: zoom, pan, grid and snap controls
//! - `interaction`: pointer events routed through the active tool
//! - `file_io`: project save/load and export
//!
//! Every change to the shape collection goes through [`DesignerState::dispatch`],
//! which applies a [`DesignerCommand`] and consults the [`CheckpointPolicy`]
//! to decide whether the result becomes an undo step.

mod file_io;
mod interaction;
mod selection;
mod shapes;
mod viewport;

use std::collections::HashSet;
use std::path::PathBuf;

use floorplan_core::Result;

use crate::commands::{CheckpointPolicy, CommandKind, DesignerCommand};
use crate::history::{History, DEFAULT_HISTORY_CAPACITY};
use crate::model::{Shape, ShapeId};
use crate::snapping::{GridSettings, SnapSettings};
use crate::tools::{Measurement, ToolSession, ToolType};
use crate::viewport::Viewport;
use crate::wizard::WizardStep;

/// Designer state for UI integration
#[derive(Debug, Clone)]
pub struct DesignerState {
    shapes: Vec<Shape>,
    selection: HashSet<ShapeId>,
    active_tool: ToolType,
    session: ToolSession,
    pan_session: ToolSession,
    current_step: WizardStep,
    pub viewport: Viewport,
    grid: GridSettings,
    snap: SnapSettings,
    pub show_grid: bool,
    pub pan_mode: bool,
    history: History,
    policy: CheckpointPolicy,
    last_measurement: Option<Measurement>,
    pub current_file_path: Option<PathBuf>,
    pub is_modified: bool,
    pub design_name: String,
}

impl DesignerState {
    /// Creates an empty state: no shapes, select tool, plot step, default
    /// view and settings, history holding the empty collection.
    pub fn new() -> Self {
        Self::with_history(DEFAULT_HISTORY_CAPACITY, CheckpointPolicy::default())
    }

    pub fn with_history(capacity: usize, policy: CheckpointPolicy) -> Self {
        Self {
            shapes: Vec::new(),
            selection: HashSet::new(),
            active_tool: ToolType::Select,
            session: ToolSession::new(ToolType::Select),
            pan_session: ToolSession::new(ToolType::Pan),
            current_step: WizardStep::default(),
            viewport: Viewport::default(),
            grid: GridSettings::default(),
            snap: SnapSettings::default(),
            show_grid: true,
            pan_mode: false,
            history: History::new(&[], capacity),
            policy,
            last_measurement: None,
            current_file_path: None,
            is_modified: false,
            design_name: "Untitled".to_string(),
        }
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn shape(&self, id: &ShapeId) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.id() == id)
    }

    pub fn active_tool(&self) -> ToolType {
        self.active_tool
    }

    /// Switches tools. Any gesture in progress is dropped, and leaving the
    /// select tool clears the selection.
    pub fn set_active_tool(&mut self, tool: ToolType) {
        if tool != ToolType::Select {
            self.selection.clear();
        }
        let style = if tool == self.active_tool {
            Some(*self.session.style())
        } else {
            None
        };
        self.active_tool = tool;
        self.session = ToolSession::new(tool);
        if let Some(style) = style {
            self.session.set_style(style);
        }
        tracing::debug!(tool = %tool, "active tool changed");
    }

    pub fn tool_session(&self) -> &ToolSession {
        &self.session
    }

    pub fn current_step(&self) -> WizardStep {
        self.current_step
    }

    pub fn set_current_step(&mut self, step: WizardStep) {
        self.current_step = step;
    }

    /// Advances the wizard; returns false on the last step.
    pub fn next_step(&mut self) -> bool {
        match self.current_step.next() {
            Some(step) => {
                self.current_step = step;
                true
            }
            None => false,
        }
    }

    /// Goes back one step; returns false on the first step.
    pub fn previous_step(&mut self) -> bool {
        match self.current_step.previous() {
            Some(step) => {
                self.current_step = step;
                true
            }
            None => false,
        }
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn checkpoint_policy(&self) -> &CheckpointPolicy {
        &self.policy
    }

    pub fn set_checkpoint_policy(&mut self, policy: CheckpointPolicy) {
        self.policy = policy;
    }

    pub fn set_history_capacity(&mut self, capacity: usize) {
        self.history.set_capacity(capacity);
    }

    /// Most recent measure-tool result.
    pub fn last_measurement(&self) -> Option<&Measurement> {
        self.last_measurement.as_ref()
    }

    /// Applies `command` to the shape collection.
    ///
    /// On error nothing changes. On success the selection drops ids that no
    /// longer exist and, if the policy says so, a history checkpoint is taken.
    pub fn dispatch(&mut self, command: DesignerCommand) -> Result<()> {
        let kind = command.kind();
        command.apply(&mut self.shapes)?;

        if matches!(
            kind,
            CommandKind::DeleteShape | CommandKind::ReplaceShapes | CommandKind::ClearShapes
        ) {
            self.prune_selection();
        }
        if self.policy.should_checkpoint(kind) {
            self.history.checkpoint(&self.shapes);
        }
        if kind != CommandKind::EndGesture {
            self.is_modified = true;
        }
        tracing::debug!(command = %kind, shapes = self.shapes.len(), "command applied");
        Ok(())
    }

    /// Restores the previous snapshot. Returns false at the oldest one.
    pub fn undo(&mut self) -> bool {
        match self.history.undo() {
            Some(snapshot) => {
                self.restore(snapshot);
                true
            }
            None => false,
        }
    }

    /// Restores the next snapshot. Returns false at the newest one.
    pub fn redo(&mut self) -> bool {
        match self.history.redo() {
            Some(snapshot) => {
                self.restore(snapshot);
                true
            }
            None => false,
        }
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    fn restore(&mut self, snapshot: Vec<Shape>) {
        self.shapes = snapshot;
        self.session.cancel();
        self.prune_selection();
        self.is_modified = true;
    }

    /// Returns to the initial state, keeping the canvas size and history
    /// configuration.
    pub fn reset(&mut self) {
        let mut fresh = Self::with_history(self.history.capacity(), self.policy.clone());
        fresh
            .viewport
            .set_canvas_size(self.viewport.canvas_width(), self.viewport.canvas_height());
        *self = fresh;
        tracing::info!("designer state reset");
    }
}

impl Default for DesignerState {
    fn default() -> Self {
        Self::new()
    }
}
