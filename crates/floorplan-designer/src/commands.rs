//! Shape-collection commands and the policy deciding which of them are
//! recorded in the undo history.

use std::collections::HashSet;
use std::fmt;

use floorplan_core::{Error, Result, WorldPoint};

use crate::model::{Shape, ShapeId, ShapePatch};

/// A mutation of the shape collection.
///
/// Commands are plain values: [`DesignerCommand::apply`] either applies the
/// whole command or returns an error and leaves the collection untouched.
#[derive(Debug, Clone, PartialEq)]
#[allow(clippy::large_enum_variant)]
pub enum DesignerCommand {
    AddShape(Shape),
    DeleteShape(ShapeId),
    /// Deletes several shapes as one step.
    DeleteShapes(Vec<ShapeId>),
    UpdateShape { id: ShapeId, patch: ShapePatch },
    /// Moves every vertex of a shape by `delta` feet (drag step).
    MoveShape { id: ShapeId, delta: WorldPoint },
    /// Replaces the whole collection, e.g. when a project is loaded.
    ReplaceShapes(Vec<Shape>),
    ClearShapes,
    /// Marks the end of a pointer gesture. Changes nothing by itself.
    EndGesture,
}

/// Fieldless discriminant of [`DesignerCommand`], used as the policy key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    AddShape,
    DeleteShape,
    UpdateShape,
    MoveShape,
    ReplaceShapes,
    ClearShapes,
    EndGesture,
}

impl CommandKind {
    pub const ALL: [CommandKind; 7] = [
        CommandKind::AddShape,
        CommandKind::DeleteShape,
        CommandKind::UpdateShape,
        CommandKind::MoveShape,
        CommandKind::ReplaceShapes,
        CommandKind::ClearShapes,
        CommandKind::EndGesture,
    ];
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CommandKind::AddShape => "Add Shape",
            CommandKind::DeleteShape => "Delete Shape",
            CommandKind::UpdateShape => "Update Shape",
            CommandKind::MoveShape => "Move Shape",
            CommandKind::ReplaceShapes => "Replace Shapes",
            CommandKind::ClearShapes => "Clear Shapes",
            CommandKind::EndGesture => "End Gesture",
        };
        f.write_str(name)
    }
}

impl DesignerCommand {
    pub fn kind(&self) -> CommandKind {
        match self {
            DesignerCommand::AddShape(_) => CommandKind::AddShape,
            DesignerCommand::DeleteShape(_) | DesignerCommand::DeleteShapes(_) => {
                CommandKind::DeleteShape
            }
            DesignerCommand::UpdateShape { .. } => CommandKind::UpdateShape,
            DesignerCommand::MoveShape { .. } => CommandKind::MoveShape,
            DesignerCommand::ReplaceShapes(_) => CommandKind::ReplaceShapes,
            DesignerCommand::ClearShapes => CommandKind::ClearShapes,
            DesignerCommand::EndGesture => CommandKind::EndGesture,
        }
    }

    /// Applies the command to `shapes`.
    ///
    /// Fails with [`Error::ShapeNotFound`] for an unknown id, and with a
    /// geometry error when the result would violate a shape invariant. Adding
    /// a shape whose id is already present, or replacing the collection with
    /// one that repeats an id, is rejected.
    pub fn apply(&self, shapes: &mut Vec<Shape>) -> Result<()> {
        match self {
            DesignerCommand::AddShape(shape) => {
                shape.validate()?;
                if shapes.iter().any(|s| s.id() == shape.id()) {
                    return Err(Error::other(format!("Shape {} already exists", shape.id())));
                }
                shapes.push(shape.clone());
            }
            DesignerCommand::DeleteShape(id) => {
                let index = position(shapes, id)?;
                shapes.remove(index);
            }
            DesignerCommand::DeleteShapes(ids) => {
                for id in ids {
                    position(shapes, id)?;
                }
                shapes.retain(|s| !ids.contains(s.id()));
            }
            DesignerCommand::UpdateShape { id, patch } => {
                let index = position(shapes, id)?;
                shapes[index] = shapes[index].patched(patch)?;
            }
            DesignerCommand::MoveShape { id, delta } => {
                let index = position(shapes, id)?;
                let mut moved = shapes[index].clone();
                moved.translate(*delta);
                moved.validate()?;
                shapes[index] = moved;
            }
            DesignerCommand::ReplaceShapes(replacement) => {
                let mut seen = HashSet::new();
                for shape in replacement {
                    shape.validate()?;
                    if !seen.insert(shape.id()) {
                        return Err(Error::other(format!("Duplicate shape id {}", shape.id())));
                    }
                }
                *shapes = replacement.clone();
            }
            DesignerCommand::ClearShapes => shapes.clear(),
            DesignerCommand::EndGesture => {}
        }
        Ok(())
    }
}

fn position(shapes: &[Shape], id: &ShapeId) -> Result<usize> {
    shapes
        .iter()
        .position(|s| s.id() == id)
        .ok_or_else(|| Error::ShapeNotFound(id.to_string()))
}

/// Which command kinds take a history snapshot after being applied.
///
/// The default checkpoints discrete edits (add, delete, replace, clear) and
/// the end of a gesture, but not the individual update and move steps a drag
/// produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckpointPolicy {
    checkpointed: HashSet<CommandKind>,
}

impl CheckpointPolicy {
    /// Policy that checkpoints every command.
    pub fn every_command() -> Self {
        Self {
            checkpointed: CommandKind::ALL.into_iter().collect(),
        }
    }

    /// Policy that never checkpoints.
    pub fn never() -> Self {
        Self {
            checkpointed: HashSet::new(),
        }
    }

    /// Returns the policy with `kind` switched on or off.
    pub fn with(mut self, kind: CommandKind, checkpoint: bool) -> Self {
        if checkpoint {
            self.checkpointed.insert(kind);
        } else {
            self.checkpointed.remove(&kind);
        }
        self
    }

    pub fn should_checkpoint(&self, kind: CommandKind) -> bool {
        self.checkpointed.contains(&kind)
    }
}

impl Default for CheckpointPolicy {
    fn default() -> Self {
        Self::never()
            .with(CommandKind::AddShape, true)
            .with(CommandKind::DeleteShape, true)
            .with(CommandKind::ReplaceShapes, true)
            .with(CommandKind::ClearShapes, true)
            .with(CommandKind::EndGesture, true)
    }
}
