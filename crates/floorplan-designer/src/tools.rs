//! Pointer-driven drawing tools.
//!
//! A [`ToolSession`] turns pointer events in canvas pixels into
//! [`ToolAction`]s: shape commands, selection changes, pans and
//! measurements. Positions are converted to world feet through the viewport
//! and snapped per the current settings before any geometry is built.
//!
//! | Tool      | Gesture                   | Result                          |
//! |-----------|---------------------------|---------------------------------|
//! | select    | click / drag              | select, move selected shape     |
//! | rectangle | drag corner to corner     | `rectangle` shape               |
//! | line      | drag (Shift: axis-locked) | `line` shape                    |
//! | polygon   | click per vertex, finish  | `polygon` shape (≥ 3 vertices)  |
//! | freehand  | drag                      | `freehand` shape (≥ 2 vertices) |
//! | measure   | drag                      | distance in feet                |
//! | eraser    | click                     | delete top-most hit shape       |
//! | pan       | drag                      | view translation                |

use std::fmt;
use std::str::FromStr;

use floorplan_core::constants::DEFAULT_STROKE_MM;
use floorplan_core::{format_feet, CanvasPoint, GeometryError, PlanePoint, WorldPoint};
use serde::{Deserialize, Serialize};

use crate::commands::DesignerCommand;
use crate::model::{Color, Layer, Shape, ShapeId, ShapeMetadata, ShapeType};
use crate::snapping::{snap, GridSettings, SnapResult, SnapSettings};
use crate::templates::{create_rectangle, Dimensions};
use crate::viewport::Viewport;

/// Pick radius around the pointer, in canvas pixels.
pub const HIT_TOLERANCE_PX: f64 = 6.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolType {
    Select,
    Rectangle,
    Polygon,
    Line,
    Freehand,
    Measure,
    Eraser,
    Pan,
}

impl ToolType {
    pub const ALL: [ToolType; 8] = [
        ToolType::Select,
        ToolType::Rectangle,
        ToolType::Polygon,
        ToolType::Line,
        ToolType::Freehand,
        ToolType::Measure,
        ToolType::Eraser,
        ToolType::Pan,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ToolType::Select => "select",
            ToolType::Rectangle => "rectangle",
            ToolType::Polygon => "polygon",
            ToolType::Line => "line",
            ToolType::Freehand => "freehand",
            ToolType::Measure => "measure",
            ToolType::Eraser => "eraser",
            ToolType::Pan => "pan",
        }
    }

    /// Layer a shape drawn with this tool goes on.
    pub fn default_layer(&self) -> Layer {
        match self {
            ToolType::Rectangle => Layer::Boundary,
            ToolType::Polygon => Layer::Building,
            ToolType::Line | ToolType::Freehand => Layer::Paths,
            _ => Layer::Symbols,
        }
    }

    /// True for tools that create shapes.
    pub fn creates_shapes(&self) -> bool {
        matches!(
            self,
            ToolType::Rectangle | ToolType::Polygon | ToolType::Line | ToolType::Freehand
        )
    }
}

impl fmt::Display for ToolType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ToolType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ToolType::ALL
            .into_iter()
            .find(|tool| tool.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown tool: {}", s))
    }
}

/// Stroke and fill applied to shapes a tool creates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToolStyle {
    pub layer: Layer,
    pub stroke_mm: f64,
    pub stroke_color: Color,
    pub fill: Option<Color>,
}

impl ToolStyle {
    /// Default style for `layer`: its color, 0.25 mm, no fill.
    pub fn for_layer(layer: Layer) -> Self {
        Self {
            layer,
            stroke_mm: DEFAULT_STROKE_MM,
            stroke_color: layer.default_color(),
            fill: None,
        }
    }
}

/// A pointer event in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down {
        position: CanvasPoint,
        /// Shift held: axis-lock lines, toggle selection.
        constrain: bool,
    },
    Move {
        position: CanvasPoint,
        constrain: bool,
    },
    Up {
        position: CanvasPoint,
        constrain: bool,
    },
}

impl PointerEvent {
    pub fn position(&self) -> CanvasPoint {
        match self {
            PointerEvent::Down { position, .. }
            | PointerEvent::Move { position, .. }
            | PointerEvent::Up { position, .. } => *position,
        }
    }

    pub fn constrain(&self) -> bool {
        match self {
            PointerEvent::Down { constrain, .. }
            | PointerEvent::Move { constrain, .. }
            | PointerEvent::Up { constrain, .. } => *constrain,
        }
    }
}

/// Read-only view of the state a tool needs.
#[derive(Debug, Clone, Copy)]
pub struct ToolContext<'a> {
    pub viewport: &'a Viewport,
    pub snap: &'a SnapSettings,
    pub grid: &'a GridSettings,
    pub shapes: &'a [Shape],
}

impl ToolContext<'_> {
    /// Canvas pixel → world feet, then snapped.
    pub fn locate(&self, position: CanvasPoint) -> SnapResult {
        let world = self.viewport.canvas_to_world(position);
        snap(world, self.snap, self.grid, self.shapes, None)
    }

    /// Hit tolerance in world feet at the current zoom.
    pub fn hit_tolerance_ft(&self) -> f64 {
        HIT_TOLERANCE_PX / self.viewport.feet_to_canvas_px(1.0)
    }

    /// Top-most (last drawn) shape under `point`.
    pub fn hit(&self, point: WorldPoint) -> Option<&ShapeId> {
        let tolerance = self.hit_tolerance_ft();
        self.shapes
            .iter()
            .rev()
            .find(|shape| shape.hit_test(point, tolerance))
            .map(Shape::id)
    }
}

/// Result of a measure gesture.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    pub start: WorldPoint,
    pub end: WorldPoint,
    pub length_ft: f64,
}

impl Measurement {
    pub fn new(start: WorldPoint, end: WorldPoint) -> Self {
        Self {
            start,
            end,
            length_ft: start.distance_to(&end),
        }
    }

    pub fn label(&self) -> String {
        format!("{} ft", format_feet(self.length_ft))
    }
}

/// What a pointer event asks the designer to do.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolAction {
    Command(DesignerCommand),
    Select { id: ShapeId, multi: bool },
    ClearSelection,
    Pan { dx: f64, dy: f64 },
    Measured(Measurement),
}

#[derive(Debug, Clone, PartialEq, Default)]
enum Gesture {
    #[default]
    Idle,
    Drag {
        id: ShapeId,
        last: WorldPoint,
        moved: bool,
    },
    Rectangle {
        start: SnapResult,
        current: WorldPoint,
    },
    Line {
        start: SnapResult,
        current: WorldPoint,
    },
    Polygon {
        start: SnapResult,
        points: Vec<WorldPoint>,
    },
    Freehand {
        start: SnapResult,
        points: Vec<WorldPoint>,
    },
    Measure {
        start: WorldPoint,
        current: WorldPoint,
    },
    Pan {
        last: CanvasPoint,
    },
}

/// State of the active tool between pointer events.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolSession {
    tool: ToolType,
    style: ToolStyle,
    gesture: Gesture,
}

impl ToolSession {
    pub fn new(tool: ToolType) -> Self {
        Self {
            tool,
            style: ToolStyle::for_layer(tool.default_layer()),
            gesture: Gesture::Idle,
        }
    }

    pub fn tool(&self) -> ToolType {
        self.tool
    }

    pub fn style(&self) -> &ToolStyle {
        &self.style
    }

    pub fn set_style(&mut self, style: ToolStyle) {
        self.style = style;
    }

    /// True while a gesture is in progress.
    pub fn is_active(&self) -> bool {
        self.gesture != Gesture::Idle
    }

    /// Drops any gesture in progress without producing a shape.
    pub fn cancel(&mut self) {
        self.gesture = Gesture::Idle;
    }

    /// World-space outline of the gesture in progress, for rubber-band
    /// rendering.
    pub fn preview(&self) -> Option<Vec<WorldPoint>> {
        match &self.gesture {
            Gesture::Rectangle { start, current } => Some(corner_vertices(start.point, *current)),
            Gesture::Line { start, current } => Some(vec![start.point, *current]),
            Gesture::Measure { start, current } => Some(vec![*start, *current]),
            Gesture::Polygon { points, .. } | Gesture::Freehand { points, .. } => {
                Some(points.clone())
            }
            Gesture::Idle | Gesture::Drag { .. } | Gesture::Pan { .. } => None,
        }
    }

    /// Feeds one pointer event to the tool.
    pub fn handle(
        &mut self,
        event: &PointerEvent,
        ctx: &ToolContext<'_>,
    ) -> Result<Vec<ToolAction>, GeometryError> {
        match event {
            PointerEvent::Down {
                position,
                constrain,
            } => Ok(self.pointer_down(*position, *constrain, ctx)),
            PointerEvent::Move {
                position,
                constrain,
            } => Ok(self.pointer_move(*position, *constrain, ctx)),
            PointerEvent::Up {
                position,
                constrain,
            } => self.pointer_up(*position, *constrain, ctx),
        }
    }

    fn pointer_down(
        &mut self,
        position: CanvasPoint,
        constrain: bool,
        ctx: &ToolContext<'_>,
    ) -> Vec<ToolAction> {
        match self.tool {
            ToolType::Select => {
                let world = ctx.viewport.canvas_to_world(position);
                match ctx.hit(world) {
                    Some(id) => {
                        let id = id.clone();
                        self.gesture = Gesture::Drag {
                            id: id.clone(),
                            last: world,
                            moved: false,
                        };
                        vec![ToolAction::Select {
                            id,
                            multi: constrain,
                        }]
                    }
                    None => vec![ToolAction::ClearSelection],
                }
            }
            ToolType::Eraser => {
                let world = ctx.viewport.canvas_to_world(position);
                ctx.hit(world)
                    .map(|id| vec![ToolAction::Command(DesignerCommand::DeleteShape(id.clone()))])
                    .unwrap_or_default()
            }
            ToolType::Pan => {
                self.gesture = Gesture::Pan { last: position };
                Vec::new()
            }
            ToolType::Rectangle => {
                let start = ctx.locate(position);
                self.gesture = Gesture::Rectangle {
                    current: start.point,
                    start,
                };
                Vec::new()
            }
            ToolType::Line => {
                let start = ctx.locate(position);
                self.gesture = Gesture::Line {
                    current: start.point,
                    start,
                };
                Vec::new()
            }
            ToolType::Measure => {
                let start = ctx.locate(position).point;
                self.gesture = Gesture::Measure {
                    start,
                    current: start,
                };
                Vec::new()
            }
            ToolType::Freehand => {
                let start = ctx.locate(position);
                self.gesture = Gesture::Freehand {
                    points: vec![start.point],
                    start,
                };
                Vec::new()
            }
            ToolType::Polygon => {
                let next = ctx.locate(position);
                match &mut self.gesture {
                    Gesture::Polygon { points, .. } => {
                        if points.last() != Some(&next.point) {
                            points.push(next.point);
                        }
                    }
                    _ => {
                        self.gesture = Gesture::Polygon {
                            points: vec![next.point],
                            start: next,
                        };
                    }
                }
                Vec::new()
            }
        }
    }

    fn pointer_move(
        &mut self,
        position: CanvasPoint,
        constrain: bool,
        ctx: &ToolContext<'_>,
    ) -> Vec<ToolAction> {
        match &mut self.gesture {
            Gesture::Drag { id, last, moved } => {
                let world = ctx.viewport.canvas_to_world(position);
                let delta = world - *last;
                if delta == WorldPoint::ORIGIN {
                    return Vec::new();
                }
                *last = world;
                *moved = true;
                vec![ToolAction::Command(DesignerCommand::MoveShape {
                    id: id.clone(),
                    delta,
                })]
            }
            Gesture::Pan { last } => {
                let (dx, dy) = (position.x - last.x, position.y - last.y);
                if dx == 0.0 && dy == 0.0 {
                    return Vec::new();
                }
                *last = position;
                vec![ToolAction::Pan { dx, dy }]
            }
            Gesture::Rectangle { current, .. } | Gesture::Measure { current, .. } => {
                *current = ctx.locate(position).point;
                Vec::new()
            }
            Gesture::Line { start, current } => {
                let end = ctx.locate(position).point;
                *current = if constrain {
                    constrain_to_axis(start.point, end)
                } else {
                    end
                };
                Vec::new()
            }
            Gesture::Freehand { points, .. } => {
                let next = ctx.locate(position).point;
                if points.last() != Some(&next) {
                    points.push(next);
                }
                Vec::new()
            }
            Gesture::Polygon { .. } | Gesture::Idle => Vec::new(),
        }
    }

    fn pointer_up(
        &mut self,
        position: CanvasPoint,
        constrain: bool,
        ctx: &ToolContext<'_>,
    ) -> Result<Vec<ToolAction>, GeometryError> {
        // Polygons stay open across clicks until `finish`.
        if matches!(self.gesture, Gesture::Polygon { .. }) {
            return Ok(Vec::new());
        }

        let mut actions = self.pointer_move(position, constrain, ctx);
        match std::mem::take(&mut self.gesture) {
            Gesture::Drag { moved, .. } => {
                if moved {
                    actions.push(ToolAction::Command(DesignerCommand::EndGesture));
                }
            }
            Gesture::Rectangle { start, current } => {
                let width = (current.x - start.point.x).abs();
                let height = (current.y - start.point.y).abs();
                if width > 0.0 && height > 0.0 {
                    let shape = create_rectangle(
                        start.point.midpoint(&current),
                        Dimensions::new(width, height),
                        self.style.stroke_mm,
                        self.style.stroke_color,
                        self.style.layer,
                        Some(ShapeMetadata::tool(start.raw, start.point)),
                    )?
                    .with_fill(self.style.fill);
                    actions.push(ToolAction::Command(DesignerCommand::AddShape(shape)));
                } else {
                    tracing::debug!("rectangle gesture has zero area, discarded");
                }
            }
            Gesture::Line { start, current } => {
                if current != start.point {
                    let shape = self.build(ShapeType::Line, &start, vec![start.point, current])?;
                    actions.push(ToolAction::Command(DesignerCommand::AddShape(shape)));
                }
            }
            Gesture::Freehand { start, points } => {
                if points.len() >= ShapeType::Freehand.min_vertices() {
                    let shape = self.build(ShapeType::Freehand, &start, points)?;
                    actions.push(ToolAction::Command(DesignerCommand::AddShape(shape)));
                } else {
                    tracing::debug!("freehand stroke too short, discarded");
                }
            }
            Gesture::Measure { start, current } => {
                actions.push(ToolAction::Measured(Measurement::new(start, current)));
            }
            Gesture::Polygon { .. } | Gesture::Pan { .. } | Gesture::Idle => {}
        }
        Ok(actions)
    }

    /// Completes a polygon (double-click or Enter). Fewer than three vertices
    /// discards the gesture and produces nothing.
    pub fn finish(&mut self) -> Result<Option<ToolAction>, GeometryError> {
        match std::mem::take(&mut self.gesture) {
            Gesture::Polygon { start, points } => {
                if points.len() < ShapeType::Polygon.min_vertices() {
                    tracing::debug!(vertices = points.len(), "polygon too short, discarded");
                    return Ok(None);
                }
                let shape = self.build(ShapeType::Polygon, &start, points)?;
                Ok(Some(ToolAction::Command(DesignerCommand::AddShape(shape))))
            }
            other => {
                self.gesture = other;
                Ok(None)
            }
        }
    }

    fn build(
        &self,
        shape_type: ShapeType,
        start: &SnapResult,
        vertices: Vec<WorldPoint>,
    ) -> Result<Shape, GeometryError> {
        Ok(Shape::new(
            shape_type,
            self.style.layer,
            self.style.stroke_mm,
            self.style.stroke_color,
            vertices,
        )?
        .with_fill(self.style.fill)
        .with_metadata(ShapeMetadata::tool(start.raw, start.point)))
    }
}

/// Forces the segment `start`→`end` onto its dominant axis.
pub fn constrain_to_axis(start: WorldPoint, end: WorldPoint) -> WorldPoint {
    if (end.x - start.x).abs() >= (end.y - start.y).abs() {
        WorldPoint::new(end.x, start.y)
    } else {
        WorldPoint::new(start.x, end.y)
    }
}

/// Rectangle vertices spanned by two opposite corners: TL, TR, BR, BL.
fn corner_vertices(a: WorldPoint, b: WorldPoint) -> Vec<WorldPoint> {
    let (min_x, max_x) = (a.x.min(b.x), a.x.max(b.x));
    let (min_y, max_y) = (a.y.min(b.y), a.y.max(b.y));
    vec![
        WorldPoint::new(min_x, min_y),
        WorldPoint::new(max_x, min_y),
        WorldPoint::new(max_x, max_y),
        WorldPoint::new(min_x, max_y),
    ]
}
