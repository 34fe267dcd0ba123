//! # Floorplan Core
//!
//! Units, scaling laws, typed coordinate spaces and error types shared by the
//! floor-plan wizard crates.
//!
//! World geometry is stored in feet. Two pixel spaces are derived from it:
//! export pixels (an A2 sheet at a chosen DPI) and editing pixels (the
//! on-screen canvas, including pan and zoom). Every conversion goes through
//! [`units::pixels_per_foot`], so DPI, plot scale and zoom stay independent.

pub mod constants;
pub mod error;
pub mod point;
pub mod units;
pub mod view;

pub use error::{Error, GeometryError, Result};
pub use point::{CanvasPoint, ExportPoint, PlanePoint, WorldPoint};
pub use units::{
    a2_dimensions, canvas_to_world, distance, export_to_world, format_feet, pixels_per_foot,
    stroke_mm_to_px, world_to_canvas, world_to_export, PixelDimensions,
};
pub use view::ViewTransform;
