//! # Floorplan Wizard
//!
//! A guided floor-plan editor core: pick a plot size, drop a house outline,
//! sketch details, and export an A2 sheet at a chosen DPI.
//!
//! ## Architecture
//!
//! The wizard is organized as a workspace with multiple crates:
//!
//! 1. **floorplan-core** - Units, scaling laws, typed points, errors
//! 2. **floorplan-designer** - Shapes, templates, snapping, tools, state, export
//! 3. **floorplan-settings** - Persisted configuration (TOML/JSON)
//! 4. **floorplan** - This crate: re-exports, logging and the CLI
//!
//! ## Scaling
//!
//! Geometry is stored in feet. `pixels_per_foot = dpi / 3.1` maps it to
//! export pixels; the editing canvas applies pan and zoom on top of the same
//! law at 96 DPI.

pub mod cli;

pub use floorplan_core as core;
pub use floorplan_designer as designer;
pub use floorplan_settings as settings;

pub use floorplan_core::{
    a2_dimensions, pixels_per_foot, CanvasPoint, Error, ExportPoint, GeometryError,
    PixelDimensions, Result, ViewTransform, WorldPoint,
};

pub use floorplan_designer::{
    DesignerCommand, DesignerState, ExportMetadata, ExportSummary, Exporter, HouseTemplate,
    PlotPreset, ProjectFile, Shape, ShapeType, ToolType, WizardStep,
};

pub use floorplan_settings::{Config, SettingsError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Output on stderr, so stdout stays free for command results
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
