//! Constants shared across the wizard.
//!
//! The scale and paper constants are part of the export contract: project and
//! metadata files written by other implementations use the same values.

/// World feet per reference inch of print. `pixels_per_foot = dpi / PLOT_SCALE`.
pub const PLOT_SCALE: f64 = 3.1;

/// Millimeters per inch.
pub const MM_PER_INCH: f64 = 25.4;

/// A2 sheet width in millimeters (portrait).
pub const A2_WIDTH_MM: f64 = 420.0;

/// A2 sheet height in millimeters (portrait).
pub const A2_HEIGHT_MM: f64 = 594.0;

/// DPI of the on-screen editing canvas.
pub const DEFAULT_EDITING_DPI: f64 = 96.0;

/// Lower bound for the view scale.
pub const MIN_ZOOM: f64 = 0.1;

/// Upper bound for the view scale.
pub const MAX_ZOOM: f64 = 5.0;

/// Zoom factor applied by the zoom in/out buttons.
pub const ZOOM_STEP: f64 = 1.2;

/// Zoom factor applied per mouse-wheel notch.
pub const WHEEL_ZOOM_STEP: f64 = 1.1;

/// Default editing canvas width in pixels.
pub const DEFAULT_CANVAS_WIDTH: f64 = 1200.0;

/// Default editing canvas height in pixels.
pub const DEFAULT_CANVAS_HEIGHT: f64 = 800.0;

/// Padding used when fitting content into the view (fraction per side).
pub const VIEW_PADDING: f64 = 0.05;

/// Smallest grid spacing accepted, in feet. Keeps the line count across an
/// A2 sheet in the low thousands.
pub const MIN_GRID_SPACING_FT: f64 = 0.1;

/// Export DPI selected when nothing else is configured.
pub const DEFAULT_EXPORT_DPI: u32 = 300;

/// DPI choices offered by the export step.
pub const EXPORT_DPI_OPTIONS: [u32; 4] = [96, 150, 300, 600];

/// Stroke width used by wizard templates and drawing tools.
pub const DEFAULT_STROKE_MM: f64 = 0.25;

/// Version string written into project files.
pub const PROJECT_FILE_VERSION: &str = "1.0.0";
