//! Error handling for the floor-plan wizard
//!
//! Geometry and scaling functions are total over well-formed input. Anything
//! that can be handed malformed input from outside (shape constructors, file
//! loading, property edits) reports it through [`GeometryError`] instead of
//! producing silently wrong geometry.
//!
//! All error types use `thiserror`.

use thiserror::Error;

/// Invalid-input conditions detected by shape constructors and validators.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// A shape or point list has no vertices
    #[error("Vertex list is empty")]
    EmptyVertices,

    /// A shape has fewer vertices than its type requires
    #[error("{shape_type} needs at least {required} vertices, got {actual}")]
    TooFewVertices {
        /// The shape type name.
        shape_type: String,
        /// Minimum vertex count for the type.
        required: usize,
        /// Vertex count supplied.
        actual: usize,
    },

    /// A width, height or similar dimension is zero, negative or not finite
    #[error("Dimension '{name}' must be positive, got {value}")]
    NonPositiveDimension {
        /// Name of the offending parameter.
        name: String,
        /// The supplied value.
        value: f64,
    },

    /// A notch cut from an outline is as large as the outline itself
    #[error("Notch {notch_width}x{notch_height} does not fit inside {width}x{height}")]
    NotchTooLarge {
        /// Outline width.
        width: f64,
        /// Outline height.
        height: f64,
        /// Notch width.
        notch_width: f64,
        /// Notch height.
        notch_height: f64,
    },

    /// Stroke widths are physical and must be positive
    #[error("Stroke width must be positive, got {0} mm")]
    NonPositiveStroke(f64),

    /// Grid spacing must be positive
    #[error("Grid spacing must be positive, got {0} ft")]
    NonPositiveSpacing(f64),

    /// Grid spacing below the supported minimum
    #[error("Grid spacing {spacing} ft is below the minimum of {min} ft")]
    SpacingTooSmall { spacing: f64, min: f64 },

    /// A coordinate is NaN or infinite
    #[error("Non-finite coordinate in {0}")]
    NonFinite(String),

    /// A color string could not be parsed
    #[error("Invalid color '{0}', expected #RRGGBB or #RRGGBBAA")]
    InvalidColor(String),
}

impl GeometryError {
    /// Shorthand for [`GeometryError::NonPositiveDimension`].
    pub fn non_positive(name: impl Into<String>, value: f64) -> Self {
        GeometryError::NonPositiveDimension {
            name: name.into(),
            value,
        }
    }
}

/// Main error type for the wizard
///
/// A unified error type used by the public APIs of the designer crate.
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid geometry input
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// A command referenced a shape id that is not in the document
    #[error("Shape not found: {0}")]
    ShapeNotFound(String),

    /// The render surface could not be created or encoded
    #[error("Render surface unavailable: {0}")]
    RenderUnavailable(String),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is an invalid-geometry error
    pub fn is_geometry_error(&self) -> bool {
        matches!(self, Error::Geometry(_))
    }

    /// Check if this is a missing-shape error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::ShapeNotFound(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
