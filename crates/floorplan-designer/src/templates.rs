//! # Shape Templates
//!
//! Constructors for the outlines the wizard offers: rectangles, L-shapes
//! (plain and mirrored) and U-shapes, plus the plot presets and house
//! templates built on top of them.
//!
//! All coordinates are world feet with y growing downward, so "top" means
//! smaller y. Vertex lists trace the outline continuously and never
//! self-intersect for valid parameters.

use floorplan_core::constants::DEFAULT_STROKE_MM;
use floorplan_core::{GeometryError, WorldPoint};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::model::{Color, Layer, Shape, ShapeMetadata, ShapeType};

/// Width and height in feet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
}

impl Dimensions {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

fn require_positive(name: &str, value: f64) -> Result<(), GeometryError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(GeometryError::non_positive(name, value))
    }
}

/// Creates a closed 4-vertex rectangle centered at `center`.
///
/// Vertices run top-left, top-right, bottom-right, bottom-left. `createdBy`
/// defaults to `wizard` when the supplied metadata does not set it.
pub fn create_rectangle(
    center: WorldPoint,
    dimensions: Dimensions,
    stroke_mm: f64,
    stroke_color: Color,
    layer: Layer,
    metadata: Option<ShapeMetadata>,
) -> Result<Shape, GeometryError> {
    require_positive("width", dimensions.width)?;
    require_positive("height", dimensions.height)?;

    let hw = dimensions.width / 2.0;
    let hh = dimensions.height / 2.0;
    let vertices = vec![
        WorldPoint::new(center.x - hw, center.y - hh),
        WorldPoint::new(center.x + hw, center.y - hh),
        WorldPoint::new(center.x + hw, center.y + hh),
        WorldPoint::new(center.x - hw, center.y + hh),
    ];

    let mut metadata = metadata.unwrap_or_default();
    if metadata.created_by.is_none() {
        metadata.created_by = Some(ShapeMetadata::CREATED_BY_WIZARD.to_string());
    }

    Ok(Shape::new(ShapeType::Rectangle, layer, stroke_mm, stroke_color, vertices)?
        .with_metadata(metadata))
}

/// Creates a 6-vertex L outline: a `width × height` box with a
/// `cut_width × cut_height` notch removed.
///
/// Without `mirror` the notch is taken from the bottom-right corner. With
/// `mirror` the outline is reflected across the vertical axis.
pub fn create_l_shape(
    center: WorldPoint,
    width: f64,
    height: f64,
    cut_width: f64,
    cut_height: f64,
    mirror: bool,
) -> Result<Vec<WorldPoint>, GeometryError> {
    require_positive("width", width)?;
    require_positive("height", height)?;
    require_positive("cut_width", cut_width)?;
    require_positive("cut_height", cut_height)?;
    if cut_width >= width || cut_height >= height {
        return Err(GeometryError::NotchTooLarge {
            width,
            height,
            notch_width: cut_width,
            notch_height: cut_height,
        });
    }

    let hw = width / 2.0;
    let hh = height / 2.0;
    let (cx, cy) = (center.x, center.y);

    let vertices = if mirror {
        vec![
            WorldPoint::new(cx - hw, cy - hh),
            WorldPoint::new(cx + hw, cy - hh),
            WorldPoint::new(cx + hw, cy - hh + cut_height),
            WorldPoint::new(cx - hw + cut_width, cy - hh + cut_height),
            WorldPoint::new(cx - hw + cut_width, cy + hh),
            WorldPoint::new(cx - hw, cy + hh),
        ]
    } else {
        vec![
            WorldPoint::new(cx - hw, cy - hh),
            WorldPoint::new(cx + hw, cy - hh),
            WorldPoint::new(cx + hw, cy + hh),
            WorldPoint::new(cx + hw - cut_width, cy + hh),
            WorldPoint::new(cx + hw - cut_width, cy - hh + cut_height),
            WorldPoint::new(cx - hw, cy - hh + cut_height),
        ]
    };
    Ok(vertices)
}

/// Creates an 8-vertex U outline: a `width × height` box with an
/// `inner_width × inner_height` notch centered horizontally.
///
/// The notch spans from `inner_height` below the top edge down to the bottom
/// edge, so the U opens between the two inner vertical edges.
pub fn create_u_shape(
    center: WorldPoint,
    width: f64,
    height: f64,
    inner_width: f64,
    inner_height: f64,
) -> Result<Vec<WorldPoint>, GeometryError> {
    require_positive("width", width)?;
    require_positive("height", height)?;
    require_positive("inner_width", inner_width)?;
    require_positive("inner_height", inner_height)?;
    if inner_width >= width || inner_height > height {
        return Err(GeometryError::NotchTooLarge {
            width,
            height,
            notch_width: inner_width,
            notch_height: inner_height,
        });
    }

    let hw = width / 2.0;
    let hh = height / 2.0;
    let hiw = inner_width / 2.0;
    let (cx, cy) = (center.x, center.y);

    Ok(vec![
        WorldPoint::new(cx - hw, cy - hh),
        WorldPoint::new(cx + hw, cy - hh),
        WorldPoint::new(cx + hw, cy + hh),
        WorldPoint::new(cx + hiw, cy + hh),
        WorldPoint::new(cx + hiw, cy - hh + inner_height),
        WorldPoint::new(cx - hiw, cy - hh + inner_height),
        WorldPoint::new(cx - hiw, cy + hh),
        WorldPoint::new(cx - hw, cy + hh),
    ])
}

/// Standard plot sizes offered by the plot step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlotPreset {
    #[serde(rename = "1-kanal")]
    OneKanal,
    #[serde(rename = "10-marla")]
    TenMarla,
    #[serde(rename = "5-marla")]
    FiveMarla,
    Custom(Dimensions),
}

impl PlotPreset {
    pub const STANDARD: [PlotPreset; 3] =
        [PlotPreset::OneKanal, PlotPreset::TenMarla, PlotPreset::FiveMarla];

    /// Distance from the world origin to the plot's top-left corner.
    pub const MARGIN_FT: f64 = 20.0;

    pub fn dimensions(&self) -> Dimensions {
        match self {
            PlotPreset::OneKanal => Dimensions::new(50.0, 90.0),
            PlotPreset::TenMarla => Dimensions::new(35.0, 65.0),
            PlotPreset::FiveMarla => Dimensions::new(25.0, 45.0),
            PlotPreset::Custom(dims) => *dims,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PlotPreset::OneKanal => "1 Kanal",
            PlotPreset::TenMarla => "10 Marla",
            PlotPreset::FiveMarla => "5 Marla",
            PlotPreset::Custom(_) => "Custom plot",
        }
    }

    /// Builds the boundary rectangle, offset [`Self::MARGIN_FT`] from the origin.
    pub fn build(&self) -> Result<Shape, GeometryError> {
        let dims = self.dimensions();
        let center = WorldPoint::new(
            dims.width / 2.0 + Self::MARGIN_FT,
            dims.height / 2.0 + Self::MARGIN_FT,
        );
        create_rectangle(
            center,
            dims,
            DEFAULT_STROKE_MM,
            Color::BOUNDARY,
            Layer::Boundary,
            Some(ShapeMetadata::wizard(self.label())),
        )
    }
}

impl FromStr for PlotPreset {
    type Err = String;

    /// Accepts a preset name (`1-kanal`, `10-marla`, `5-marla`) or `WxH` in feet.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "1-kanal" | "kanal" => Ok(PlotPreset::OneKanal),
            "10-marla" => Ok(PlotPreset::TenMarla),
            "5-marla" => Ok(PlotPreset::FiveMarla),
            other => {
                let (w, h) = other
                    .split_once('x')
                    .ok_or_else(|| format!("Unknown plot preset: {}", s))?;
                let width: f64 = w.trim().parse().map_err(|_| format!("Invalid width in '{}'", s))?;
                let height: f64 =
                    h.trim().parse().map_err(|_| format!("Invalid height in '{}'", s))?;
                Ok(PlotPreset::Custom(Dimensions::new(width, height)))
            }
        }
    }
}

impl fmt::Display for PlotPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dims = self.dimensions();
        write!(
            f,
            "{} ({} ft × {} ft, {} sq ft)",
            self.label(),
            dims.width,
            dims.height,
            dims.area()
        )
    }
}

/// House outlines offered by the house step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HouseTemplate {
    Rectangular,
    LShaped,
    MirrorL,
    UShaped,
}

impl HouseTemplate {
    pub const ALL: [HouseTemplate; 4] = [
        HouseTemplate::Rectangular,
        HouseTemplate::LShaped,
        HouseTemplate::MirrorL,
        HouseTemplate::UShaped,
    ];

    /// Where templates are placed, in world feet.
    pub const CENTER: WorldPoint = WorldPoint::new(50.0, 50.0);

    pub fn label(&self) -> &'static str {
        match self {
            HouseTemplate::Rectangular => "Rectangular house",
            HouseTemplate::LShaped => "L-shaped house",
            HouseTemplate::MirrorL => "Mirror L house",
            HouseTemplate::UShaped => "U-shaped house",
        }
    }

    /// Builds the building-layer outline for this template.
    pub fn build(&self) -> Result<Shape, GeometryError> {
        let center = Self::CENTER;
        let vertices = match self {
            HouseTemplate::Rectangular => {
                return create_rectangle(
                    center,
                    Dimensions::new(30.0, 40.0),
                    DEFAULT_STROKE_MM,
                    Color::BUILDING,
                    Layer::Building,
                    Some(ShapeMetadata::wizard(self.label())),
                );
            }
            HouseTemplate::LShaped => create_l_shape(center, 40.0, 40.0, 15.0, 15.0, false)?,
            HouseTemplate::MirrorL => create_l_shape(center, 40.0, 40.0, 15.0, 15.0, true)?,
            HouseTemplate::UShaped => create_u_shape(center, 50.0, 40.0, 20.0, 25.0)?,
        };

        Ok(Shape::new(
            ShapeType::Polygon,
            Layer::Building,
            DEFAULT_STROKE_MM,
            Color::BUILDING,
            vertices,
        )?
        .with_metadata(ShapeMetadata::wizard(self.label())))
    }
}

impl FromStr for HouseTemplate {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "rectangular" | "rect" => Ok(HouseTemplate::Rectangular),
            "l-shaped" | "l" => Ok(HouseTemplate::LShaped),
            "mirror-l" => Ok(HouseTemplate::MirrorL),
            "u-shaped" | "u" => Ok(HouseTemplate::UShaped),
            _ => Err(format!("Unknown house template: {}", s)),
        }
    }
}
