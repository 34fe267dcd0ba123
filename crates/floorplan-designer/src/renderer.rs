//! Plan renderer
//! Draws shapes onto a render surface in export pixels using tiny-skia.
//!
//! The surface is a collaborator: anything implementing [`RenderSurface`]
//! can receive a plan. [`PixmapSurface`] is the software implementation used
//! for PNG export. Acquiring a surface may fail (zero or oversized
//! dimensions); callers are expected to degrade rather than abort.

use floorplan_core::{
    stroke_mm_to_px, world_to_export, Error, ExportPoint, PixelDimensions, Result,
};
use tiny_skia::{FillRule, LineCap, LineJoin, Paint, PathBuilder, Pixmap, Stroke, Transform};

use crate::model::{Color, Shape};

/// Largest surface the software renderer will allocate (about 600 MB RGBA).
pub const MAX_SURFACE_PIXELS: u64 = 150_000_000;

/// Paint settings for one polyline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathStyle {
    pub stroke: Color,
    pub stroke_width_px: f64,
    pub fill: Option<Color>,
}

/// A drawing target in pixel space.
pub trait RenderSurface {
    fn size(&self) -> PixelDimensions;

    /// Starts a frame by filling everything with `background`.
    fn begin(&mut self, background: Color);

    /// Strokes (and optionally fills) the polyline through `points`.
    fn draw_path(&mut self, points: &[ExportPoint], closed: bool, style: &PathStyle);

    /// Finishes the frame and returns it PNG-encoded.
    fn finish_png(&self) -> Result<Vec<u8>>;
}

/// Source of render surfaces, so export can run against any backend.
pub trait SurfaceProvider {
    fn acquire(&self, size: PixelDimensions) -> Result<Box<dyn RenderSurface>>;
}

/// Hands out [`PixmapSurface`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct PixmapProvider;

impl SurfaceProvider for PixmapProvider {
    fn acquire(&self, size: PixelDimensions) -> Result<Box<dyn RenderSurface>> {
        Ok(Box::new(PixmapSurface::new(size)?))
    }
}

/// CPU raster surface backed by a tiny-skia pixmap.
pub struct PixmapSurface {
    pixmap: Pixmap,
}

impl PixmapSurface {
    pub fn new(size: PixelDimensions) -> Result<Self> {
        let pixels = size.width as u64 * size.height as u64;
        if pixels > MAX_SURFACE_PIXELS {
            return Err(Error::RenderUnavailable(format!(
                "{} exceeds the {} pixel limit",
                size, MAX_SURFACE_PIXELS
            )));
        }
        let pixmap = Pixmap::new(size.width, size.height)
            .ok_or_else(|| Error::RenderUnavailable(format!("cannot allocate {}", size)))?;
        Ok(Self { pixmap })
    }

    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    /// Unpremultiplied RGBA of one pixel, if in range.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        self.pixmap.pixel(x, y).map(|p| {
            let c = p.demultiply();
            Color::rgba(c.red(), c.green(), c.blue(), c.alpha())
        })
    }
}

fn to_skia(color: Color) -> tiny_skia::Color {
    tiny_skia::Color::from_rgba8(color.r, color.g, color.b, color.a)
}

impl RenderSurface for PixmapSurface {
    fn size(&self) -> PixelDimensions {
        PixelDimensions {
            width: self.pixmap.width(),
            height: self.pixmap.height(),
        }
    }

    fn begin(&mut self, background: Color) {
        self.pixmap.fill(to_skia(background));
    }

    fn draw_path(&mut self, points: &[ExportPoint], closed: bool, style: &PathStyle) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        let mut pb = PathBuilder::new();
        pb.move_to(first.x as f32, first.y as f32);
        for p in rest {
            pb.line_to(p.x as f32, p.y as f32);
        }
        if closed {
            pb.close();
        }
        let Some(path) = pb.finish() else {
            return;
        };

        let mut paint = Paint::default();
        paint.anti_alias = true;

        if let Some(fill) = style.fill.filter(|_| closed) {
            paint.set_color(to_skia(fill));
            self.pixmap
                .fill_path(&path, &paint, FillRule::EvenOdd, Transform::identity(), None);
        }

        paint.set_color(to_skia(style.stroke));
        let stroke = Stroke {
            width: style.stroke_width_px as f32,
            line_cap: LineCap::Round,
            line_join: LineJoin::Miter,
            ..Default::default()
        };
        self.pixmap
            .stroke_path(&path, &paint, &stroke, Transform::identity(), None);
    }

    fn finish_png(&self) -> Result<Vec<u8>> {
        self.pixmap
            .encode_png()
            .map_err(|e| Error::RenderUnavailable(format!("PNG encoding failed: {}", e)))
    }
}

/// Draws every shape onto `surface` at `dpi`, white background.
///
/// Vertices go through `world_to_export` with `origin`; stroke widths through
/// `stroke_mm_to_px`. Closed types are closed and filled when they have a fill.
pub fn render_plan(surface: &mut dyn RenderSurface, shapes: &[Shape], dpi: f64, origin: ExportPoint) {
    surface.begin(Color::WHITE);
    for shape in shapes {
        let points: Vec<ExportPoint> = shape
            .vertices_ft
            .iter()
            .map(|v| world_to_export(*v, dpi, origin))
            .collect();
        let style = PathStyle {
            stroke: shape.stroke_color,
            stroke_width_px: stroke_mm_to_px(shape.stroke_mm, dpi),
            fill: shape.fill,
        };
        surface.draw_path(&points, shape.is_closed(), &style);
    }
    tracing::debug!(shapes = shapes.len(), dpi, "rendered plan");
}
