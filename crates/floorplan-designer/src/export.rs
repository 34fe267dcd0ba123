//! A2 export: metadata JSON, project JSON and a rendered PNG.
//!
//! The JSON files never depend on the renderer. If a surface cannot be
//! acquired or the PNG cannot be encoded, the failure is logged and reported
//! in the [`ExportSummary`] while the JSON files are still written.

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use floorplan_core::constants::{EXPORT_DPI_OPTIONS, PLOT_SCALE};
use floorplan_core::{a2_dimensions, ExportPoint};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::model::Shape;
use crate::renderer::{render_plan, PixmapProvider, SurfaceProvider};
use crate::serialization::ProjectFile;

/// Describes how an exported image maps back to world feet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub dpi: u32,
    pub image_width_px: u32,
    pub image_height_px: u32,
    pub plot_scale: f64,
    pub export_origin: ExportPoint,
    pub timestamp: DateTime<Utc>,
}

impl ExportMetadata {
    /// Metadata for an A2 export at `dpi` with the origin at the top-left pixel.
    pub fn new(dpi: u32, timestamp: DateTime<Utc>) -> Self {
        let dims = a2_dimensions(dpi as f64);
        Self {
            dpi,
            image_width_px: dims.width,
            image_height_px: dims.height,
            plot_scale: PLOT_SCALE,
            export_origin: ExportPoint::ORIGIN,
            timestamp,
        }
    }
}

/// Files written by one export.
#[derive(Debug, Clone)]
pub struct ExportSummary {
    pub metadata: ExportMetadata,
    pub metadata_path: PathBuf,
    pub project_path: PathBuf,
    /// `None` when rendering was unavailable.
    pub image_path: Option<PathBuf>,
    /// Why the image is missing, if it is.
    pub render_error: Option<String>,
}

impl ExportSummary {
    pub fn is_complete(&self) -> bool {
        self.image_path.is_some()
    }
}

pub struct Exporter {
    dpi: u32,
    out_dir: PathBuf,
    provider: Box<dyn SurfaceProvider>,
}

impl Exporter {
    /// Exporter writing into `out_dir` using the tiny-skia renderer.
    pub fn new(dpi: u32, out_dir: impl Into<PathBuf>) -> Self {
        Self::with_provider(dpi, out_dir, Box::new(PixmapProvider))
    }

    pub fn with_provider(
        dpi: u32,
        out_dir: impl Into<PathBuf>,
        provider: Box<dyn SurfaceProvider>,
    ) -> Self {
        Self {
            dpi,
            out_dir: out_dir.into(),
            provider,
        }
    }

    pub fn dpi(&self) -> u32 {
        self.dpi
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Writes `floorplan-metadata-<ts>.json`, `floorplan-project-<ts>.json`
    /// and, when rendering works, `floorplan-a2-<dpi>dpi-<ts>.png`.
    pub fn export(&self, shapes: &[Shape]) -> Result<ExportSummary> {
        if self.dpi == 0 {
            bail!("Export DPI must be positive");
        }
        if !EXPORT_DPI_OPTIONS.contains(&self.dpi) {
            tracing::warn!(dpi = self.dpi, "non-standard export DPI");
        }

        std::fs::create_dir_all(&self.out_dir).with_context(|| {
            format!("Failed to create output directory {}", self.out_dir.display())
        })?;

        let now = Utc::now();
        let stamp = now.timestamp_millis();
        let metadata = ExportMetadata::new(self.dpi, now);

        let metadata_path = self.out_dir.join(format!("floorplan-metadata-{}.json", stamp));
        let json =
            serde_json::to_string_pretty(&metadata).context("Failed to serialize export metadata")?;
        std::fs::write(&metadata_path, json).context("Failed to write export metadata")?;

        let project_path = self.out_dir.join(ProjectFile::default_file_name(now));
        ProjectFile::new(shapes.to_vec()).save_to_file(&project_path)?;

        let image_path = self.out_dir.join(format!("floorplan-a2-{}dpi-{}.png", self.dpi, stamp));
        let (image_path, render_error) = match self.render_png(shapes, &image_path) {
            Ok(()) => (Some(image_path), None),
            Err(e) => {
                tracing::warn!("Rendering unavailable, exported JSON only: {:#}", e);
                (None, Some(format!("{:#}", e)))
            }
        };

        tracing::info!(
            dpi = self.dpi,
            width = metadata.image_width_px,
            height = metadata.image_height_px,
            dir = %self.out_dir.display(),
            "export finished"
        );

        Ok(ExportSummary {
            metadata,
            metadata_path,
            project_path,
            image_path,
            render_error,
        })
    }

    fn render_png(&self, shapes: &[Shape], path: &Path) -> Result<()> {
        let size = a2_dimensions(self.dpi as f64);
        let mut surface = self.provider.acquire(size)?;
        render_plan(surface.as_mut(), shapes, self.dpi as f64, ExportPoint::ORIGIN);
        let png = surface.finish_png()?;
        std::fs::write(path, png).context("Failed to write PNG")?;
        Ok(())
    }
}
