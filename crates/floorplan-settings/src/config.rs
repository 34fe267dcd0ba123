//! Configuration for the floor-plan wizard
//!
//! Configuration is organized into sections:
//! - Editor (canvas size, grid visibility)
//! - Grid and snapping defaults
//! - Export (DPI, output directory)
//! - Undo history (depth, checkpoint granularity)
//!
//! Files are TOML or JSON, chosen by extension. Every section is optional in
//! a file; missing sections and keys take their defaults. A config is
//! validated after loading and before saving.

use floorplan_core::constants::{
    DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, DEFAULT_EXPORT_DPI, EXPORT_DPI_OPTIONS,
};
use floorplan_designer::{
    CheckpointPolicy, CommandKind, DesignerState, GridSettings, SnapSettings,
    DEFAULT_HISTORY_CAPACITY,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{SettingsError, SettingsResult};

/// Directory under the platform config dir holding `config.toml`.
pub const APP_DIR_NAME: &str = "floorplan-wizard";

/// On-disk format, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Json,
}

impl ConfigFormat {
    pub fn from_path(path: &Path) -> SettingsResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Ok(ConfigFormat::Toml),
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(ConfigFormat::Json),
            other => Err(SettingsError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}

/// Canvas preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    /// Canvas width in pixels
    pub canvas_width: f64,
    /// Canvas height in pixels
    pub canvas_height: f64,
    /// Draw the background grid
    pub show_grid: bool,
    /// Center the A2 sheet in the canvas on startup
    pub center_sheet: bool,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            canvas_width: DEFAULT_CANVAS_WIDTH,
            canvas_height: DEFAULT_CANVAS_HEIGHT,
            show_grid: true,
            center_sheet: false,
        }
    }
}

/// Export defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    /// One of 96, 150, 300, 600
    pub dpi: u32,
    /// Where export files are written
    pub output_directory: PathBuf,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            dpi: DEFAULT_EXPORT_DPI,
            output_directory: dirs::document_dir()
                .or_else(dirs::home_dir)
                .unwrap_or_else(|| PathBuf::from(".")),
        }
    }
}

/// Undo history preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistorySettings {
    /// Number of snapshots kept
    pub capacity: usize,
    /// Record every property edit and drag step, not just finished gestures
    pub checkpoint_updates: bool,
}

impl HistorySettings {
    /// Checkpoint policy these settings describe.
    pub fn policy(&self) -> CheckpointPolicy {
        CheckpointPolicy::default()
            .with(CommandKind::UpdateShape, self.checkpoint_updates)
            .with(CommandKind::MoveShape, self.checkpoint_updates)
    }
}

impl Default for HistorySettings {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_HISTORY_CAPACITY,
            checkpoint_updates: false,
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub editor: EditorSettings,
    pub grid: GridSettings,
    pub snap: SnapSettings,
    pub export: ExportSettings,
    pub history: HistorySettings,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// `<config_dir>/floorplan-wizard/config.toml`
    pub fn default_path() -> SettingsResult<PathBuf> {
        let base = dirs::config_dir().ok_or_else(|| {
            SettingsError::ConfigDirectory("no config directory on this platform".to_string())
        })?;
        Ok(base.join(APP_DIR_NAME).join("config.toml"))
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = ConfigFormat::from_path(path)?;
        let content = std::fs::read_to_string(path).map_err(|e| SettingsError::LoadError {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        let config: Self = match format {
            ConfigFormat::Json => serde_json::from_str(&content)?,
            ConfigFormat::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        tracing::debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Loads `path` (or the default path) if it exists, otherwise returns the
    /// defaults. A file that exists but is invalid is still an error.
    pub fn load_or_default(path: Option<&Path>) -> SettingsResult<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match Self::default_path() {
                Ok(path) => path,
                Err(e) => {
                    tracing::warn!("{}, using default settings", e);
                    return Ok(Self::default());
                }
            },
        };

        if path.exists() {
            Self::load_from_file(&path)
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Save config to file (JSON or TOML), creating parent directories.
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match ConfigFormat::from_path(path)? {
            ConfigFormat::Json => serde_json::to_string_pretty(self)?,
            ConfigFormat::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .map_err(|e| SettingsError::SaveError(format!("{}: {}", parent.display(), e)))?;
        }
        std::fs::write(path, content)
            .map_err(|e| SettingsError::SaveError(format!("{}: {}", path.display(), e)))?;

        tracing::info!(path = %path.display(), "config saved");
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        if !(self.editor.canvas_width > 0.0 && self.editor.canvas_height > 0.0) {
            return Err(SettingsError::invalid(
                "editor.canvas",
                "canvas dimensions must be > 0",
            ));
        }

        self.grid
            .validate()
            .map_err(|e| SettingsError::invalid("grid", e))?;
        self.snap
            .validate()
            .map_err(|e| SettingsError::invalid("snap", e))?;

        if !EXPORT_DPI_OPTIONS.contains(&self.export.dpi) {
            let options: Vec<String> = EXPORT_DPI_OPTIONS.iter().map(u32::to_string).collect();
            return Err(SettingsError::invalid(
                "export.dpi",
                format!("must be one of {}", options.join(", ")),
            ));
        }

        if self.history.capacity == 0 {
            return Err(SettingsError::invalid("history.capacity", "must be > 0"));
        }

        Ok(())
    }

    /// Configures a designer state with these settings.
    pub fn apply_to(&self, state: &mut DesignerState) -> SettingsResult<()> {
        self.validate()?;

        state
            .viewport
            .set_canvas_size(self.editor.canvas_width, self.editor.canvas_height);
        state.show_grid = self.editor.show_grid;
        state
            .set_grid_settings(self.grid)
            .map_err(|e| SettingsError::invalid("grid", e))?;
        state
            .set_snap_settings(self.snap)
            .map_err(|e| SettingsError::invalid("snap", e))?;
        state.set_history_capacity(self.history.capacity);
        state.set_checkpoint_policy(self.history.policy());

        if self.editor.center_sheet {
            state.center_sheet();
        }
        Ok(())
    }
}
