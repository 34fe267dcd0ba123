//! Floorplan Settings Crate
//!
//! Persisted user configuration for the wizard: canvas, grid, snapping,
//! export and undo history. Stored as TOML or JSON.

pub mod config;
pub mod error;

pub use config::{Config, ConfigFormat, EditorSettings, ExportSettings, HistorySettings};
pub use error::{SettingsError, SettingsResult};
