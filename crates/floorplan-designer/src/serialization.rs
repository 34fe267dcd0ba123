//! Project file format.
//!
//! A project is the full shape list plus creation/modification timestamps:
//!
//! ```json
//! { "shapes": [...], "metadata": { "created": "...", "modified": "...", "version": "1.0.0" } }
//! ```
//!
//! Shapes are validated after parsing, so a loaded project upholds the same
//! invariants as one built in memory.

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use floorplan_core::constants::PROJECT_FILE_VERSION;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use crate::model::Shape;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectMetadata {
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
    pub version: String,
}

impl ProjectMetadata {
    pub fn now() -> Self {
        let now = Utc::now();
        Self {
            created: now,
            modified: now,
            version: PROJECT_FILE_VERSION.to_string(),
        }
    }
}

/// Complete project file structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectFile {
    pub shapes: Vec<Shape>,
    pub metadata: ProjectMetadata,
}

impl ProjectFile {
    pub fn new(shapes: Vec<Shape>) -> Self {
        Self {
            shapes,
            metadata: ProjectMetadata::now(),
        }
    }

    /// Default file name: `floorplan-project-<unix millis>.json`.
    pub fn default_file_name(at: DateTime<Utc>) -> String {
        format!("floorplan-project-{}.json", at.timestamp_millis())
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize project")
    }

    /// Parses a project and validates every shape. Shape ids must be unique.
    pub fn from_json(json: &str) -> Result<Self> {
        let project: ProjectFile =
            serde_json::from_str(json).context("Failed to parse project file")?;
        let mut ids = HashSet::new();
        for shape in &project.shapes {
            shape
                .validate()
                .with_context(|| format!("Invalid shape {} in project", shape.id()))?;
            if !ids.insert(shape.id()) {
                bail!("Duplicate shape id {} in project", shape.id());
            }
        }
        if project.metadata.version != PROJECT_FILE_VERSION {
            tracing::warn!(
                version = %project.metadata.version,
                expected = PROJECT_FILE_VERSION,
                "project file version differs"
            );
        }
        Ok(project)
    }

    /// Writes the project as pretty JSON, stamping `modified`.
    pub fn save_to_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        self.metadata.modified = Utc::now();
        let json = self.to_json()?;
        std::fs::write(path.as_ref(), json).context("Failed to write project file")?;
        tracing::info!(path = %path.as_ref().display(), shapes = self.shapes.len(), "project saved");
        Ok(())
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content =
            std::fs::read_to_string(path.as_ref()).context("Failed to read project file")?;
        let project = Self::from_json(&content)?;
        tracing::info!(path = %path.as_ref().display(), shapes = project.shapes.len(), "project loaded");
        Ok(project)
    }
}
