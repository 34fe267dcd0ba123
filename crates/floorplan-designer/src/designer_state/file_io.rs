//! File I/O operations (save, load, new, export) for designer state.

use std::path::Path;

use super::DesignerState;
use crate::export::{ExportSummary, Exporter};
use crate::serialization::ProjectFile;

impl DesignerState {
    /// Save the shapes as a project file.
    pub fn save_to_file(&mut self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let mut project = ProjectFile::new(self.shapes.clone());
        project.save_to_file(&path)?;

        self.current_file_path = Some(path.as_ref().to_path_buf());
        self.is_modified = false;
        Ok(())
    }

    /// Load a project file, replacing the shapes and starting a fresh history.
    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let project = ProjectFile::load_from_file(&path)?;

        self.shapes = project.shapes;
        self.selection.clear();
        self.session.cancel();
        self.history.reset(&self.shapes);

        self.current_file_path = Some(path.as_ref().to_path_buf());
        self.is_modified = false;
        Ok(())
    }

    /// Create new design (clear all).
    pub fn new_design(&mut self) {
        self.reset();
    }

    /// Writes the export metadata, project and PNG into `out_dir`.
    pub fn export(&self, dpi: u32, out_dir: impl AsRef<Path>) -> anyhow::Result<ExportSummary> {
        Exporter::new(dpi, out_dir.as_ref()).export(&self.shapes)
    }

    /// Get display name for the design.
    pub fn display_name(&self) -> String {
        let name = self
            .current_file_path
            .as_ref()
            .and_then(|path| path.file_name())
            .and_then(|n| n.to_str())
            .unwrap_or(&self.design_name);

        if self.is_modified {
            format!("{}*", name)
        } else {
            name.to_string()
        }
    }
}
