//! Wizard steps: plot, house, details, export.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::tools::ToolType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WizardStep {
    #[default]
    Plot,
    House,
    Details,
    Export,
}

impl WizardStep {
    pub const ALL: [WizardStep; 4] = [
        WizardStep::Plot,
        WizardStep::House,
        WizardStep::Details,
        WizardStep::Export,
    ];

    pub fn index(&self) -> usize {
        match self {
            WizardStep::Plot => 0,
            WizardStep::House => 1,
            WizardStep::Details => 2,
            WizardStep::Export => 3,
        }
    }

    /// Following step, or `None` on the last one.
    pub fn next(&self) -> Option<WizardStep> {
        Self::ALL.get(self.index() + 1).copied()
    }

    /// Preceding step, or `None` on the first one.
    pub fn previous(&self) -> Option<WizardStep> {
        self.index().checked_sub(1).map(|i| Self::ALL[i])
    }

    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::Plot => "Plot size",
            WizardStep::House => "House shape",
            WizardStep::Details => "Details",
            WizardStep::Export => "Export",
        }
    }

    /// Tools offered while this step is active.
    pub fn tools(&self) -> &'static [ToolType] {
        match self {
            WizardStep::Plot => &[ToolType::Select, ToolType::Rectangle, ToolType::Pan],
            WizardStep::House => &[ToolType::Select, ToolType::Polygon, ToolType::Pan],
            WizardStep::Details => &[
                ToolType::Line,
                ToolType::Freehand,
                ToolType::Measure,
                ToolType::Eraser,
                ToolType::Pan,
            ],
            WizardStep::Export => &[ToolType::Select, ToolType::Pan],
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for WizardStep {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "plot" => Ok(WizardStep::Plot),
            "house" => Ok(WizardStep::House),
            "details" => Ok(WizardStep::Details),
            "export" => Ok(WizardStep::Export),
            _ => Err(format!("Unknown wizard step: {}", s)),
        }
    }
}
