//! Command-line front end: build a plan from a plot preset and a house
//! template, then export it.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use floorplan_designer::{DesignerState, ExportSummary, HouseTemplate, PlotPreset};
use floorplan_settings::Config;

/// Builds a plot and house outline and exports an A2 sheet.
#[derive(Debug, Clone, PartialEq, Parser)]
#[clap(
    name = "floorplan",
    author,
    version,
    long_version = concat!(env!("CARGO_PKG_VERSION"), " (built ", env!("BUILD_DATE"), ")"),
    about,
    long_about = None
)]
pub struct Args {
    /// Plot preset: 1-kanal, 10-marla, 5-marla or WxH in feet
    #[clap(long, value_parser, default_value = "10-marla")]
    pub plot: PlotPreset,
    /// House template: rectangular, l-shaped, mirror-l or u-shaped
    #[clap(long, value_parser, default_value = "rectangular")]
    pub house: HouseTemplate,
    /// Export the plot without a house outline
    #[clap(long, conflicts_with = "house")]
    pub no_house: bool,
    /// Export DPI (96, 150, 300 or 600) [default: from config]
    #[clap(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub dpi: Option<u32>,
    /// Output directory [default: from config]
    #[clap(long, value_parser)]
    pub out: Option<PathBuf>,
    /// Config file (.toml or .json)
    #[clap(long, value_parser)]
    pub config: Option<PathBuf>,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            plot: PlotPreset::TenMarla,
            house: HouseTemplate::Rectangular,
            no_house: false,
            dpi: None,
            out: None,
            config: None,
        }
    }
}

impl Args {
    /// The house to place, or `None` for a plot-only export.
    pub fn house(&self) -> Option<HouseTemplate> {
        (!self.no_house).then_some(self.house)
    }
}

/// Builds the plan through the wizard steps and exports it.
pub fn run(args: &Args) -> Result<ExportSummary> {
    let config = Config::load_or_default(args.config.as_deref())
        .context("Failed to load configuration")?;

    let mut state = DesignerState::new();
    config.apply_to(&mut state)?;

    state.add_plot(args.plot)?;
    state.next_step();
    if let Some(house) = args.house() {
        state.add_house(house)?;
    }
    state.next_step();
    state.next_step();

    let dpi = args.dpi.unwrap_or(config.export.dpi);
    let out_dir = args
        .out
        .clone()
        .unwrap_or_else(|| config.export.output_directory.clone());

    tracing::info!(
        plot = %args.plot,
        house = args.house().map(|h| h.label()).unwrap_or("none"),
        dpi,
        "exporting plan"
    );
    state.export(dpi, &out_dir)
}
