use clap::Parser;
use floorplan::cli::{self, Args};
use floorplan::init_logging;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    init_logging()?;
    let summary = cli::run(&args)?;

    println!("Metadata: {}", summary.metadata_path.display());
    println!("Project:  {}", summary.project_path.display());
    match (&summary.image_path, &summary.render_error) {
        (Some(image), _) => println!("Image:    {}", image.display()),
        (None, Some(reason)) => println!("Image:    not rendered ({})", reason),
        (None, None) => println!("Image:    not rendered"),
    }

    Ok(())
}
