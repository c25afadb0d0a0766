//! Info command - report image metadata.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use greyscope_core::meta::color_model_name;
use image::GenericImageView;
use tracing::info;

use crate::loader;

/// Arguments for the info command.
#[derive(Args, Clone)]
pub struct InfoArgs {
    /// Input file (required)
    #[arg(short, long)]
    pub infile: PathBuf,
}

/// Run the info command.
pub fn run(args: &InfoArgs) -> Result<()> {
    info!("inspecting {}", args.infile.display());
    let loaded = loader::load_image(&args.infile)?;
    let (width, height) = loaded.image.dimensions();

    println!("Filetype:      {}", loaded.format_name());
    println!("Color Model:   {}", color_model_name(loaded.image.color()));
    println!("Bounds:        {width} x {height}");
    println!("Total Pixels:  {}", u64::from(width) * u64::from(height));
    Ok(())
}
