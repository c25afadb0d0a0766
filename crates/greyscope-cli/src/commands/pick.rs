//! Pick command - read one pixel's exact grey value.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use greyscope_core::{html_hex, pick_grey};

use crate::loader;

/// Arguments for the pick command.
#[derive(Args, Clone)]
pub struct PickArgs {
    /// Input file (required)
    #[arg(short, long)]
    pub infile: PathBuf,

    /// X coordinate of the pixel to be examined (required)
    #[arg(short, long)]
    pub x: u32,

    /// Y coordinate of the pixel to be examined (required)
    #[arg(short, long)]
    pub y: u32,

    /// Output as an HTML hex string
    #[arg(long)]
    pub html: bool,
}

/// Run the pick command.
pub fn run(args: &PickArgs) -> Result<()> {
    let loaded = loader::load_image(&args.infile)?;
    let grey = pick_grey(&loaded.image, args.x, args.y)?;

    if args.html {
        println!("{}", html_hex(grey));
    } else {
        println!("{grey}");
    }
    Ok(())
}
