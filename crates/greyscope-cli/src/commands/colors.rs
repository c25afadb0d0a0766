//! Colors command - 16-bucket grey histogram of an image.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use greyscope_core::{Histogram, PixelWindow};
use image::GenericImageView;
use tracing::debug;

use crate::config::AppConfig;
use crate::loader;
use crate::output::table;

/// Parse and validate a --top value (at least 1; 16 and above keep every bucket).
fn parse_top(s: &str) -> Result<usize, String> {
    let value: usize = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid count"))?;
    if value == 0 {
        return Err("--top must be at least 1".to_string());
    }
    Ok(value)
}

/// Parse a --pixels range.
fn parse_pixels(s: &str) -> Result<PixelWindow, String> {
    s.parse()
}

/// Arguments for the colors command.
#[derive(Args, Clone)]
pub struct ColorsArgs {
    /// Input file (required)
    #[arg(short, long)]
    pub infile: PathBuf,

    /// Greyscale color name (returns percentage of that color)
    #[arg(short, long)]
    pub color: Option<String>,

    /// Filter the histogram to show only the highest-frequency colors
    #[arg(short, long, value_parser = parse_top)]
    pub top: Option<usize>,

    /// Range of pixels to look at (x,y:n)
    #[arg(short, long, value_parser = parse_pixels)]
    pub pixels: Option<PixelWindow>,

    /// Only show non-zero results
    #[arg(short, long)]
    pub nonzero: bool,

    /// Show raw comma-delimited output
    #[arg(short = 'r', long)]
    pub csv: bool,

    /// Print raw Markdown instead of rendering for the terminal
    #[arg(long)]
    pub plain: bool,
}

impl ColorsArgs {
    /// Apply configuration file values, respecting CLI precedence.
    ///
    /// Boolean flags: an explicit CLI flag always wins; config can only
    /// enable what the CLI left unset.
    #[must_use]
    pub fn with_config(mut args: Self, config: &AppConfig) -> Self {
        if !args.nonzero {
            args.nonzero = config.colors.nonzero.unwrap_or(false);
        }
        if !args.csv {
            args.csv = config.colors.csv.unwrap_or(false);
        }
        if args.top.is_none() {
            args.top = config.colors.top.map(usize::from);
        }
        if !args.plain {
            args.plain = config.output.plain.unwrap_or(false);
        }
        args
    }
}

/// Run the colors command.
pub fn run(args: &ColorsArgs) -> Result<()> {
    let loaded = loader::load_image(&args.infile)?;
    let (width, height) = loaded.image.dimensions();
    let total_pixels = u64::from(width) * u64::from(height);

    let histogram = match args.pixels {
        Some(ref window) => {
            let (end_x, end_y) = window.end_coordinate(width, height);
            debug!(
                "pixel window {},{}:{} ends at ({end_x}, {end_y})",
                window.x, window.y, window.count
            );
            Histogram::scan_window(&loaded.image, window)?
        }
        None => Histogram::scan(&loaded.image),
    };

    if let Some(ref name) = args.color {
        let pct = histogram.named_percentage(name)?;
        println!("{pct}");
        return Ok(());
    }

    let histogram = match args.top {
        Some(n) => histogram.keep_top(n),
        None => histogram,
    };

    // --top zeroes the dropped buckets, so their rows are hidden too.
    let hide_zero = args.top.is_some() || args.nonzero;

    if args.csv {
        print!("{}", table::csv_rows(&histogram, hide_zero));
    } else {
        let markdown = table::markdown(&histogram, hide_zero, total_pixels);
        print!("{}", table::render(&markdown, args.plain));
    }
    Ok(())
}
