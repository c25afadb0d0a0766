//! CLI command definitions and handlers.

pub mod colors;
pub mod info;
pub mod pick;

use clap::{Parser, Subcommand};

/// Greyscope - inspect greyscale raster images
#[derive(Parser)]
#[command(name = "greyscope")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Show filetype, color model, and dimensions of an image
    Info(info::InfoArgs),
    /// Show how much of the image each of 16 named greys covers
    Colors(colors::ColorsArgs),
    /// Show the exact greyscale color of a pixel
    Pick(pick::PickArgs),
}

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed.
    Success,
    /// Argument validation or decode failure.
    Error,
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        match code {
            ExitCode::Success => Self::SUCCESS,
            ExitCode::Error => Self::FAILURE,
        }
    }
}
