//! Greyscope CLI - greyscale raster image inspector.

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

mod commands;
mod config;
mod loader;
mod output;

use commands::{Cli, Commands, ExitCode};

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let config = config::AppConfig::load();

    let result = match cli.command {
        Commands::Info(ref args) => commands::info::run(args),
        Commands::Colors(ref args) => {
            let args = commands::colors::ColorsArgs::with_config(args.clone(), &config);
            commands::colors::run(&args)
        }
        Commands::Pick(ref args) => commands::pick::run(args),
    };

    match result {
        Ok(()) => ExitCode::Success.into(),
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::Error.into()
        }
    }
}
