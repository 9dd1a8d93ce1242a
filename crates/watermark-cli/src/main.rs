mod commands;
mod summary;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use watermark_core::config::WatermarkConfig;

#[derive(Parser)]
#[command(name = "watermark", about = "Add a text watermark to an image")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Rendering config file (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Draw a watermark onto an image and save the result
    Apply(commands::apply::ApplyArgs),
    /// List the available colors, font sizes and font families
    Palette,
    /// Print or save the default config
    Config(commands::config::ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = match cli.config {
        Some(ref path) => WatermarkConfig::load(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?,
        None => WatermarkConfig::default(),
    };

    match &cli.command {
        Commands::Apply(args) => commands::apply::run(args, &config),
        Commands::Palette => commands::palette::run(),
        Commands::Config(args) => commands::config::run(args),
    }
}
