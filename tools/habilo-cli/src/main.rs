//! Habilo CLI: command-line interface for goniometry of marker recordings.
//!
//! Usage:
//!   habilo render [NAME] [OPTIONS]    Build hip/knee curves and write SVG figures
//!   habilo info [NAME]                Show table, schema, and outlier-trim summary
//!
//! A bare NAME is resolved as `<data_dir>/<NAME>.<extension>`; when omitted
//! it is asked for on stdin.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use habilo_common::config::AppConfig;

mod commands;

#[derive(Parser)]
#[command(
    name = "habilo",
    about = "Hip and knee goniometry from motion-capture marker tables",
    version,
    author
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file (defaults to $XDG_CONFIG_HOME/habilo/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory bare recording names are resolved against
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build joint-angle curves and render them
    Render {
        /// Recording name or path (prompted when omitted)
        name: Option<String>,

        /// Start of the cut (seconds)
        #[arg(long)]
        first: Option<f64>,

        /// End of the cut (seconds, exclusive)
        #[arg(long)]
        last: Option<f64>,

        /// Truncate trailing frames where a knee angle runs past the bound
        #[arg(long)]
        auto_trim: bool,

        /// Knee angle bound for the outlier trim (degrees)
        #[arg(long)]
        bound: Option<f64>,

        /// Check the peak of both knees instead of the first right-knee sample
        #[arg(long)]
        symmetric: bool,

        /// Add a spine height panel
        #[arg(long)]
        spine_height: bool,

        /// Skip the phase-plane figure
        #[arg(long)]
        no_phase: bool,

        /// Output directory for figures
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show recording information
    Info {
        /// Recording name or path (prompted when omitted)
        name: Option<String>,

        /// Knee angle bound for the outlier-trim preview (degrees)
        #[arg(long)]
        bound: Option<f64>,

        /// Check the peak of both knees instead of the first right-knee sample
        #[arg(long)]
        symmetric: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => AppConfig::load_from(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => AppConfig::load(),
    };
    if cli.verbose {
        config.logging.level = "debug".to_string();
    }
    if let Some(data_dir) = cli.data_dir {
        config.data_dir = data_dir;
    }

    habilo_common::logging::init_logging(&config.logging)
        .context("failed to initialize logging")?;

    match cli.command {
        Commands::Render {
            name,
            first,
            last,
            auto_trim,
            bound,
            symmetric,
            spine_height,
            no_phase,
            output,
        } => commands::render::run(
            &config,
            commands::render::RenderArgs {
                name,
                first,
                last,
                auto_trim,
                bound,
                symmetric,
                spine_height,
                no_phase,
                output,
            },
        ),
        Commands::Info {
            name,
            bound,
            symmetric,
        } => commands::info::run(&config, name, bound, symmetric),
    }
}
