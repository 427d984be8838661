//! Build joint-angle curves for a recording and render them.

use std::path::{Path, PathBuf};

use anyhow::Context;
use habilo_common::config::AppConfig;
use habilo_processing_core::{auto_trim_outliers, build_curves, cut_range};
use habilo_render_engine::{render_figures, FigureOptions};
use habilo_trajectory_model::{TableError, TrajectoryTable};

use super::{knee_check, load_recording, recording_name, recording_stem, resolve_recording};

#[derive(Debug, Default)]
pub struct RenderArgs {
    pub name: Option<String>,
    pub first: Option<f64>,
    pub last: Option<f64>,
    pub auto_trim: bool,
    pub bound: Option<f64>,
    pub symmetric: bool,
    pub spine_height: bool,
    pub no_phase: bool,
    pub output: Option<PathBuf>,
}

pub fn run(config: &AppConfig, args: RenderArgs) -> anyhow::Result<()> {
    let name = recording_name(args.name.clone())?;
    let path = resolve_recording(&name, config);
    println!("Rendering recording: {}", path.display());

    let table = prepare_table(config, &path, &args)?;
    let bundle = build_curves(&table).context("failed to build joint-angle curves")?;

    let options = FigureOptions {
        output_dir: args
            .output
            .unwrap_or_else(|| config.render.output_dir.clone()),
        stem: recording_stem(&path),
        spine_height: args.spine_height || config.render.spine_height,
        phase_plane: !args.no_phase && config.render.phase_plane,
    };
    let rendered = render_figures(&bundle, &options).context("failed to render figures")?;

    println!("  Time series: {}", rendered.time_series.display());
    if let Some(phase) = &rendered.phase_plane {
        println!("  Phase plane: {}", phase.display());
    }
    println!("\nRender complete.");

    Ok(())
}

/// Read the recording, cut it, trim knee outliers, and reject an empty result.
pub fn prepare_table(
    config: &AppConfig,
    path: &Path,
    args: &RenderArgs,
) -> anyhow::Result<TrajectoryTable> {
    let mut table = load_recording(path, config)?;
    println!("  Loaded {} frames", table.row_count());

    let first = args.first.unwrap_or(0.0);
    if args.first.is_some() || args.last.is_some() {
        table = cut_range(&table, first, args.last).context("failed to cut recording")?;
        println!("  Cut to {} frames", table.row_count());
    }

    if args.auto_trim || config.trim.enabled {
        let bound = args.bound.unwrap_or(config.trim.knee_bound_deg);
        let check = knee_check(args.symmetric || config.trim.symmetric);
        let outcome = auto_trim_outliers(table, bound, check)
            .context("failed to check knee outliers")?;
        match outcome.cut_index {
            Some(cut) => println!("  Knee angle passed {bound} deg: trimmed to {cut} frames"),
            None => println!("  No knee outliers above {bound} deg"),
        }
        table = outcome.table;
    }

    if table.is_empty() {
        return Err(TableError::EmptyRange {
            first,
            last: args.last,
        })
        .context("no frames left to render");
    }

    Ok(table)
}
