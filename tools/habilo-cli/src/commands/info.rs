//! Show recording information.

use anyhow::Context;
use habilo_common::config::AppConfig;
use habilo_processing_core::auto_trim_outliers;

use super::{knee_check, load_recording, recording_name, resolve_recording};

pub fn run(
    config: &AppConfig,
    name: Option<String>,
    bound: Option<f64>,
    symmetric: bool,
) -> anyhow::Result<()> {
    let name = recording_name(name)?;
    let path = resolve_recording(&name, config);
    let table = load_recording(&path, config)?;

    println!("Recording: {}", path.display());
    println!("  Frames: {}", table.row_count());
    match table.time_span() {
        Some((start, end)) => println!("  Time: {start:.3}s .. {end:.3}s ({:.3}s)", end - start),
        None => println!("  Time: (no frames)"),
    }
    println!("  Columns: {}", table.columns().len());
    println!();

    let missing = table.missing_columns();
    println!("Schema:");
    if missing.is_empty() {
        println!("  All goniometry columns present");
    } else {
        for column in &missing {
            println!("  Missing: {column}");
        }
        return Ok(());
    }
    println!();

    let bound = bound.unwrap_or(config.trim.knee_bound_deg);
    let check = knee_check(symmetric || config.trim.symmetric);
    let frames = table.row_count();
    let outcome = auto_trim_outliers(table, bound, check).context("failed to check knee outliers")?;

    println!("Outlier trim ({bound} deg, {check:?}):");
    match outcome.cut_index {
        Some(cut) => println!("  Would keep {cut} of {frames} frames"),
        None => println!("  Nothing to trim"),
    }

    Ok(())
}
