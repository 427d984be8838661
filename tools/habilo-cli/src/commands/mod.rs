pub mod info;
pub mod render;

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use habilo_common::config::AppConfig;
use habilo_processing_core::KneeCheck;
use habilo_trajectory_model::reader::read_table;
use habilo_trajectory_model::TrajectoryTable;

/// Recording name from the command line, or read from stdin.
pub fn recording_name(name: Option<String>) -> anyhow::Result<String> {
    if let Some(name) = name {
        return Ok(name);
    }

    print!("type file name: ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;

    let name = line.trim();
    if name.is_empty() {
        bail!("no file name given");
    }
    Ok(name.to_string())
}

/// Path of a recording: an existing file as given, otherwise
/// `<data_dir>/<name>.<extension>`.
pub fn resolve_recording(name: &str, config: &AppConfig) -> PathBuf {
    let direct = Path::new(name);
    if direct.is_file() {
        return direct.to_path_buf();
    }
    config
        .data_dir
        .join(format!("{name}.{}", config.extension))
}

/// Read a recording with the configured table format.
pub fn load_recording(path: &Path, config: &AppConfig) -> anyhow::Result<TrajectoryTable> {
    let options = config.table.read_options()?;
    let table =
        read_table(path, &options).with_context(|| format!("failed to read {}", path.display()))?;
    tracing::debug!(path = %path.display(), rows = table.row_count(), "Recording loaded");
    Ok(table)
}

/// File name without extension, used to name figures.
pub fn recording_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "recording".to_string())
}

pub fn knee_check(symmetric: bool) -> KneeCheck {
    if symmetric {
        KneeCheck::BothPeaks
    } else {
        KneeCheck::LeftPeakRightFirst
    }
}
