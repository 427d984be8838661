//! Application configuration.

use std::path::{Path, PathBuf};

use habilo_trajectory_model::reader::ReadOptions;
use serde::{Deserialize, Serialize};

use crate::error::{HabiloError, HabiloResult};

/// Global application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Directory that bare recording names are resolved against.
    pub data_dir: PathBuf,

    /// Extension appended to bare recording names.
    pub extension: String,

    /// Input table format.
    pub table: TableFormat,

    /// Outlier-trim defaults.
    pub trim: TrimDefaults,

    /// Figure output settings.
    pub render: RenderDefaults,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Field separator and decimal-point conventions of the input table.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TableFormat {
    pub delimiter: char,
    pub decimal_separator: char,
}

/// Default outlier-trim parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrimDefaults {
    /// Trim trailing frames automatically before building curves.
    pub enabled: bool,

    /// Knee angle (degrees) above which frames are treated as tracking glitches.
    pub knee_bound_deg: f64,

    /// Check both knees with `max()` instead of the first right-knee sample.
    pub symmetric: bool,
}

/// Default figure settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderDefaults {
    /// Directory figures are written to.
    pub output_dir: PathBuf,

    /// Add a spine height panel to the time-series figure.
    pub spine_height: bool,

    /// Also draw the hip/knee phase-plane figure.
    pub phase_plane: bool,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "habilo=debug,warn").
    pub level: String,

    /// Whether to output structured JSON logs.
    pub json: bool,

    /// Optional log file path.
    pub file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("../data"),
            extension: "csv".to_string(),
            table: TableFormat::default(),
            trim: TrimDefaults::default(),
            render: RenderDefaults::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for TableFormat {
    fn default() -> Self {
        Self {
            delimiter: ';',
            decimal_separator: '.',
        }
    }
}

impl Default for TrimDefaults {
    fn default() -> Self {
        Self {
            enabled: false,
            knee_bound_deg: 60.0,
            symmetric: false,
        }
    }
}

impl Default for RenderDefaults {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("figures"),
            spine_height: false,
            phase_plane: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            file: None,
        }
    }
}

impl TableFormat {
    /// Reader options for this format.
    ///
    /// The delimiter must be a single-byte character.
    pub fn read_options(&self) -> HabiloResult<ReadOptions> {
        let delimiter = u8::try_from(self.delimiter).map_err(|_| {
            HabiloError::config(format!(
                "delimiter {:?} is not a single-byte character",
                self.delimiter
            ))
        })?;
        Ok(ReadOptions {
            delimiter,
            decimal_separator: self.decimal_separator,
        })
    }
}

impl AppConfig {
    /// Load config from the standard location, falling back to defaults.
    pub fn load() -> Self {
        Self::load_or_default(&config_file_path())
    }

    /// Load config from `path`, falling back to defaults when the file is
    /// missing or unreadable.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Failed to load config at {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    /// Load config from an explicit path.
    pub fn load_from(path: &Path) -> HabiloResult<Self> {
        if !path.exists() {
            return Err(HabiloError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

/// Standard config file location.
pub fn config_file_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("habilo").join("config.json")
}
