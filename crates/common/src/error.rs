//! Error types shared across Habilo crates.

use std::path::PathBuf;

use habilo_trajectory_model::TableError;

/// Top-level error type for Habilo operations.
#[derive(Debug, thiserror::Error)]
pub enum HabiloError {
    #[error("Render error: {message}")]
    Render { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error(transparent)]
    Table(#[from] TableError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result type alias using HabiloError.
pub type HabiloResult<T> = Result<T, HabiloError>;

impl HabiloError {
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render {
            message: msg.into(),
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }
}
