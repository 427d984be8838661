//! Logging and tracing initialization.

use std::fs::File;
use std::sync::Mutex;

use crate::config::LoggingConfig;
use crate::error::HabiloResult;

/// Initialize the tracing subscriber with the given configuration.
///
/// `RUST_LOG` takes precedence over `config.level`. When `config.file` is
/// set, events go to that file instead of stderr.
pub fn init_logging(config: &LoggingConfig) -> HabiloResult<()> {
    use tracing_subscriber::{fmt, EnvFilter};

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let builder = fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    match (&config.file, config.json) {
        (Some(path), true) => {
            let writer = Mutex::new(File::create(path)?);
            let subscriber = builder.json().with_writer(writer).finish();
            tracing::subscriber::set_global_default(subscriber).ok();
        }
        (Some(path), false) => {
            let writer = Mutex::new(File::create(path)?);
            let subscriber = builder.with_ansi(false).with_writer(writer).finish();
            tracing::subscriber::set_global_default(subscriber).ok();
        }
        (None, true) => {
            let subscriber = builder.json().with_writer(std::io::stderr).finish();
            tracing::subscriber::set_global_default(subscriber).ok();
        }
        (None, false) => {
            let subscriber = builder.with_writer(std::io::stderr).finish();
            tracing::subscriber::set_global_default(subscriber).ok();
        }
    }
    Ok(())
}

