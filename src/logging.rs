//! File logging.
//!
//! The terminal belongs to the UI (or to plain-mode output), so records only
//! ever go to a file. Nothing is installed unless a log path is configured.

use std::ffi::OsString;
use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use thiserror::Error;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LogConfig;

/// Fallback log path when neither the config nor `--log` names one.
pub const LOG_ENV_VAR: &str = "MOVIEFETCH_LOG";

#[derive(Debug, Error)]
pub enum LogError {
    #[error("Failed to open log file '{path}': {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid log filter '{directive}': {source}")]
    Filter {
        directive: String,
        #[source]
        source: ParseError,
    },

    #[error("Failed to install log subscriber: {0}")]
    Install(#[from] TryInitError),
}

/// Pick the log file: `[log] path` (already overridden by `--log`), then
/// the `MOVIEFETCH_LOG` value. An empty value counts as unset.
pub fn resolve_log_path(config: &LogConfig, env_value: Option<OsString>) -> Option<PathBuf> {
    config
        .path
        .clone()
        .filter(|path| !path.as_os_str().is_empty())
        .or_else(|| env_value.filter(|v| !v.is_empty()).map(PathBuf::from))
}

/// Build the filter: `RUST_LOG` when set, else `[log] level`.
pub fn resolve_filter(config: &LogConfig, rust_log: Option<String>) -> Result<EnvFilter, LogError> {
    let directive = rust_log
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| config.level.clone());
    EnvFilter::try_new(&directive).map_err(|source| LogError::Filter { directive, source })
}

/// Open `path` for appending, creating parent directories as needed.
pub fn open_log_file(path: &Path) -> Result<File, LogError> {
    let open_error = |source| LogError::Open {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(open_error)?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(open_error)
}

/// Install the global subscriber if a log path is configured.
///
/// Returns the file records go to, or `None` when logging stays off.
pub fn init_tracing(config: &LogConfig) -> Result<Option<PathBuf>, LogError> {
    let Some(path) = resolve_log_path(config, std::env::var_os(LOG_ENV_VAR)) else {
        return Ok(None);
    };

    let filter = resolve_filter(config, std::env::var("RUST_LOG").ok())?;
    let file = open_log_file(&path)?;

    let file_layer = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init()?;

    Ok(Some(path))
}
