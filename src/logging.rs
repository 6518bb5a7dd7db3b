//! Logging setup using `tracing` and `tracing-subscriber`.
//!
//! The TUI owns the terminal, so in browse mode logs are only written when a
//! log file is configured. Plain mode writes to the log file when one is
//! configured and to stderr otherwise.
//!
//! # Log Levels
//!
//! - `warn`: skipped catalogue records, load failures
//! - `info`: load summaries, add-to-cart requests, telemetry events
//! - `debug`: view recomputation and page rendering

use std::fs::{File, OpenOptions};
use std::io;
use std::sync::Mutex;

use camino::{Utf8Path, Utf8PathBuf};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;

use crate::catalog::CatalogError;
use crate::config::{OperationMode, StorefrontConfig};

const DEFAULT_FILTER: &str = "warn";

/// Where log output is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogDestination {
    /// Logging is disabled.
    Disabled,
    /// Log lines go to standard error.
    Stderr,
    /// Log lines are appended to a file.
    File(Utf8PathBuf),
}

impl LogDestination {
    /// Chooses the destination for `mode` given an optional log file.
    #[must_use]
    pub fn select(mode: OperationMode, log_file: Option<&str>) -> Self {
        match (log_file.map(str::trim).filter(|path| !path.is_empty()), mode) {
            (Some(path), _) => Self::File(Utf8PathBuf::from(path)),
            (None, OperationMode::Plain) => Self::Stderr,
            (None, OperationMode::Browse) => Self::Disabled,
        }
    }
}

/// Resolved logging settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    /// Filter directive from configuration, if any.
    pub filter: Option<String>,
    /// Where log output is written.
    pub destination: LogDestination,
}

impl LogSettings {
    /// Derives logging settings from the application configuration.
    #[must_use]
    pub fn from_config(config: &StorefrontConfig) -> Self {
        Self {
            filter: config.log_filter.clone(),
            destination: LogDestination::select(
                config.operation_mode(),
                config.log_file.as_deref(),
            ),
        }
    }
}

/// Builds the log filter.
///
/// An explicit directive wins, then `RUST_LOG`, then `warn`.
///
/// # Errors
///
/// Returns [`CatalogError::Configuration`] when the explicit directive does
/// not parse.
pub fn build_filter(explicit: Option<&str>) -> Result<EnvFilter, CatalogError> {
    if let Some(directive) = explicit {
        return EnvFilter::try_new(directive).map_err(|error| CatalogError::Configuration {
            message: format!("invalid log_filter '{directive}': {error}"),
        });
    }
    Ok(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)))
}

/// Installs the global tracing subscriber.
///
/// Does nothing when the destination is [`LogDestination::Disabled`]. A
/// subscriber that is already installed is left in place.
///
/// # Errors
///
/// Returns [`CatalogError::Configuration`] when the filter does not parse
/// and [`CatalogError::Io`] when the log file cannot be opened.
pub fn init(settings: &LogSettings) -> Result<(), CatalogError> {
    let filter = build_filter(settings.filter.as_deref())?;

    match &settings.destination {
        LogDestination::Disabled => Ok(()),
        LogDestination::Stderr => {
            install(filter, io::stderr, true);
            Ok(())
        }
        LogDestination::File(path) => {
            let file = open_log_file(path)?;
            install(filter, Mutex::new(file), false);
            Ok(())
        }
    }
}

fn install<W>(filter: EnvFilter, writer: W, with_ansi: bool)
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(with_ansi)
        .try_init();
    if installed.is_err() {
        tracing::debug!("tracing subscriber already installed; keeping it");
    }
}

fn open_log_file(path: &Utf8Path) -> Result<File, CatalogError> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|error| CatalogError::Io {
            message: format!("failed to open log file '{path}': {error}"),
        })
}
