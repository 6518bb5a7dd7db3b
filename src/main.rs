//! Storefront CLI entrypoint.
//!
//! Browses a product catalogue interactively, or prints it with `--plain`.

use std::io::{self, Write};
use std::process::ExitCode;

use ortho_config::OrthoConfig;
use storefront::logging::{self, LogSettings};
use storefront::{CatalogError, OperationMode, StorefrontConfig};

mod cli;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), CatalogError> {
    let config = load_config()?;
    config.validate()?;
    logging::init(&LogSettings::from_config(&config))?;

    match config.operation_mode() {
        OperationMode::Browse => cli::browse_tui::run(&config).await,
        OperationMode::Plain => cli::plain::run(&config).await,
    }
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`CatalogError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<StorefrontConfig, CatalogError> {
    StorefrontConfig::load().map_err(|error| CatalogError::Configuration {
        message: error.to_string(),
    })
}
