//! TUI mode for browsing the catalogue.
//!
//! This module provides the entry point for the interactive terminal user
//! interface. The catalogue itself is fetched by the app after its first
//! frame, so the load context is stored here rather than loaded up front.

use std::io::{self, Write};
use std::sync::Arc;

use bubbletea_rs::Program;

use storefront::catalog::{CatalogError, DefaultCatalogGateway};
use storefront::telemetry::TracingTelemetrySink;
use storefront::tui::{
    AppOptions, CatalogApp, set_app_options, set_load_context, set_telemetry_sink,
};
use storefront::StorefrontConfig;

/// Runs the TUI mode.
///
/// # Errors
///
/// Returns an error if:
/// - The catalogue source is missing or invalid
/// - The initial view state is invalid
/// - The HTTP client cannot be built
/// - The TUI fails to initialise
pub async fn run(config: &StorefrontConfig) -> Result<(), CatalogError> {
    let source = config.require_source()?;
    let options = AppOptions {
        initial_view: config.initial_view_state()?,
        settings: config.browse_settings(),
        trigger: config.scroll_trigger(),
        no_color: config.no_color,
    };
    let gateway = DefaultCatalogGateway::new(config.request_timeout())?;

    // Stored for `CatalogApp::init()`. If already set, the existing values
    // remain.
    let _ = set_load_context(Arc::new(gateway), source);
    let _ = set_app_options(options);
    let _ = set_telemetry_sink(Arc::new(TracingTelemetrySink));

    run_tui().await.map_err(|error| CatalogError::Io {
        message: format!("TUI error: {error}"),
    })
}

/// Runs the bubbletea-rs program with the `CatalogApp` model.
async fn run_tui() -> Result<(), bubbletea_rs::Error> {
    let program = Program::<CatalogApp>::builder().alt_screen(true).build()?;

    program.run().await?;

    io::stdout().flush().ok();

    Ok(())
}
