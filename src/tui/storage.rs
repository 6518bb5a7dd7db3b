//! Startup context storage for the catalogue TUI.
//!
//! bubbletea-rs constructs the model through the static `Model::init()`, so
//! everything the app needs at startup is stored in module-level `OnceLock`
//! values before the program runs.

use std::sync::{Arc, OnceLock};

use crossterm::terminal;

use crate::catalog::{CatalogError, CatalogGateway, CatalogSource, CatalogStore, LoadSummary};
use crate::telemetry::{NoopTelemetrySink, TelemetryEvent, TelemetrySink};

use super::app::AppOptions;

/// Global storage for the catalogue load context.
static LOAD_CONTEXT: OnceLock<LoadContext> = OnceLock::new();

/// Global storage for the options used to build the app model.
static APP_OPTIONS: OnceLock<AppOptions> = OnceLock::new();

/// Global storage for the telemetry sink.
static TELEMETRY_SINK: OnceLock<Arc<dyn TelemetrySink>> = OnceLock::new();

/// Static fallback telemetry sink to avoid allocations on each call.
static DEFAULT_TELEMETRY_SINK: OnceLock<Arc<dyn TelemetrySink>> = OnceLock::new();

/// Global storage for initial terminal dimensions.
static INITIAL_TERMINAL_SIZE: OnceLock<(u16, u16)> = OnceLock::new();

/// What the TUI needs to fetch the catalogue.
struct LoadContext {
    gateway: Arc<dyn CatalogGateway>,
    source: CatalogSource,
}

/// Sets the gateway and source used to load the catalogue.
///
/// Returns `true` if the context was set, `false` if it was already set.
pub fn set_load_context(gateway: Arc<dyn CatalogGateway>, source: CatalogSource) -> bool {
    LOAD_CONTEXT.set(LoadContext { gateway, source }).is_ok()
}

/// Sets the options used by `CatalogApp::init()`.
///
/// Returns `true` if the options were set, `false` if they were already set.
pub fn set_app_options(options: AppOptions) -> bool {
    APP_OPTIONS.set(options).is_ok()
}

/// Sets the telemetry sink for the TUI application.
///
/// Without this, a no-op sink is used.
///
/// Returns `true` if the sink was set, `false` if it was already set.
pub fn set_telemetry_sink(sink: Arc<dyn TelemetrySink>) -> bool {
    TELEMETRY_SINK.set(sink).is_ok()
}

/// Sets the initial terminal dimensions for the first frame.
///
/// Returns `true` if the dimensions were set, `false` if they were already
/// set.
pub fn set_initial_terminal_size(width: u16, height: u16) -> bool {
    INITIAL_TERMINAL_SIZE.set((width, height)).is_ok()
}

/// Returns the stored app options, or defaults when none were set.
pub(crate) fn get_app_options() -> AppOptions {
    APP_OPTIONS.get().cloned().unwrap_or_default()
}

/// Returns the initial terminal dimensions, querying the terminal when none
/// were stored.
pub(crate) fn get_initial_terminal_size() -> (u16, u16) {
    const DEFAULT_WIDTH: u16 = 80;
    const DEFAULT_HEIGHT: u16 = 24;

    INITIAL_TERMINAL_SIZE
        .get()
        .copied()
        .filter(|(width, height)| *width > 0 && *height > 0)
        .or_else(|| {
            terminal::size()
                .ok()
                .filter(|(width, height)| *width > 0 && *height > 0)
        })
        .unwrap_or((DEFAULT_WIDTH, DEFAULT_HEIGHT))
}

/// Loads the catalogue using the stored load context.
///
/// # Errors
///
/// Returns [`CatalogError::MissingSource`] when no context was stored, or
/// the load error reported by the store.
pub(crate) async fn load_catalog() -> Result<(CatalogStore, LoadSummary), CatalogError> {
    let context = LOAD_CONTEXT.get().ok_or(CatalogError::MissingSource)?;
    CatalogStore::load(context.gateway.as_ref(), &context.source).await
}

fn get_telemetry_sink() -> Arc<dyn TelemetrySink> {
    TELEMETRY_SINK.get().cloned().unwrap_or_else(|| {
        Arc::clone(DEFAULT_TELEMETRY_SINK.get_or_init(|| Arc::new(NoopTelemetrySink)))
    })
}

/// Records a telemetry event through the configured sink.
pub(crate) fn record_telemetry(event: TelemetryEvent) {
    get_telemetry_sink().record(event);
}
