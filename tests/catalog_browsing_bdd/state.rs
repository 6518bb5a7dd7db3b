//! Scenario state for catalogue browsing BDD tests.

use std::sync::Arc;
use std::time::Duration;

use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;
use storefront::browse::{BrowseSettings, PageSizes, ScrollTrigger};
use storefront::catalog::{CatalogStore, LoadSummary, Product, ViewState};
use storefront::telemetry::test_support::RecordingTelemetrySink;
use storefront::tui::messages::AppMsg;
use storefront::tui::{AppOptions, CatalogApp};

use crate::support::runtime::SharedRuntime;

/// Debounce delay used by scenarios; short so settled timers resolve fast.
const SCENARIO_DEBOUNCE: Duration = Duration::from_millis(5);

/// State shared across steps in a browsing scenario.
#[derive(ScenarioState, Default)]
pub struct BrowsingState {
    /// Runtime used to resolve debounce commands.
    pub runtime: Slot<SharedRuntime>,
    /// Products the catalogue is built from.
    pub products: Slot<Vec<Product>>,
    /// Control selections applied when the catalogue loads.
    pub initial_view: Slot<ViewState>,
    /// The TUI application model under test.
    pub app: Slot<CatalogApp>,
    /// Recording telemetry sink installed for the scenario.
    pub telemetry_sink: Slot<Arc<RecordingTelemetrySink>>,
}

/// Builds an app with a 100x24 terminal and a loaded catalogue.
pub fn open_app(
    products: Vec<Product>,
    initial_view: ViewState,
    page_sizes: PageSizes,
) -> Result<CatalogApp, storefront::CatalogError> {
    let options = AppOptions {
        initial_view,
        settings: BrowseSettings {
            page_sizes,
            ..BrowseSettings::default()
        },
        trigger: ScrollTrigger::new(2, SCENARIO_DEBOUNCE),
        no_color: true,
    };
    let mut app = CatalogApp::new(options);
    app.handle_message(&AppMsg::WindowResized {
        width: 100,
        height: 24,
    });

    let store = CatalogStore::from_products(products)?;
    let summary = LoadSummary {
        product_count: store.len(),
        category_count: store.categories().len(),
        skipped_records: 0,
        latency_ms: 0,
    };
    app.handle_message(&AppMsg::CatalogLoaded { store, summary });
    Ok(app)
}
