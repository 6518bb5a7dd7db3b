//! Tests for TUI startup context storage helpers.

use std::sync::Arc;

use crate::catalog::{CatalogSource, MockCatalogGateway};
use crate::telemetry::test_support::RecordingTelemetrySink;
use crate::telemetry::{TelemetryEvent, TelemetrySink};

use super::*;

const CATALOGUE: &str = r#"[
    {"product_id": 1, "product_image": "a.png", "product_name": "Lamp", "product_price": 10, "category": "Home", "stock_status": "in stock"},
    {"product_id": 2, "product_image": "b.png", "product_name": "Kettle", "product_price": 25, "category": "Kitchen", "stock_status": "out of stock"}
]"#;

#[test]
fn record_telemetry_accepts_events_without_a_sink() {
    // OnceLock may hold a previously-set sink; verify no panic.
    record_telemetry(TelemetryEvent::PageRendered {
        rendered: 4,
        view_len: 10,
    });
}

#[test]
fn set_telemetry_sink_wires_sink_for_record_telemetry() {
    // OnceLock: only verify events if our sink was first to be set.
    let sink = Arc::new(RecordingTelemetrySink::default());
    let was_set = set_telemetry_sink(Arc::clone(&sink) as Arc<dyn TelemetrySink>);
    record_telemetry(TelemetryEvent::CatalogLoadFailed {
        reason: "offline".to_owned(),
    });
    if was_set {
        assert!(sink.events().contains(&TelemetryEvent::CatalogLoadFailed {
            reason: "offline".to_owned(),
        }));
    }
}

#[test]
fn app_options_fall_back_to_defaults() {
    let options = get_app_options();

    assert!(options.settings.page_sizes.initial >= 1);
    assert!(options.settings.page_sizes.scroll >= 1);
}

#[test]
fn initial_terminal_size_is_never_zero() {
    // A zero size is stored when this test runs first; reads must skip it.
    set_initial_terminal_size(0, 0);
    let (width, height) = get_initial_terminal_size();

    assert!(width > 0 && height > 0);
}

#[tokio::test]
async fn load_catalog_uses_stored_gateway() {
    let mut gateway = MockCatalogGateway::new();
    gateway
        .expect_fetch_document()
        .returning(|_| Ok(CATALOGUE.as_bytes().to_vec()));
    let source = CatalogSource::parse("catalogue.json").expect("source should parse");

    let was_set = set_load_context(Arc::new(gateway), source);
    let result = load_catalog().await;

    if was_set {
        let (store, summary) = result.expect("catalogue should load");
        assert_eq!(store.len(), 2);
        assert_eq!(summary.category_count, 2);
    }
}
