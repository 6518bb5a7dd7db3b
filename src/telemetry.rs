//! Application telemetry events and sinks.
//!
//! Storefront records a handful of operational signals (catalogue load
//! latency, load failures, page renders) through a [`TelemetrySink`]. Nothing
//! is transmitted anywhere; the tracing sink writes JSON through the active
//! `tracing` subscriber.

use serde::{Deserialize, Serialize};

/// A structured telemetry event emitted by Storefront.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TelemetryEvent {
    /// The catalogue loaded successfully.
    CatalogLoaded {
        /// Number of products in the store.
        product_count: usize,
        /// Number of distinct categories.
        category_count: usize,
        /// Number of malformed records skipped.
        skipped_records: usize,
        /// Wall-clock load time in milliseconds.
        latency_ms: u64,
    },
    /// The catalogue could not be loaded.
    CatalogLoadFailed {
        /// Display form of the load error.
        reason: String,
    },
    /// A page of cards was rendered.
    PageRendered {
        /// Total cards rendered for the current view.
        rendered: usize,
        /// Length of the current view.
        view_len: usize,
    },
}

/// A sink that can record telemetry events.
pub trait TelemetrySink: Send + Sync {
    /// Records a telemetry event.
    fn record(&self, event: TelemetryEvent);
}

/// Telemetry sink that drops all events.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopTelemetrySink;

impl TelemetrySink for NoopTelemetrySink {
    fn record(&self, _event: TelemetryEvent) {}
}

/// Emits telemetry events as JSON through `tracing` at info level.
///
/// Events land wherever the installed subscriber writes, so they follow the
/// configured log file and filter.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingTelemetrySink;

impl TelemetrySink for TracingTelemetrySink {
    fn record(&self, event: TelemetryEvent) {
        let Ok(serialised) = serde_json::to_string(&event) else {
            return;
        };

        tracing::info!(target: "storefront::telemetry", "{serialised}");
    }
}

/// Test helpers for capturing telemetry.
#[cfg(any(test, feature = "test-support"))]
pub mod test_support {
    use std::sync::Mutex;

    use super::{TelemetryEvent, TelemetrySink};

    /// Sink that keeps every recorded event in memory.
    #[derive(Debug, Default)]
    pub struct RecordingTelemetrySink {
        events: Mutex<Vec<TelemetryEvent>>,
    }

    impl RecordingTelemetrySink {
        /// Returns a copy of the recorded events.
        #[must_use]
        pub fn events(&self) -> Vec<TelemetryEvent> {
            self.events
                .lock()
                .map(|events| events.clone())
                .unwrap_or_default()
        }

        /// Removes and returns the recorded events.
        #[must_use]
        pub fn take(&self) -> Vec<TelemetryEvent> {
            self.events
                .lock()
                .map(|mut events| events.drain(..).collect())
                .unwrap_or_default()
        }
    }

    impl TelemetrySink for RecordingTelemetrySink {
        fn record(&self, event: TelemetryEvent) {
            if let Ok(mut events) = self.events.lock() {
                events.push(event);
            }
        }
    }
}
