//! Catalogue load and scroll-settle handlers.
//!
//! A successful load starts the browse session and renders the initial page.
//! Settled scroll timers load the next page when the list is near its end.

use bubbletea_rs::Cmd;

use super::CatalogApp;
use crate::browse::{BrowseSession, DebounceTicket};
use crate::catalog::{CatalogError, CatalogStore, LoadSummary};
use crate::telemetry::TelemetryEvent;
use crate::tui::messages::AppMsg;
use crate::tui::record_telemetry;
use crate::tui::state::LoadFailure;

impl CatalogApp {
    /// Dispatches data messages to their handlers.
    pub(super) fn handle_data_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::CatalogLoaded { store, summary } => {
                self.handle_catalog_loaded(store.clone(), *summary);
                None
            }
            AppMsg::CatalogLoadFailed(error) => {
                self.handle_catalog_load_failed(error);
                None
            }
            AppMsg::ScrollSettled(ticket) => {
                self.handle_scroll_settled(*ticket);
                None
            }
            _ => {
                // Unreachable: caller filters to data messages.
                None
            }
        }
    }

    fn handle_catalog_loaded(&mut self, store: CatalogStore, summary: LoadSummary) {
        record_telemetry(TelemetryEvent::CatalogLoaded {
            product_count: summary.product_count,
            category_count: summary.category_count,
            skipped_records: summary.skipped_records,
            latency_ms: summary.latency_ms,
        });

        let session = BrowseSession::new(
            store,
            self.options.initial_view.clone(),
            self.options.settings.clone(),
        );
        self.loading = false;
        self.failure = None;
        self.list_state.reset();
        self.session = Some(session);
        self.record_page_rendered();
    }

    fn handle_catalog_load_failed(&mut self, error: &CatalogError) {
        tracing::warn!("catalogue load failed: {error}");
        record_telemetry(TelemetryEvent::CatalogLoadFailed {
            reason: error.to_string(),
        });
        self.loading = false;
        self.failure = Some(LoadFailure::from_error(error));
    }

    /// Loads the next page when `ticket` is the latest scroll event and the
    /// list is within the threshold of its end.
    fn handle_scroll_settled(&mut self, ticket: DebounceTicket) {
        let metrics = self.scroll_metrics();
        if !self.trigger.on_settled(ticket, metrics) {
            return;
        }
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if session.load_more() > 0 {
            self.record_page_rendered();
        }
    }

    /// Records a page render for the current view.
    pub(super) fn record_page_rendered(&self) {
        if let Some(session) = &self.session {
            record_telemetry(TelemetryEvent::PageRendered {
                rendered: session.rendered(),
                view_len: session.view().len(),
            });
        }
    }
}
