//! Lifecycle and window handlers for the catalogue TUI.
//!
//! This module handles startup, terminal resize events, cart requests, and
//! high-level lifecycle messages such as quit and help toggling.

use std::any::Any;

use bubbletea_rs::Cmd;

use super::CatalogApp;
use crate::tui::messages::AppMsg;

impl CatalogApp {
    /// Dispatches lifecycle and window messages to their handlers.
    pub(super) fn handle_lifecycle_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::Initialized => self.handle_initialized(),
            AppMsg::Quit => Some(bubbletea_rs::quit()),
            AppMsg::ToggleHelp => {
                self.show_help = !self.show_help;
                None
            }
            AppMsg::AddToCart => {
                self.record_cart_request();
                None
            }
            AppMsg::WindowResized { width, height } => self.handle_resize(*width, *height),
            _ => {
                // Unreachable: caller filters to lifecycle messages.
                None
            }
        }
    }

    /// Handles the synthetic startup message by starting the catalogue load.
    ///
    /// `Initialized` is a one-shot event; repeats are ignored so the
    /// catalogue is fetched once.
    fn handle_initialized(&mut self) -> Option<Cmd> {
        if self.has_initialized {
            return None;
        }

        self.has_initialized = true;
        self.loading = true;
        Some(Self::load_catalog_cmd())
    }

    /// Creates a command that fetches the catalogue through the stored load
    /// context.
    fn load_catalog_cmd() -> Cmd {
        Box::pin(async {
            let msg = match crate::tui::load_catalog().await {
                Ok((store, summary)) => AppMsg::CatalogLoaded { store, summary },
                Err(error) => AppMsg::CatalogLoadFailed(error),
            };
            Some(Box::new(msg) as Box<dyn Any + Send>)
        })
    }

    /// Creates a command that emits `Initialized` immediately.
    ///
    /// This synthetic startup event triggers the first render cycle without
    /// waiting for user input.
    pub(super) fn immediate_init_cmd() -> Cmd {
        Box::pin(async { Some(Box::new(AppMsg::Initialized) as Box<dyn Any + Send>) })
    }

    /// Records a cart request for the selected card.
    ///
    /// Cart handling lives outside the catalogue; the request is logged and
    /// acknowledged in the status bar.
    fn record_cart_request(&mut self) {
        let Some(card) = self.selected_card() else {
            return;
        };
        let status = format!("Added to cart: {} (#{})", card.name, card.action.product_id);
        tracing::info!(product_id = %card.action.product_id, "add to cart requested");
        self.cart_status = Some(status);
    }

    fn handle_resize(&mut self, width: u16, height: u16) -> Option<Cmd> {
        self.width = width;
        self.height = height;
        self.set_visible_list_height();
        self.adjust_scroll_to_cursor();
        None
    }
}
