//! Main TUI application model implementing the MVU pattern.
//!
//! The app owns the browse session once the catalogue has loaded, the list
//! cursor, and the scroll trigger. Message handlers are split by category:
//!
//! - `navigation`: cursor movement, each one a debounced scroll event
//! - `control_handlers`: sort and category controls
//! - `data_handlers`: catalogue load results and settled scroll timers
//! - `lifecycle_handlers`: startup, help, cart requests, and resize
//! - `rendering`: header, controls bar, status bar, and help overlay

use bubbletea_rs::Cmd;

use crate::browse::{BrowseSession, BrowseSettings, ProductCard, ScrollMetrics, ScrollTrigger};
use crate::catalog::ViewState;

use super::components::ProductListComponent;
use super::messages::AppMsg;
use super::state::{ListState, LoadFailure};

mod control_handlers;
mod data_handlers;
mod layout;
mod lifecycle_handlers;
mod model_impl;
mod navigation;
mod rendering;

/// Layout rows reserved for header, controls bar, separator, and status bar.
pub(crate) const CHROME_HEIGHT: usize = 4;
/// Minimum rows reserved for the product detail pane.
pub(crate) const MIN_DETAIL_HEIGHT: usize = 2;
/// Minimum rows for the card list.
pub(crate) const MIN_LIST_HEIGHT: usize = 1;

/// Options used to build the app model.
#[derive(Debug, Clone, Default)]
pub struct AppOptions {
    /// View state applied when the catalogue first loads.
    pub initial_view: ViewState,
    /// Page sizes, sort policy, and currency for the browse session.
    pub settings: BrowseSettings,
    /// Near-bottom threshold and debounce delay.
    pub trigger: ScrollTrigger,
    /// Disables colour in the stock labels.
    pub no_color: bool,
}

/// Main application model for the catalogue TUI.
#[derive(Debug)]
pub struct CatalogApp {
    options: AppOptions,
    /// Browse session, present once the catalogue has loaded.
    pub(crate) session: Option<BrowseSession>,
    /// Load failure shown in place of the list.
    pub(crate) failure: Option<LoadFailure>,
    /// Whether the catalogue is currently loading.
    pub(crate) loading: bool,
    /// Cursor and scroll state for the card list.
    pub(crate) list_state: ListState,
    trigger: ScrollTrigger,
    /// Most recent cart request, shown in the status bar.
    pub(crate) cart_status: Option<String>,
    width: u16,
    height: u16,
    /// Whether the help overlay is visible.
    pub(crate) show_help: bool,
    has_initialized: bool,
    product_list: ProductListComponent,
}

impl CatalogApp {
    /// Creates an app waiting for its catalogue.
    #[must_use]
    pub fn new(options: AppOptions) -> Self {
        let (width, height) = super::get_initial_terminal_size();
        let mut app = Self {
            trigger: options.trigger,
            options,
            session: None,
            failure: None,
            loading: false,
            list_state: ListState::default(),
            cart_status: None,
            width,
            height,
            show_help: false,
            has_initialized: false,
            product_list: ProductListComponent::new(),
        };
        app.set_visible_list_height();
        app
    }

    /// Returns the rendered cards, empty until the catalogue loads.
    #[must_use]
    pub fn cards(&self) -> &[ProductCard] {
        self.session
            .as_ref()
            .map(|session| session.surface().cards())
            .unwrap_or_default()
    }

    /// Returns the number of rendered cards.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.cards().len()
    }

    /// Returns the card under the cursor, if any.
    #[must_use]
    pub fn selected_card(&self) -> Option<&ProductCard> {
        self.cards().get(self.list_state.cursor_position)
    }

    /// Returns the current cursor position.
    #[must_use]
    pub const fn cursor_position(&self) -> usize {
        self.list_state.cursor_position
    }

    /// Returns the browse session, if the catalogue has loaded.
    #[must_use]
    pub const fn session(&self) -> Option<&BrowseSession> {
        self.session.as_ref()
    }

    /// Returns the load failure, if loading failed.
    #[must_use]
    pub const fn failure(&self) -> Option<&LoadFailure> {
        self.failure.as_ref()
    }

    /// Returns the scroll geometry of the card list.
    #[must_use]
    pub fn scroll_metrics(&self) -> ScrollMetrics {
        ScrollMetrics {
            scroll_top: self.list_state.scroll_offset,
            client_height: self.product_list.visible_height(),
            scroll_height: self.card_count(),
        }
    }

    /// Handles a message and updates state accordingly.
    ///
    /// Delegates to specialised handlers for each message category.
    pub fn handle_message(&mut self, msg: &AppMsg) -> Option<Cmd> {
        if msg.is_navigation() {
            return self.handle_navigation_msg(msg);
        }
        if msg.is_control() {
            return self.handle_control_msg(msg);
        }
        if msg.is_data() {
            return self.handle_data_msg(msg);
        }
        self.handle_lifecycle_msg(msg)
    }
}
