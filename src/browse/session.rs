//! Browse session owning the pipeline state.
//!
//! A session ties the loaded store to the current controls, the cached view
//! for those controls, the page cursor and the rendered cards. Control
//! changes recompute the view and restart paging; scroll loads page further
//! through the cached view without recomputing it.

use crate::catalog::{
    CatalogStore, CategorySet, ProductView, SortDirection, SortPolicy, ViewChange, ViewState,
};

use super::pager::{PageCursor, PageRequest, PageSizes};
use super::render::{OutputSurface, Renderer};

/// Tunables for a browse session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowseSettings {
    /// Page sizes for initial and scroll loads.
    pub page_sizes: PageSizes,
    /// How sort criteria combine across control events.
    pub sort_policy: SortPolicy,
    /// Currency symbol used for price labels.
    pub currency_symbol: String,
}

impl Default for BrowseSettings {
    fn default() -> Self {
        Self {
            page_sizes: PageSizes::default(),
            sort_policy: SortPolicy::default(),
            currency_symbol: super::render::DEFAULT_CURRENCY_SYMBOL.to_owned(),
        }
    }
}

/// A user-initiated control change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlChange {
    /// The name sort control moved to the given direction.
    NameSort(SortDirection),
    /// The price sort control moved to the given direction.
    PriceSort(SortDirection),
    /// The category control moved to the given selection.
    Category(Option<String>),
}

impl ControlChange {
    const fn view_change(&self) -> ViewChange {
        match self {
            Self::NameSort(_) => ViewChange::NameSort,
            Self::PriceSort(_) => ViewChange::PriceSort,
            Self::Category(_) => ViewChange::Category,
        }
    }
}

/// Pipeline state for one loaded catalogue.
#[derive(Debug, Clone)]
pub struct BrowseSession {
    store: CatalogStore,
    view_state: ViewState,
    view: ProductView,
    cursor: PageCursor,
    surface: OutputSurface,
    renderer: Renderer,
    policy: SortPolicy,
}

impl BrowseSession {
    /// Starts a session and renders the first page of the initial view.
    #[must_use]
    pub fn new(store: CatalogStore, view_state: ViewState, settings: BrowseSettings) -> Self {
        let view = ProductView::compute(
            store.products(),
            &view_state,
            ViewChange::Initial,
            settings.sort_policy,
        );
        let mut session = Self {
            store,
            view_state,
            view,
            cursor: PageCursor::new(settings.page_sizes),
            surface: OutputSurface::default(),
            renderer: Renderer::new(settings.currency_symbol),
            policy: settings.sort_policy,
        };
        session.render_page(PageRequest::Initial);
        session
    }

    /// Applies a control change, recomputes the view and renders its first
    /// page onto a cleared surface.
    ///
    /// Returns the number of cards rendered.
    pub fn apply_change(&mut self, change: ControlChange) -> usize {
        let view_change = change.view_change();
        match change {
            ControlChange::NameSort(direction) => self.view_state.name_sort = direction,
            ControlChange::PriceSort(direction) => self.view_state.price_sort = direction,
            ControlChange::Category(category) => self.view_state.category = category,
        }

        self.view = ProductView::compute(
            self.store.products(),
            &self.view_state,
            view_change,
            self.policy,
        );
        self.cursor.reset();
        self.surface.clear();
        self.render_page(PageRequest::Initial)
    }

    /// Appends the next scroll page of the cached view.
    ///
    /// Returns the number of cards appended; zero once the view is
    /// exhausted.
    pub fn load_more(&mut self) -> usize {
        self.render_page(PageRequest::Scroll)
    }

    /// Renders every remaining page of the current view.
    pub fn load_all(&mut self) {
        while self.load_more() > 0 {}
    }

    fn render_page(&mut self, request: PageRequest) -> usize {
        let page = self.cursor.next_slice(self.view.indices(), request);
        let products = self.store.products();
        self.renderer.render(
            &mut self.surface,
            page.iter().filter_map(|&index| products.get(index)),
        );
        tracing::debug!(
            "rendered {} of {} products ({request:?})",
            self.cursor.rendered(),
            self.view.len()
        );
        page.len()
    }

    /// Returns the category options in first-seen order.
    #[must_use]
    pub const fn categories(&self) -> &CategorySet {
        self.store.categories()
    }

    /// Returns the current control selections.
    #[must_use]
    pub const fn view_state(&self) -> &ViewState {
        &self.view_state
    }

    /// Returns the cached view for the current controls.
    #[must_use]
    pub const fn view(&self) -> &ProductView {
        &self.view
    }

    /// Returns the rendered cards.
    #[must_use]
    pub const fn surface(&self) -> &OutputSurface {
        &self.surface
    }

    /// Returns the number of view items rendered so far.
    #[must_use]
    pub const fn rendered(&self) -> usize {
        self.cursor.rendered()
    }

    /// Returns true when every item of the current view is rendered.
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.cursor.is_exhausted(self.view.len())
    }
}
