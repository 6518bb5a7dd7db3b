//! Message types for the TUI update loop.
//!
//! Messages represent user actions, async command results, and system
//! events.

use crate::browse::DebounceTicket;
use crate::catalog::{CatalogError, CatalogStore, LoadSummary};

/// Messages for the catalogue TUI application.
#[derive(Debug, Clone)]
pub enum AppMsg {
    // Navigation
    /// Move cursor up one card.
    CursorUp,
    /// Move cursor down one card.
    CursorDown,
    /// Move cursor up one page.
    PageUp,
    /// Move cursor down one page.
    PageDown,
    /// Move cursor to the first card.
    Home,
    /// Move cursor to the last card.
    End,

    // Controls
    /// Cycle the name sort (unset, ascending, descending).
    CycleNameSort,
    /// Cycle the price sort (unset, ascending, descending).
    CyclePriceSort,
    /// Select the next category, wrapping back to all categories.
    CycleCategory,
    /// Show every category again.
    ClearCategory,

    // Data loading
    /// The catalogue finished loading.
    CatalogLoaded {
        /// Loaded store.
        store: CatalogStore,
        /// Load statistics.
        summary: LoadSummary,
    },
    /// The catalogue could not be loaded.
    CatalogLoadFailed(CatalogError),
    /// A debounce timer armed by a scroll event fired.
    ScrollSettled(DebounceTicket),

    // Cart
    /// Request that the selected product be added to the cart.
    AddToCart,

    // Application lifecycle
    /// Synthetic startup event emitted immediately after init.
    Initialized,
    /// Quit the application.
    Quit,
    /// Toggle help overlay.
    ToggleHelp,

    // Window events
    /// Terminal window was resized.
    WindowResized {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },
}

impl AppMsg {
    /// Returns true for cursor movement messages.
    #[must_use]
    pub const fn is_navigation(&self) -> bool {
        matches!(
            self,
            Self::CursorUp
                | Self::CursorDown
                | Self::PageUp
                | Self::PageDown
                | Self::Home
                | Self::End
        )
    }

    /// Returns true for sort and category control messages.
    #[must_use]
    pub const fn is_control(&self) -> bool {
        matches!(
            self,
            Self::CycleNameSort | Self::CyclePriceSort | Self::CycleCategory | Self::ClearCategory
        )
    }

    /// Returns true for loading and paging messages.
    #[must_use]
    pub const fn is_data(&self) -> bool {
        matches!(
            self,
            Self::CatalogLoaded { .. } | Self::CatalogLoadFailed(_) | Self::ScrollSettled(_)
        )
    }
}
