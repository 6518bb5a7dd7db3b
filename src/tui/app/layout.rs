//! Layout helpers for the catalogue TUI model.
//!
//! This module encapsulates list/detail height calculations and scroll
//! adjustments based on terminal size and cursor movement.

use super::{CHROME_HEIGHT, CatalogApp, MIN_DETAIL_HEIGHT, MIN_LIST_HEIGHT};

impl CatalogApp {
    /// Body rows available to the list and detail sections.
    const fn visible_body_height(&self) -> usize {
        (self.height as usize).saturating_sub(CHROME_HEIGHT)
    }

    /// Updates the visible row count for the card list.
    pub(super) fn set_visible_list_height(&mut self) {
        let list_height = self.calculate_list_height();
        self.product_list.set_visible_height(list_height);
    }

    /// Calculates the number of rows available for the card list.
    ///
    /// The list takes every body row except the detail pane's minimum, so
    /// the scroll geometry reflects how many cards are actually visible.
    pub(super) const fn calculate_list_height(&self) -> usize {
        let body_height = self.visible_body_height();
        let list_max = body_height.saturating_sub(MIN_DETAIL_HEIGHT);
        if list_max > MIN_LIST_HEIGHT {
            list_max
        } else {
            MIN_LIST_HEIGHT
        }
    }

    /// Calculates the number of rows left for the detail pane.
    pub(super) fn calculate_detail_height(&self) -> usize {
        let drawn_rows = self
            .card_count()
            .saturating_sub(self.list_state.scroll_offset)
            .clamp(1, self.product_list.visible_height().max(1));
        self.visible_body_height().saturating_sub(drawn_rows)
    }

    /// Adjusts scroll offset so the selected card remains visible.
    pub(super) const fn adjust_scroll_to_cursor(&mut self) {
        let visible_height = self.product_list.visible_height();
        self.list_state.keep_cursor_visible(visible_height);
    }
}
