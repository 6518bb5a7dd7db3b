//! Cursor and scroll state for the card list.
//!
//! The cursor indexes the rendered cards; the scroll offset is the first
//! visible row. Both are reset whenever a control change replaces the cards.

/// State tracking the selected card and the visible window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListState {
    /// Current cursor position (0-indexed) within the rendered cards.
    pub cursor_position: usize,
    /// Index of the first visible row.
    pub scroll_offset: usize,
}

impl ListState {
    /// Moves the cursor and scroll offset back to the top.
    pub const fn reset(&mut self) {
        self.cursor_position = 0;
        self.scroll_offset = 0;
    }

    /// Moves the cursor up by `step`, stopping at the first card.
    pub const fn move_up(&mut self, step: usize) {
        self.cursor_position = self.cursor_position.saturating_sub(step);
    }

    /// Moves the cursor down by `step`, stopping at the last of `count`
    /// cards.
    pub fn move_down(&mut self, step: usize, count: usize) {
        let max_index = count.saturating_sub(1);
        self.cursor_position = self.cursor_position.saturating_add(step).min(max_index);
    }

    /// Adjusts the scroll offset so the cursor stays within a window of
    /// `visible_height` rows.
    pub const fn keep_cursor_visible(&mut self, visible_height: usize) {
        if visible_height == 0 {
            return;
        }

        if self.cursor_position < self.scroll_offset {
            self.scroll_offset = self.cursor_position;
            return;
        }

        let viewport_end = self.scroll_offset.saturating_add(visible_height);
        if self.cursor_position >= viewport_end {
            self.scroll_offset = self
                .cursor_position
                .saturating_sub(visible_height.saturating_sub(1));
        }
    }
}
