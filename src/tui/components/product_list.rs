//! Product list component for displaying rendered cards.
//!
//! Each card occupies one row: a cursor marker, the product name, the price
//! label and the stock label. Only the rows inside the visible window are
//! drawn.

use crossterm::style::Stylize;

use crate::browse::{ProductCard, StockTone};

use super::text_fit::{fit_left, fit_right};

/// Default visible height for the product list component.
const DEFAULT_VISIBLE_HEIGHT: usize = 20;

/// Columns reserved for the price label.
const PRICE_COLUMN_WIDTH: usize = 12;

/// Columns reserved for the stock label.
const STOCK_COLUMN_WIDTH: usize = 12;

/// Columns used by the cursor marker and column gaps.
const FIXED_COLUMNS: usize = 6;

/// Narrowest name column, even on very small terminals.
const MIN_NAME_WIDTH: usize = 8;

/// Message shown when a category filter leaves nothing to display.
const EMPTY_VIEW_MESSAGE: &str = "  No products match the current category.";

/// Context for rendering the product list view.
#[derive(Debug, Clone)]
pub struct ProductListViewContext<'a> {
    /// Rendered cards in display order.
    pub cards: &'a [ProductCard],
    /// Current cursor position (0-indexed).
    pub cursor_position: usize,
    /// Index of the first visible row.
    pub scroll_offset: usize,
    /// Maximum visible height in rows.
    pub visible_height: usize,
    /// Terminal width in columns.
    pub max_width: usize,
    /// Disables colour for the stock label.
    pub no_color: bool,
}

/// Component for displaying the list of product cards.
#[derive(Debug, Clone)]
pub struct ProductListComponent {
    visible_height: usize,
}

impl Default for ProductListComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductListComponent {
    /// Creates a new product list component.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            visible_height: DEFAULT_VISIBLE_HEIGHT,
        }
    }

    /// Updates the visible height for scrolling calculations.
    pub const fn set_visible_height(&mut self, height: usize) {
        self.visible_height = height;
    }

    /// Returns the visible height.
    #[must_use]
    pub const fn visible_height(&self) -> usize {
        self.visible_height
    }

    /// Renders the visible window of the list.
    #[must_use]
    pub fn view(&self, ctx: &ProductListViewContext<'_>) -> String {
        if ctx.cards.is_empty() {
            return format!("{EMPTY_VIEW_MESSAGE}\n");
        }

        let visible_height = if ctx.visible_height > 0 {
            ctx.visible_height
        } else {
            self.visible_height
        };
        let name_width = ctx
            .max_width
            .saturating_sub(FIXED_COLUMNS + PRICE_COLUMN_WIDTH + STOCK_COLUMN_WIDTH)
            .max(MIN_NAME_WIDTH);

        let mut output = String::new();
        for (display_index, card) in ctx
            .cards
            .iter()
            .enumerate()
            .skip(ctx.scroll_offset)
            .take(visible_height)
        {
            let prefix = if display_index == ctx.cursor_position {
                ">"
            } else {
                " "
            };
            output.push_str(&format_card_line(card, prefix, name_width, ctx.no_color));
            output.push('\n');
        }
        output
    }
}

fn format_card_line(card: &ProductCard, prefix: &str, name_width: usize, no_color: bool) -> String {
    let name = fit_left(&card.name, name_width);
    let price = fit_right(&card.price_label, PRICE_COLUMN_WIDTH);
    let stock = stock_label(card, no_color);
    format!("{prefix} {name}  {price}  {stock}")
}

/// Returns the stock label, coloured by availability unless disabled.
pub(crate) fn stock_label(card: &ProductCard, no_color: bool) -> String {
    if no_color {
        return card.stock_label.clone();
    }
    match card.stock_tone {
        StockTone::Available => card.stock_label.as_str().green().to_string(),
        StockTone::Unavailable => card.stock_label.as_str().red().to_string(),
    }
}
