//! Detail pane for the selected product card.

use crate::browse::ProductCard;

use super::product_list::stock_label;
use super::text_fit::truncate_to_width;

/// Placeholder shown when no card is selected.
const NO_SELECTION_PLACEHOLDER: &str = "(No product selected)";

/// Widest separator drawn above the pane.
const MAX_SEPARATOR_WIDTH: usize = 80;

/// Context for rendering the detail pane.
#[derive(Debug, Clone)]
pub struct ProductDetailViewContext<'a> {
    /// Selected card, if any.
    pub card: Option<&'a ProductCard>,
    /// Terminal width in columns.
    pub max_width: usize,
    /// Maximum height in rows (0 = unlimited).
    pub max_height: usize,
    /// Disables colour for the stock label.
    pub no_color: bool,
}

/// Component rendering the selected card's fields and cart affordance.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProductDetailComponent;

impl ProductDetailComponent {
    /// Renders the detail pane.
    #[must_use]
    pub fn view(ctx: &ProductDetailViewContext<'_>) -> String {
        let Some(card) = ctx.card else {
            return format!("{NO_SELECTION_PLACEHOLDER}\n");
        };

        let width = ctx.max_width.max(1);
        let lines = [
            "─".repeat(width.min(MAX_SEPARATOR_WIDTH)),
            truncate_to_width(&card.name, width),
            format!("Price: {}", card.price_label),
            format!("Stock: {}", stock_label(card, ctx.no_color)),
            truncate_to_width(&format!("Image: {}", card.image), width),
            format!("[a] Add to cart (#{})", card.action.product_id),
        ];

        let limit = if ctx.max_height == 0 {
            lines.len()
        } else {
            ctx.max_height
        };
        lines
            .iter()
            .take(limit)
            .fold(String::new(), |mut output, line| {
                output.push_str(line);
                output.push('\n');
                output
            })
    }
}
