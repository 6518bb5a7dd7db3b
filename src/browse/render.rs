//! Card view models and the output surface they are appended to.
//!
//! The renderer is presentation-agnostic: the TUI list component and the
//! plain-text printer both draw [`ProductCard`] values.

use crate::catalog::{Product, ProductId};

/// Default currency symbol prefixed to prices.
pub const DEFAULT_CURRENCY_SYMBOL: &str = "₹";

/// Visual emphasis for the stock label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockTone {
    /// The product can be ordered.
    Available,
    /// The product is out of stock.
    Unavailable,
}

/// Add-to-cart affordance attached to a card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartAction {
    /// Product the action refers to.
    pub product_id: ProductId,
}

/// Render view model of one product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCard {
    /// Image URI.
    pub image: String,
    /// Product name.
    pub name: String,
    /// Price with currency prefix, for example `₹ 49.99`.
    pub price_label: String,
    /// Stock status text as shown to the user.
    pub stock_label: String,
    /// Emphasis for the stock label.
    pub stock_tone: StockTone,
    /// Add-to-cart affordance.
    pub action: CartAction,
}

/// Ordered collection of rendered cards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputSurface {
    cards: Vec<ProductCard>,
}

impl OutputSurface {
    /// Removes every card.
    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Appends cards after those already rendered.
    pub fn append(&mut self, cards: impl IntoIterator<Item = ProductCard>) {
        self.cards.extend(cards);
    }

    /// Returns the rendered cards in display order.
    #[must_use]
    pub fn cards(&self) -> &[ProductCard] {
        &self.cards
    }

    /// Returns the number of rendered cards.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns true when nothing has been rendered.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Converts products into cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Renderer {
    currency_symbol: String,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(DEFAULT_CURRENCY_SYMBOL)
    }
}

impl Renderer {
    /// Creates a renderer using `currency_symbol` for price labels.
    #[must_use]
    pub fn new(currency_symbol: impl Into<String>) -> Self {
        Self {
            currency_symbol: currency_symbol.into(),
        }
    }

    /// Builds the card for a single product.
    #[must_use]
    pub fn card(&self, product: &Product) -> ProductCard {
        let stock_tone = if product.stock_status.is_in_stock() {
            StockTone::Available
        } else {
            StockTone::Unavailable
        };
        ProductCard {
            image: product.image.clone(),
            name: product.name.clone(),
            price_label: format!("{} {}", self.currency_symbol, product.price),
            stock_label: product.stock_status.label().to_owned(),
            stock_tone,
            action: CartAction {
                product_id: product.id.clone(),
            },
        }
    }

    /// Appends one card per product to `surface`, in order.
    pub fn render<'a>(
        &self,
        surface: &mut OutputSurface,
        products: impl IntoIterator<Item = &'a Product>,
    ) {
        surface.append(products.into_iter().map(|product| self.card(product)));
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::catalog::StockStatus;
    use crate::catalog::test_support::product;

    #[rstest]
    #[case::whole(100.0, "₹ 100")]
    #[case::fractional(49.99, "₹ 49.99")]
    fn price_labels_carry_the_currency(#[case] price: f64, #[case] expected: &str) {
        let card = Renderer::default().card(&product(7, "Lamp", price, "Home"));

        assert_eq!(card.price_label, expected);
    }

    #[test]
    fn currency_symbol_is_configurable() {
        let card = Renderer::new("$").card(&product(7, "Lamp", 12.5, "Home"));

        assert_eq!(card.price_label, "$ 12.5");
    }

    #[rstest]
    #[case::in_stock("in stock", StockTone::Available, "in stock")]
    #[case::out_of_stock("out of stock", StockTone::Unavailable, "out of stock")]
    #[case::backordered("backordered", StockTone::Unavailable, "backordered")]
    #[case::limited("limited", StockTone::Unavailable, "limited")]
    fn stock_tone_follows_availability(
        #[case] raw: &str,
        #[case] tone: StockTone,
        #[case] label: &str,
    ) {
        let mut item = product(3, "Kettle", 20.0, "Home");
        item.stock_status = StockStatus::from(raw.to_owned());

        let card = Renderer::default().card(&item);

        assert_eq!(card.stock_tone, tone);
        assert_eq!(card.stock_label, label);
    }

    #[test]
    fn cards_carry_the_cart_action_for_their_product() {
        let card = Renderer::default().card(&product(42, "Mug", 5.0, "Home"));

        assert_eq!(card.action.product_id.as_str(), "42");
    }

    #[test]
    fn render_appends_after_existing_cards() {
        let renderer = Renderer::default();
        let mut surface = OutputSurface::default();
        let first = [product(1, "A", 1.0, "X")];
        let second = [product(2, "B", 2.0, "X"), product(3, "C", 3.0, "X")];

        renderer.render(&mut surface, &first);
        renderer.render(&mut surface, &second);

        let names: Vec<&str> = surface.cards().iter().map(|card| card.name.as_str()).collect();
        assert_eq!(names, ["A", "B", "C"]);
    }
}
