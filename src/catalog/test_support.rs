//! Test helpers for constructing `Product` fixtures.
//!
//! Fixtures use deterministic names, prices, and categories so ordering and
//! filtering assertions stay readable.

use super::models::{Product, ProductId, StockStatus};

/// Constructs an in-stock product with the given name, price, and category.
#[must_use]
pub fn product(id: u64, name: &str, price: f64, category: &str) -> Product {
    Product {
        id: ProductId::new(id.to_string()),
        image: format!("https://img.example/{id}.png"),
        name: name.to_owned(),
        price,
        category: category.to_owned(),
        stock_status: StockStatus::InStock,
    }
}

/// Creates `count` products with sequential IDs starting from 1.
///
/// Names are `Product 01`, `Product 02`, and so on. Categories rotate
/// through `Games`, `Music` and `Books`, prices equal the ID, and every
/// third product is out of stock.
#[must_use]
pub fn create_products(count: usize) -> Vec<Product> {
    const CATEGORIES: [&str; 3] = ["Books", "Games", "Music"];

    (1..=count)
        .map(|position| {
            let id = u64::try_from(position).unwrap_or(u64::MAX);
            let category = CATEGORIES
                .get(position.checked_rem(CATEGORIES.len()).unwrap_or_default())
                .copied()
                .unwrap_or("Books");
            let price = f64::from(u32::try_from(position).unwrap_or(u32::MAX));
            let mut item = product(id, &format!("Product {position:02}"), price, category);
            if position.is_multiple_of(3) {
                item.stock_status = StockStatus::from("out of stock".to_owned());
            }
            item
        })
        .collect()
}
