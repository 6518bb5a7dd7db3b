//! Shared test utilities.

use serde_json::{Value, json};

pub mod runtime;

/// Builds a catalogue record in the wire format.
///
/// Categories rotate through `Games`, `Music` and `Books` so loaded stores
/// match `create_products`.
pub fn catalogue_record(id: usize) -> Value {
    const CATEGORIES: [&str; 3] = ["Books", "Games", "Music"];

    let category = CATEGORIES
        .get(id.checked_rem(CATEGORIES.len()).unwrap_or_default())
        .copied()
        .unwrap_or("Books");
    json!({
        "product_id": id,
        "product_image": format!("https://img.example/{id}.png"),
        "product_name": format!("Product {id:02}"),
        "product_price": id,
        "category": category,
        "stock_status": if id.is_multiple_of(3) { "out of stock" } else { "in stock" },
    })
}

/// Builds a catalogue document holding `count` records.
pub fn catalogue_document(count: usize) -> Value {
    Value::Array((1..=count).map(catalogue_record).collect())
}
