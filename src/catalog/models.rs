//! Product records and catalogue document decoding.
//!
//! The catalogue document is a JSON array of flat product records. Records
//! that fail to decode are skipped individually so a single bad entry does
//! not hide the rest of the catalogue.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::CatalogError;

/// Identifier of a product, carried by each card's cart action.
///
/// Catalogue generators emit identifiers as numbers or strings; both are
/// normalised to their textual form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(from = "RawProductId", into = "String")]
pub struct ProductId(String);

impl ProductId {
    /// Creates an identifier from its textual form.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the identifier text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ProductId> for String {
    fn from(value: ProductId) -> Self {
        value.0
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawProductId {
    Number(u64),
    Text(String),
}

impl From<RawProductId> for ProductId {
    fn from(value: RawProductId) -> Self {
        match value {
            RawProductId::Number(number) => Self(number.to_string()),
            RawProductId::Text(text) => Self(text),
        }
    }
}

/// Availability of a product.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(from = "String", into = "String")]
pub enum StockStatus {
    /// The source reported `"in stock"`.
    InStock,
    /// Any other reported status, keeping the source text for display.
    OutOfStock(String),
}

impl StockStatus {
    const IN_STOCK_LABEL: &'static str = "in stock";
    const OUT_OF_STOCK_LABEL: &'static str = "out of stock";

    /// Returns the label shown on product cards.
    #[must_use]
    pub const fn label(&self) -> &str {
        match self {
            Self::InStock => Self::IN_STOCK_LABEL,
            Self::OutOfStock(text) => text.as_str(),
        }
    }

    /// Returns true for [`StockStatus::InStock`].
    #[must_use]
    pub const fn is_in_stock(&self) -> bool {
        matches!(self, Self::InStock)
    }
}

impl From<String> for StockStatus {
    fn from(value: String) -> Self {
        let text = value.trim();
        if text.eq_ignore_ascii_case(Self::IN_STOCK_LABEL) {
            Self::InStock
        } else if text.is_empty() {
            Self::OutOfStock(Self::OUT_OF_STOCK_LABEL.to_owned())
        } else {
            Self::OutOfStock(text.to_owned())
        }
    }
}

impl From<StockStatus> for String {
    fn from(value: StockStatus) -> Self {
        match value {
            StockStatus::InStock => StockStatus::IN_STOCK_LABEL.to_owned(),
            StockStatus::OutOfStock(text) => text,
        }
    }
}

/// A single catalogue entry.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Product {
    /// Product identifier.
    #[serde(rename = "product_id")]
    pub id: ProductId,
    /// Image URI.
    #[serde(rename = "product_image")]
    pub image: String,
    /// Display name.
    #[serde(rename = "product_name")]
    pub name: String,
    /// Unit price in the catalogue currency.
    #[serde(rename = "product_price")]
    pub price: f64,
    /// Category label.
    pub category: String,
    /// Availability.
    pub stock_status: StockStatus,
}

/// Products decoded from a catalogue document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DecodedCatalog {
    /// Successfully decoded products in document order.
    pub products: Vec<Product>,
    /// Number of records skipped because they could not be decoded.
    pub skipped: usize,
}

/// Decodes a catalogue document into products.
///
/// The document must be a JSON array. Elements that do not decode as a
/// [`Product`] are skipped and counted.
///
/// # Errors
///
/// Returns [`CatalogError::Decode`] when the document is not valid JSON or
/// is not an array.
pub fn decode_products(document: &[u8]) -> Result<DecodedCatalog, CatalogError> {
    let records: Vec<Value> =
        serde_json::from_slice(document).map_err(|error| CatalogError::Decode {
            message: error.to_string(),
        })?;

    let mut decoded = DecodedCatalog::default();
    for (position, record) in records.into_iter().enumerate() {
        match serde_json::from_value::<Product>(record) {
            Ok(product) => decoded.products.push(product),
            Err(error) => {
                tracing::warn!("skipping malformed catalogue record {position}: {error}");
                decoded.skipped = decoded.skipped.saturating_add(1);
            }
        }
    }

    Ok(decoded)
}
