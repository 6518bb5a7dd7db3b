//! In-memory catalogue store and derived category set.

use std::collections::HashSet;
use std::time::Instant;

use super::error::CatalogError;
use super::gateway::CatalogGateway;
use super::models::{Product, decode_products};
use super::source::CatalogSource;

/// Distinct category labels in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategorySet(Vec<String>);

impl CategorySet {
    /// Derives the categories of `products`, preserving first-seen order.
    #[must_use]
    pub fn derive(products: &[Product]) -> Self {
        let mut seen = HashSet::new();
        let categories = products
            .iter()
            .filter(|product| seen.insert(product.category.as_str()))
            .map(|product| product.category.clone())
            .collect();
        Self(categories)
    }

    /// Returns the categories as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Returns the number of distinct categories.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true when no categories were derived.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the category following `current`, or `None` after the last.
    ///
    /// `None` as input starts from the first category. An unknown input
    /// also starts over from the first category.
    #[must_use]
    pub fn next_after(&self, current: Option<&str>) -> Option<&str> {
        let next_index = current
            .and_then(|label| self.0.iter().position(|known| known == label))
            .map_or(0, |index| index.saturating_add(1));
        self.0.get(next_index).map(String::as_str)
    }
}

/// Summary of a successful load, used for logging and telemetry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadSummary {
    /// Number of products loaded.
    pub product_count: usize,
    /// Number of distinct categories.
    pub category_count: usize,
    /// Number of malformed records skipped.
    pub skipped_records: usize,
    /// Wall-clock load time in milliseconds.
    pub latency_ms: u64,
}

/// The loaded product collection and its category set.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogStore {
    products: Vec<Product>,
    categories: CategorySet,
    skipped_records: usize,
}

impl CatalogStore {
    /// Builds a store from an in-memory product collection.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NoRecords`] when `products` is empty.
    pub fn from_products(products: Vec<Product>) -> Result<Self, CatalogError> {
        if products.is_empty() {
            return Err(CatalogError::NoRecords);
        }
        let categories = CategorySet::derive(&products);
        Ok(Self {
            products,
            categories,
            skipped_records: 0,
        })
    }

    /// Fetches, decodes, and stores the catalogue at `source`.
    ///
    /// # Errors
    ///
    /// Returns the gateway's error when fetching fails,
    /// [`CatalogError::Decode`] when the document is not an array, and
    /// [`CatalogError::NoRecords`] when no product could be decoded.
    pub async fn load(
        gateway: &dyn CatalogGateway,
        source: &CatalogSource,
    ) -> Result<(Self, LoadSummary), CatalogError> {
        let start = Instant::now();
        tracing::debug!("loading catalogue from {source}");

        let document = gateway.fetch_document(source).await?;
        let decoded = decode_products(&document)?;
        let mut store = Self::from_products(decoded.products)?;
        store.skipped_records = decoded.skipped;

        let summary = LoadSummary {
            product_count: store.len(),
            category_count: store.categories.len(),
            skipped_records: decoded.skipped,
            latency_ms: u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX),
        };
        tracing::info!(
            "loaded {} products in {} categories from {source} ({} skipped)",
            summary.product_count,
            summary.category_count,
            summary.skipped_records
        );
        Ok((store, summary))
    }

    /// Returns all products in source order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Returns the derived category set.
    #[must_use]
    pub const fn categories(&self) -> &CategorySet {
        &self.categories
    }

    /// Returns the number of stored products.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.products.len()
    }

    /// Returns true when the store holds no products.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Returns the number of malformed records skipped at load time.
    #[must_use]
    pub const fn skipped_records(&self) -> usize {
        self.skipped_records
    }
}
