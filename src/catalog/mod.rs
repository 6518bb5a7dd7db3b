//! Catalogue loading, storage, and querying.
//!
//! The catalogue is fetched once through a [`CatalogGateway`], decoded into
//! [`Product`] records, and held by a [`CatalogStore`] alongside its derived
//! [`CategorySet`]. Views over the store are computed by the query engine in
//! [`query`], which sorts and filters without mutating the stored products.

pub mod error;
pub mod gateway;
pub mod models;
pub mod query;
pub mod source;
pub mod store;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use error::CatalogError;
pub use gateway::{CatalogGateway, DefaultCatalogGateway};
pub use models::{DecodedCatalog, Product, ProductId, StockStatus, decode_products};
pub use query::{
    ProductView, SortDirection, SortPolicy, ViewChange, ViewState, compute_view, locale_compare,
};
pub use source::CatalogSource;
pub use store::{CatalogStore, CategorySet, LoadSummary};

#[cfg(test)]
pub use gateway::MockCatalogGateway;
