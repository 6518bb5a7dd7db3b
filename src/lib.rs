//! Storefront library crate for browsing a product catalogue.
//!
//! The library loads a JSON catalogue from a URL or file, computes sorted
//! and filtered views of it, pages through each view with a cursor, and
//! renders product cards for the terminal browser and the plain printer.

pub mod browse;
pub mod catalog;
pub mod config;
pub mod logging;
pub mod telemetry;
pub mod tui;

pub use browse::{BrowseSession, BrowseSettings, ControlChange};
pub use catalog::{CatalogError, CatalogSource, CatalogStore, ProductView, ViewState};
pub use config::{OperationMode, StorefrontConfig};
