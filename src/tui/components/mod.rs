//! UI components for the catalogue TUI.
//!
//! Components render card view models to strings; the app decides which
//! cards are visible and where the cursor is.

mod product_detail;
mod product_list;
mod text_fit;

pub use product_detail::{ProductDetailComponent, ProductDetailViewContext};
pub use product_list::{ProductListComponent, ProductListViewContext};
