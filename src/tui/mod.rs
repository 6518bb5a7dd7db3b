//! Terminal user interface for browsing the catalogue.
//!
//! The TUI follows the Model-View-Update pattern of bubbletea-rs:
//!
//! - **Model**: application state in [`app::CatalogApp`]
//! - **View**: string rendering in the app and its components
//! - **Update**: message-driven state transitions in `update()`
//!
//! # Startup
//!
//! `Model::init()` is a static function, so startup inputs are stored at
//! module level. Call [`set_load_context`] and [`set_app_options`] before
//! starting the program; `CatalogApp::init()` picks them up and fetches the
//! catalogue in the background.
//!
//! # Scrolling
//!
//! Every cursor movement counts as a scroll event. Each event arms a
//! debounce timer; when the newest timer fires and the list is near the
//! bottom, the next page of cards is appended.

pub mod app;
pub mod components;
pub mod input;
pub mod messages;
pub mod state;
mod storage;

pub use app::{AppOptions, CatalogApp};
pub use storage::{
    set_app_options, set_initial_terminal_size, set_load_context, set_telemetry_sink,
};
pub(crate) use storage::{
    get_app_options, get_initial_terminal_size, load_catalog, record_telemetry,
};

#[cfg(test)]
mod tests;
