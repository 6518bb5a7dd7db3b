//! State management for the catalogue TUI.
//!
//! This module provides the cursor state for the card list and the load
//! failure shown in place of the list when the catalogue cannot be loaded.

mod list_state;
mod load_failure;

pub use list_state::ListState;
pub use load_failure::LoadFailure;
