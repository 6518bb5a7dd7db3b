//! Support code for catalogue browsing behavioural tests.

pub mod state;

pub use state::BrowsingState;
