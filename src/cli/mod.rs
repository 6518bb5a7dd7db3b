//! CLI operation mode handlers.
//!
//! - [`browse_tui`]: interactive catalogue browser
//! - [`plain`]: prints every card of the configured view to stdout

pub mod browse_tui;
pub mod plain;
