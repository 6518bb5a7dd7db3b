//! Unit tests for configuration loading and precedence.
//!
//! Tests are organised into modules by functional area:
//! - `helpers`: Shared test utilities
//! - `precedence`: Layer precedence tests
//! - `derived`: Operation mode and derived settings tests
//! - `validation`: Configuration consistency validation tests

mod derived;
mod helpers;
mod precedence;
mod validation;
