//! Error types exposed by the catalogue layer.

use thiserror::Error;

/// Errors surfaced while locating, fetching, or decoding the catalogue.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// No catalogue source was configured.
    #[error("catalogue source is required (use --source or -s)")]
    MissingSource,

    /// The configured source is neither a URL nor a usable path.
    #[error("catalogue source is invalid: {0}")]
    InvalidSource(String),

    /// Networking failed while requesting the catalogue document.
    #[error("network error fetching catalogue: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// The catalogue server answered with a non-success status.
    #[error("catalogue request failed with status {status}: {message}")]
    Status {
        /// HTTP status code returned by the server.
        status: u16,
        /// Truncated response body or reason phrase.
        message: String,
    },

    /// Reading a local catalogue document failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },

    /// The catalogue document is not a JSON array of product records.
    #[error("catalogue document could not be decoded: {message}")]
    Decode {
        /// Parser error detail.
        message: String,
    },

    /// The document loaded successfully but holds no usable products.
    #[error("no records found")]
    NoRecords,

    /// Configuration could not be loaded or is inconsistent.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },
}

impl CatalogError {
    /// Returns true when the load succeeded but produced zero products.
    #[must_use]
    pub const fn is_no_records(&self) -> bool {
        matches!(self, Self::NoRecords)
    }
}
