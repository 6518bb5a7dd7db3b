//! Load failure shown in place of the card list.

use crate::catalog::CatalogError;

/// Why the catalogue could not be shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadFailure {
    /// The document loaded but contained no products.
    NoRecords,
    /// Fetching or decoding failed.
    Failed(String),
}

impl LoadFailure {
    /// Classifies a load error.
    #[must_use]
    pub fn from_error(error: &CatalogError) -> Self {
        if error.is_no_records() {
            Self::NoRecords
        } else {
            Self::Failed(error.to_string())
        }
    }

    /// Returns the message rendered in place of the card list.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::NoRecords => "No records found...".to_owned(),
            Self::Failed(reason) => format!("Failed to load data: {reason}"),
        }
    }
}
