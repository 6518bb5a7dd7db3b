//! Location of the catalogue document.

use std::fmt;

use camino::Utf8PathBuf;
use url::Url;

use super::error::CatalogError;

/// Where the catalogue document is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// An `http://` or `https://` URL fetched with a GET request.
    Http(Url),
    /// A document on the local filesystem.
    File(Utf8PathBuf),
}

impl CatalogSource {
    /// Parses a catalogue source from a URL or filesystem path.
    ///
    /// `http://` and `https://` inputs become [`CatalogSource::Http`];
    /// `file://` URLs and everything else are treated as paths.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidSource`] when the input is blank, an
    /// HTTP URL does not parse, or a `file://` URL does not name a UTF-8
    /// path.
    ///
    /// # Examples
    ///
    /// ```
    /// use storefront::catalog::CatalogSource;
    ///
    /// let source = CatalogSource::parse("https://shop.example/MOCK_DATA.json")
    ///     .expect("valid URL");
    /// assert!(matches!(source, CatalogSource::Http(_)));
    ///
    /// let source = CatalogSource::parse("data/MOCK_DATA.json").expect("valid path");
    /// assert!(matches!(source, CatalogSource::File(_)));
    /// ```
    pub fn parse(input: &str) -> Result<Self, CatalogError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(CatalogError::InvalidSource(
                "source must not be empty".to_owned(),
            ));
        }

        let lowered = trimmed.to_ascii_lowercase();
        if lowered.starts_with("http://") || lowered.starts_with("https://") {
            return Url::parse(trimmed)
                .map(Self::Http)
                .map_err(|error| CatalogError::InvalidSource(format!("{trimmed}: {error}")));
        }

        if lowered.starts_with("file://") {
            return Self::from_file_url(trimmed);
        }

        Ok(Self::File(Utf8PathBuf::from(trimmed)))
    }

    fn from_file_url(input: &str) -> Result<Self, CatalogError> {
        let url = Url::parse(input)
            .map_err(|error| CatalogError::InvalidSource(format!("{input}: {error}")))?;
        let path = url
            .to_file_path()
            .map_err(|()| CatalogError::InvalidSource(format!("{input}: not a local path")))?;
        Utf8PathBuf::from_path_buf(path)
            .map(Self::File)
            .map_err(|path| {
                CatalogError::InvalidSource(format!("{}: path is not UTF-8", path.display()))
            })
    }
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http(url) => write!(f, "{url}"),
            Self::File(path) => write!(f, "{path}"),
        }
    }
}
