//! Gateways that retrieve the raw catalogue document.
//!
//! The store only needs the document bytes; where they come from is hidden
//! behind [`CatalogGateway`] so tests can substitute a mock.

use std::time::Duration;

use async_trait::async_trait;
use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use reqwest::Client;
use url::Url;

use super::error::CatalogError;
use super::source::CatalogSource;

const DEFAULT_TIMEOUT_SECS: u64 = 20;
const ERROR_BODY_PREVIEW_CHARS: usize = 160;

/// Retrieves catalogue documents.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogGateway: Send + Sync {
    /// Fetches the raw document bytes for `source`.
    async fn fetch_document(&self, source: &CatalogSource) -> Result<Vec<u8>, CatalogError>;
}

/// Gateway reading HTTP sources with `reqwest` and files with `cap-std`.
#[derive(Debug, Clone)]
pub struct DefaultCatalogGateway {
    client: Client,
}

impl DefaultCatalogGateway {
    /// Creates a gateway whose HTTP requests time out after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Configuration`] when the HTTP client cannot
    /// be built.
    pub fn new(timeout: Duration) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|error| CatalogError::Configuration {
                message: format!("failed to configure catalogue HTTP client: {error}"),
            })?;
        Ok(Self { client })
    }

    /// Creates a gateway with the default request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Configuration`] when the HTTP client cannot
    /// be built.
    pub fn with_default_timeout() -> Result<Self, CatalogError> {
        Self::new(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    async fn fetch_http(&self, url: &Url) -> Result<Vec<u8>, CatalogError> {
        let response =
            self.client
                .get(url.clone())
                .send()
                .await
                .map_err(|error| CatalogError::Network {
                    message: error.to_string(),
                })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.map_or_else(
                |_| "(failed to read error response body)".to_owned(),
                |content| truncate_for_message(&content, ERROR_BODY_PREVIEW_CHARS),
            );
            return Err(CatalogError::Status {
                status: status.as_u16(),
                message: body,
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|error| CatalogError::Network {
                message: format!("failed to read catalogue response: {error}"),
            })?;
        Ok(bytes.to_vec())
    }
}

#[async_trait]
impl CatalogGateway for DefaultCatalogGateway {
    async fn fetch_document(&self, source: &CatalogSource) -> Result<Vec<u8>, CatalogError> {
        match source {
            CatalogSource::Http(url) => self.fetch_http(url).await,
            CatalogSource::File(path) => read_file(path),
        }
    }
}

fn read_file(path: &Utf8Path) -> Result<Vec<u8>, CatalogError> {
    let file_name = path.file_name().ok_or_else(|| {
        CatalogError::InvalidSource(format!("{path}: path does not name a file"))
    })?;
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };

    let dir =
        Dir::open_ambient_dir(parent, ambient_authority()).map_err(|error| CatalogError::Io {
            message: format!("failed to open '{parent}': {error}"),
        })?;
    dir.read(file_name).map_err(|error| CatalogError::Io {
        message: format!("failed to read '{path}': {error}"),
    })
}

fn truncate_for_message(message: &str, max_chars: usize) -> String {
    let mut output: String = message.chars().take(max_chars).collect();
    if message.chars().nth(max_chars).is_some() {
        output.push_str("...");
    }
    output
}
