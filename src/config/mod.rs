//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.storefront.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `STOREFRONT_SOURCE`,
//!    `STOREFRONT_NAME_SORT`, and so on
//! 4. **Command-line arguments** – `--source`/`-s`, `--category`/`-c`, ...
//!
//! # Configuration File
//!
//! ```toml
//! source = "https://shop.example/MOCK_DATA.json"
//! name_sort = "asc"
//! category = "Books"
//! initial_page_size = 12
//! scroll_page_size = 4
//! currency_symbol = "₹"
//! log_file = "storefront.log"
//! ```

use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::browse::pager::{DEFAULT_INITIAL_PAGE_SIZE, DEFAULT_SCROLL_PAGE_SIZE};
use crate::browse::render::DEFAULT_CURRENCY_SYMBOL;
use crate::browse::scroll::{DEFAULT_SCROLL_DEBOUNCE, DEFAULT_SCROLL_THRESHOLD};
use crate::browse::{BrowseSettings, PageSizes, ScrollTrigger};
use crate::catalog::{CatalogError, CatalogSource, SortDirection, SortPolicy, ViewState};

const DEFAULT_REQUEST_TIMEOUT_SECONDS: u64 = 20;

/// Operation mode determined by CLI arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationMode {
    /// Interactive TUI for browsing the catalogue.
    Browse,
    /// Print the whole catalogue to stdout and exit.
    Plain,
}

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Example
///
/// ```no_run
/// use ortho_config::OrthoConfig;
/// use storefront::StorefrontConfig;
///
/// let config = StorefrontConfig::load().expect("failed to load configuration");
/// let source = config.require_source().expect("catalogue source required");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "STOREFRONT",
    discovery(
        dotfile_name = ".storefront.toml",
        config_file_name = "storefront.toml",
        app_name = "storefront"
    )
)]
pub struct StorefrontConfig {
    /// Catalogue document to load: an HTTP(S) URL or a filesystem path.
    ///
    /// Can be provided via:
    /// - CLI: `--source <URL|PATH>` or `-s <URL|PATH>`
    /// - Environment: `STOREFRONT_SOURCE`
    /// - Config file: `source = "..."`
    #[ortho_config(cli_short = 's')]
    pub source: Option<String>,

    /// Initial name sort direction (`asc`, `desc`, or `none`).
    #[ortho_config()]
    pub name_sort: Option<String>,

    /// Initial price sort direction (`asc`, `desc`, or `none`).
    #[ortho_config()]
    pub price_sort: Option<String>,

    /// Initially selected category. Unset shows every category.
    ///
    /// Can be provided via:
    /// - CLI: `--category <NAME>` or `-c <NAME>`
    /// - Environment: `STOREFRONT_CATEGORY`
    /// - Config file: `category = "..."`
    #[ortho_config(cli_short = 'c')]
    pub category: Option<String>,

    /// Number of products rendered after a load or control change.
    #[ortho_config()]
    pub initial_page_size: usize,

    /// Number of products appended each time scrolling nears the bottom.
    #[ortho_config()]
    pub scroll_page_size: usize,

    /// Distance from the bottom of the list, in rows, that loads more.
    #[ortho_config()]
    pub scroll_threshold: usize,

    /// Quiet period after the last scroll event before it is evaluated.
    #[ortho_config()]
    pub scroll_debounce_ms: u64,

    /// Timeout for fetching an HTTP catalogue, in seconds.
    #[ortho_config()]
    pub request_timeout_seconds: u64,

    /// Currency symbol prefixed to prices.
    #[ortho_config()]
    pub currency_symbol: String,

    /// Applies every set sort criterion on each change instead of only the
    /// one that changed. Price becomes the primary key and name breaks ties.
    #[ortho_config()]
    pub compose_sorts: bool,

    /// Prints the catalogue to stdout instead of starting the TUI.
    ///
    /// Can be provided via:
    /// - CLI: `--plain` / `-P`
    /// - Config file: `plain = true`
    ///
    /// Note: `ortho_config` does not load boolean values from the
    /// environment, so `STOREFRONT_PLAIN` is not supported.
    #[ortho_config(cli_short = 'P')]
    pub plain: bool,

    /// Disables colour in the TUI stock labels.
    #[ortho_config()]
    pub no_color: bool,

    /// File that receives log output. The TUI only logs when this is set.
    #[ortho_config()]
    pub log_file: Option<String>,

    /// Log filter directive, for example `storefront=debug`.
    ///
    /// Falls back to `RUST_LOG`, then to `warn`.
    #[ortho_config()]
    pub log_filter: Option<String>,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            source: None,
            name_sort: None,
            price_sort: None,
            category: None,
            initial_page_size: DEFAULT_INITIAL_PAGE_SIZE,
            scroll_page_size: DEFAULT_SCROLL_PAGE_SIZE,
            scroll_threshold: DEFAULT_SCROLL_THRESHOLD,
            scroll_debounce_ms: duration_millis(DEFAULT_SCROLL_DEBOUNCE),
            request_timeout_seconds: DEFAULT_REQUEST_TIMEOUT_SECONDS,
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_owned(),
            compose_sorts: false,
            plain: false,
            no_color: false,
            log_file: None,
            log_filter: None,
        }
    }
}

fn duration_millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

impl StorefrontConfig {
    /// Returns the parsed catalogue source.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::MissingSource`] when no source is configured
    /// and [`CatalogError::InvalidSource`] when it cannot be parsed.
    pub fn require_source(&self) -> Result<CatalogSource, CatalogError> {
        let source = self.source.as_deref().ok_or(CatalogError::MissingSource)?;
        CatalogSource::parse(source)
    }

    /// Checks that the configuration is internally consistent.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Configuration`] when a page size or the
    /// request timeout is zero, or a sort direction does not parse.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.initial_page_size == 0 {
            return Err(configuration_error("initial_page_size must be at least 1"));
        }
        if self.scroll_page_size == 0 {
            return Err(configuration_error("scroll_page_size must be at least 1"));
        }
        if self.request_timeout_seconds == 0 {
            return Err(configuration_error(
                "request_timeout_seconds must be at least 1",
            ));
        }
        self.initial_view_state().map(|_| ())
    }

    /// Determines the operation mode.
    #[must_use]
    pub const fn operation_mode(&self) -> OperationMode {
        if self.plain {
            OperationMode::Plain
        } else {
            OperationMode::Browse
        }
    }

    /// Builds the view state applied when the catalogue first loads.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Configuration`] when a sort direction does
    /// not parse.
    pub fn initial_view_state(&self) -> Result<ViewState, CatalogError> {
        Ok(ViewState {
            name_sort: parse_direction(self.name_sort.as_deref())?,
            price_sort: parse_direction(self.price_sort.as_deref())?,
            category: self
                .category
                .as_deref()
                .map(str::trim)
                .filter(|category| !category.is_empty())
                .map(ToOwned::to_owned),
        })
    }

    /// Returns the configured page sizes.
    #[must_use]
    pub const fn page_sizes(&self) -> PageSizes {
        PageSizes {
            initial: self.initial_page_size,
            scroll: self.scroll_page_size,
        }
    }

    /// Returns the configured sort policy.
    #[must_use]
    pub const fn sort_policy(&self) -> SortPolicy {
        if self.compose_sorts {
            SortPolicy::Composed
        } else {
            SortPolicy::TriggeredOnly
        }
    }

    /// Returns the settings for a browse session.
    #[must_use]
    pub fn browse_settings(&self) -> BrowseSettings {
        BrowseSettings {
            page_sizes: self.page_sizes(),
            sort_policy: self.sort_policy(),
            currency_symbol: self.currency_symbol.clone(),
        }
    }

    /// Returns a scroll trigger using the configured threshold and delay.
    #[must_use]
    pub const fn scroll_trigger(&self) -> ScrollTrigger {
        ScrollTrigger::new(
            self.scroll_threshold,
            Duration::from_millis(self.scroll_debounce_ms),
        )
    }

    /// Returns the HTTP request timeout.
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

fn parse_direction(value: Option<&str>) -> Result<SortDirection, CatalogError> {
    value.map_or(Ok(SortDirection::Unset), str::parse)
}

fn configuration_error(message: &str) -> CatalogError {
    CatalogError::Configuration {
        message: message.to_owned(),
    }
}

#[cfg(test)]
mod tests;
