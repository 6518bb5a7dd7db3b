//! Plain-text mode for printing the catalogue.
//!
//! Loads the catalogue, applies the configured controls, renders every page
//! and writes the category list followed by one block per card.

use std::io::{self, Write};

use storefront::StorefrontConfig;
use storefront::browse::{BrowseSession, ProductCard};
use storefront::catalog::{CatalogError, CatalogStore, DefaultCatalogGateway};
use storefront::telemetry::{TelemetryEvent, TelemetrySink, TracingTelemetrySink};

/// Loads the catalogue and prints the configured view to stdout.
///
/// # Errors
///
/// Returns the configuration or load error, or [`CatalogError::Io`] when
/// stdout cannot be written.
pub async fn run(config: &StorefrontConfig) -> Result<(), CatalogError> {
    let source = config.require_source()?;
    let view_state = config.initial_view_state()?;
    let gateway = DefaultCatalogGateway::new(config.request_timeout())?;
    let telemetry = TracingTelemetrySink;

    let (store, summary) = match CatalogStore::load(&gateway, &source).await {
        Ok(loaded) => loaded,
        Err(error) => {
            telemetry.record(TelemetryEvent::CatalogLoadFailed {
                reason: error.to_string(),
            });
            return Err(error);
        }
    };
    telemetry.record(TelemetryEvent::CatalogLoaded {
        product_count: summary.product_count,
        category_count: summary.category_count,
        skipped_records: summary.skipped_records,
        latency_ms: summary.latency_ms,
    });

    let mut session = BrowseSession::new(store, view_state, config.browse_settings());
    session.load_all();
    telemetry.record(TelemetryEvent::PageRendered {
        rendered: session.rendered(),
        view_len: session.view().len(),
    });

    let mut stdout = io::stdout().lock();
    write_session_to(&mut stdout, &session)
}

/// Writes the categories, controls and rendered cards of `session`.
///
/// # Errors
///
/// Returns [`CatalogError::Io`] when the writer fails.
pub fn write_session_to<W: Write>(
    writer: &mut W,
    session: &BrowseSession,
) -> Result<(), CatalogError> {
    let state = session.view_state();
    writeln!(
        writer,
        "Categories: {}",
        session.categories().as_slice().join(", ")
    )
    .map_err(|e| io_error(&e))?;
    writeln!(
        writer,
        "Name: {}  Price: {}  Category: {} ({}/{})",
        state.name_sort.label(),
        state.price_sort.label(),
        state.category_label(),
        session.rendered(),
        session.view().len()
    )
    .map_err(|e| io_error(&e))?;

    for card in session.surface().cards() {
        writeln!(writer).map_err(|e| io_error(&e))?;
        write_card(writer, card)?;
    }

    Ok(())
}

fn write_card<W: Write>(writer: &mut W, card: &ProductCard) -> Result<(), CatalogError> {
    writeln!(
        writer,
        "#{}  {}  {}  [{}]",
        card.action.product_id, card.name, card.price_label, card.stock_label
    )
    .map_err(|e| io_error(&e))?;
    writeln!(writer, "    {}", card.image).map_err(|e| io_error(&e))
}

fn io_error(error: &io::Error) -> CatalogError {
    CatalogError::Io {
        message: error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use storefront::browse::{BrowseSettings, PageSizes};
    use storefront::catalog::test_support::{create_products, product};
    use storefront::catalog::{SortDirection, ViewState};

    use super::*;

    fn render(store: CatalogStore, view_state: ViewState) -> String {
        let settings = BrowseSettings {
            page_sizes: PageSizes {
                initial: 2,
                scroll: 1,
            },
            ..BrowseSettings::default()
        };
        let mut session = BrowseSession::new(store, view_state, settings);
        session.load_all();

        let mut buffer = Vec::new();
        write_session_to(&mut buffer, &session).expect("write should succeed");
        String::from_utf8(buffer).expect("output should be UTF-8")
    }

    #[test]
    fn prints_every_page_of_the_sorted_view() {
        let store = CatalogStore::from_products(vec![
            product(1, "Banana", 50.0, "Fruit"),
            product(2, "Apple", 100.0, "Fruit"),
            product(3, "Kettle", 25.5, "Kitchen"),
        ])
        .expect("store should build");
        let view_state = ViewState {
            name_sort: SortDirection::Ascending,
            ..ViewState::default()
        };

        insta::assert_snapshot!(render(store, view_state), @r"
        Categories: Fruit, Kitchen
        Name: asc  Price: -  Category: All (3/3)

        #2  Apple  ₹ 100  [in stock]
            https://img.example/2.png

        #1  Banana  ₹ 50  [in stock]
            https://img.example/1.png

        #3  Kettle  ₹ 25.5  [in stock]
            https://img.example/3.png
        ");
    }

    #[test]
    fn prints_only_the_selected_category() {
        let store = CatalogStore::from_products(create_products(10)).expect("store should build");
        let view_state = ViewState {
            category: Some("Books".to_owned()),
            ..ViewState::default()
        };

        insta::assert_snapshot!(render(store, view_state), @r"
        Categories: Games, Music, Books
        Name: -  Price: -  Category: Books (3/3)

        #3  Product 03  ₹ 3  [out of stock]
            https://img.example/3.png

        #6  Product 06  ₹ 6  [out of stock]
            https://img.example/6.png

        #9  Product 09  ₹ 9  [out of stock]
            https://img.example/9.png
        ");
    }
}
