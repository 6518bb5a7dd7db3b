//! Tests for configuration consistency validation.

use rstest::rstest;

use crate::StorefrontConfig;
use crate::catalog::CatalogError;

#[rstest]
fn default_configuration_is_valid() {
    let config = StorefrontConfig::default();

    assert!(config.validate().is_ok(), "defaults should validate");
}

#[rstest]
#[case::zero_initial_page(StorefrontConfig { initial_page_size: 0, ..Default::default() })]
#[case::zero_scroll_page(StorefrontConfig { scroll_page_size: 0, ..Default::default() })]
#[case::zero_timeout(StorefrontConfig { request_timeout_seconds: 0, ..Default::default() })]
#[case::bad_name_sort(StorefrontConfig {
    name_sort: Some("sideways".to_owned()),
    ..Default::default()
})]
#[case::bad_price_sort(StorefrontConfig {
    price_sort: Some("cheapest".to_owned()),
    ..Default::default()
})]
fn rejects_inconsistent_configuration(#[case] config: StorefrontConfig) {
    let result = config.validate();

    assert!(
        matches!(result, Err(CatalogError::Configuration { .. })),
        "should reject configuration, got {result:?}"
    );
}

#[rstest]
fn missing_source_is_reported() {
    let config = StorefrontConfig::default();

    assert_eq!(config.require_source(), Err(CatalogError::MissingSource));
}

#[rstest]
fn blank_source_is_invalid() {
    let config = StorefrontConfig {
        source: Some("  ".to_owned()),
        ..Default::default()
    };

    assert!(matches!(
        config.require_source(),
        Err(CatalogError::InvalidSource(_))
    ));
}
