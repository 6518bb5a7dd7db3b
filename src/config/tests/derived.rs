//! Tests for operation mode and settings derived from configuration.

use std::time::Duration;

use rstest::rstest;

use crate::StorefrontConfig;
use crate::browse::PageSizes;
use crate::catalog::{SortDirection, SortPolicy, ViewState};
use crate::config::OperationMode;

#[rstest]
#[case::browse_by_default(false, OperationMode::Browse)]
#[case::plain_when_requested(true, OperationMode::Plain)]
fn operation_mode_follows_plain_flag(#[case] plain: bool, #[case] expected: OperationMode) {
    let config = StorefrontConfig {
        plain,
        ..Default::default()
    };

    assert_eq!(config.operation_mode(), expected);
}

#[rstest]
fn initial_view_state_parses_sorts_and_trims_category() {
    let config = StorefrontConfig {
        name_sort: Some("Descending".to_owned()),
        price_sort: Some("asc".to_owned()),
        category: Some(" Books ".to_owned()),
        ..Default::default()
    };

    let view_state = config.initial_view_state().expect("view state should parse");

    assert_eq!(
        view_state,
        ViewState {
            name_sort: SortDirection::Descending,
            price_sort: SortDirection::Ascending,
            category: Some("Books".to_owned()),
        }
    );
}

#[rstest]
fn blank_category_means_all() {
    let config = StorefrontConfig {
        category: Some(String::new()),
        ..Default::default()
    };

    let view_state = config.initial_view_state().expect("view state should parse");

    assert_eq!(view_state.category, None);
}

#[rstest]
#[case::triggered_only(false, SortPolicy::TriggeredOnly)]
#[case::composed(true, SortPolicy::Composed)]
fn sort_policy_follows_compose_flag(#[case] compose_sorts: bool, #[case] expected: SortPolicy) {
    let config = StorefrontConfig {
        compose_sorts,
        ..Default::default()
    };

    assert_eq!(config.sort_policy(), expected);
}

#[rstest]
fn browse_settings_carry_page_sizes_and_currency() {
    let config = StorefrontConfig {
        initial_page_size: 6,
        scroll_page_size: 3,
        currency_symbol: "€".to_owned(),
        ..Default::default()
    };

    let settings = config.browse_settings();

    assert_eq!(settings.page_sizes, PageSizes { initial: 6, scroll: 3 });
    assert_eq!(settings.currency_symbol, "€");
}

#[rstest]
fn scroll_trigger_uses_threshold_and_debounce() {
    let config = StorefrontConfig {
        scroll_threshold: 5,
        scroll_debounce_ms: 250,
        ..Default::default()
    };

    let trigger = config.scroll_trigger();

    assert_eq!(trigger.threshold(), 5);
    assert_eq!(trigger.delay(), Duration::from_millis(250));
    assert_eq!(config.request_timeout(), Duration::from_secs(20));
}
