//! Tests for configuration layer precedence.

use rstest::rstest;
use serde_json::{Value, json};

use super::helpers::build_config_from_layers;

#[rstest]
#[case::file_overrides_defaults(
    vec![("defaults", json!({"source": "default.json"})), ("file", json!({"source": "file.json"}))],
    "source",
    "file.json",
    "file should override default"
)]
#[case::environment_overrides_file(
    vec![("file", json!({"category": "Books"})), ("environment", json!({"category": "Games"}))],
    "category",
    "Games",
    "environment should override file"
)]
#[case::cli_overrides_environment(
    vec![("environment", json!({"name_sort": "asc"})), ("cli", json!({"name_sort": "desc"}))],
    "name_sort",
    "desc",
    "CLI should override environment"
)]
#[case::log_file_defaults_file_env_cli(
    vec![
        ("defaults", json!({"log_file": "default.log"})),
        ("file", json!({"log_file": "file.log"})),
        ("environment", json!({"log_file": "env.log"})),
        ("cli", json!({"log_file": "cli.log"}))
    ],
    "log_file",
    "cli.log",
    "CLI should win for log_file"
)]
fn test_layer_precedence(
    #[case] layers: Vec<(&str, Value)>,
    #[case] field: &str,
    #[case] expected: &str,
    #[case] message: &str,
) {
    let config = build_config_from_layers(&layers);

    let actual = match field {
        "source" => config.source.as_deref(),
        "category" => config.category.as_deref(),
        "name_sort" => config.name_sort.as_deref(),
        "log_file" => config.log_file.as_deref(),
        _ => panic!("unknown field: {field}"),
    };

    assert_eq!(actual, Some(expected), "{message}");
}

#[rstest]
fn defaults_apply_when_no_sources_provided() {
    let config = build_config_from_layers(&[("defaults", json!({"source": null}))]);

    assert!(config.source.is_none(), "source should be None");
    assert_eq!(config.initial_page_size, 12);
    assert_eq!(config.scroll_page_size, 4);
    assert_eq!(config.scroll_threshold, 2);
    assert_eq!(config.scroll_debounce_ms, 100);
    assert_eq!(config.request_timeout_seconds, 20);
    assert_eq!(config.currency_symbol, "₹");
    assert!(!config.plain, "plain should default to false");
    assert!(!config.compose_sorts, "compose_sorts should default to false");
}

#[rstest]
fn numeric_fields_follow_precedence() {
    let config = build_config_from_layers(&[
        ("file", json!({"initial_page_size": 20, "scroll_page_size": 8})),
        ("cli", json!({"scroll_page_size": 2})),
    ]);

    assert_eq!(config.initial_page_size, 20, "file value should apply");
    assert_eq!(config.scroll_page_size, 2, "CLI should override file");
}
