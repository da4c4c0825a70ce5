use std::path::Path;

use fxcalc::{
    config::{from_json_str, load},
    error::ConfigError,
};
use rust_decimal_macros::dec;

#[test]
fn settings_file_loads() {
    let table = load(Path::new("tests/settings.json")).unwrap();

    assert_eq!(table.resolve_directive("usd"), Some("USD"));
    assert_eq!(table.resolve_directive("xyz"), None);
    assert_eq!(table.rate("EUR", "USD").unwrap(), dec!(0.9));
    assert_eq!(table.rate("EUR", "RUB").unwrap(), dec!(90));
    assert_eq!(table.rate("$", "USD").unwrap(), dec!(1));
}

#[test]
fn bundled_settings_load() {
    let table = load(Path::new("app.settings.json")).unwrap();
    assert_eq!(table.resolve_directive("eur"), Some("EUR"));
    assert!(table.rates().count() > 0);
}

#[test]
fn sections_default_to_empty() {
    let table = from_json_str("{}").unwrap();
    assert_eq!(table.rates().count(), 0);
    assert_eq!(table.directive_count(), 0);
}

#[test]
fn rates_accept_numbers_and_strings() {
    let table = from_json_str(r#"{ "conversionCosts": { "EUR": { "USD": 0.9, "GBP": "0.86" } } }"#).unwrap();
    assert_eq!(table.rate("EUR", "USD").unwrap(), dec!(0.9));
    assert_eq!(table.rate("EUR", "GBP").unwrap(), dec!(0.86));
}

#[test]
fn non_positive_rates_are_rejected() {
    for json in [r#"{ "conversionCosts": { "EUR": { "USD": 0 } } }"#,
                 r#"{ "conversionCosts": { "EUR": { "USD": -0.9 } } }"#]
    {
        match from_json_str(json) {
            Err(ConfigError::NonPositiveRate { from, to, .. }) => {
                assert_eq!(from, "EUR");
                assert_eq!(to, "USD");
            },
            other => panic!("expected NonPositiveRate, got {other:?}"),
        }
    }
}

#[test]
fn malformed_settings_are_rejected() {
    assert!(matches!(from_json_str("not json"), Err(ConfigError::Json(_))));
    assert!(matches!(from_json_str(r#"{ "conversionCosts": { "EUR": 0.9 } }"#),
                     Err(ConfigError::Json(_))));
    assert!(matches!(from_json_str(r#"{ "conversionToCurrencyConventions": { "usd": 1 } }"#),
                     Err(ConfigError::Json(_))));
}

#[test]
fn missing_file_is_io_error() {
    let err = load(Path::new("tests/does-not-exist.json")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
    assert!(err.to_string().contains("does-not-exist.json"));
}
