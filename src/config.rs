//! Loading the conversion table from a JSON settings file.
//!
//! The file has two sections:
//!
//! ```json
//! {
//!   "conversionCosts": { "EUR": { "USD": 0.9 } },
//!   "conversionToCurrencyConventions": { "usd": "USD" }
//! }
//! ```
//!
//! Rates may be written as JSON numbers or as strings.

use std::{fs, path::Path};

use rust_decimal::Decimal;

use crate::{error::ConfigError, interpreter::value::table::ConversionTable};

/// Settings file read when no other path is given.
pub const DEFAULT_SETTINGS_PATH: &str = "app.settings.json";

/// Environment variable that overrides [`DEFAULT_SETTINGS_PATH`].
pub const SETTINGS_ENV_VAR: &str = "FXCALC_CONFIG";

/// Reads and validates the conversion table stored at `path`.
///
/// # Errors
/// - `ConfigError::Io` if the file cannot be read.
/// - Any error from [`from_json_str`].
pub fn load(path: &Path) -> Result<ConversionTable, ConfigError> {
    let json = fs::read_to_string(path).map_err(|source| ConfigError::Io { path: path.to_path_buf(),
                                                                          source })?;
    let table = from_json_str(&json)?;

    tracing::info!(path = %path.display(),
                   rates = table.rates().count(),
                   directives = table.directive_count(),
                   "loaded conversion table");
    Ok(table)
}

/// Parses and validates a conversion table from JSON text.
///
/// # Errors
/// - `ConfigError::Json` if the text is not a settings object.
/// - `ConfigError::NonPositiveRate` if any rate is zero or negative.
///
/// # Examples
/// ```
/// use fxcalc::config::from_json_str;
///
/// let table = from_json_str(r#"{ "conversionToCurrencyConventions": { "usd": "USD" } }"#).unwrap();
/// assert_eq!(table.resolve_directive("usd"), Some("USD"));
///
/// assert!(from_json_str(r#"{ "conversionCosts": { "EUR": { "USD": 0 } } }"#).is_err());
/// ```
pub fn from_json_str(json: &str) -> Result<ConversionTable, ConfigError> {
    let table: ConversionTable = serde_json::from_str(json)?;
    validate(&table)?;
    Ok(table)
}

fn validate(table: &ConversionTable) -> Result<(), ConfigError> {
    if let Some((from, to, rate)) = table.rates().find(|(_, _, rate)| *rate <= Decimal::ZERO) {
        return Err(ConfigError::NonPositiveRate { from: from.to_string(),
                                                  to: to.to_string(),
                                                  rate });
    }
    Ok(())
}
