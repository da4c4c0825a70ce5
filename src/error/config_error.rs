use std::path::PathBuf;

use rust_decimal::Decimal;

/// Errors raised while loading the conversion table.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The settings file could not be read.
    #[error("Failed to read settings file '{path}': {source}")]
    Io {
        /// The file that was being read.
        path:   PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
    /// The settings are not valid JSON or do not have the expected shape.
    #[error("Malformed settings: {0}")]
    Json(#[from] serde_json::Error),
    /// Rates are multiplicative and must be strictly positive.
    #[error("Rate from {from} to {to} must be positive, found {rate}")]
    NonPositiveRate {
        /// Source currency.
        from: String,
        /// Destination currency.
        to:   String,
        /// The offending rate.
        rate: Decimal,
    },
}
