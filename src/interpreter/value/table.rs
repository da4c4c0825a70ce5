use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::{
    error::EvaluationError,
    interpreter::{evaluator::core::EvalResult, value::core::SignedAmount},
    util::num::mul_checked,
};

/// Exchange rates and directive names.
///
/// `rates[from][to]` is the multiplier that turns an amount in `from` into
/// one in `to`. Rates are directional: `EUR -> USD` does not imply
/// `USD -> EUR`. `directives` maps the short tokens written in the input
/// (`usd`, `eur`) to currency codes.
///
/// The table is never modified during evaluation and can be shared between
/// threads by reference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ConversionTable {
    #[serde(rename = "conversionCosts", default)]
    rates:      HashMap<String, HashMap<String, Decimal>>,
    #[serde(rename = "conversionToCurrencyConventions", default)]
    directives: HashMap<String, String>,
}

impl ConversionTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) the rate from `from` to `to`.
    #[must_use]
    pub fn with_rate(mut self, from: &str, to: &str, rate: Decimal) -> Self {
        self.rates
            .entry(from.to_string())
            .or_default()
            .insert(to.to_string(), rate);
        self
    }

    /// Adds (or replaces) the currency a directive token resolves to.
    #[must_use]
    pub fn with_directive(mut self, directive: &str, currency: &str) -> Self {
        self.directives
            .insert(directive.to_string(), currency.to_string());
        self
    }

    /// Iterates over every `(from, to, rate)` triple.
    pub fn rates(&self) -> impl Iterator<Item = (&str, &str, Decimal)> {
        self.rates.iter().flat_map(|(from, destinations)| {
                              destinations.iter()
                                          .map(move |(to, rate)| (from.as_str(), to.as_str(), *rate))
                          })
    }

    /// Number of configured directives.
    #[must_use]
    pub fn directive_count(&self) -> usize {
        self.directives.len()
    }

    /// Resolves a directive token to its currency code.
    #[must_use]
    pub fn resolve_directive(&self, directive: &str) -> Option<&str> {
        self.directives.get(directive).map(String::as_str)
    }

    /// Looks up the rate from `from` to `to`.
    ///
    /// # Errors
    /// Returns `EvaluationError::MissingRate` when `from` has no rates at all
    /// or has none towards `to`.
    pub fn rate(&self, from: &str, to: &str) -> EvalResult<Decimal> {
        self.rates
            .get(from)
            .and_then(|destinations| destinations.get(to))
            .copied()
            .ok_or_else(|| EvaluationError::MissingRate { from: from.to_string(),
                                                          to:   to.to_string(), })
    }

    /// Converts `amount` into `to`.
    ///
    /// An amount already in `to` is returned unchanged without consulting the
    /// rates, so converting a currency into itself never needs a table entry.
    /// Otherwise the magnitude is multiplied by the rate and the sign is kept.
    ///
    /// # Errors
    /// - `EvaluationError::MissingRate` if the pair is not configured.
    /// - `EvaluationError::Overflow` if the product is not representable.
    ///
    /// # Examples
    /// ```
    /// use fxcalc::{ast::Sign,
    ///              interpreter::value::{core::SignedAmount, table::ConversionTable}};
    /// use rust_decimal::Decimal;
    ///
    /// let table = ConversionTable::new().with_rate("EUR", "USD", Decimal::new(9, 1));
    /// let eur = SignedAmount::new(Sign::Minus, Decimal::from(10), "EUR");
    ///
    /// let usd = table.convert_to(&eur, "USD").unwrap();
    /// assert_eq!(usd, SignedAmount::new(Sign::Minus, Decimal::from(9), "USD"));
    ///
    /// assert!(table.convert_to(&usd, "EUR").is_err());
    /// ```
    pub fn convert_to(&self, amount: &SignedAmount, to: &str) -> EvalResult<SignedAmount> {
        if amount.currency() == to {
            return Ok(amount.clone());
        }

        let rate = self.rate(amount.currency(), to)?;
        let value = mul_checked(amount.amount().value(), rate)?;

        Ok(SignedAmount::new(amount.sign(), value, to))
    }
}
