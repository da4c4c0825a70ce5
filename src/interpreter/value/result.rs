use std::fmt;

use rust_decimal::Decimal;

use crate::interpreter::{evaluator::step::Step, value::core::SignedAmount};

/// The value of one line, with the sign applied, in the target currency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComputeResult {
    /// Negative when the final sum is negative.
    pub value:    Decimal,
    /// The target currency.
    pub currency: String,
}

impl From<&SignedAmount> for ComputeResult {
    fn from(amount: &SignedAmount) -> Self {
        let value = amount.signed_value();
        // A `Minus` sign on a zero magnitude must not surface as `-0`.
        let value = if value.is_zero() { Decimal::ZERO } else { value };
        Self { value,
               currency: amount.currency().to_string() }
    }
}

impl fmt::Display for ComputeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.value, self.currency)
    }
}

/// A successful evaluation: the result and every step taken to reach it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Computation {
    /// The final value.
    pub result: ComputeResult,
    /// Conversions and accumulations in the order they happened.
    pub steps:  Vec<Step>,
}
