use std::fmt;

use rust_decimal::Decimal;

use crate::ast::Sign;

/// A non-negative magnitude tagged with a currency.
///
/// The fields are private so the magnitude can never go below zero; negative
/// quantities are expressed through [`SignedAmount`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Amount {
    currency: String,
    value:    Decimal,
}

impl Amount {
    /// The currency code or symbol.
    #[must_use]
    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// The magnitude, always `>= 0`.
    #[must_use]
    pub const fn value(&self) -> Decimal {
        self.value
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Value:{}, Currency:{}", self.value, self.currency)
    }
}

/// An amount together with the sign it contributes to a sum.
///
/// Equality compares sign, currency and value field by field.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SignedAmount {
    amount: Amount,
    sign:   Sign,
}

impl SignedAmount {
    /// Creates a signed amount.
    ///
    /// A negative `magnitude` flips `sign` and its absolute value is stored,
    /// so the result always satisfies the [`Amount`] invariant.
    ///
    /// # Examples
    /// ```
    /// use fxcalc::{ast::Sign, interpreter::value::core::SignedAmount};
    /// use rust_decimal::Decimal;
    ///
    /// let a = SignedAmount::new(Sign::Minus, Decimal::from(-3), "USD");
    /// assert_eq!(a.sign(), Sign::Plus);
    /// assert_eq!(a.amount().value(), Decimal::from(3));
    /// ```
    pub fn new(sign: Sign, magnitude: Decimal, currency: impl Into<String>) -> Self {
        let sign = match (sign, magnitude.is_sign_negative() && !magnitude.is_zero()) {
            (Sign::Plus, true) => Sign::Minus,
            (Sign::Minus, true) => Sign::Plus,
            (sign, false) => sign,
        };
        Self { amount: Amount { currency: currency.into(),
                                value:    magnitude.abs(), },
               sign }
    }

    /// Creates a signed amount from an algebraic value.
    ///
    /// The sign is `Minus` iff `value` is negative; zero is always `Plus`.
    pub fn from_signed_value(value: Decimal, currency: impl Into<String>) -> Self {
        Self::new(Sign::Plus, value, currency)
    }

    /// The algebraic value: the magnitude, negated when the sign is `Minus`.
    #[must_use]
    pub fn signed_value(&self) -> Decimal {
        self.sign.apply(self.amount.value)
    }

    /// The unsigned amount.
    #[must_use]
    pub const fn amount(&self) -> &Amount {
        &self.amount
    }

    /// The sign.
    #[must_use]
    pub const fn sign(&self) -> Sign {
        self.sign
    }

    /// Shorthand for `self.amount().currency()`.
    #[must_use]
    pub fn currency(&self) -> &str {
        &self.amount.currency
    }
}

impl fmt::Display for SignedAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Sign:{}, {}", self.sign, self.amount)
    }
}
