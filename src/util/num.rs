use rust_decimal::Decimal;

use crate::{error::EvaluationError, interpreter::evaluator::core::EvalResult};

/// Adds two decimals, failing instead of panicking on overflow.
///
/// ## Errors
/// Returns `EvaluationError::Overflow` if the sum is not representable.
///
/// ## Example
/// ```
/// use fxcalc::util::num::add_checked;
/// use rust_decimal::Decimal;
///
/// assert_eq!(add_checked(Decimal::ONE, Decimal::TWO).unwrap(), Decimal::from(3));
/// assert!(add_checked(Decimal::MAX, Decimal::ONE).is_err());
/// ```
pub fn add_checked(left: Decimal, right: Decimal) -> EvalResult<Decimal> {
    left.checked_add(right)
        .ok_or_else(|| EvaluationError::Overflow { details: format!("{left} + {right}") })
}

/// Multiplies an amount by a rate, failing instead of panicking on overflow.
///
/// ## Errors
/// Returns `EvaluationError::Overflow` if the product is not representable.
pub fn mul_checked(value: Decimal, rate: Decimal) -> EvalResult<Decimal> {
    value.checked_mul(rate)
         .ok_or_else(|| EvaluationError::Overflow { details: format!("{value} * {rate}") })
}
