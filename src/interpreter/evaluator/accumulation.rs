use std::{iter, mem};

use crate::{
    ast::{AmountComposite, Expression},
    error::EvaluationError,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            step::Step,
        },
        value::core::SignedAmount,
    },
    util::num::add_checked,
};

impl Context<'_> {
    /// Evaluates a chain of terms to one signed amount in the target
    /// currency.
    ///
    /// Every term is evaluated and converted to the target from left to
    /// right first. The converted terms are then combined with [`accumulate`]
    /// starting from the right, each term joining the running total of
    /// everything after it. A single term is only converted.
    ///
    /// # Errors
    /// Any error raised by a term, a conversion or the sum.
    pub fn eval_expression(&mut self, expression: &Expression) -> EvalResult<SignedAmount> {
        let head = self.eval_term(&expression.head)?;
        let mut tail = expression.tail
                                 .iter()
                                 .map(|term| self.eval_term(term))
                                 .collect::<EvalResult<Vec<_>>>()?;

        let Some(mut total) = tail.pop() else {
            return Ok(head);
        };

        for left in iter::once(head).chain(tail).rev() {
            let sum = accumulate(&left, &total)?;
            let right = mem::replace(&mut total, sum.clone());

            self.record(|index| Step::Accumulated { index,
                                                    left,
                                                    right,
                                                    result: sum });
        }

        Ok(total)
    }

    fn eval_term(&mut self, term: &AmountComposite) -> EvalResult<SignedAmount> {
        let amount = self.eval_amount_composite(term)?;
        self.convert_to_target(amount)
    }
}

/// Adds two signed amounts of the same currency.
///
/// The signed magnitudes are summed; the result is `Minus` iff the sum is
/// negative and stores its absolute value. For two terms this gives:
///
/// | left | right | value           |
/// |------|-------|-----------------|
/// | `+`  | `+`   | `+(l + r)`      |
/// | `-`  | `-`   | `-(l + r)`      |
/// | `-`  | `+`   | `r - l`         |
/// | `+`  | `-`   | `l - r`         |
///
/// The result is tagged with the currency of `left`.
///
/// # Errors
/// - `CurrencyMismatch` if the two amounts are in different currencies.
/// - `Overflow` if the sum is not representable.
///
/// # Examples
/// ```
/// use fxcalc::{ast::Sign,
///              interpreter::{evaluator::accumulation::accumulate, value::core::SignedAmount}};
/// use rust_decimal::Decimal;
///
/// let left = SignedAmount::new(Sign::Plus, Decimal::from(5), "USD");
/// let right = SignedAmount::new(Sign::Minus, Decimal::from(10), "USD");
///
/// let sum = accumulate(&left, &right).unwrap();
/// assert_eq!(sum, SignedAmount::new(Sign::Minus, Decimal::from(5), "USD"));
///
/// let eur = SignedAmount::new(Sign::Plus, Decimal::ONE, "EUR");
/// assert!(accumulate(&left, &eur).is_err());
/// ```
pub fn accumulate(left: &SignedAmount, right: &SignedAmount) -> EvalResult<SignedAmount> {
    if left.currency() != right.currency() {
        return Err(EvaluationError::CurrencyMismatch { left:  left.currency().to_string(),
                                                       right: right.currency().to_string(), });
    }

    let sum = add_checked(left.signed_value(), right.signed_value())?;
    Ok(SignedAmount::from_signed_value(sum, left.currency()))
}
