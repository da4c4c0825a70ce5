use crate::{
    ast::AmountSignedConvertible,
    error::EvaluationError,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            step::Step,
        },
        value::core::SignedAmount,
    },
};

impl Context<'_> {
    /// Converts `amount` into `to`, recording a step when the currency
    /// actually changes.
    ///
    /// # Errors
    /// `MissingRate` or `Overflow` from the conversion table.
    pub fn convert(&mut self, amount: SignedAmount, to: &str) -> EvalResult<SignedAmount> {
        if amount.currency() == to {
            return Ok(amount);
        }

        let converted = self.table().convert_to(&amount, to)?;
        self.record(|index| Step::Converted { index,
                                              from: amount,
                                              to: converted.clone() });
        Ok(converted)
    }

    /// Converts `amount` into the target currency of this evaluation.
    ///
    /// # Errors
    /// `MissingTarget` if no target has been fixed yet, otherwise as
    /// [`Context::convert`].
    pub fn convert_to_target(&mut self, amount: SignedAmount) -> EvalResult<SignedAmount> {
        let target = self.target()?.to_string();
        self.convert(amount, &target)
    }

    /// Evaluates a term carrying its own conversion directive, e.g.
    /// `300RUB eur`.
    ///
    /// The amount is converted into the directive's currency before it takes
    /// part in the sum. An amount already in the target currency is rejected
    /// whatever the directive names, and that check happens before the
    /// directive is resolved.
    ///
    /// # Errors
    /// - `SelfConversion` if the amount is in the target currency.
    /// - `UnknownDirective` if the directive is not configured.
    /// - `MissingRate` or `Overflow` from the conversion itself.
    pub fn eval_convertible(&mut self,
                            convertible: &AmountSignedConvertible)
                            -> EvalResult<SignedAmount> {
        let amount = Self::eval_amount_signed(&convertible.amount);

        if amount.currency() == self.target()? {
            return Err(EvaluationError::SelfConversion { currency: amount.currency().to_string(),
                                                         position: convertible.amount.position, });
        }

        let destination = self.resolve_directive(&convertible.conversion.directive,
                                                 convertible.conversion.position)?;
        self.convert(amount, &destination)
    }
}
