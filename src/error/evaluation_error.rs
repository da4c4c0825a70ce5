/// Represents all errors that can occur while evaluating a parsed line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvaluationError {
    /// An inline conversion was applied to an amount that is already in the
    /// target currency.
    #[error("Can't convert the amount at position {position}, because {currency} is the destination currency.")]
    SelfConversion {
        /// The currency of the amount.
        currency: String,
        /// Character offset of the amount.
        position: usize,
    },
    /// A directive has no entry in the directive table.
    #[error("Unknown conversion directive '{directive}' at position {position}.")]
    UnknownDirective {
        /// The directive as written.
        directive: String,
        /// Character offset of the directive.
        position:  usize,
    },
    /// No rate is configured for the pair.
    #[error("No conversion rate from {from} to {to}.")]
    MissingRate {
        /// Source currency.
        from: String,
        /// Destination currency.
        to:   String,
    },
    /// Two amounts in different currencies were added together.
    #[error("Can't add an amount in {right} to an amount in {left}.")]
    CurrencyMismatch {
        /// Currency of the left operand.
        left:  String,
        /// Currency of the right operand.
        right: String,
    },
    /// A decimal operation left the representable range.
    #[error("Decimal overflow while computing {details}.")]
    Overflow {
        /// The operation that overflowed.
        details: String,
    },
    /// An expression was evaluated before a target currency was fixed.
    #[error("No target currency has been resolved for this evaluation.")]
    MissingTarget,
}
