use std::fmt;

use crate::interpreter::value::core::SignedAmount;

/// One diagnostic event of an evaluation.
///
/// Steps are numbered from zero within a single evaluation. Converting an
/// amount into its own currency is not a step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// An amount changed currency.
    Converted {
        /// Position of the step within the evaluation.
        index: usize,
        /// The amount before conversion.
        from:  SignedAmount,
        /// The amount after conversion.
        to:    SignedAmount,
    },
    /// Two terms were combined.
    Accumulated {
        /// Position of the step within the evaluation.
        index:  usize,
        /// Left operand, in the target currency.
        left:   SignedAmount,
        /// Right operand, in the target currency.
        right:  SignedAmount,
        /// Their sum.
        result: SignedAmount,
    },
}

impl Step {
    /// Position of the step within the evaluation.
    #[must_use]
    pub const fn index(&self) -> usize {
        match self {
            Self::Converted { index, .. } | Self::Accumulated { index, .. } => *index,
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Converted { index, from, to } => {
                write!(f, "{index}:Converted from {from} to {to}.")
            },
            Self::Accumulated { index,
                                left,
                                right,
                                result, } => {
                write!(f, "{index}:Result {result} from left {left} and right {right} tokens.")
            },
        }
    }
}
