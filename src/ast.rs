use std::fmt;

use rust_decimal::Decimal;

/// The sign written in front of an amount.
///
/// A missing operator is read as [`Sign::Plus`]. The sign is never folded into
/// the magnitude of an amount; it travels next to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Sign {
    /// `+`
    #[default]
    Plus,
    /// `-`
    Minus,
}

impl Sign {
    /// Applies the sign to a non-negative magnitude.
    #[must_use]
    pub fn apply(self, magnitude: Decimal) -> Decimal {
        match self {
            Self::Plus => magnitude,
            Self::Minus => -magnitude,
        }
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
        }
    }
}

/// A whole line of input: the target directive followed by the expression.
///
/// Grammar: `input := conversion ':' expression`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Input {
    /// Directive naming the currency every term is normalized to.
    pub conversion: Conversion,
    /// The chain of signed amounts.
    pub expression: Expression,
}

/// A conversion directive token such as `usd` or `eur`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    /// The directive exactly as written.
    pub directive: String,
    /// Character offset of the directive in the source.
    pub position:  usize,
}

/// A chain of one or more terms, in source order.
///
/// The head is kept apart from the tail so a chain can never be empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expression {
    /// The leftmost term.
    pub head: AmountComposite,
    /// Every term after `head`.
    pub tail: Vec<AmountComposite>,
}

impl Expression {
    /// Number of terms in the chain.
    #[must_use]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        1 + self.tail.len()
    }

    /// Iterates over all terms from left to right.
    pub fn terms(&self) -> impl DoubleEndedIterator<Item = &AmountComposite> {
        std::iter::once(&self.head).chain(&self.tail)
    }
}

/// One term of an expression, with or without an inline conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AmountComposite {
    /// A plain signed amount, e.g. `- 5EUR`.
    Signed(AmountSigned),
    /// A signed amount converted in place, e.g. `+ 300RUB eur`.
    Convertible(AmountSignedConvertible),
}

/// A signed amount followed by a directive naming the currency to convert it
/// into before it joins the sum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmountSignedConvertible {
    /// The amount being converted.
    pub amount:     AmountSigned,
    /// The directive naming the destination currency.
    pub conversion: Conversion,
}

/// An amount with its optional leading operator resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmountSigned {
    /// `Plus` when no operator was written.
    pub sign:     Sign,
    /// The amount itself.
    pub amount:   AmountLiteral,
    /// Character offset of the first token of the term.
    pub position: usize,
}

/// A number tagged with a currency on either side, e.g. `10USD` or `$ 10`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmountLiteral {
    /// The non-negative magnitude.
    pub value:    Decimal,
    /// The currency code or symbol.
    pub currency: String,
}
