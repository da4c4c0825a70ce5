/// Core parsing infrastructure.
///
/// Holds the token stream, the parse result type, and the entry point that
/// parses a whole line: the target directive, the `:` separator and the
/// expression.
pub mod core;
/// Parsing of expressions and their terms.
///
/// Builds the chain of terms in source order and recognizes inline
/// conversions written after an amount.
pub mod expression;
/// Parsing of signed amounts.
///
/// Handles the optional leading operator and a number with its currency on
/// either side.
pub mod amount;
