/// Syntax errors.
///
/// Raised by the lexer and the parser when a line does not match the grammar.
/// Every syntax error carries the character offset it was detected at.
pub mod syntax_error;
/// Evaluation errors.
///
/// Raised while walking a parsed expression: unknown directives, missing
/// exchange rates, conversions into the target currency itself, and decimal
/// overflow.
pub mod evaluation_error;
/// Settings file errors.
pub mod config_error;

pub use config_error::ConfigError;
pub use evaluation_error::EvaluationError;
pub use syntax_error::SyntaxError;

/// Any failure of [`crate::compute`].
///
/// Both kinds reject the whole line; no partial result is produced.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The line does not match the grammar.
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    /// The line parsed but could not be evaluated.
    #[error(transparent)]
    Evaluation(#[from] EvaluationError),
}
