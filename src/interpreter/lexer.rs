use std::str::FromStr;

use logos::Logos;
use rust_decimal::Decimal;

use crate::error::SyntaxError;

/// A token paired with the character offset it starts at.
pub type Spanned = (Token, usize);

/// Failures the lexer can report for a single token.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LexError {
    /// Input that is not part of any token.
    #[default]
    UnrecognizedInput,
    /// A numeric literal that does not fit into a decimal.
    NumberOutOfRange,
}

/// Represents a lexical token in a line of input.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(error = LexError)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    /// Numeric literal tokens, such as `10`, `0.5` or `1250.75`.
    /// The decimal separator is always `.`.
    #[regex(r"[0-9]+(\.[0-9]+)?", parse_number)]
    Number(Decimal),
    /// Currency codes such as `USD`, or one of the supported symbols.
    #[regex(r"[A-Z]+", |lex| lex.slice().to_string())]
    #[regex(r"[$€£¥₽₴₸₹]", |lex| lex.slice().to_string())]
    Currency(String),
    /// Conversion directives such as `usd` or `eur`.
    #[regex(r"[a-z][a-z0-9_]*", |lex| lex.slice().to_string())]
    Directive(String),
    /// `:`
    #[token(":")]
    Colon,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Currency(c) => write!(f, "{c}"),
            Self::Directive(d) => write!(f, "{d}"),
            Self::Colon => write!(f, ":"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
        }
    }
}

/// Parses a numeric literal from the current token slice.
///
/// Literals are parsed without regard to locale.
fn parse_number(lex: &mut logos::Lexer<Token>) -> Result<Decimal, LexError> {
    Decimal::from_str(lex.slice()).map_err(|_| LexError::NumberOutOfRange)
}

/// Splits a line into tokens tagged with their character offsets.
///
/// Offsets count characters, not bytes, so a currency symbol such as `€`
/// advances the position by one.
///
/// # Errors
/// Returns a [`SyntaxError`] at the first character that does not start a
/// token, or at a numeric literal too large to represent.
pub fn tokenize(source: &str) -> Result<Vec<Spanned>, SyntaxError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    // Spans only move forward, so byte offsets are converted incrementally.
    let mut byte_cursor = 0;
    let mut char_cursor = 0;

    while let Some(token) = lexer.next() {
        let span = lexer.span();
        char_cursor += source[byte_cursor..span.start].chars().count();
        byte_cursor = span.start;

        match token {
            Ok(tok) => tokens.push((tok, char_cursor)),
            Err(LexError::UnrecognizedInput) => {
                return Err(SyntaxError::new(format!("Token recognition error at: '{}'",
                                                    lexer.slice()),
                                            char_cursor));
            },
            Err(LexError::NumberOutOfRange) => {
                return Err(SyntaxError::new(format!("Number '{}' is too large",
                                                    lexer.slice()),
                                            char_cursor));
            },
        }
    }

    Ok(tokens)
}
