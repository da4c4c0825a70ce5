use std::{iter::Peekable, slice::Iter};

use crate::{
    ast::{Conversion, Input},
    error::SyntaxError,
    interpreter::{
        lexer::{Spanned, Token},
        parser::expression::parse_expression,
    },
};

pub type ParseResult<T> = Result<T, SyntaxError>;

/// A peekable cursor over the tokens of one line.
///
/// Remembers where the line ends so errors raised at end of input still carry
/// a position.
pub struct TokenStream<'a> {
    tokens: Peekable<Iter<'a, Spanned>>,
    end:    usize,
}

impl<'a> TokenStream<'a> {
    /// Creates a stream over `tokens`; `end` is the character length of the
    /// line they were read from.
    #[must_use]
    pub fn new(tokens: &'a [Spanned], end: usize) -> Self {
        Self { tokens: tokens.iter().peekable(),
               end }
    }

    /// Looks at the next token without consuming it.
    pub fn peek(&mut self) -> Option<&'a Spanned> {
        self.tokens.peek().copied()
    }

    /// Offset of the next token, or the end of the line.
    pub fn position(&mut self) -> usize {
        self.peek().map_or(self.end, |(_, position)| *position)
    }

    /// Character length of the line.
    #[must_use]
    pub const fn end(&self) -> usize {
        self.end
    }
}

impl<'a> Iterator for TokenStream<'a> {
    type Item = &'a Spanned;

    fn next(&mut self) -> Option<Self::Item> {
        self.tokens.next()
    }
}

/// Parses a full line.
///
/// This is the entry point for parsing. The line must start with the
/// directive naming the target currency, followed by `:` and an expression,
/// and nothing may follow the expression.
///
/// Grammar: `input := conversion ':' expression`
///
/// # Errors
/// - A missing or misplaced directive or colon.
/// - Any error from [`parse_expression`].
/// - Tokens left over after the expression.
pub fn parse_input(stream: &mut TokenStream<'_>) -> ParseResult<Input> {
    let conversion = parse_conversion(stream)?;

    match stream.next() {
        Some((Token::Colon, _)) => {},
        Some((tok, position)) => {
            return Err(SyntaxError::new(format!("Expected ':' after the conversion directive, found '{tok}'"),
                                        *position));
        },
        None => return Err(SyntaxError::unexpected_end("':'", stream.end())),
    }

    let expression = parse_expression(stream)?;

    if let Some((tok, position)) = stream.next() {
        return Err(SyntaxError::new(format!("Extraneous input '{tok}' after the expression"),
                                    *position));
    }

    Ok(Input { conversion,
               expression })
}

/// Parses a conversion directive such as `usd`.
///
/// # Errors
/// Returns a [`SyntaxError`] if the next token is not a directive or the
/// line has ended.
pub fn parse_conversion(stream: &mut TokenStream<'_>) -> ParseResult<Conversion> {
    match stream.next() {
        Some((Token::Directive(directive), position)) => {
            Ok(Conversion { directive: directive.clone(),
                            position:  *position, })
        },
        Some((tok, position)) => {
            Err(SyntaxError::new(format!("Expected a conversion directive, found '{tok}'"),
                                 *position))
        },
        None => Err(SyntaxError::unexpected_end("a conversion directive", stream.end())),
    }
}
