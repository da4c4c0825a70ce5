use crate::{
    ast::{AmountComposite, AmountSignedConvertible, Expression},
    interpreter::{
        lexer::Token,
        parser::{
            amount::parse_amount_signed,
            core::{ParseResult, TokenStream, parse_conversion},
        },
    },
};

/// Parses a chain of one or more terms.
///
/// Terms are not separated by anything but their own optional operator, so
/// the chain continues for as long as the next token can start an amount.
///
/// Grammar: `expression := amountComposite expression | amountComposite`
///
/// # Returns
/// The terms in source order, collected iteratively so the length of a line
/// does not grow the call stack.
pub fn parse_expression(stream: &mut TokenStream<'_>) -> ParseResult<Expression> {
    let head = parse_amount_composite(stream)?;
    let mut tail = Vec::new();

    while starts_term(stream.peek().map(|(tok, _)| tok)) {
        tail.push(parse_amount_composite(stream)?);
    }

    Ok(Expression { head,
                    tail })
}

/// Parses one term, with the inline conversion directive if one follows the
/// amount.
///
/// Grammar: `amountComposite := amountSigned conversion | amountSigned`
pub fn parse_amount_composite(stream: &mut TokenStream<'_>) -> ParseResult<AmountComposite> {
    let amount = parse_amount_signed(stream)?;

    if let Some((Token::Directive(_), _)) = stream.peek() {
        let conversion = parse_conversion(stream)?;
        return Ok(AmountComposite::Convertible(AmountSignedConvertible { amount,
                                                                         conversion }));
    }

    Ok(AmountComposite::Signed(amount))
}

/// Returns `true` if `token` can begin a new term.
fn starts_term(token: Option<&Token>) -> bool {
    matches!(token,
             Some(Token::Plus | Token::Minus | Token::Number(_) | Token::Currency(_)))
}
