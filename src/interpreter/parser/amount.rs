use crate::{
    ast::{AmountLiteral, AmountSigned, Sign},
    error::SyntaxError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, TokenStream},
    },
};

/// Parses an amount with its optional leading operator.
///
/// Grammar: `amountSigned := [ '+' | '-' ] amount`
///
/// # Returns
/// An [`AmountSigned`] whose sign defaults to [`Sign::Plus`] and whose
/// position is the offset of the operator, or of the amount when there is no
/// operator.
pub fn parse_amount_signed(stream: &mut TokenStream<'_>) -> ParseResult<AmountSigned> {
    let position = stream.position();

    let sign = match stream.peek() {
        Some((Token::Plus, _)) => {
            stream.next();
            Sign::Plus
        },
        Some((Token::Minus, _)) => {
            stream.next();
            Sign::Minus
        },
        _ => Sign::Plus,
    };

    let amount = parse_amount_literal(stream)?;

    Ok(AmountSigned { sign,
                      amount,
                      position })
}

/// Parses a number with its currency written before or after it.
///
/// Grammar: `amount := currency number | number currency`
///
/// # Errors
/// - The next token is neither a number nor a currency.
/// - The number has no currency, or the currency has no number.
/// - A currency follows a number that already had its currency in front
///   (`USD 10 EUR`); attaching a currency to both sides is ambiguous.
pub fn parse_amount_literal(stream: &mut TokenStream<'_>) -> ParseResult<AmountLiteral> {
    match stream.next() {
        Some((Token::Number(value), _)) => {
            let currency = expect_currency(stream)?;
            Ok(AmountLiteral { value: *value,
                               currency })
        },
        Some((Token::Currency(currency), _)) => {
            let value = expect_number(stream)?;
            if let Some((Token::Currency(_), position)) = stream.peek() {
                return Err(SyntaxError::new(format!("Amount {currency} {value} already has a currency"),
                                            *position));
            }
            Ok(AmountLiteral { value,
                               currency: currency.clone() })
        },
        Some((tok, position)) => {
            Err(SyntaxError::new(format!("Expected an amount, found '{tok}'"), *position))
        },
        None => Err(SyntaxError::unexpected_end("an amount", stream.end())),
    }
}

fn expect_currency(stream: &mut TokenStream<'_>) -> ParseResult<String> {
    match stream.next() {
        Some((Token::Currency(currency), _)) => Ok(currency.clone()),
        Some((tok, position)) => {
            Err(SyntaxError::new(format!("Expected a currency, found '{tok}'"), *position))
        },
        None => Err(SyntaxError::unexpected_end("a currency", stream.end())),
    }
}

fn expect_number(stream: &mut TokenStream<'_>) -> ParseResult<rust_decimal::Decimal> {
    match stream.next() {
        Some((Token::Number(value), _)) => Ok(*value),
        Some((tok, position)) => {
            Err(SyntaxError::new(format!("Expected a number, found '{tok}'"), *position))
        },
        None => Err(SyntaxError::unexpected_end("a number", stream.end())),
    }
}
