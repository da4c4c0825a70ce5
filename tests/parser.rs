use fxcalc::{
    ast::{AmountComposite, AmountLiteral, AmountSigned, Expression, Sign},
    error::SyntaxError,
    interpreter::lexer::{Token, tokenize},
    parse,
};
use rust_decimal_macros::dec;

fn syntax_error(src: &str) -> SyntaxError {
    match parse(src) {
        Err(e) => e,
        Ok(input) => panic!("{src} parsed as {input:?} but was expected to fail"),
    }
}

fn terms(expression: &Expression) -> Vec<&AmountComposite> {
    expression.terms().collect()
}

#[test]
fn tokens_carry_character_offsets() {
    let tokens = tokenize("usd: 10.5EUR - €3").unwrap();
    assert_eq!(tokens,
               vec![(Token::Directive("usd".to_string()), 0),
                    (Token::Colon, 3),
                    (Token::Number(dec!(10.5)), 5),
                    (Token::Currency("EUR".to_string()), 9),
                    (Token::Minus, 13),
                    (Token::Currency("€".to_string()), 15),
                    (Token::Number(dec!(3)), 16),]);
}

#[test]
fn offsets_count_characters_not_bytes() {
    // `€` is three bytes long but one character.
    let err = syntax_error("usd: 5€ * 1USD");
    assert_eq!(err.position, 8);
    assert_eq!(err.to_string(), "Token recognition error at: '*'. Position: 8.");
}

#[test]
fn missing_operator_defaults_to_plus() {
    let input = parse("usd: 10USD").unwrap();
    let amount = AmountLiteral { value:    dec!(10),
                                 currency: "USD".to_string(), };
    let signed = AmountSigned { sign: Sign::Plus,
                                amount,
                                position: 5 };

    assert_eq!(input.expression,
               Expression { head: AmountComposite::Signed(signed),
                            tail: Vec::new(), });
}

#[test]
fn chain_keeps_terms_in_source_order() {
    let input = parse("usd: 1USD - 2EUR eur + RUB 3").unwrap();
    assert_eq!(input.expression.len(), 3);
    assert_eq!(input.expression.tail.len(), 2);

    let terms = terms(&input.expression);
    assert!(matches!(terms[0], AmountComposite::Signed(_)));
    match terms[1] {
        AmountComposite::Convertible(convertible) => {
            assert_eq!(convertible.amount.sign, Sign::Minus);
            assert_eq!(convertible.amount.amount.currency, "EUR");
            assert_eq!(convertible.conversion.directive, "eur");
            assert_eq!(convertible.conversion.position, 17);
        },
        AmountComposite::Signed(_) => panic!("expected an inline conversion"),
    }
    match terms[2] {
        AmountComposite::Signed(signed) => {
            assert_eq!(signed.amount.currency, "RUB");
            assert_eq!(signed.amount.value, dec!(3));
        },
        AmountComposite::Convertible(_) => panic!("expected a plain amount"),
    }
}

#[test]
fn whitespace_is_insignificant() {
    let compact = parse("usd:10USD-5EUR").unwrap();
    let spaced = parse("usd:   10 USD   -   5 EUR").unwrap();

    let literals = |expression: &Expression| {
        terms(expression).into_iter()
                         .map(|term| match term {
                             AmountComposite::Signed(signed) => (signed.sign, signed.amount.clone()),
                             AmountComposite::Convertible(c) => (c.amount.sign, c.amount.amount.clone()),
                         })
                         .collect::<Vec<_>>()
    };

    assert_eq!(literals(&compact.expression), literals(&spaced.expression));
    assert_eq!(compact.conversion.directive, spaced.conversion.directive);
}

#[test]
fn long_chain_is_parsed_without_recursion() {
    let input = parse(&format!("usd: {}", "1USD ".repeat(100_000))).unwrap();
    assert_eq!(input.expression.len(), 100_000);
    assert!(input.expression.terms().all(|term| matches!(term, AmountComposite::Signed(_))));
}

#[test]
fn currency_on_both_sides_is_rejected() {
    let err = syntax_error("usd: USD 10 EUR");
    assert_eq!(err.position, 12);
}

#[test]
fn currency_after_suffixed_amount_starts_next_term() {
    let input = parse("usd: 10 USD EUR 5").unwrap();
    assert_eq!(input.expression.len(), 2);
}

#[test]
fn directive_and_colon_are_required() {
    assert_eq!(syntax_error("10USD").position, 0);
    assert_eq!(syntax_error("usd 10USD").position, 4);
    assert_eq!(syntax_error("usd:").position, 4);
    assert_eq!(syntax_error("").position, 0);
}

#[test]
fn incomplete_amounts_are_rejected() {
    assert_eq!(syntax_error("usd: 10").position, 7);
    assert_eq!(syntax_error("usd: USD").position, 8);
    assert_eq!(syntax_error("usd: -").position, 6);
    assert_eq!(syntax_error("usd: 10USD +").position, 12);
    assert_eq!(syntax_error("usd: 10 eur").position, 8);
}

#[test]
fn trailing_tokens_are_rejected() {
    let err = syntax_error("usd: 10USD :");
    assert_eq!(err.position, 11);
    assert!(err.message.contains("Extraneous input ':'"));
}

#[test]
fn directive_cannot_follow_directive() {
    assert_eq!(syntax_error("usd: 10EUR eur rub").position, 15);
}

#[test]
fn decimal_separator_is_a_dot() {
    assert_eq!(syntax_error("usd: 10,5USD").position, 7);
    assert!(parse("usd: 10.5USD").is_ok());
}

#[test]
fn oversized_numbers_are_syntax_errors() {
    let err = syntax_error("usd: 792281625142643375935439503350USD");
    assert_eq!(err.position, 5);
}
