//! Property-based tests for conversion and accumulation.
//!
//! Uses `proptest` to check the arithmetic rules over random magnitudes,
//! signs and currencies.

use fxcalc::{
    ast::Sign,
    compute,
    error::EvaluationError,
    interpreter::{
        evaluator::accumulation::accumulate,
        value::{core::SignedAmount, table::ConversionTable},
    },
};
use proptest::prelude::*;
use rust_decimal::Decimal;

// =============================================================================
// Generators
// =============================================================================

fn arb_sign() -> impl Strategy<Value = Sign> {
    prop_oneof![Just(Sign::Plus), Just(Sign::Minus)]
}

/// Non-negative magnitudes with up to four decimal places.
fn arb_magnitude() -> impl Strategy<Value = Decimal> {
    (0i64..1_000_000_000, 0u32..=4).prop_map(|(mantissa, scale)| Decimal::new(mantissa, scale))
}

/// Strictly positive rates between 0.0001 and 1000.
fn arb_rate() -> impl Strategy<Value = Decimal> {
    (1i64..10_000_000).prop_map(|mantissa| Decimal::new(mantissa, 4))
}

fn arb_currency() -> impl Strategy<Value = String> {
    "[A-Z]{3}"
}

/// The four-case sign table, written out case by case.
fn sign_table(left: &SignedAmount, right: &SignedAmount) -> (Sign, Decimal) {
    let l = left.amount().value();
    let r = right.amount().value();
    let raw = match (left.sign(), right.sign()) {
        (Sign::Plus, Sign::Plus) => l + r,
        (Sign::Minus, Sign::Minus) => -(l + r),
        (Sign::Minus, Sign::Plus) => r - l,
        (Sign::Plus, Sign::Minus) => l - r,
    };
    if raw < Decimal::ZERO { (Sign::Minus, -raw) } else { (Sign::Plus, raw) }
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn converting_to_own_currency_is_identity(sign in arb_sign(),
                                              magnitude in arb_magnitude(),
                                              currency in arb_currency()) {
        let amount = SignedAmount::new(sign, magnitude, currency.as_str());
        let converted = ConversionTable::new().convert_to(&amount, &currency).unwrap();
        prop_assert_eq!(converted, amount);
    }

    #[test]
    fn round_trip_restores_value(sign in arb_sign(),
                                 magnitude in arb_magnitude(),
                                 rate in arb_rate()) {
        let table = ConversionTable::new().with_rate("AAA", "BBB", rate)
                                          .with_rate("BBB", "AAA", Decimal::ONE / rate);
        let amount = SignedAmount::new(sign, magnitude, "AAA");

        let there = table.convert_to(&amount, "BBB").unwrap();
        let back = table.convert_to(&there, "AAA").unwrap();

        prop_assert_eq!(back.sign(), amount.sign());
        prop_assert_eq!(back.currency(), "AAA");
        let error = (back.amount().value() - magnitude).abs();
        prop_assert!(error <= Decimal::new(1, 12), "{magnitude} came back as {back}");
    }

    #[test]
    fn accumulation_matches_sign_table(left_sign in arb_sign(),
                                       left in arb_magnitude(),
                                       right_sign in arb_sign(),
                                       right in arb_magnitude()) {
        let left = SignedAmount::new(left_sign, left, "USD");
        let right = SignedAmount::new(right_sign, right, "USD");

        let (sign, value) = sign_table(&left, &right);
        let sum = accumulate(&left, &right).unwrap();

        prop_assert_eq!(sum.sign(), sign);
        prop_assert_eq!(sum.amount().value(), value);
        prop_assert_eq!(sum.currency(), "USD");
    }

    #[test]
    fn evaluated_chain_equals_signed_sum(terms in prop::collection::vec((arb_sign(), arb_magnitude()), 1..8)) {
        let table = ConversionTable::new().with_directive("usd", "USD");
        let source = terms.iter()
                          .map(|(sign, magnitude)| format!("{sign}{magnitude}USD"))
                          .collect::<Vec<_>>()
                          .join(" ");

        let expected: Decimal = terms.iter().map(|(sign, magnitude)| sign.apply(*magnitude)).sum();
        let computation = compute(&format!("usd: {source}"), &table).unwrap();

        prop_assert_eq!(computation.result.value, expected);
        prop_assert_eq!(computation.steps.len(), terms.len() - 1);
    }

    #[test]
    fn missing_rate_is_reported_for_any_pair(from in arb_currency(), to in arb_currency()) {
        prop_assume!(from != to);
        let amount = SignedAmount::new(Sign::Plus, Decimal::ONE, from.as_str());

        let result = ConversionTable::new().convert_to(&amount, &to);
        prop_assert_eq!(result, Err(EvaluationError::MissingRate { from, to }));
    }
}
