//! # fxcalc
//!
//! fxcalc evaluates short expressions that add and subtract amounts in
//! different currencies and normalizes the total to one target currency.
//!
//! A line names the target through a directive, followed by a chain of
//! signed amounts:
//!
//! ```text
//! usd: 10USD + 5EUR - $ 2.50 + 300RUB eur
//! ```
//!
//! Every term is converted into the target currency through a configurable
//! rate table before it joins the sum. A term followed by its own directive
//! (`300RUB eur`) is first converted into that directive's currency.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::Input,
    error::{Error, SyntaxError},
    interpreter::{
        evaluator::core::Context,
        lexer::tokenize,
        parser::core::{TokenStream, parse_input},
        value::{result::Computation, table::ConversionTable},
    },
};

/// Defines the structure of a parsed line.
///
/// The AST mirrors the grammar: the input holds the target directive and a
/// flat chain of terms, each term being a signed amount with an
/// optional inline conversion. Nodes carry character offsets for error
/// reporting.
pub mod ast;
/// Loads the conversion table from a JSON settings file.
pub mod config;
/// Provides the error types for parsing, evaluation and configuration.
///
/// # Responsibilities
/// - Defines the syntax error raised by the lexer and parser.
/// - Defines the evaluation errors: self-conversion, unknown directive,
///   missing rate and overflow.
/// - Defines the errors raised while loading settings.
pub mod error;
/// Orchestrates lexing, parsing and evaluation.
///
/// # Responsibilities
/// - Coordinates the lexer, parser, evaluator and value types.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// The interactive read-eval-print loop.
pub mod repl;
/// Checked decimal arithmetic shared by the evaluator and the table.
pub mod util;

/// Parses a line into its AST without evaluating it.
///
/// # Errors
/// Returns a [`SyntaxError`] carrying the character offset of the first
/// problem.
///
/// # Examples
/// ```
/// let input = fxcalc::parse("usd: 10USD - 5EUR").unwrap();
/// assert_eq!(input.conversion.directive, "usd");
/// assert_eq!(input.expression.len(), 2);
///
/// let err = fxcalc::parse("usd 10USD").unwrap_err();
/// assert_eq!(err.position, 4);
/// ```
pub fn parse(source: &str) -> Result<Input, SyntaxError> {
    let tokens = tokenize(source)?;
    let mut stream = TokenStream::new(&tokens, source.chars().count());
    parse_input(&mut stream)
}

/// Parses and evaluates one line against `table`.
///
/// Each call starts from a fresh evaluation state, so calls are independent
/// of each other and may run concurrently over the same table.
///
/// # Errors
/// Returns [`Error::Syntax`] if the line does not match the grammar and
/// [`Error::Evaluation`] if it cannot be evaluated. No partial result is
/// produced in either case.
///
/// # Examples
/// ```
/// use fxcalc::interpreter::value::table::ConversionTable;
/// use rust_decimal::Decimal;
///
/// let table = ConversionTable::new().with_directive("usd", "USD")
///                                   .with_rate("EUR", "USD", Decimal::new(9, 1));
///
/// let computation = fxcalc::compute("usd: 10USD + 5EUR", &table).unwrap();
/// assert_eq!(computation.result.value, Decimal::new(145, 1));
/// assert_eq!(computation.result.currency, "USD");
///
/// // "xyz" is not a configured directive.
/// assert!(fxcalc::compute("xyz: 1USD", &table).is_err());
/// ```
pub fn compute(source: &str, table: &ConversionTable) -> Result<Computation, Error> {
    let input = parse(source)?;
    let computation = Context::new(table).eval_input(&input)?;
    Ok(computation)
}
