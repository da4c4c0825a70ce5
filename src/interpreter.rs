/// The evaluator module walks the AST and computes results.
///
/// The evaluator resolves the target directive, evaluates every term,
/// converts amounts between currencies through the conversion table, and
/// accumulates the terms into a single signed amount.
///
/// # Responsibilities
/// - Evaluates AST nodes into signed, currency-tagged amounts.
/// - Applies inline conversions and normalizes every term to the target.
/// - Reports evaluation errors such as unknown directives or missing rates.
/// - Records every conversion and accumulation as a diagnostic step.
pub mod evaluator;
/// The lexer module tokenizes a line of input for further parsing.
///
/// The lexer reads the raw text and produces numbers, currency codes and
/// symbols, directives, operators and the `:` separator, each tagged with its
/// character offset.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// # Responsibilities
/// - Converts tokens into the directive and the chain of terms.
/// - Validates the grammar, reporting errors with their character offset.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// # Responsibilities
/// - Defines amounts, signed amounts and their invariants.
/// - Holds the conversion table and performs single conversions.
/// - Defines what an evaluation returns.
pub mod value;
