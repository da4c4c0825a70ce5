/// Core evaluation logic and context management.
///
/// Contains the per-evaluation [`core::Context`], the top-level entry point
/// and the dispatch over AST nodes.
pub mod core;

/// Currency conversion during evaluation.
///
/// Converts terms to the target currency and applies inline conversions,
/// recording a step for every conversion that changes the currency.
pub mod conversion;

/// Accumulation of a chain of terms into one signed amount.
pub mod accumulation;

/// Diagnostic steps recorded while evaluating.
pub mod step;
