/// Checked decimal arithmetic.
///
/// `rust_decimal` panics on overflow through its operators; these helpers
/// turn overflow into an [`crate::error::EvaluationError::Overflow`] instead.
pub mod num;
