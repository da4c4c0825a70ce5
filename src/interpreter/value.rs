/// Monetary values.
///
/// Defines [`core::Amount`], a non-negative magnitude tagged with a currency,
/// and [`core::SignedAmount`], which pairs an amount with the sign it carries
/// in a sum.
pub mod core;
/// The conversion table.
///
/// Holds exchange rates between currencies and the directive tokens that name
/// currencies in the input. Loaded once and only read afterwards.
pub mod table;
/// What an evaluation hands back to the caller.
pub mod result;
