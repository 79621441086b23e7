//! Card validation error types.

use thiserror::Error;

/// Errors raised when a product card fails boundary validation.
///
/// Classification itself is total; these errors only come out of
/// [`ProductCard::validate`](crate::card::ProductCard::validate) and the
/// resolve boundary that calls it. Misclassifying promotional state
/// silently is a user-visible business risk, so malformed input fails
/// fast instead of falling back to the default variant.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CardError {
    /// A required text field is empty.
    #[error("Field must not be empty: {0}")]
    EmptyField(&'static str),

    /// A price field carries a negative amount.
    #[error("Negative amount in {field}: {amount_cents} cents")]
    NegativeAmount {
        field: &'static str,
        amount_cents: i64,
    },

    /// Sale price and list price use different currencies.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// A product card must offer at least one color.
    #[error("Product must have at least one color")]
    ZeroColors,

    /// Validation error.
    #[error("Validation error: {0}")]
    Validation(String),
}
