//! Validation errors for amount inputs.

use thiserror::Error;

/// Why an edit to an amount field was refused.
///
/// A refused edit never changes the stored value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("`{0}` is not a whole number")]
    NotANumber(String),
    #[error("amount must not be negative (got {0})")]
    Negative(i64),
    #[error("your expense {paid} exceeds the bill {bill}")]
    ExceedsBill { paid: i64, bill: i64 },
}
