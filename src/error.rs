//! Unified formatting error types.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::denomination::Denomination;

/// Result alias for fallible formatting operations.
pub type FormatResult<T> = Result<T, FormatError>;

/// Top-level formatting error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// `amount / unit_scale` has no exact decimal representation.
    #[error("Precision loss: {amount} satoshis is not exactly divisible by {unit_scale} ({denomination})")]
    PrecisionLoss {
        amount: i64,
        denomination: Denomination,
        unit_scale: Decimal,
    },

    #[error("Precision {precision} exceeds the maximum of {max} fractional digits")]
    InvalidPrecision { precision: u32, max: u32 },

    #[error("Invalid format config: {0}")]
    InvalidConfig(String),

    #[error("Overflow: {context}")]
    Overflow { context: String },
}
