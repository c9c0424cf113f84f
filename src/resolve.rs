//! Nearest-amount resolution: arbitrary decimal quantities to whole satoshis.
//!
//! All math uses `rust_decimal::Decimal`; nothing goes through `f64`.

use rust_decimal::prelude::*;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{FormatError, FormatResult};

/// Maps a decimal quantity to the nearest representable smallest-unit amount.
pub trait AmountResolver: Send + Sync {
    /// `value` is expressed in units of `unit_scale` satoshis.
    fn nearest_amount(&self, value: Decimal, unit_scale: Decimal) -> FormatResult<i64>;
}

impl<F> AmountResolver for F
where
    F: Fn(Decimal, Decimal) -> FormatResult<i64> + Send + Sync,
{
    fn nearest_amount(&self, value: Decimal, unit_scale: Decimal) -> FormatResult<i64> {
        self(value, unit_scale)
    }
}

/// Scales and rounds half away from zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct NearestAmount;

impl AmountResolver for NearestAmount {
    fn nearest_amount(&self, value: Decimal, unit_scale: Decimal) -> FormatResult<i64> {
        let scaled = value
            .checked_mul(unit_scale)
            .ok_or_else(|| FormatError::Overflow {
                context: format!("{} * {}", value, unit_scale),
            })?;

        let rounded = scaled.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        rounded.to_i64().ok_or_else(|| FormatError::Overflow {
            context: format!("{} does not fit in i64", rounded),
        })
    }
}
