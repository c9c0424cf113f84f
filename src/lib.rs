//! # coinfmt
//!
//! Display formatting for satoshi amounts across BTC denominations.
//!
//! ## Architecture
//!
//! 1. **Denominations**: `Denomination` catalog with scale and label metadata
//! 2. **Rules**: `FormatRule` separator layout + fractional cap, cached per precision
//! 3. **Formatter**: `CoinFormatter` minimal, bounded-precision and full-digit output
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use coinfmt::prelude::*;
//!
//! let formatter = CoinFormatter::default();
//!
//! formatter.format_unit_minimal(1_012_345_000, false)?;                    // "10.12345"
//! formatter.format_with_precision(1_012_345_000, Denomination::Unit, 2)?;  // "10.12"
//! formatter.format_unit_full(1_012_345_000);                              // "10.12345000"
//! Denomination::Micro.display_symbol("BTC");                              // "µBTC"
//! ```

/// Denomination catalog.
pub mod denomination;

/// Formatting error types.
pub mod error;

/// Formatting rules, rule cache and the formatter.
pub mod fmt;

/// Decimal quantity → nearest satoshi amount.
pub mod resolve;

pub mod prelude {
    pub use crate::denomination::Denomination;
    pub use crate::error::{FormatError, FormatResult};
    pub use crate::fmt::{CoinFormatter, CoinFormatterBuilder, FormatConfig, FormatRule, RuleCache};
    pub use crate::resolve::{AmountResolver, NearestAmount};
}
