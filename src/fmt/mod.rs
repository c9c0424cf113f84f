//! Value formatting: rules, the precision-keyed rule cache, and the formatter.

pub mod cache;
pub mod formatter;
pub mod rule;

pub use cache::RuleCache;
pub use formatter::{CoinFormatter, CoinFormatterBuilder};
pub use rule::{group_digits, FormatConfig, FormatRule, DEFAULT_FRACTION_DIGITS, MAX_FRACTION_DIGITS};
