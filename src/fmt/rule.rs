//! Formatting rules: separator layout plus a cap on fractional digits.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::error::{FormatError, FormatResult};

/// Most fractional digits a `Decimal` can carry.
pub const MAX_FRACTION_DIGITS: u32 = 28;

/// Fractional cap of the default rule: one satoshi in full units.
pub const DEFAULT_FRACTION_DIGITS: u32 = 8;

/// Separator layout every rule of a formatter derives from.
///
/// Deserializes with defaults for missing fields, so `{}` is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    pub decimal_separator: char,
    pub grouping_separator: char,
    pub grouping_size: usize,
    /// Fractional cap of the grouped minimal-digits rule.
    pub max_fraction_digits: u32,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            decimal_separator: '.',
            grouping_separator: ' ',
            grouping_size: 3,
            max_fraction_digits: DEFAULT_FRACTION_DIGITS,
        }
    }
}

impl FormatConfig {
    pub fn validate(&self) -> FormatResult<()> {
        if self.grouping_size == 0 {
            return Err(FormatError::InvalidConfig(
                "grouping_size must be at least 1".to_string(),
            ));
        }
        if self.max_fraction_digits > MAX_FRACTION_DIGITS {
            return Err(FormatError::InvalidPrecision {
                precision: self.max_fraction_digits,
                max: MAX_FRACTION_DIGITS,
            });
        }
        if self.decimal_separator == self.grouping_separator {
            return Err(FormatError::InvalidConfig(format!(
                "decimal and grouping separator are both {:?}",
                self.decimal_separator
            )));
        }
        for separator in [self.decimal_separator, self.grouping_separator] {
            if separator.is_ascii_digit() || separator == '-' {
                return Err(FormatError::InvalidConfig(format!(
                    "{:?} cannot be used as a separator",
                    separator
                )));
            }
        }
        Ok(())
    }
}

// ─── FormatRule ──────────────────────────────────────────────────────────────

/// Immutable rendering rule for decimal amounts.
///
/// Rounds half-even to `max_fraction_digits`, drops trailing fractional
/// zeros, and groups integer digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatRule {
    decimal_separator: char,
    grouping_separator: char,
    grouping_size: usize,
    max_fraction_digits: u32,
}

impl Default for FormatRule {
    fn default() -> Self {
        Self::from_valid(&FormatConfig::default())
    }
}

impl FormatRule {
    /// Grouped rule for `config`.
    pub fn new(config: &FormatConfig) -> FormatResult<Self> {
        config.validate()?;
        Ok(Self::from_valid(config))
    }

    fn from_valid(config: &FormatConfig) -> Self {
        Self {
            decimal_separator: config.decimal_separator,
            grouping_separator: config.grouping_separator,
            grouping_size: config.grouping_size,
            max_fraction_digits: config.max_fraction_digits,
        }
    }

    /// Copy of this rule with a different fractional cap.
    pub fn with_max_fraction_digits(&self, digits: u32) -> FormatResult<Self> {
        if digits > MAX_FRACTION_DIGITS {
            return Err(FormatError::InvalidPrecision {
                precision: digits,
                max: MAX_FRACTION_DIGITS,
            });
        }
        Ok(Self {
            max_fraction_digits: digits,
            ..self.clone()
        })
    }

    pub fn max_fraction_digits(&self) -> u32 {
        self.max_fraction_digits
    }

    pub fn format(&self, value: &Decimal) -> String {
        // A negative value keeps its sign even when it rounds to zero ("-0").
        let rounded = value
            .round_dp_with_strategy(self.max_fraction_digits, RoundingStrategy::MidpointNearestEven)
            .normalize();

        let digits = rounded.abs().to_string();
        let (integer, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), ""));

        let mut out = String::with_capacity(digits.len() + digits.len() / self.grouping_size + 2);
        if value.is_sign_negative() && !value.is_zero() {
            out.push('-');
        }
        out.push_str(&group_digits(integer, self.grouping_separator, self.grouping_size));
        if !fraction.is_empty() {
            out.push(self.decimal_separator);
            out.push_str(fraction);
        }
        out
    }
}

/// Inserts `separator` between every `size` digits, counted from the right.
pub fn group_digits(digits: &str, separator: char, size: usize) -> String {
    if size == 0 {
        return digits.to_string();
    }
    let reversed = digits.chars().rev().collect::<Vec<_>>();
    reversed
        .chunks(size)
        .map(|chunk| chunk.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(&separator.to_string())
        .chars()
        .rev()
        .collect()
}
