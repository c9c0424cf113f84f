//! `CoinFormatter`: satoshi amounts to display strings.
//!
//! Three modes, all exact up to their rendering step:
//!
//! | mode            | fractional digits                 | grouping   |
//! |-----------------|-----------------------------------|------------|
//! | minimal         | as many as needed, no trailing 0s | optional   |
//! | with precision  | at most `precision`, half-even    | always     |
//! | full            | exactly `decimal_places`          | never      |

use std::sync::Arc;

use rust_decimal::Decimal;

use super::cache::RuleCache;
use super::rule::{FormatConfig, FormatRule};
use crate::denomination::Denomination;
use crate::error::{FormatError, FormatResult};
use crate::resolve::{AmountResolver, NearestAmount};

/// Converts satoshi amounts into denominated decimal strings.
///
/// Clones share the rule cache.
#[derive(Clone)]
pub struct CoinFormatter {
    config: FormatConfig,
    default_rule: FormatRule,
    cache: Arc<RuleCache>,
    resolver: Arc<dyn AmountResolver>,
}

impl Default for CoinFormatter {
    fn default() -> Self {
        Self {
            config: FormatConfig::default(),
            default_rule: FormatRule::default(),
            cache: Arc::new(RuleCache::with_config(FormatConfig::default())),
            resolver: Arc::new(NearestAmount),
        }
    }
}

impl std::fmt::Debug for CoinFormatter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoinFormatter")
            .field("config", &self.config)
            .field("cached_rules", &self.cache.len())
            .finish_non_exhaustive()
    }
}

impl CoinFormatter {
    pub fn builder() -> CoinFormatterBuilder {
        CoinFormatterBuilder::default()
    }

    pub fn config(&self) -> &FormatConfig {
        &self.config
    }

    pub fn cache(&self) -> &Arc<RuleCache> {
        &self.cache
    }

    // ── Minimal digits ───────────────────────────────────────────────────

    /// Format `amount` satoshis with only the digits needed for the exact value.
    ///
    /// Ungrouped output is the plain decimal form (`.` separator, e.g.
    /// `"10.12345"`). Grouped output uses the configured rule
    /// (`"1 234.5"` by default).
    pub fn format_minimal(
        &self,
        amount: i64,
        denomination: Denomination,
        grouped: bool,
    ) -> FormatResult<String> {
        let value = exact_quotient(amount, denomination)?;
        if grouped {
            Ok(self.default_rule.format(&value))
        } else {
            Ok(value.normalize().to_string())
        }
    }

    /// [`CoinFormatter::format_minimal`] in full units.
    pub fn format_unit_minimal(&self, amount: i64, grouped: bool) -> FormatResult<String> {
        self.format_minimal(amount, Denomination::Unit, grouped)
    }

    /// Format a decimal quantity of full units, resolved to the nearest
    /// satoshi first.
    pub fn format_decimal_minimal(
        &self,
        value: Decimal,
        denomination: Denomination,
        grouped: bool,
    ) -> FormatResult<String> {
        let amount = self
            .resolver
            .nearest_amount(value, Denomination::Unit.unit_scale())?;
        self.format_minimal(amount, denomination, grouped)
    }

    // ── Bounded precision ────────────────────────────────────────────────

    /// Format with at most `precision` fractional digits, always grouped.
    ///
    /// The rule for each precision is built once and reused from the cache.
    pub fn format_with_precision(
        &self,
        amount: i64,
        denomination: Denomination,
        precision: u32,
    ) -> FormatResult<String> {
        let value = exact_quotient(amount, denomination)?;
        let rule = self.rule_for_precision(precision)?;
        Ok(rule.format(&value))
    }

    pub fn rule_for_precision(&self, precision: u32) -> FormatResult<Arc<FormatRule>> {
        self.cache.get_or_try_insert_with(precision, || {
            self.default_rule.with_max_fraction_digits(precision)
        })
    }

    // ── Full digits ──────────────────────────────────────────────────────

    /// Format with exactly `denomination.decimal_places()` fractional digits,
    /// e.g. `"10.12345000"`. Lossless; never grouped or rounded.
    pub fn format_full(&self, amount: i64, denomination: Denomination) -> String {
        Decimal::new(amount, denomination.decimal_places()).to_string()
    }

    /// [`CoinFormatter::format_full`] in full units.
    pub fn format_unit_full(&self, amount: i64) -> String {
        self.format_full(amount, Denomination::Unit)
    }
}

/// `amount / unit_scale`, refusing any quotient that does not multiply back
/// to `amount`.
fn exact_quotient(amount: i64, denomination: Denomination) -> FormatResult<Decimal> {
    let unit_scale = denomination.unit_scale();
    let amount_dec = Decimal::from(amount);
    let quotient = amount_dec
        .checked_div(unit_scale)
        .filter(|q| q.checked_mul(unit_scale) == Some(amount_dec));

    quotient.ok_or_else(|| {
        tracing::warn!(
            "Inexact division of {} satoshis by {} for {}",
            amount,
            unit_scale,
            denomination
        );
        FormatError::PrecisionLoss {
            amount,
            denomination,
            unit_scale,
        }
    })
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

#[derive(Default)]
pub struct CoinFormatterBuilder {
    config: FormatConfig,
    cache: Option<Arc<RuleCache>>,
    resolver: Option<Arc<dyn AmountResolver>>,
}

impl CoinFormatterBuilder {
    pub fn config(mut self, config: FormatConfig) -> Self {
        self.config = config;
        self
    }

    pub fn decimal_separator(mut self, separator: char) -> Self {
        self.config.decimal_separator = separator;
        self
    }

    pub fn grouping_separator(mut self, separator: char) -> Self {
        self.config.grouping_separator = separator;
        self
    }

    pub fn grouping_size(mut self, size: usize) -> Self {
        self.config.grouping_size = size;
        self
    }

    /// Fractional cap of grouped minimal-digits output.
    pub fn max_fraction_digits(mut self, digits: u32) -> Self {
        self.config.max_fraction_digits = digits;
        self
    }

    /// Use an existing rule cache instead of a fresh one. `build` fails if
    /// the cache is already bound to a different config.
    pub fn cache(mut self, cache: Arc<RuleCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    pub fn resolver(mut self, resolver: impl AmountResolver + 'static) -> Self {
        self.resolver = Some(Arc::new(resolver));
        self
    }

    pub fn build(self) -> FormatResult<CoinFormatter> {
        let default_rule = FormatRule::new(&self.config)?;
        let cache = self.cache.unwrap_or_default();
        cache.bind(&self.config)?;
        let resolver: Arc<dyn AmountResolver> = match self.resolver {
            Some(resolver) => resolver,
            None => Arc::new(NearestAmount),
        };
        tracing::debug!("Building coin formatter with {:?}", self.config);
        Ok(CoinFormatter {
            config: self.config,
            default_rule,
            cache,
            resolver,
        })
    }
}
