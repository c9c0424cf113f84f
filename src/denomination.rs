//! Denomination catalog: the fixed set of display scales for satoshi amounts.
//!
//! Every scale is an exact power of ten, so converting a satoshi count into
//! any denomination is a pure decimal-point shift.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

// ============================================================================
// Scale constants
// ============================================================================

/// Satoshis in one full unit (BTC).
pub const SATOSHIS_PER_UNIT: u64 = 100_000_000;

/// Satoshis in one milli-unit (mBTC).
pub const SATOSHIS_PER_MILLI: u64 = 100_000;

/// Satoshis in one micro-unit (µBTC).
pub const SATOSHIS_PER_MICRO: u64 = 100;

/// Satoshis in one bit. Same scale as micro, different label.
pub const SATOSHIS_PER_BIT: u64 = 100;

lazy_static::lazy_static! {
    static ref UNIT_SCALE: Decimal = Decimal::from(SATOSHIS_PER_UNIT);
    static ref MILLI_SCALE: Decimal = Decimal::from(SATOSHIS_PER_MILLI);
    static ref MICRO_SCALE: Decimal = Decimal::from(SATOSHIS_PER_MICRO);
    static ref BITS_SCALE: Decimal = Decimal::from(SATOSHIS_PER_BIT);
}

/// Tickers whose symbol gets a denomination prefix.
const RECOGNIZED_TICKERS: [&str; 2] = ["BTC", "BCH"];

// ─── Denomination ────────────────────────────────────────────────────────────

/// Display scale for satoshi amounts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Denomination {
    #[default]
    Unit,
    Milli,
    Micro,
    Bits,
}

impl Denomination {
    pub const ALL: [Denomination; 4] = [Self::Unit, Self::Milli, Self::Micro, Self::Bits];

    /// Resolve a stored label, including the legacy `BTC`/`mBTC`/`uBTC` names.
    ///
    /// Missing or unrecognized labels fall back to [`Denomination::Unit`].
    /// Matching is case-sensitive.
    pub fn from_label(label: Option<&str>) -> Self {
        match label {
            Some("BTC") | Some("unit") => Self::Unit,
            Some("mBTC") | Some("milli") => Self::Milli,
            Some("uBTC") | Some("micro") => Self::Micro,
            Some("bits") => Self::Bits,
            Some(other) => {
                tracing::trace!("Unrecognized denomination label {:?}, using unit", other);
                Self::Unit
            }
            None => Self::Unit,
        }
    }

    /// Canonical label, accepted back by [`Denomination::from_label`].
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unit => "unit",
            Self::Milli => "milli",
            Self::Micro => "micro",
            Self::Bits => "bits",
        }
    }

    /// Fractional digits needed to express one satoshi in this denomination.
    pub fn decimal_places(&self) -> u32 {
        match self {
            Self::Unit => 8,
            Self::Milli => 5,
            Self::Micro => 2,
            Self::Bits => 2,
        }
    }

    pub fn ascii_label(&self) -> &'static str {
        match self {
            Self::Unit => "",
            Self::Milli => "m",
            Self::Micro => "u",
            Self::Bits => "bits",
        }
    }

    pub fn unicode_label(&self) -> &'static str {
        match self {
            Self::Unit => "",
            Self::Milli => "m",
            Self::Micro => "\u{00B5}",
            Self::Bits => "bits",
        }
    }

    pub fn satoshis_per_unit(&self) -> u64 {
        match self {
            Self::Unit => SATOSHIS_PER_UNIT,
            Self::Milli => SATOSHIS_PER_MILLI,
            Self::Micro => SATOSHIS_PER_MICRO,
            Self::Bits => SATOSHIS_PER_BIT,
        }
    }

    /// Satoshis in one unit of this denomination, as an exact decimal.
    pub fn unit_scale(&self) -> Decimal {
        match self {
            Self::Unit => *UNIT_SCALE,
            Self::Milli => *MILLI_SCALE,
            Self::Micro => *MICRO_SCALE,
            Self::Bits => *BITS_SCALE,
        }
    }

    /// Symbol to show next to an amount in this denomination.
    ///
    /// | ticker contains `BTC`/`BCH` | Unit   | Milli / Micro               | Bits   |
    /// |-----------------------------|--------|-----------------------------|--------|
    /// | yes                         | ticker | label's first char + ticker | "bits" |
    /// | no                          | ticker | ticker                      | ticker |
    ///
    /// Recognition is a substring test, so e.g. `"SBTC"` also counts.
    pub fn display_symbol(&self, ticker: &str) -> String {
        if !RECOGNIZED_TICKERS.iter().any(|t| ticker.contains(t)) {
            return ticker.to_string();
        }
        match self {
            Self::Unit => ticker.to_string(),
            Self::Milli | Self::Micro => {
                let mut symbol = String::with_capacity(ticker.len() + 2);
                symbol.extend(self.unicode_label().chars().next());
                symbol.push_str(ticker);
                symbol
            }
            Self::Bits => self.unicode_label().to_string(),
        }
    }
}

impl std::fmt::Display for Denomination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Denomination {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_label(Some(s)))
    }
}

impl Serialize for Denomination {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Denomination {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let label = Option::<String>::deserialize(deserializer)?;
        Ok(Self::from_label(label.as_deref()))
    }
}
