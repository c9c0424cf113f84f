//! Integration tests for denomination-aware formatting.
//!
//! Exercises the public surface across every denomination and a spread of
//! amounts, including the extremes of `i64`.

use std::str::FromStr;

use rust_decimal::Decimal;

use coinfmt::prelude::*;

const AMOUNTS: [i64; 13] = [
    0,
    1,
    -1,
    99,
    100,
    12_345,
    100_000,
    1_012_345_000,
    -1_012_345_000,
    2_100_000_000_000_000,
    i64::MAX,
    -i64::MAX,
    i64::MIN,
];

fn fraction_digits(s: &str) -> usize {
    s.split_once('.').map(|(_, f)| f.len()).unwrap_or(0)
}

#[test]
fn full_has_exactly_decimal_places_digits() {
    let f = CoinFormatter::default();
    for d in Denomination::ALL {
        for amount in AMOUNTS {
            let s = f.format_full(amount, d);
            assert_eq!(
                fraction_digits(&s),
                d.decimal_places() as usize,
                "{} {} -> {}",
                amount,
                d,
                s
            );
        }
    }
}

#[test]
fn full_is_lossless() {
    let f = CoinFormatter::default();
    for d in Denomination::ALL {
        for amount in AMOUNTS {
            let parsed = Decimal::from_str(&f.format_full(amount, d)).unwrap();
            assert_eq!(parsed * d.unit_scale(), Decimal::from(amount), "{} {}", amount, d);
        }
    }
}

#[test]
fn minimal_reparses_to_original_amount() {
    let f = CoinFormatter::default();
    for d in Denomination::ALL {
        for amount in AMOUNTS {
            let s = f.format_minimal(amount, d, false).unwrap();
            let parsed = Decimal::from_str(&s).unwrap();
            assert_eq!(parsed * d.unit_scale(), Decimal::from(amount), "{} {} -> {}", amount, d, s);
            assert!(!s.contains('.') || !s.ends_with('0'), "trailing zero in {}", s);
        }
    }
}

#[test]
fn grouped_minimal_reparses_after_removing_separators() {
    let f = CoinFormatter::default();
    for d in Denomination::ALL {
        for amount in AMOUNTS {
            let grouped = f.format_minimal(amount, d, true).unwrap();
            let plain = f.format_minimal(amount, d, false).unwrap();
            assert_eq!(grouped.replace(' ', ""), plain);
        }
    }
}

#[test]
fn precision_bounds_fraction_digits_and_is_idempotent() {
    let f = CoinFormatter::default();
    for precision in 0..=8 {
        for d in Denomination::ALL {
            for amount in AMOUNTS {
                let first = f.format_with_precision(amount, d, precision).unwrap();
                let second = f.format_with_precision(amount, d, precision).unwrap();
                assert!(fraction_digits(&first) <= precision as usize, "{}", first);
                assert_eq!(first, second);
            }
        }
    }
    assert_eq!(f.cache().len(), 9);
}

#[test]
fn concrete_cases() {
    let f = CoinFormatter::default();
    assert_eq!(f.format_full(1_012_345_000, Denomination::Unit), "10.12345000");
    assert_eq!(f.format_minimal(1_012_345_000, Denomination::Unit, false).unwrap(), "10.12345");
    assert_eq!(f.format_with_precision(1_012_345_000, Denomination::Unit, 2).unwrap(), "10.12");
    assert_eq!(f.format_full(100, Denomination::Bits), "1.00");
}

#[test]
fn extreme_amounts() {
    let f = CoinFormatter::default();
    assert_eq!(f.format_unit_full(i64::MAX), "92233720368.54775807");
    assert_eq!(f.format_unit_minimal(i64::MAX, true).unwrap(), "92 233 720 368.54775807");
    assert_eq!(f.format_unit_minimal(-i64::MAX, false).unwrap(), "-92233720368.54775807");
    assert_eq!(
        f.format_with_precision(i64::MAX, Denomination::Unit, 2).unwrap(),
        "92 233 720 368.55"
    );

    assert_eq!(f.format_unit_full(i64::MIN), "-92233720368.54775808");
    assert_eq!(f.format_unit_minimal(i64::MIN, false).unwrap(), "-92233720368.54775808");
    assert_eq!(f.format_unit_minimal(i64::MIN, true).unwrap(), "-92 233 720 368.54775808");
    assert_eq!(
        f.format_with_precision(i64::MIN, Denomination::Unit, 2).unwrap(),
        "-92 233 720 368.55"
    );
}

#[test]
fn negative_amount_rounding_to_zero_keeps_sign() {
    let f = CoinFormatter::default();
    assert_eq!(f.format_with_precision(-1, Denomination::Unit, 2).unwrap(), "-0");
    assert_eq!(f.format_with_precision(-1, Denomination::Milli, 0).unwrap(), "-0");
    assert_eq!(f.format_with_precision(1, Denomination::Unit, 2).unwrap(), "0");
    assert_eq!(f.format_with_precision(0, Denomination::Unit, 2).unwrap(), "0");
}

#[test]
fn labels_resolve() {
    assert_eq!(Denomination::from_label(None), Denomination::Unit);
    assert_eq!(Denomination::from_label(Some("BTC")), Denomination::from_label(Some("unit")));
    assert_eq!(Denomination::from_label(Some("unknown")), Denomination::Unit);
    assert_eq!("uBTC".parse::<Denomination>().unwrap(), Denomination::Micro);
}

#[test]
fn display_symbols() {
    let micro_prefix = Denomination::Micro.unicode_label().chars().next().unwrap();
    assert_eq!(Denomination::Micro.display_symbol("BTC"), format!("{}BTC", micro_prefix));
    assert_eq!(Denomination::Unit.display_symbol("BTC"), "BTC");
    assert_eq!(Denomination::Bits.display_symbol("USD"), "USD");
}

#[test]
fn formatter_from_json_config() {
    let config: FormatConfig =
        serde_json::from_str(r#"{"grouping_separator": ",", "max_fraction_digits": 2}"#).unwrap();
    let f = CoinFormatter::builder().config(config).build().unwrap();

    // The grouped minimal rule now caps at two digits.
    assert_eq!(f.format_unit_minimal(123_456_789_012_345, true).unwrap(), "1,234,567.89");
    assert_eq!(f.format_unit_minimal(123_456_789_012_345, false).unwrap(), "1234567.89012345");
    assert_eq!(
        f.format_with_precision(123_456_789_012_345, Denomination::Unit, 4).unwrap(),
        "1,234,567.8901"
    );
}

#[test]
fn decimal_input_resolves_to_nearest_satoshi() {
    let f = CoinFormatter::default();
    let value = Decimal::from_str("0.000000005").unwrap();
    assert_eq!(f.format_decimal_minimal(value, Denomination::Unit, false).unwrap(), "0.00000001");

    let too_large = Decimal::from_str("1000000000000").unwrap();
    assert!(matches!(
        f.format_decimal_minimal(too_large, Denomination::Unit, false),
        Err(FormatError::Overflow { .. })
    ));
}
