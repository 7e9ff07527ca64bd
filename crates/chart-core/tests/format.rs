// File: crates/chart-core/tests/format.rs
// Purpose: Magnitude formatter outputs, suffix bands and input policy.

use chart_core::format::{currency_tick, format_magnitude, tooltip_lines, tooltip_title, SUFFIXES};
use chart_core::{ChartError, DataPoint};
use chrono::NaiveDate;

fn fmt(n: f64) -> String {
    format_magnitude(n).expect("finite input")
}

#[test]
fn known_values() {
    assert_eq!(fmt(0.0), "0");
    assert_eq!(fmt(500.0), "500");
    assert_eq!(fmt(999.0), "999");
    assert_eq!(fmt(1000.0), "1k");
    assert_eq!(fmt(1500.0), "1.5k");
    assert_eq!(fmt(1_234_567.0), "1.23M");
    assert_eq!(fmt(1_234_567_890.0), "1.23B");
    assert_eq!(fmt(2_000_000.0), "2M");
    assert_eq!(fmt(0.5), "0.5");
}

#[test]
fn sign_is_preserved() {
    assert_eq!(fmt(-1500.0), "-1.5k");
    assert_eq!(fmt(-250.0), "-250");
    assert_eq!(fmt(-0.0), "0");
}

#[test]
fn non_finite_is_rejected() {
    for n in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        assert!(matches!(format_magnitude(n), Err(ChartError::NonFinite(_))));
    }
}

#[test]
fn suffix_matches_magnitude_band() {
    for k in 0..SUFFIXES.len() {
        let lo: f64 = format!("1e{}", 3 * k).parse().unwrap();
        for factor in [1.0, 1.5, 12.0, 123.4, 999.0] {
            let n = lo * factor;
            let out = fmt(n);
            let digits_end = out.trim_end_matches(|c: char| c.is_ascii_alphabetic());
            assert_eq!(&out[digits_end.len()..], SUFFIXES[k], "n = {n}, out = {out}");
        }
    }
}

#[test]
fn beyond_largest_suffix_stays_on_last() {
    assert!(fmt(1e27).ends_with('Y'));
    assert!(fmt(-1e30).starts_with('-'));
}

#[test]
fn deterministic() {
    for n in [0.0, 7.0, 1234.5, 9_876_543.21, -42.0] {
        assert_eq!(fmt(n), fmt(n));
    }
}

#[test]
fn tick_and_tooltip_text() {
    assert_eq!(currency_tick(2000.0).unwrap(), "$2k");
    assert_eq!(currency_tick(0.0).unwrap(), "$0");

    let day = NaiveDate::from_ymd_opt(2020, 2, 1).unwrap();
    let p = DataPoint::new(day, 1_234_567.5, 7);
    assert_eq!(tooltip_title(day), "Feb 1, 2020");
    assert_eq!(tooltip_lines(&p), ["Contratos: 7".to_string(), "Total: $1,234,567.5".to_string()]);
}
