// File: crates/chart-core/src/format.rs
// Summary: Compact magnitude formatting (1.23M, 1.5k) plus currency/tooltip text helpers.

use chrono::NaiveDate;

use crate::error::{ChartError, Result};
use crate::point::DataPoint;

/// Magnitude suffixes; each step is a factor of 1000.
pub const SUFFIXES: [&str; 9] = ["", "k", "M", "B", "T", "P", "E", "Z", "Y"];

// 1000^k as exact literals so band boundaries compare without log10 error.
const POWERS: [f64; 9] = [1.0, 1e3, 1e6, 1e9, 1e12, 1e15, 1e18, 1e21, 1e24];

/// Label used for the contract count line in tooltips.
pub const CONTRACTS_LABEL: &str = "Contratos";

/// Index into [`SUFFIXES`] for `n`: `floor(log10(|n|) / 3)` clamped to the table.
/// Zero and magnitudes below one map to index 0.
pub fn magnitude_index(n: f64) -> usize {
    let a = n.abs();
    POWERS.iter().rposition(|&p| a >= p).unwrap_or(0)
}

/// Format `n` as a compact string with a magnitude suffix.
///
/// Integral scaled values are written in full (`500`, `1k`), fractional ones are
/// rounded to three significant digits with trailing zeros dropped (`1.5k`,
/// `1.23M`). The sign is preserved. Non-finite input is rejected.
pub fn format_magnitude(n: f64) -> Result<String> {
    if !n.is_finite() {
        return Err(ChartError::NonFinite(n));
    }
    if n == 0.0 {
        return Ok("0".to_string());
    }
    let idx = magnitude_index(n);
    let scaled = n / POWERS[idx];
    let shown = if scaled.fract() == 0.0 { scaled } else { round_significant(scaled, 3) };
    Ok(format!("{}{}", shown, SUFFIXES[idx]))
}

/// Y axis tick label: `$` followed by the compact magnitude.
pub fn currency_tick(value: f64) -> Result<String> {
    format_magnitude(value).map(|s| format!("${s}"))
}

/// Thousands-separated number with at most three fractional digits
/// (`1234567.5` -> `1,234,567.5`).
pub fn format_grouped(n: f64) -> String {
    if !n.is_finite() {
        return n.to_string();
    }
    let fixed = format!("{:.3}", n.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac = frac_part.trim_end_matches('0');

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if !frac.is_empty() {
        grouped.push('.');
        grouped.push_str(frac);
    }
    let is_zero = int_part.chars().all(|c| c == '0') && frac.is_empty();
    if n.is_sign_negative() && !is_zero {
        grouped.insert(0, '-');
    }
    grouped
}

/// Tooltip title for a point, e.g. `Feb 1, 2020`.
pub fn tooltip_title(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Tooltip body: contract count and grouped dollar total.
pub fn tooltip_lines(point: &DataPoint) -> [String; 2] {
    [
        format!("{}: {}", CONTRACTS_LABEL, point.contracts),
        format!("Total: ${}", format_grouped(point.y)),
    ]
}

fn round_significant(v: f64, digits: usize) -> f64 {
    // Scientific formatting rounds to the requested significant digits.
    format!("{:.*e}", digits.saturating_sub(1), v).parse().unwrap_or(v)
}
