// File: crates/chart-core/src/fiscal.rs
// Summary: Fiscal year helpers (July 1 through June 30).

use chrono::{Datelike, NaiveDate};

/// First and last day of fiscal year `year`, which ends on June 30 of `year`:
/// July 1 of `year - 1` to June 30 of `year`.
pub fn fiscal_year_range(year: i32) -> Option<(NaiveDate, NaiveDate)> {
    let start = NaiveDate::from_ymd_opt(year.checked_sub(1)?, 7, 1)?;
    let end = NaiveDate::from_ymd_opt(year, 6, 30)?;
    Some((start, end))
}

/// Fiscal year label for `today`: the next calendar year once June is over.
pub fn current_fiscal_year(today: NaiveDate) -> i32 {
    if today.month() > 6 { today.year() + 1 } else { today.year() }
}

/// True if `date` falls inside fiscal year `year` (both ends inclusive).
pub fn in_fiscal_year(date: NaiveDate, year: i32) -> bool {
    match fiscal_year_range(year) {
        Some((start, end)) => date >= start && date <= end,
        None => false,
    }
}
