// File: crates/chart-core/src/point.rs
// Summary: Chart data points and grouping of raw contracts into per-date totals.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// One point of the spending series: total amount and contract count on a date.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub x: NaiveDate,
    pub y: f64,
    pub contracts: u32,
}

impl DataPoint {
    pub fn new(x: NaiveDate, y: f64, contracts: u32) -> Self {
        Self { x, y, contracts }
    }

    /// Text form of `x` as it appears in companion `data-date` attributes.
    pub fn date_key(&self) -> String {
        self.x.format("%Y-%m-%d").to_string()
    }

    /// Logical X coordinate used by the time scale (days since 0001-01-01).
    pub fn logical_x(&self) -> f64 {
        self.x.num_days_from_ce() as f64
    }
}

/// A raw contract row: grant date and amount to pay.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContractRecord {
    pub date_of_grant: NaiveDate,
    pub amount_to_pay: f64,
}

/// Group contracts by grant date into chart points ordered by date.
/// `y` is the summed amount, `contracts` the number of contracts on that date.
pub fn chart_data<'a, I>(records: I) -> Vec<DataPoint>
where
    I: IntoIterator<Item = &'a ContractRecord>,
{
    let mut groups: BTreeMap<NaiveDate, (f64, u32)> = BTreeMap::new();
    for r in records {
        let entry = groups.entry(r.date_of_grant).or_insert((0.0, 0));
        entry.0 += r.amount_to_pay;
        entry.1 += 1;
    }
    groups
        .into_iter()
        .map(|(x, (y, contracts))| DataPoint { x, y, contracts })
        .collect()
}
