// File: crates/chart-core/src/axis.rs
// Summary: Axis model: hidden time X axis, zero-based currency Y axis with capped ticks.

use crate::format::currency_tick;
use crate::grid::nice_ticks;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScaleKind {
    Linear,
    /// Calendar days since 0001-01-01.
    Time,
}

#[derive(Clone, Debug)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub kind: ScaleKind,
    pub display: bool,
    pub begin_at_zero: bool,
    pub max_ticks: usize,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self {
            label: label.into(),
            min,
            max,
            kind: ScaleKind::Linear,
            display: true,
            begin_at_zero: false,
            max_ticks: 11,
        }
    }

    /// Time axis used for point dates; not drawn.
    pub fn time_x() -> Self {
        Self { kind: ScaleKind::Time, display: false, ..Self::new("Date", 0.0, 1.0) }
    }

    /// Amount axis: starts at zero, at most five ticks.
    pub fn amount_y() -> Self {
        Self { begin_at_zero: true, max_ticks: 5, ..Self::new("Total", 0.0, 1.0) }
    }

    /// Tick values for a linear axis; time axes carry none.
    pub fn ticks(&self) -> Vec<f64> {
        match self.kind {
            ScaleKind::Linear => nice_ticks(self.min, self.max, self.max_ticks),
            ScaleKind::Time => Vec::new(),
        }
    }

    /// Ticks paired with their `$1.5k` style labels.
    pub fn tick_labels(&self) -> Vec<(f64, String)> {
        self.ticks()
            .into_iter()
            .filter_map(|v| currency_tick(v).ok().map(|s| (v, s)))
            .collect()
    }
}
