// File: crates/chart-core/src/view.rs
// Summary: Visible data ranges derived from the points, with a zero-based, tick-aligned Y range.

use crate::point::DataPoint;
use crate::Chart;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl ViewState {
    pub fn from_points(points: &[DataPoint]) -> Self {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        for p in points.iter().filter(|p| p.y.is_finite()) {
            let x = p.logical_x();
            x_min = x_min.min(x);
            x_max = x_max.max(x);
            y_min = y_min.min(p.y);
            y_max = y_max.max(p.y);
        }
        if !x_min.is_finite() || !y_min.is_finite() {
            return Self { x_min: 0.0, x_max: 1.0, y_min: 0.0, y_max: 1.0 };
        }
        // A lone date sits in the middle of a two day window.
        if (x_max - x_min).abs() < 1e-9 {
            x_min -= 1.0;
            x_max += 1.0;
        }
        Self { x_min, x_max, y_min, y_max }
    }

    /// Copy the ranges onto the chart axes. A zero-based Y axis is widened to
    /// include zero, then both ends snap to the outer ticks.
    pub fn apply_to_chart(&self, chart: &mut Chart) {
        chart.x_axis.min = self.x_min;
        chart.x_axis.max = self.x_max;

        let (mut lo, mut hi) = (self.y_min, self.y_max);
        if chart.y_axis.begin_at_zero {
            lo = lo.min(0.0);
            hi = hi.max(0.0);
        }
        chart.y_axis.min = lo;
        chart.y_axis.max = hi;
        let ticks = chart.y_axis.ticks();
        if let (Some(first), Some(last)) = (ticks.first(), ticks.last()) {
            chart.y_axis.min = *first;
            chart.y_axis.max = *last;
        }
    }
}
