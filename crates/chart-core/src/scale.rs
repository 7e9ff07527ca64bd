// File: crates/chart-core/src/scale.rs
// Summary: Time (X) and value (Y) transforms from data space to canvas pixels.

use crate::axis::Axis;
use crate::geometry::{PointF, RectI32};

/// Logical X coordinate (days since 0001-01-01).
pub type Logical = f64;
/// Value Y coordinate (amount).
pub type Value = f64;

/// Horizontal time scale mapping `[min, max]` days onto `[left, right]` pixels.
#[derive(Clone, Copy, Debug)]
pub struct TimeScale {
    pub left_px: f32,
    pub right_px: f32,
    pub min: Logical,
    pub max: Logical,
}

impl TimeScale {
    pub fn new(left_px: f32, right_px: f32, min: Logical, max: Logical) -> Self {
        let max = if (max - min).abs() < 1e-9 { min + 1.0 } else { max };
        Self { left_px, right_px, min, max }
    }
    #[inline]
    pub fn to_px(&self, x: Logical) -> f32 {
        self.left_px + ((x - self.min) / (self.max - self.min)) as f32 * (self.right_px - self.left_px)
    }
}

/// Vertical value scale mapping `[vmin, vmax]` onto `[bottom, top]` pixels.
#[derive(Clone, Copy, Debug)]
pub struct ValueScale {
    pub top_px: f32,
    pub bottom_px: f32,
    pub vmin: Value,
    pub vmax: Value,
}

impl ValueScale {
    pub fn new(top_px: f32, bottom_px: f32, vmin: Value, vmax: Value) -> Self {
        let vmax = if (vmax - vmin).abs() < 1e-12 { vmin + 1.0 } else { vmax };
        Self { top_px, bottom_px, vmin, vmax }
    }
    #[inline]
    pub fn to_px(&self, y: Value) -> f32 {
        self.bottom_px - ((y - self.vmin) / (self.vmax - self.vmin)) as f32 * (self.bottom_px - self.top_px)
    }
}

/// Both scales for one plot rectangle.
#[derive(Clone, Copy, Debug)]
pub struct PlotScale {
    pub x: TimeScale,
    pub y: ValueScale,
}

impl PlotScale {
    pub fn new(plot: RectI32, x_axis: &Axis, y_axis: &Axis) -> Self {
        Self {
            x: TimeScale::new(plot.left as f32, plot.right as f32, x_axis.min, x_axis.max),
            y: ValueScale::new(plot.top as f32, plot.bottom as f32, y_axis.min, y_axis.max),
        }
    }

    #[inline]
    pub fn to_px(&self, x: Logical, y: Value) -> PointF {
        PointF::new(self.x.to_px(x), self.y.to_px(y))
    }
}
