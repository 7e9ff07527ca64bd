// File: crates/chart-core/src/types.rs
// Summary: Shared types and constants (canvas size, paddings, pointer events, transitions).

use std::time::Duration;

/// Default canvas width in pixels.
pub const WIDTH: i32 = 800;
/// Default canvas height in pixels.
pub const HEIGHT: i32 = 320;

/// Screen margins, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
}

impl Default for Insets {
    // Room on the left for "$1.5M" style tick labels; the X axis is hidden.
    fn default() -> Self {
        Self::new(64, 16, 16, 16)
    }
}

/// Pointer click in canvas pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClickEvent {
    pub x: f32,
    pub y: f32,
}

impl ClickEvent {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Redraw transition. Selection changes always use [`Transition::NONE`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub duration: Duration,
}

impl Transition {
    /// Style-only redraw with no animation.
    pub const NONE: Transition = Transition { duration: Duration::ZERO };

    pub fn is_instant(&self) -> bool {
        self.duration.is_zero()
    }
}
