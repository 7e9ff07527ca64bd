// File: crates/chart-core/src/theme.rs
// Summary: Chart palettes and per-point styling (default vs selected marker).

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_label: skia::Color,
    pub line_stroke: skia::Color,
    pub area_fill: skia::Color,
    pub tooltip_background: skia::Color,
    pub tooltip_text: skia::Color,
}

impl Theme {
    /// White page with the blue spending series.
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            grid: skia::Color::from_argb(25, 0, 0, 0),
            axis_label: skia::Color::from_argb(255, 102, 102, 102),
            line_stroke: skia::Color::from_argb(255, 52, 144, 220),
            area_fill: skia::Color::from_argb(128, 52, 144, 220),
            tooltip_background: skia::Color::from_argb(204, 0, 0, 0),
            tooltip_text: skia::Color::from_argb(255, 255, 255, 255),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            line_stroke: skia::Color::from_argb(255, 64, 160, 255),
            area_fill: skia::Color::from_argb(96, 64, 160, 255),
            tooltip_background: skia::Color::from_argb(230, 235, 235, 245),
            tooltip_text: skia::Color::from_argb(255, 18, 18, 20),
        }
    }

    /// Marker styling that matches this palette.
    pub fn point_style(&self) -> PointStyle {
        PointStyle {
            default_color: self.area_fill,
            selected_color: self.line_stroke,
            ..PointStyle::default()
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Theme::light() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_default()
}

/// Color and radius of point markers, unselected and selected.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointStyle {
    pub default_color: skia::Color,
    pub selected_color: skia::Color,
    pub default_radius: f32,
    pub selected_radius: f32,
}

impl Default for PointStyle {
    fn default() -> Self {
        Self {
            default_color: skia::Color::from_argb(128, 52, 144, 220),
            selected_color: skia::Color::from_argb(255, 52, 144, 220),
            default_radius: 3.0,
            selected_radius: 6.0,
        }
    }
}
