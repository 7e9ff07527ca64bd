// File: crates/chart-core/src/chart.rs
// Summary: Spending line chart: per-point styling, click hit testing, style-only
// redraws and headless PNG/RGBA rendering on Skia CPU raster surfaces.

use skia_safe as skia;
use tracing::{debug, warn};

use crate::error::{ChartError, Result};
use crate::format::{tooltip_lines, tooltip_title};
use crate::geometry::{PointF, RectI32};
use crate::page::ChartSurface;
use crate::point::DataPoint;
use crate::scale::PlotScale;
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::types::{ClickEvent, Insets, Transition, HEIGHT, WIDTH};
use crate::view::ViewState;
use crate::Axis;

/// Extra pixels around a marker that still count as a hit.
pub const DEFAULT_HIT_RADIUS: f32 = 1.0;

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Tick labels and tooltip text; off for pixel-exact snapshots.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::default(),
            draw_labels: true,
        }
    }
}

impl RenderOptions {
    /// Plot area inside the insets.
    pub fn plot_rect(&self) -> RectI32 {
        RectI32::from_ltrb(
            self.insets.left as i32,
            self.insets.top as i32,
            (self.width - self.insets.right as i32).max(self.insets.left as i32 + 1),
            (self.height - self.insets.bottom as i32).max(self.insets.top as i32 + 1),
        )
    }
}

pub struct Chart {
    pub points: Vec<DataPoint>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub options: RenderOptions,
    pub hit_radius: f32,
    colors: Vec<skia::Color>,
    radii: Vec<f32>,
    active: Option<usize>,
    last_transition: Option<Transition>,
    redraws: u64,
}

impl Chart {
    pub fn new() -> Self {
        Self::with_options(RenderOptions::default())
    }

    pub fn with_options(options: RenderOptions) -> Self {
        Self {
            points: Vec::new(),
            x_axis: Axis::time_x(),
            y_axis: Axis::amount_y(),
            options,
            hit_radius: DEFAULT_HIT_RADIUS,
            colors: Vec::new(),
            radii: Vec::new(),
            active: None,
            last_transition: None,
            redraws: 0,
        }
    }

    /// Replace the series, reset markers to the theme's default style and
    /// rescale the axes.
    pub fn load(&mut self, points: &[DataPoint]) {
        let skipped = points.iter().filter(|p| !p.y.is_finite()).count();
        if skipped > 0 {
            warn!(skipped, "points with non-finite amounts will not be drawn");
        }
        self.points = points.to_vec();
        let style = self.options.theme.point_style();
        self.colors = vec![style.default_color; self.points.len()];
        self.radii = vec![style.default_radius; self.points.len()];
        self.active = None;
        ViewState::from_points(&self.points).apply_to_chart(self);
        debug!(points = self.points.len(), y_max = self.y_axis.max, "chart data loaded");
    }

    pub fn point_colors(&self) -> &[skia::Color] { &self.colors }
    pub fn point_radii(&self) -> &[f32] { &self.radii }
    pub fn active(&self) -> Option<usize> { self.active }
    pub fn last_transition(&self) -> Option<Transition> { self.last_transition }
    /// Number of redraws requested through [`ChartSurface::update`].
    pub fn redraws(&self) -> u64 { self.redraws }

    fn scale(&self) -> PlotScale {
        PlotScale::new(self.options.plot_rect(), &self.x_axis, &self.y_axis)
    }

    /// Pixel position of point `index`.
    pub fn pixel_of(&self, index: usize) -> Option<PointF> {
        let p = self.points.get(index)?;
        Some(self.scale().to_px(p.logical_x(), p.y))
    }

    /// Tooltip title and body for point `index`.
    pub fn tooltip(&self, index: usize) -> Option<(String, [String; 2])> {
        let p = self.points.get(index)?;
        Some((tooltip_title(p.x), tooltip_lines(p)))
    }

    /// Render the chart to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(&self, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
        let bytes = self.render_to_png_bytes()?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }

    pub fn render_to_png_bytes(&self) -> Result<Vec<u8>> {
        let mut surface = self.draw_surface()?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(ChartError::Encode)?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render to unpremultiplied RGBA8; returns `(pixels, width, height, stride)`.
    pub fn render_to_rgba8(&self) -> Result<(Vec<u8>, i32, i32, usize)> {
        let mut surface = self.draw_surface()?;
        let (w, h) = (self.options.width, self.options.height);
        let info = skia::ImageInfo::new(
            (w, h),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(ChartError::Surface);
        }
        Ok((pixels, w, h, stride))
    }

    fn draw_surface(&self) -> Result<skia::Surface> {
        let opts = &self.options;
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or(ChartError::Surface)?;
        let canvas = surface.canvas();
        canvas.clear(opts.theme.background);

        let plot = opts.plot_rect();
        let scale = self.scale();
        let text = if opts.draw_labels { Some(TextShaper::new()) } else { None };

        draw_y_axis(canvas, plot, &scale, &self.y_axis, &opts.theme, text.as_ref());
        let pixels: Vec<PointF> = self.points.iter().map(|p| scale.to_px(p.logical_x(), p.y)).collect();
        let baseline = scale.y.to_px(0.0_f64.max(self.y_axis.min).min(self.y_axis.max));
        draw_area(canvas, &pixels, baseline, &opts.theme);
        draw_points(canvas, &pixels, &self.colors, &self.radii, &opts.theme);

        if let (Some(shaper), Some(i)) = (text.as_ref(), self.active) {
            if let (Some(at), Some((title, lines))) = (pixels.get(i), self.tooltip(i)) {
                let bounds = skia::Rect::from_wh(opts.width as f32, opts.height as f32);
                shaper.draw_tooltip(
                    canvas, &title, &lines, (at.x, at.y), bounds,
                    opts.theme.tooltip_background, opts.theme.tooltip_text,
                );
            }
        }
        Ok(surface)
    }
}

impl Default for Chart {
    fn default() -> Self { Self::new() }
}

impl ChartSurface for Chart {
    fn set_data(&mut self, points: &[DataPoint]) {
        self.load(points);
    }

    /// Nearest marker whose hit area (radius + hit radius) contains the click.
    fn element_at(&self, event: &ClickEvent) -> Option<usize> {
        let scale = self.scale();
        let click = PointF::new(event.x, event.y);
        let mut best: Option<(usize, f32)> = None;
        for (i, p) in self.points.iter().enumerate() {
            let d = scale.to_px(p.logical_x(), p.y).distance(click);
            let reach = self.radii.get(i).copied().unwrap_or(0.0) + self.hit_radius;
            if d <= reach && best.map_or(true, |(_, bd)| d < bd) {
                best = Some((i, d));
            }
        }
        best.map(|(i, _)| i)
    }

    fn set_point_styles(&mut self, colors: &[skia::Color], radii: &[f32]) {
        self.colors = colors.to_vec();
        self.radii = radii.to_vec();
    }

    fn set_active(&mut self, index: Option<usize>) {
        self.active = index.filter(|&i| i < self.points.len());
    }

    fn update(&mut self, transition: Transition) {
        self.last_transition = Some(transition);
        self.redraws += 1;
        debug!(redraws = self.redraws, instant = transition.is_instant(), "chart redraw");
    }
}

// ---- helpers ----------------------------------------------------------------

fn draw_y_axis(
    canvas: &skia::Canvas,
    plot: RectI32,
    scale: &PlotScale,
    axis: &Axis,
    theme: &Theme,
    text: Option<&TextShaper>,
) {
    if !axis.display { return; }
    let mut grid = skia::Paint::default();
    grid.set_color(theme.grid);
    grid.set_anti_alias(true);
    grid.set_stroke_width(1.0);

    for (v, label) in axis.tick_labels() {
        let y = scale.y.to_px(v);
        canvas.draw_line((plot.left as f32, y), (plot.right as f32, y), &grid);
        if let Some(shaper) = text {
            shaper.draw_right(canvas, &label, plot.left as f32 - 8.0, y, 12.0, theme.axis_label);
        }
    }
}

fn draw_area(canvas: &skia::Canvas, pixels: &[PointF], baseline_px: f32, theme: &Theme) {
    let pixels: Vec<PointF> = pixels.iter().copied().filter(|p| p.y.is_finite()).collect();
    let (first, last) = match (pixels.first(), pixels.last()) {
        (Some(f), Some(l)) => (*f, *l),
        _ => return,
    };

    let mut builder = skia::PathBuilder::new();
    builder.move_to((first.x, first.y));
    for p in pixels.iter().skip(1) {
        builder.line_to((p.x, p.y));
    }
    let line = builder.snapshot();

    builder.line_to((last.x, baseline_px));
    builder.line_to((first.x, baseline_px));
    builder.close();
    let area = builder.detach();

    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);
    fill.set_color(theme.area_fill);
    canvas.draw_path(&area, &fill);

    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(3.0);
    stroke.set_color(theme.line_stroke);
    canvas.draw_path(&line, &stroke);
}

fn draw_points(canvas: &skia::Canvas, pixels: &[PointF], colors: &[skia::Color], radii: &[f32], theme: &Theme) {
    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);

    let mut border = skia::Paint::default();
    border.set_anti_alias(true);
    border.set_style(skia::paint::Style::Stroke);
    border.set_stroke_width(1.0);
    border.set_color(theme.line_stroke);

    for ((p, color), r) in pixels.iter().zip(colors).zip(radii) {
        if *r <= 0.0 || !p.y.is_finite() { continue; }
        fill.set_color(*color);
        canvas.draw_circle((p.x, p.y), *r, &fill);
        canvas.draw_circle((p.x, p.y), *r, &border);
    }
}
