// File: crates/chart-core/src/text.rs
// Summary: Text layout for tick labels and the tooltip box, on Skia textlayout.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

const FAMILIES: [&str; 6] = ["Helvetica Neue", "Helvetica", "Arial", "Roboto", "DejaVu Sans", "sans-serif"];

pub struct TextShaper {
    fonts: FontCollection,
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fonts = FontCollection::new();
        fonts.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts }
    }

    fn paragraph(&self, text: &str, size: f32, color: skia::Color, bold: bool) -> Paragraph {
        let mut style = TextStyle::new();
        style.set_font_size(size.max(1.0));
        style.set_color(color);
        style.set_font_families(&FAMILIES);
        if bold {
            style.set_font_style(skia::FontStyle::bold());
        }
        let mut builder = ParagraphBuilder::new(&ParagraphStyle::new(), &self.fonts);
        builder.push_style(&style);
        builder.add_text(text);
        let mut p = builder.build();
        p.layout(10_000.0);
        p
    }

    /// Draw `text` with its right edge at `right` and vertically centred on `cy`.
    pub fn draw_right(&self, canvas: &skia::Canvas, text: &str, right: f32, cy: f32, size: f32, color: skia::Color) {
        let p = self.paragraph(text, size, color, false);
        p.paint(canvas, (right - p.longest_line(), cy - p.height() * 0.5));
    }

    /// Tooltip: bold title and body lines on a rounded box anchored above `anchor`,
    /// kept inside `bounds`.
    pub fn draw_tooltip(
        &self,
        canvas: &skia::Canvas,
        title: &str,
        lines: &[String],
        anchor: (f32, f32),
        bounds: skia::Rect,
        background: skia::Color,
        color: skia::Color,
    ) {
        let pad = 6.0;
        let gap = 2.0;
        let mut rows = vec![self.paragraph(title, 12.0, color, true)];
        rows.extend(lines.iter().map(|l| self.paragraph(l, 12.0, color, false)));

        let w = rows.iter().map(|p| p.longest_line()).fold(0.0f32, f32::max) + pad * 2.0;
        let h = rows.iter().map(|p| p.height() + gap).sum::<f32>() - gap + pad * 2.0;

        let left = (anchor.0 - w * 0.5).clamp(bounds.left, (bounds.right - w).max(bounds.left));
        let top = if anchor.1 - h - 8.0 >= bounds.top { anchor.1 - h - 8.0 } else { anchor.1 + 8.0 };
        let rect = skia::Rect::from_xywh(left, top, w, h);

        let mut bg = skia::Paint::default();
        bg.set_anti_alias(true);
        bg.set_color(background);
        canvas.draw_round_rect(rect, 6.0, 6.0, &bg);

        let mut y = top + pad;
        for p in &rows {
            p.paint(canvas, (left + pad, y));
            y += p.height() + gap;
        }
    }
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
}
