// File: crates/chart-core/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test writing a PNG, plus the RGBA buffer shape.

use chart_core::{Chart, ChartSurface, DataPoint, RenderOptions};
use chrono::NaiveDate;

fn sample() -> Vec<DataPoint> {
    (1..=6)
        .map(|m| DataPoint::new(NaiveDate::from_ymd_opt(2019, m, 1).unwrap(), 1500.0 * m as f64, m))
        .collect()
}

#[test]
fn render_smoke_png() {
    let mut chart = Chart::new();
    chart.set_data(&sample());
    chart.set_active(Some(2));

    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    chart.render_to_png(&out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    let bytes = chart.render_to_png_bytes().expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn render_rgba8_buffer() {
    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    let mut chart = Chart::with_options(opts);
    chart.set_data(&sample());

    let (px, w, h, stride) = chart.render_to_rgba8().expect("rgba render");
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);
    // Opaque white background in the top-left corner.
    assert_eq!(&px[0..4], &[255, 255, 255, 255]);
}

#[test]
fn empty_chart_renders() {
    let mut chart = Chart::new();
    chart.set_data(&[]);
    assert!(chart.render_to_png_bytes().is_ok());
}
