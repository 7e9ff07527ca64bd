// File: crates/chart-core/src/grid.rs
// Summary: Tick layout helpers ("nice" round steps for the value axis).

/// Round `range` to a 1/2/5 x 10^n step.
pub fn nice_num(range: f64, round: bool) -> f64 {
    if range <= 0.0 || !range.is_finite() { return 1.0; }
    let exponent = range.log10().floor();
    let fraction = range / 10f64.powf(exponent);
    let nice = if round {
        if fraction < 1.5 { 1.0 } else if fraction < 3.0 { 2.0 } else if fraction < 7.0 { 5.0 } else { 10.0 }
    } else if fraction <= 1.0 { 1.0 } else if fraction <= 2.0 { 2.0 } else if fraction <= 5.0 { 5.0 } else { 10.0 };
    nice * 10f64.powf(exponent)
}

/// Evenly spaced round ticks covering `[min, max]`, at most `max_ticks` of them.
/// Ranges too wide for round steps fall back to the two endpoints.
pub fn nice_ticks(min: f64, max: f64, max_ticks: usize) -> Vec<f64> {
    let max_ticks = max_ticks.max(2);
    let (min, max) = if (max - min).abs() < 1e-12 { (min, min + 1.0) } else { (min.min(max), max.max(min)) };
    let endpoints = vec![min, max];

    let range = nice_num(max - min, false);
    if !(max - min).is_finite() || !range.is_finite() {
        return endpoints;
    }
    let mut spacing = nice_num(range / (max_ticks as f64 - 1.0), true);
    loop {
        let lo = (min / spacing).floor() * spacing;
        let hi = (max / spacing).ceil() * spacing;
        let steps = ((hi - lo) / spacing).round();
        if !lo.is_finite() || !hi.is_finite() || !steps.is_finite() {
            return endpoints;
        }
        if steps < max_ticks as f64 {
            return (0..=steps as usize).map(|i| lo + spacing * i as f64).collect();
        }
        // Widen the step until the tick count fits the limit.
        let wider = spacing * 1.5;
        if !wider.is_finite() {
            return endpoints;
        }
        spacing = nice_num(wider, false);
    }
}
