// File: crates/linechart-core/src/grid.rs
// Summary: Tick layout helpers for axis drawing.

/// Evenly spaced values from `start` to `end` inclusive.
pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Tick positions over a domain; `count` is the number of ticks drawn.
pub fn tick_values(min: f64, max: f64, count: usize) -> Vec<f64> {
    linspace(min, max, count.max(2))
}

/// Compact label for a tick value: drop the fraction when it is whole,
/// otherwise keep two decimals.
pub fn format_tick(v: f64) -> String {
    if (v - v.round()).abs() < 1e-9 {
        format!("{}", v.round() as i64)
    } else {
        format!("{:.2}", v)
    }
}
