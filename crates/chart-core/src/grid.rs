// File: crates/chart-core/src/grid.rs
// Summary: Simple grid/tick layout helpers.

/// Multiples of `step` inside [min, max], ascending.
pub fn stride_ticks(min: f64, max: f64, step: f64) -> Vec<f64> {
    if !(step > 0.0) || !(max >= min) { return Vec::new(); }
    let first = (min / step).ceil() as i64;
    let last = (max / step).floor() as i64;
    (first..=last).map(|k| k as f64 * step).collect()
}
