//! Figure geometry: canvas sizes, axis ranges, drawable points.

use std::ops::Range;

/// Fixed vertical range of the hip panel (degrees).
pub const HIP_RANGE: Range<f64> = -50.0..30.0;

/// Fixed vertical range of the knee panel (degrees).
pub const KNEE_RANGE: Range<f64> = -10.0..60.0;

/// Frames drawn per inch of figure width.
const FRAMES_PER_INCH: f64 = 35.0;
const PIXELS_PER_INCH: f64 = 100.0;
const MIN_WIDTH_PX: u32 = 640;
const PANEL_HEIGHT_PX: u32 = 300;

/// Phase-plane canvas size.
pub const PHASE_PLANE_SIZE: (u32, u32) = (640, 480);

/// Time-series canvas size: width grows with the recording length.
pub fn time_series_size(frames: usize, panels: u32) -> (u32, u32) {
    let width = (frames as f64 / FRAMES_PER_INCH * PIXELS_PER_INCH).round() as u32;
    (width.max(MIN_WIDTH_PX), PANEL_HEIGHT_PX * panels.max(1))
}

/// Horizontal range spanning the finite timestamps.
pub fn time_range(time: &[f64]) -> Range<f64> {
    let (lo, hi) = finite_bounds(time).unwrap_or((0.0, 1.0));
    if hi > lo {
        lo..hi
    } else {
        lo..lo + 1.0
    }
}

/// Range covering the finite values of every series, padded by 15%.
pub fn padded_range(series: &[&[f64]]) -> Range<f64> {
    let bounds = series
        .iter()
        .filter_map(|values| finite_bounds(values))
        .reduce(|(lo, hi), (l, h)| (lo.min(l), hi.max(h)));

    let Some((lo, hi)) = bounds else {
        return -1.0..1.0;
    };
    let span = hi - lo;
    let padding = if span < 1e-6 { 0.5 } else { span * 0.15 };
    (lo - padding)..(hi + padding)
}

/// `(x, y)` pairs with both coordinates finite.
pub fn finite_points(xs: &[f64], ys: &[f64]) -> Vec<(f64, f64)> {
    xs.iter()
        .zip(ys)
        .map(|(&x, &y)| (x, y))
        .filter(|(x, y)| x.is_finite() && y.is_finite())
        .collect()
}

fn finite_bounds(values: &[f64]) -> Option<(f64, f64)> {
    values
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}
