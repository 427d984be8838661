//! Temporal trimming: nearest-timestamp cuts and trailing-outlier truncation.
//!
//! Marker tracking occasionally loses a leg near the end of a recording,
//! which shows up as a knee angle far beyond anything a person can produce.
//! [`auto_trim_outliers`] drops the frames from that point on; it assumes
//! the glitch only affects the tail of the recording.

use habilo_trajectory_model::{TableError, TrajectoryTable};

use crate::curves::build_curves;

/// Knee angle (degrees) above which a frame is considered a tracking glitch.
pub const DEFAULT_KNEE_BOUND_DEG: f64 = 60.0;

/// Which knee samples are compared against the bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KneeCheck {
    /// Peak of the left knee, but only the first sample of the right knee.
    #[default]
    LeftPeakRightFirst,
    /// Peak of both knees.
    BothPeaks,
}

/// Result of [`auto_trim_outliers`].
#[derive(Debug, Clone)]
pub struct TrimOutcome {
    pub table: TrajectoryTable,
    pub was_trimmed: bool,
    /// Row the table was truncated at (exclusive end), when trimmed.
    pub cut_index: Option<usize>,
}

/// Index of the sample closest to `target`.
///
/// Ties resolve to the lowest index. NaN samples never match. Returns `None`
/// when no sample is comparable.
pub fn nearest_index(series: &[f64], target: f64) -> Option<usize> {
    series
        .iter()
        .enumerate()
        .map(|(i, v)| (i, (v - target).abs()))
        .filter(|(_, distance)| !distance.is_nan())
        .fold(None, |best: Option<(usize, f64)>, (i, distance)| match best {
            Some((_, best_distance)) if best_distance <= distance => best,
            _ => Some((i, distance)),
        })
        .map(|(i, _)| i)
}

/// Rows between the frames nearest to `first` and `last` seconds.
///
/// The range is half-open: the frame nearest `last` is excluded. Without
/// `last` the target is the row count taken as seconds. For recordings
/// sampled faster than 1 Hz that resolves to the final frame, so that frame
/// is dropped too.
/// A range that selects no rows (including `first` after `last`) is an
/// [`TableError::EmptyRange`].
pub fn cut_range(
    table: &TrajectoryTable,
    first: f64,
    last: Option<f64>,
) -> Result<TrajectoryTable, TableError> {
    let empty = || TableError::EmptyRange { first, last };

    let time = table.time()?;
    let start = nearest_index(time, first).ok_or_else(empty)?;
    let target = last.unwrap_or(time.len() as f64);
    let end = nearest_index(time, target).ok_or_else(empty)?;

    if start >= end {
        return Err(empty());
    }

    tracing::debug!(start, end, "Cut trajectory table");
    Ok(table.slice_rows(start..end))
}

/// Truncate the recording where a knee angle runs past `bound`.
///
/// When the check in `check` fires, the table is cut before the earlier of
/// the two frames whose knee angle is nearest to `bound` (left and right
/// knee searched separately). The result may have zero rows; callers decide
/// whether that is usable.
pub fn auto_trim_outliers(
    table: TrajectoryTable,
    bound: f64,
    check: KneeCheck,
) -> Result<TrimOutcome, TableError> {
    let curves = build_curves(&table)?;
    let left = &curves.knee.left;
    let right = &curves.knee.right;

    let left_probe = peak(left);
    let right_probe = match check {
        KneeCheck::LeftPeakRightFirst => right.first().copied(),
        KneeCheck::BothPeaks => peak(right),
    };
    let exceeds = |probe: Option<f64>| probe.map_or(false, |v| v > bound);

    let untouched = |table| TrimOutcome {
        table,
        was_trimmed: false,
        cut_index: None,
    };

    let left_fired = exceeds(left_probe);
    let right_fired = exceeds(right_probe);
    if !left_fired && !right_fired {
        return Ok(untouched(table));
    }

    let left_hit = nearest_index(left, bound);
    let right_hit = nearest_index(right, bound);
    let Some(cut) = left_hit.into_iter().chain(right_hit).min() else {
        return Ok(untouched(table));
    };

    let frames = table.row_count();
    tracing::info!(
        cut,
        frames,
        bound,
        left_fired,
        right_fired,
        ?left_hit,
        ?right_hit,
        "Trimmed trailing knee outliers"
    );
    if cut == 0 {
        tracing::warn!(bound, "Outlier trim removed every frame");
    }

    Ok(TrimOutcome {
        table: table.head(cut),
        was_trimmed: true,
        cut_index: Some(cut),
    })
}

/// Largest non-NaN sample.
fn peak(values: &[f64]) -> Option<f64> {
    values
        .iter()
        .copied()
        .filter(|v| !v.is_nan())
        .fold(None, |acc: Option<f64>, v| Some(acc.map_or(v, |m| m.max(v))))
}
