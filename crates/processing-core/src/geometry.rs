//! Signed angle between two body segments.
//!
//! For landmarks `top`, `mid`, `bottom` the upper segment is `top - mid` and
//! the lower segment is `mid - bottom`. Each segment's direction is taken as
//! `atan2(y, z)` (angle from the vertical axis) and the joint angle is the
//! difference in degrees. The sign follows atan2's counter-clockwise rule, not
//! a clinical flexion/extension convention. A straight limb reads 0.

use habilo_trajectory_model::MarkerTrack;

/// Joint angle in degrees for a single frame of `(y, z)` positions.
pub fn segment_angle(top: (f64, f64), mid: (f64, f64), bottom: (f64, f64)) -> f64 {
    let upper = (top.0 - mid.0, top.1 - mid.1);
    let lower = (mid.0 - bottom.0, mid.1 - bottom.1);
    (upper.0.atan2(upper.1) - lower.0.atan2(lower.1)).to_degrees()
}

/// Joint angle in degrees for every frame.
///
/// NaN coordinates yield NaN for that frame; nothing is clamped or filtered.
pub fn joint_angle(top: &MarkerTrack<'_>, mid: &MarkerTrack<'_>, bottom: &MarkerTrack<'_>) -> Vec<f64> {
    let frames = top.len().min(mid.len()).min(bottom.len());
    (0..frames)
        .map(|i| segment_angle(top.point(i), mid.point(i), bottom.point(i)))
        .collect()
}
