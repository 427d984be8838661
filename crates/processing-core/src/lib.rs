//! Habilo Processing Core: goniometry
//!
//! Derives joint-angle curves from recorded marker trajectories:
//! - **Geometry:** Signed angle between the two segments meeting at a joint
//! - **Joints:** Hip (Spine-Hip-Knee) and knee (Hip-Knee-Ankle) angles per side
//! - **Curves:** The bundle of time axis, joint angles, and spine height
//! - **Trim:** Nearest-timestamp cuts and trailing-outlier truncation
//!
//! This crate is pure computation: no I/O and no rendering.
//! All inputs are data; all outputs are data.

pub mod curves;
pub mod geometry;
pub mod joints;
pub mod trim;

pub use curves::{build_curves, CurveBundle};
pub use joints::{BilateralAngles, Joint};
pub use trim::{auto_trim_outliers, cut_range, nearest_index, KneeCheck, TrimOutcome};
