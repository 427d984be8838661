//! Joint-angle extraction from a trajectory table.

use habilo_trajectory_model::{Segment, Side, TableError, TrajectoryTable};

use crate::geometry::joint_angle;

/// Joints tracked by the goniometry pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Joint {
    /// Angle at the hip between trunk and thigh.
    Hip,
    /// Angle at the knee between thigh and shank.
    Knee,
}

impl Joint {
    /// Landmarks `(top, mid, bottom)` whose segments meet at this joint.
    pub fn chain(self) -> [Segment; 3] {
        match self {
            Joint::Hip => [Segment::Spine, Segment::Hip, Segment::Knee],
            Joint::Knee => [Segment::Hip, Segment::Knee, Segment::Ankle],
        }
    }
}

/// One angle sequence per body side.
#[derive(Debug, Clone, PartialEq)]
pub struct BilateralAngles {
    pub left: Vec<f64>,
    pub right: Vec<f64>,
}

impl BilateralAngles {
    pub fn side(&self, side: Side) -> &[f64] {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }
}

/// Angle sequence of a three-landmark chain on one side.
pub fn joint_for_side(
    table: &TrajectoryTable,
    chain: [Segment; 3],
    side: Side,
) -> Result<Vec<f64>, TableError> {
    let [top, mid, bottom] = chain;
    let top = table.marker(side, top)?;
    let mid = table.marker(side, mid)?;
    let bottom = table.marker(side, bottom)?;
    Ok(joint_angle(&top, &mid, &bottom))
}

/// Angle sequences of a chain for both sides, left first.
///
/// A missing column on either side fails the whole extraction.
pub fn joints_both_sides(
    table: &TrajectoryTable,
    chain: [Segment; 3],
) -> Result<BilateralAngles, TableError> {
    Ok(BilateralAngles {
        left: joint_for_side(table, chain, Side::Left)?,
        right: joint_for_side(table, chain, Side::Right)?,
    })
}
