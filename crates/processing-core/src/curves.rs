//! Curve bundle: everything the figures need, computed in one pass.

use habilo_trajectory_model::{column_key, Axis, Segment, Side, TableError, TrajectoryTable};

use crate::joints::{joints_both_sides, BilateralAngles, Joint};

/// Time axis, hip and knee angles for both sides, and spine height.
///
/// All series have the same length as the source table.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveBundle {
    pub time: Vec<f64>,
    pub hip: BilateralAngles,
    pub knee: BilateralAngles,
    pub spine_height: Vec<f64>,
}

impl CurveBundle {
    /// Number of frames.
    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    pub fn joint(&self, joint: Joint) -> &BilateralAngles {
        match joint {
            Joint::Hip => &self.hip,
            Joint::Knee => &self.knee,
        }
    }
}

/// Build the curve bundle for a table.
pub fn build_curves(table: &TrajectoryTable) -> Result<CurveBundle, TableError> {
    let hip = joints_both_sides(table, Joint::Hip.chain())?;
    let knee = joints_both_sides(table, Joint::Knee.chain())?;
    let spine_height = table
        .column(&column_key(Side::Left, Segment::Spine, Axis::Y))?
        .to_vec();
    let time = table.time()?.to_vec();

    let frames = table.row_count();
    let series = [
        ("time", time.len()),
        ("hip left", hip.left.len()),
        ("hip right", hip.right.len()),
        ("knee left", knee.left.len()),
        ("knee right", knee.right.len()),
        ("spine height", spine_height.len()),
    ];
    if let Some((name, len)) = series.iter().find(|(_, len)| *len != frames) {
        return Err(TableError::malformed(format!(
            "{name} series has {len} samples, table has {frames} rows"
        )));
    }

    tracing::debug!(frames, "Built joint-angle curves");

    Ok(CurveBundle {
        time,
        hip,
        knee,
        spine_height,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use habilo_trajectory_model::{Column, TIME_COLUMN};

    /// Well-formed table of `frames` rows with a slowly bending right knee.
    fn walking_table(frames: usize) -> TrajectoryTable {
        let t: Vec<f64> = (0..frames).map(|i| i as f64 * 0.01).collect();
        let constant = |v: f64| vec![v; frames];

        TrajectoryTable::new(vec![
            Column::new(TIME_COLUMN, t),
            Column::new("Spine_Y [cm]", constant(0.5)),
            Column::new("Spine_Z [cm]", constant(150.0)),
            Column::new("HipLeft_Y [cm]", constant(0.0)),
            Column::new("HipLeft_Z [cm]", constant(100.0)),
            Column::new("KneeLeft_Y [cm]", constant(0.0)),
            Column::new("KneeLeft_Z [cm]", constant(50.0)),
            Column::new("AnkleLeft_Y [cm]", constant(0.0)),
            Column::new("AnkleLeft_Z [cm]", constant(0.0)),
            Column::new("HipRight_Y [cm]", constant(0.0)),
            Column::new("HipRight_Z [cm]", constant(100.0)),
            Column::new("KneeRight_Y [cm]", constant(0.0)),
            Column::new("KneeRight_Z [cm]", constant(50.0)),
            Column::new("AnkleRight_Y [cm]", (0..frames).map(|i| i as f64).collect()),
            Column::new("AnkleRight_Z [cm]", constant(0.0)),
        ])
        .unwrap()
    }

    #[test]
    fn test_every_series_has_table_length() {
        for frames in [0, 1, 7] {
            let bundle = build_curves(&walking_table(frames)).unwrap();
            assert_eq!(bundle.len(), frames);
            assert_eq!(bundle.hip.left.len(), frames);
            assert_eq!(bundle.hip.right.len(), frames);
            assert_eq!(bundle.knee.left.len(), frames);
            assert_eq!(bundle.knee.right.len(), frames);
            assert_eq!(bundle.spine_height.len(), frames);
        }
    }

    #[test]
    fn test_spine_height_is_raw_spine_y() {
        let bundle = build_curves(&walking_table(3)).unwrap();
        assert_eq!(bundle.spine_height, vec![0.5; 3]);
        assert_eq!(bundle.time, vec![0.0, 0.01, 0.02]);
    }

    #[test]
    fn test_right_knee_bends_over_time() {
        let bundle = build_curves(&walking_table(5)).unwrap();
        let knee = bundle.joint(Joint::Knee);
        assert!(knee.left.iter().all(|a| a.abs() < 1e-9));
        assert!(knee.right[0].abs() < 1e-9);
        for pair in knee.right.windows(2) {
            assert!(pair[1] > pair[0]);
        }
    }

    #[test]
    fn test_missing_time_column() {
        let table = walking_table(2);
        let columns = table
            .columns()
            .iter()
            .filter(|c| c.name != TIME_COLUMN)
            .cloned()
            .collect();
        let table = TrajectoryTable::new(columns).unwrap();
        assert!(matches!(
            build_curves(&table),
            Err(TableError::MissingColumn { .. })
        ));
    }
}
