//! Frame-aligned trajectory table.

use std::collections::HashMap;
use std::ops::Range;

use crate::error::TableError;
use crate::schema::{column_key, required_columns, Axis, Segment, Side, TIME_COLUMN};

/// One named numeric column.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub values: Vec<f64>,
}

impl Column {
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }
}

/// Recorded marker trajectories, one row per captured frame.
///
/// Every column has the same length, so row `i` of any column refers to the
/// same instant. Column order follows the source file.
#[derive(Debug, Clone, PartialEq)]
pub struct TrajectoryTable {
    columns: Vec<Column>,
    index: HashMap<String, usize>,
    rows: usize,
}

/// Borrowed Y/Z coordinate pair of one landmark over all frames.
#[derive(Debug, Clone, Copy)]
pub struct MarkerTrack<'a> {
    /// Horizontal coordinate.
    pub y: &'a [f64],
    /// Vertical coordinate.
    pub z: &'a [f64],
}

impl<'a> MarkerTrack<'a> {
    pub fn new(y: &'a [f64], z: &'a [f64]) -> Self {
        Self { y, z }
    }

    pub fn len(&self) -> usize {
        self.y.len().min(self.z.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `(y, z)` at frame `i`.
    pub fn point(&self, i: usize) -> (f64, f64) {
        (self.y[i], self.z[i])
    }
}

impl TrajectoryTable {
    /// Build a table, rejecting ragged or duplicate columns.
    pub fn new(columns: Vec<Column>) -> Result<Self, TableError> {
        let rows = columns.first().map(|c| c.values.len()).unwrap_or(0);
        let mut index = HashMap::with_capacity(columns.len());

        for (i, column) in columns.iter().enumerate() {
            if column.values.len() != rows {
                return Err(TableError::malformed(format!(
                    "column {:?} has {} rows, expected {}",
                    column.name,
                    column.values.len(),
                    rows
                )));
            }
            if index.insert(column.name.clone(), i).is_some() {
                return Err(TableError::malformed(format!(
                    "duplicate column {:?}",
                    column.name
                )));
            }
        }

        Ok(Self {
            columns,
            index,
            rows,
        })
    }

    /// Number of frames.
    pub fn row_count(&self) -> usize {
        self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Values of a named column.
    pub fn column(&self, name: &str) -> Result<&[f64], TableError> {
        self.index
            .get(name)
            .map(|&i| self.columns[i].values.as_slice())
            .ok_or_else(|| TableError::missing_column(name))
    }

    /// The `Time [sec]` column.
    pub fn time(&self) -> Result<&[f64], TableError> {
        self.column(TIME_COLUMN)
    }

    /// Y/Z columns of one landmark.
    pub fn marker(&self, side: Side, segment: Segment) -> Result<MarkerTrack<'_>, TableError> {
        let y = self.column(&column_key(side, segment, Axis::Y))?;
        let z = self.column(&column_key(side, segment, Axis::Z))?;
        Ok(MarkerTrack::new(y, z))
    }

    /// Schema columns absent from this table, in schema order.
    pub fn missing_columns(&self) -> Vec<String> {
        required_columns()
            .into_iter()
            .filter(|name| !self.has_column(name))
            .collect()
    }

    /// First and last timestamp, if the table has a time column and rows.
    pub fn time_span(&self) -> Option<(f64, f64)> {
        let time = self.time().ok()?;
        Some((*time.first()?, *time.last()?))
    }

    /// Copy of the rows in `range`, clamped to the table length.
    pub fn slice_rows(&self, range: Range<usize>) -> Self {
        let end = range.end.min(self.rows);
        let start = range.start.min(end);

        let columns = self
            .columns
            .iter()
            .map(|c| Column::new(c.name.clone(), c.values[start..end].to_vec()))
            .collect();

        Self {
            columns,
            index: self.index.clone(),
            rows: end - start,
        }
    }

    /// Copy of the first `n` rows.
    pub fn head(&self, n: usize) -> Self {
        self.slice_rows(0..n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sample_table() -> TrajectoryTable {
        TrajectoryTable::new(vec![
            Column::new(TIME_COLUMN, vec![0.0, 0.1, 0.2, 0.3]),
            Column::new("HipLeft_Y [cm]", vec![1.0, 2.0, 3.0, 4.0]),
            Column::new("HipLeft_Z [cm]", vec![90.0, 91.0, 92.0, 93.0]),
        ])
        .unwrap()
    }

    #[test]
    fn test_ragged_columns_are_malformed() {
        let err = TrajectoryTable::new(vec![
            Column::new(TIME_COLUMN, vec![0.0, 0.1]),
            Column::new("Spine_Y [cm]", vec![1.0]),
        ])
        .unwrap_err();
        assert!(matches!(err, TableError::MalformedTable { .. }));
    }

    #[test]
    fn test_duplicate_columns_are_malformed() {
        let err = TrajectoryTable::new(vec![
            Column::new(TIME_COLUMN, vec![0.0]),
            Column::new(TIME_COLUMN, vec![1.0]),
        ])
        .unwrap_err();
        assert!(matches!(err, TableError::MalformedTable { .. }));
    }

    #[test]
    fn test_missing_column_names_the_key() {
        let table = sample_table();
        match table.column("KneeLeft_Y [cm]") {
            Err(TableError::MissingColumn { column }) => assert_eq!(column, "KneeLeft_Y [cm]"),
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn test_marker_pairs_y_and_z() {
        let table = sample_table();
        let hip = table.marker(Side::Left, Segment::Hip).unwrap();
        assert_eq!(hip.len(), 4);
        assert_eq!(hip.point(2), (3.0, 92.0));
        assert!(table.marker(Side::Right, Segment::Hip).is_err());
    }

    #[test]
    fn test_slice_rows_keeps_all_columns() {
        let table = sample_table();
        let cut = table.slice_rows(1..3);
        assert_eq!(cut.row_count(), 2);
        assert_eq!(cut.time().unwrap(), &[0.1, 0.2]);
        assert_eq!(cut.column("HipLeft_Z [cm]").unwrap(), &[91.0, 92.0]);
        assert_eq!(cut.column_names().count(), 3);
    }

    #[test]
    fn test_time_span_and_missing_columns() {
        let table = sample_table();
        assert_eq!(table.time_span(), Some((0.0, 0.3)));
        let missing = table.missing_columns();
        assert_eq!(missing.len(), 12);
        assert!(!missing.contains(&"HipLeft_Y [cm]".to_string()));

        assert_eq!(table.head(0).time_span(), None);
    }

    proptest! {
        #[test]
        fn prop_slice_rows_is_clamped(rows in 0usize..20, start in 0usize..30, end in 0usize..30) {
            let table = TrajectoryTable::new(vec![
                Column::new(TIME_COLUMN, (0..rows).map(|i| i as f64).collect()),
            ]).unwrap();
            let cut = table.slice_rows(start..end);
            let expected = end.min(rows).saturating_sub(start.min(end.min(rows)));
            prop_assert_eq!(cut.row_count(), expected);
            prop_assert_eq!(cut.time().unwrap().len(), expected);
        }
    }
}
