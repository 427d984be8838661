//! Delimited-text ingest for trajectory tables.
//!
//! The capture software exports one header row of column names followed by
//! one row per frame. Separator and decimal point vary between exports and
//! are passed in through [`ReadOptions`].

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::TableError;
use crate::table::{Column, TrajectoryTable};

/// Field separator and decimal-point conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadOptions {
    pub delimiter: u8,
    pub decimal_separator: char,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            delimiter: b';',
            decimal_separator: '.',
        }
    }
}

/// Read a trajectory table from a file.
pub fn read_table(path: impl AsRef<Path>, options: &ReadOptions) -> Result<TrajectoryTable, TableError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| TableError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    let table = parse_from(file, options, path)?;
    tracing::debug!(
        path = %path.display(),
        rows = table.row_count(),
        columns = table.columns().len(),
        "Loaded trajectory table"
    );
    Ok(table)
}

/// Parse a trajectory table from any reader.
pub fn parse_table<R: Read>(reader: R, options: &ReadOptions) -> Result<TrajectoryTable, TableError> {
    parse_from(reader, options, Path::new("<memory>"))
}

fn parse_from<R: Read>(
    reader: R,
    options: &ReadOptions,
    origin: &Path,
) -> Result<TrajectoryTable, TableError> {
    let csv_error = |source: csv::Error| TableError::Csv {
        path: origin.to_path_buf(),
        source,
    };

    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(options.delimiter)
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    // Exports often end every line with a separator; the resulting unnamed
    // header cell carries no data.
    let named: Vec<(usize, String)> = csv_reader
        .headers()
        .map_err(csv_error)?
        .iter()
        .enumerate()
        .filter(|(_, name)| !name.is_empty())
        .map(|(i, name)| (i, name.to_string()))
        .collect();

    let mut values: Vec<Vec<f64>> = vec![Vec::new(); named.len()];

    for (row, record) in csv_reader.records().enumerate() {
        let record = record.map_err(csv_error)?;
        for ((field, name), column) in named.iter().zip(values.iter_mut()) {
            let raw = record.get(*field).unwrap_or("");
            let value = parse_field(raw, options.decimal_separator).ok_or_else(|| {
                TableError::InvalidValue {
                    row,
                    column: name.clone(),
                    value: raw.to_string(),
                }
            })?;
            column.push(value);
        }
    }

    let columns = named
        .into_iter()
        .zip(values)
        .map(|((_, name), values)| Column::new(name, values))
        .collect();
    TrajectoryTable::new(columns)
}

/// Parse one numeric field. Empty fields are missing samples (NaN).
fn parse_field(raw: &str, decimal_separator: char) -> Option<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Some(f64::NAN);
    }
    if decimal_separator == '.' {
        raw.parse().ok()
    } else {
        raw.replace(decimal_separator, ".").parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::TIME_COLUMN;

    #[test]
    fn test_parse_semicolon_table() {
        let text = "Time [sec];Spine_Y [cm];Spine_Z [cm]\n0.00;1.5;100.0\n0.01;1.6;100.2\n";
        let table = parse_table(text.as_bytes(), &ReadOptions::default()).unwrap();
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.time().unwrap(), &[0.0, 0.01]);
        assert_eq!(table.column("Spine_Z [cm]").unwrap(), &[100.0, 100.2]);
    }

    #[test]
    fn test_decimal_comma() {
        let text = "Time [sec];Spine_Y [cm]\n0,5;12,25\n";
        let options = ReadOptions {
            delimiter: b';',
            decimal_separator: ',',
        };
        let table = parse_table(text.as_bytes(), &options).unwrap();
        assert_eq!(table.time().unwrap(), &[0.5]);
        assert_eq!(table.column("Spine_Y [cm]").unwrap(), &[12.25]);
    }

    #[test]
    fn test_trailing_separator_and_empty_field() {
        let text = "Time [sec];Spine_Y [cm];\n0.0;;\n0.1;2.0;\n";
        let table = parse_table(text.as_bytes(), &ReadOptions::default()).unwrap();
        assert_eq!(table.columns().len(), 2);
        let spine = table.column("Spine_Y [cm]").unwrap();
        assert!(spine[0].is_nan());
        assert_eq!(spine[1], 2.0);
    }

    #[test]
    fn test_invalid_value_reports_location() {
        let text = "Time [sec];Spine_Y [cm]\n0.0;1.0\n0.1;oops\n";
        match parse_table(text.as_bytes(), &ReadOptions::default()) {
            Err(TableError::InvalidValue { row, column, value }) => {
                assert_eq!(row, 1);
                assert_eq!(column, "Spine_Y [cm]");
                assert_eq!(value, "oops");
            }
            other => panic!("expected InvalidValue, got {other:?}"),
        }
    }

    #[test]
    fn test_header_only_is_empty_table() {
        let text = format!("{TIME_COLUMN};Spine_Y [cm]\n");
        let table = parse_table(text.as_bytes(), &ReadOptions::default()).unwrap();
        assert!(table.is_empty());
        assert!(table.has_column("Spine_Y [cm]"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let path = std::env::temp_dir().join("habilo_no_such_recording.csv");
        let _ = std::fs::remove_file(&path);
        assert!(matches!(
            read_table(&path, &ReadOptions::default()),
            Err(TableError::Io { .. })
        ));
    }

    #[test]
    fn test_read_table_from_disk() {
        let path = std::env::temp_dir().join("habilo_test_read_table.csv");
        std::fs::write(&path, "Time [sec],Spine_Y [cm]\n0.0,3.0\n").unwrap();
        let options = ReadOptions {
            delimiter: b',',
            decimal_separator: '.',
        };
        let table = read_table(&path, &options).unwrap();
        assert_eq!(table.row_count(), 1);
        std::fs::remove_file(&path).ok();
    }
}
