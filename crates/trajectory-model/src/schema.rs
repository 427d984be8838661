//! Column naming contract of the marker table.
//!
//! Every landmark coordinate lives in a column named
//! `{Segment}{Side}_{Axis} [cm]`. The spine marker sits on the body midline
//! and drops the side: `Spine_{Axis} [cm]`.

use std::fmt;

/// Name of the frame timestamp column.
pub const TIME_COLUMN: &str = "Time [sec]";

/// Unit suffix shared by every coordinate column.
const COORDINATE_UNIT: &str = " [cm]";

/// A tracked anatomical landmark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Segment {
    Spine,
    Hip,
    Knee,
    Ankle,
}

/// Body side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

/// Coordinate axis. `Y` is the horizontal (sagittal) axis, `Z` the vertical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Y,
    Z,
}

impl Segment {
    /// All segments, top to bottom.
    pub const ALL: [Segment; 4] = [Segment::Spine, Segment::Hip, Segment::Knee, Segment::Ankle];

    pub fn as_str(self) -> &'static str {
        match self {
            Segment::Spine => "Spine",
            Segment::Hip => "Hip",
            Segment::Knee => "Knee",
            Segment::Ankle => "Ankle",
        }
    }

    /// Whether the segment has a left and a right marker.
    pub fn is_lateral(self) -> bool {
        !matches!(self, Segment::Spine)
    }
}

impl Side {
    /// Sides in the order joint pairs are reported.
    pub const BOTH: [Side; 2] = [Side::Left, Side::Right];

    pub fn as_str(self) -> &'static str {
        match self {
            Side::Left => "Left",
            Side::Right => "Right",
        }
    }
}

impl Axis {
    pub const BOTH: [Axis; 2] = [Axis::Y, Axis::Z];

    pub fn as_str(self) -> &'static str {
        match self {
            Axis::Y => "Y",
            Axis::Z => "Z",
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Column key for one coordinate of one landmark.
///
/// `side` is ignored for [`Segment::Spine`].
pub fn column_key(side: Side, segment: Segment, axis: Axis) -> String {
    if segment.is_lateral() {
        format!("{segment}{side}_{axis}{COORDINATE_UNIT}")
    } else {
        format!("{segment}_{axis}{COORDINATE_UNIT}")
    }
}

/// Every column a complete recording must provide, time first.
pub fn required_columns() -> Vec<String> {
    let mut columns = vec![TIME_COLUMN.to_string()];
    for segment in Segment::ALL {
        let sides: &[Side] = if segment.is_lateral() {
            &Side::BOTH[..]
        } else {
            &Side::BOTH[..1]
        };
        for &side in sides {
            for axis in Axis::BOTH {
                columns.push(column_key(side, segment, axis));
            }
        }
    }
    columns
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spine_key_has_no_side() {
        assert_eq!(column_key(Side::Left, Segment::Spine, Axis::Y), "Spine_Y [cm]");
        assert_eq!(column_key(Side::Right, Segment::Spine, Axis::Z), "Spine_Z [cm]");
    }

    #[test]
    fn test_lateral_keys() {
        assert_eq!(column_key(Side::Left, Segment::Hip, Axis::Z), "HipLeft_Z [cm]");
        assert_eq!(column_key(Side::Right, Segment::Ankle, Axis::Y), "AnkleRight_Y [cm]");
    }

    #[test]
    fn test_required_columns() {
        let columns = required_columns();
        assert_eq!(columns.len(), 15);
        assert_eq!(columns[0], TIME_COLUMN);
        assert!(columns.contains(&"Spine_Z [cm]".to_string()));
        assert!(columns.contains(&"KneeRight_Z [cm]".to_string()));
        assert!(!columns.iter().any(|c| c.starts_with("SpineLeft")));
    }
}
