//! Coordinate types.

use serde::{Deserialize, Serialize};

/// Continuous 2D point.
///
/// Used both for scan points in the sensor frame and for continuous
/// (sub-cell) map coordinates; the surrounding API makes the frame explicit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point2D {
    /// X coordinate.
    pub x: f32,
    /// Y coordinate.
    pub y: f32,
}

impl Point2D {
    /// Origin point.
    pub const ZERO: Point2D = Point2D { x: 0.0, y: 0.0 };

    /// Create a new point.
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Integer cell coordinates into an occupancy grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridCoord {
    /// Cell column.
    pub x: i32,
    /// Cell row.
    pub y: i32,
}

impl GridCoord {
    /// Create a new grid coordinate.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}
