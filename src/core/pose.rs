//! 2D pose representation.

use serde::{Deserialize, Serialize};

use super::Point2D;

/// Robot pose: position (x, y) and orientation theta.
///
/// Units are context-dependent: the matcher operates in grid-cell units,
/// callers typically hold world-unit poses and convert through the map's
/// coordinate transforms. Theta is in radians, CCW positive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Pose2D {
    /// X position.
    pub x: f32,
    /// Y position.
    pub y: f32,
    /// Orientation in radians.
    pub theta: f32,
}

impl Pose2D {
    /// Create a new pose.
    pub fn new(x: f32, y: f32, theta: f32) -> Self {
        Self { x, y, theta }
    }

    /// Transform a point from this pose's local frame to the parent frame.
    ///
    /// Rotates by theta, then translates by (x, y).
    pub fn transform_point(&self, point: Point2D) -> Point2D {
        let (sin_t, cos_t) = self.theta.sin_cos();
        Point2D::new(
            self.x + point.x * cos_t - point.y * sin_t,
            self.y + point.x * sin_t + point.y * cos_t,
        )
    }

    /// Euclidean distance between the positions of two poses.
    pub fn distance(&self, other: &Pose2D) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Normalize an angle to the range (-PI, PI].
pub fn normalize_angle(angle: f32) -> f32 {
    let mut a = angle;
    while a > std::f32::consts::PI {
        a -= 2.0 * std::f32::consts::PI;
    }
    while a <= -std::f32::consts::PI {
        a += 2.0 * std::f32::consts::PI;
    }
    a
}
