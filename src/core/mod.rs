//! Core types for the scan-matching library.
//!
//! Coordinate conventions follow ROS REP-103:
//! - **X-axis**: Forward (positive ahead of robot)
//! - **Y-axis**: Left (positive to robot's left)
//! - **Theta**: Counter-clockwise rotation from +X axis (radians)
//!
//! ## Types
//!
//! - [`Pose2D`]: Robot position (x, y) and orientation (theta)
//! - [`Point2D`]: Continuous 2D coordinates (sensor frame or map frame)
//! - [`GridCoord`]: Integer cell indices for occupancy grid access

mod point;
mod pose;

pub use point::{GridCoord, Point2D};
pub use pose::{normalize_angle, Pose2D};
