//! # DrishtiMatch
//!
//! Gauss-Newton scan-matching core for occupancy-grid SLAM.
//!
//! ## Overview
//!
//! Given a probabilistic occupancy grid and a 2D laser scan, this crate
//! provides the per-iteration pieces of scan-to-map pose refinement:
//!
//! - **Bilinear interpolation** of occupancy probability and its analytic
//!   gradient at sub-cell coordinates, with per-epoch caching of cell reads
//! - **Gauss-Newton linearization**: the 3x3 approximate Hessian and
//!   3-vector gradient accumulated over all scan points
//! - **Sigma-point covariance**: local pose uncertainty around a converged
//!   pose, with grid-to-world rescaling
//!
//! Map storage and probability updates, scan preprocessing, and the outer
//! optimization loop all live outside this crate; maps come in through the
//! read-only [`MapQuery`] trait.
//!
//! ## Quick Start
//!
//! ```rust
//! use drishti_match::{
//!     GridCoord, OccupancyField, Point2D, Pose2D, ProbabilityGrid, solve_update,
//! };
//!
//! // Build a map (normally maintained by the mapping layer):
//! // a vertical wall at x = 32 and a horizontal wall at y = 44
//! let mut grid = ProbabilityGrid::new(64, 64, 0.05, Point2D::ZERO).unwrap();
//! for i in 10..54 {
//!     grid.set_probability(GridCoord::new(32, i), 1.0);
//!     grid.set_probability(GridCoord::new(i, 44), 1.0);
//! }
//!
//! let mut field = OccupancyField::new(&grid);
//! let scan = vec![
//!     Point2D::new(12.0, -4.0),
//!     Point2D::new(12.0, 4.0),
//!     Point2D::new(-4.0, 14.0),
//!     Point2D::new(4.0, 14.0),
//! ];
//! let mut pose = Pose2D::new(19.7, 30.0, 0.0); // map coordinates
//!
//! // A few Gauss-Newton iterations, bounded by the caller
//! for _ in 0..5 {
//!     field.reset_cache();
//!     let hg = field.hessian_and_gradient(pose, &scan).unwrap();
//!     let Some(delta) = solve_update(&hg) else { break };
//!     pose.x += delta[0];
//!     pose.y += delta[1];
//!     pose.theta += delta[2];
//! }
//! ```
//!
//! ## Coordinate System
//!
//! ROS REP-103 convention: X forward, Y left, theta CCW-positive radians.
//! The matcher works in continuous map coordinates (grid-cell units);
//! [`MapQuery`] carries the world transforms.

#![warn(missing_docs)]

// Core types
pub mod core;

// Map access
pub mod grid;

// Scan-matching inner loop
pub mod matching;

// Re-export commonly used types
pub use self::core::{normalize_angle, GridCoord, Point2D, Pose2D};

pub use grid::{GridError, MapQuery, ProbabilityGrid};

pub use matching::{
    scale_covariance_to_world, solve_update, CacheStrategy, EpochCache, HessianGradient,
    MatchError, MatcherConfig, Matrix3, OccupancyField, Vector3,
};
