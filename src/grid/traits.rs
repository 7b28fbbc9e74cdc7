//! Read-side capability trait for occupancy maps.

use crate::core::{Point2D, Pose2D};

/// Read-only occupancy map queries consumed by the matcher.
///
/// The matcher never mutates the map and performs no calibration of its
/// own: coordinate transforms are delegated verbatim to the implementor.
/// Probabilities must lie in [0, 1].
///
/// Implementing this trait on a custom map type (multi-layer grid, mmap'd
/// snapshot, shared handle) is the intended extension point; the bundled
/// [`ProbabilityGrid`](super::ProbabilityGrid) is a minimal flat-array binding.
pub trait MapQuery {
    /// Occupancy probability of the cell at a row-major flat index.
    ///
    /// The index must be in range; implementors may panic otherwise.
    /// The matcher only issues indices it has bounds-checked through
    /// [`is_out_of_bounds`](Self::is_out_of_bounds).
    fn probability(&self, index: usize) -> f32;

    /// Occupancy probability of the cell at integer coordinates.
    ///
    /// Returns 0.0 for out-of-range coordinates.
    fn probability_at(&self, x: i32, y: i32) -> f32;

    /// Whether a continuous map coordinate falls outside the interpolatable
    /// area. The check must leave room for the full 2x2 bilinear footprint
    /// at the lower-left floor of `point`.
    fn is_out_of_bounds(&self, point: Point2D) -> bool;

    /// Grid width in cells (row-major stride).
    fn width(&self) -> usize;

    /// Grid height in cells.
    fn height(&self) -> usize;

    /// Total cell count.
    fn cell_count(&self) -> usize {
        self.width() * self.height()
    }

    /// Side length of one cell in world units (meters).
    fn cell_length(&self) -> f32;

    /// Probability above which a cell is considered an obstacle.
    fn obstacle_threshold(&self) -> f32;

    /// Convert a world-frame point to continuous map coordinates.
    fn world_to_map_point(&self, point: Point2D) -> Point2D;

    /// Convert continuous map coordinates to a world-frame point.
    fn map_to_world_point(&self, point: Point2D) -> Point2D;

    /// Convert a world-frame pose to a map-frame pose (theta unchanged).
    fn world_to_map_pose(&self, pose: Pose2D) -> Pose2D;

    /// Convert a map-frame pose to a world-frame pose (theta unchanged).
    fn map_to_world_pose(&self, pose: Pose2D) -> Pose2D;
}

impl<M: MapQuery + ?Sized> MapQuery for &M {
    fn probability(&self, index: usize) -> f32 {
        (**self).probability(index)
    }

    fn probability_at(&self, x: i32, y: i32) -> f32 {
        (**self).probability_at(x, y)
    }

    fn is_out_of_bounds(&self, point: Point2D) -> bool {
        (**self).is_out_of_bounds(point)
    }

    fn width(&self) -> usize {
        (**self).width()
    }

    fn height(&self) -> usize {
        (**self).height()
    }

    fn cell_length(&self) -> f32 {
        (**self).cell_length()
    }

    fn obstacle_threshold(&self) -> f32 {
        (**self).obstacle_threshold()
    }

    fn world_to_map_point(&self, point: Point2D) -> Point2D {
        (**self).world_to_map_point(point)
    }

    fn map_to_world_point(&self, point: Point2D) -> Point2D {
        (**self).map_to_world_point(point)
    }

    fn world_to_map_pose(&self, pose: Pose2D) -> Pose2D {
        (**self).world_to_map_pose(pose)
    }

    fn map_to_world_pose(&self, pose: Pose2D) -> Pose2D {
        (**self).map_to_world_pose(pose)
    }
}
