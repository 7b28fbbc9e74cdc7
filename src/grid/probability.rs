//! Flat-array probability grid.

use thiserror::Error;

use crate::core::{GridCoord, Point2D, Pose2D};

use super::MapQuery;

/// Error constructing a [`ProbabilityGrid`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    /// Grid dimensions must be positive.
    #[error("invalid grid dimensions {width}x{height}")]
    InvalidDimensions {
        /// Requested width in cells.
        width: usize,
        /// Requested height in cells.
        height: usize,
    },

    /// Cell length must be positive and finite.
    #[error("invalid cell length {0}")]
    InvalidCellLength(f32),
}

/// Occupancy probability grid with row-major flat storage.
///
/// A minimal read-side map binding for the matcher: one f32 probability
/// per cell, a world-frame origin at the corner of cell (0, 0), and a
/// uniform cell length. Probability-update policy (log-odds, hit/miss
/// models) lives outside this crate; tests and demos write cells directly
/// through [`set_probability`](Self::set_probability).
#[derive(Clone, Debug)]
pub struct ProbabilityGrid {
    width: usize,
    height: usize,
    cell_length: f32,
    origin: Point2D,
    obstacle_threshold: f32,
    cells: Vec<f32>,
}

impl ProbabilityGrid {
    /// Create a grid with all cells at probability 0.0.
    ///
    /// Fails fast on non-positive dimensions or cell length.
    pub fn new(
        width: usize,
        height: usize,
        cell_length: f32,
        origin: Point2D,
    ) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::InvalidDimensions { width, height });
        }
        if !(cell_length > 0.0) || !cell_length.is_finite() {
            return Err(GridError::InvalidCellLength(cell_length));
        }

        Ok(Self {
            width,
            height,
            cell_length,
            origin,
            obstacle_threshold: 0.5,
            cells: vec![0.0; width * height],
        })
    }

    /// Set the obstacle classification threshold (builder style).
    pub fn with_obstacle_threshold(mut self, threshold: f32) -> Self {
        self.obstacle_threshold = threshold;
        self
    }

    /// World coordinates of the corner of cell (0, 0).
    pub fn origin(&self) -> Point2D {
        self.origin
    }

    /// Set the probability of one cell, clamped to [0, 1].
    ///
    /// Out-of-range coordinates are ignored.
    pub fn set_probability(&mut self, coord: GridCoord, probability: f32) {
        if let Some(index) = self.index_of(coord) {
            self.cells[index] = probability.clamp(0.0, 1.0);
        }
    }

    /// Set every cell to the same probability, clamped to [0, 1].
    pub fn fill(&mut self, probability: f32) {
        let p = probability.clamp(0.0, 1.0);
        self.cells.fill(p);
    }

    /// Row-major flat index for a coordinate, if in range.
    pub fn index_of(&self, coord: GridCoord) -> Option<usize> {
        if coord.x >= 0
            && coord.y >= 0
            && (coord.x as usize) < self.width
            && (coord.y as usize) < self.height
        {
            Some(coord.y as usize * self.width + coord.x as usize)
        } else {
            None
        }
    }
}

impl MapQuery for ProbabilityGrid {
    fn probability(&self, index: usize) -> f32 {
        self.cells[index]
    }

    fn probability_at(&self, x: i32, y: i32) -> f32 {
        match self.index_of(GridCoord::new(x, y)) {
            Some(index) => self.cells[index],
            None => 0.0,
        }
    }

    fn is_out_of_bounds(&self, point: Point2D) -> bool {
        // Leaves room for the 2x2 bilinear footprint at floor(point)
        point.x < 0.0
            || point.y < 0.0
            || point.x > self.width as f32 - 2.0
            || point.y > self.height as f32 - 2.0
    }

    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn cell_length(&self) -> f32 {
        self.cell_length
    }

    fn obstacle_threshold(&self) -> f32 {
        self.obstacle_threshold
    }

    fn world_to_map_point(&self, point: Point2D) -> Point2D {
        Point2D::new(
            (point.x - self.origin.x) / self.cell_length,
            (point.y - self.origin.y) / self.cell_length,
        )
    }

    fn map_to_world_point(&self, point: Point2D) -> Point2D {
        Point2D::new(
            point.x * self.cell_length + self.origin.x,
            point.y * self.cell_length + self.origin.y,
        )
    }

    fn world_to_map_pose(&self, pose: Pose2D) -> Pose2D {
        let p = self.world_to_map_point(Point2D::new(pose.x, pose.y));
        Pose2D::new(p.x, p.y, pose.theta)
    }

    fn map_to_world_pose(&self, pose: Pose2D) -> Pose2D {
        let p = self.map_to_world_point(Point2D::new(pose.x, pose.y));
        Pose2D::new(p.x, p.y, pose.theta)
    }
}
