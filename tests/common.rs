//! Shared fixtures for scan-matching integration tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use drishti_match::{GridCoord, MapQuery, Matrix3, Point2D, Pose2D, ProbabilityGrid};

/// Grid with every cell at the same probability. Cell length 1.0, so map
/// and world coordinates coincide.
pub fn uniform_grid(width: usize, height: usize, probability: f32) -> ProbabilityGrid {
    let mut grid = ProbabilityGrid::new(width, height, 1.0, Point2D::ZERO).unwrap();
    grid.fill(probability);
    grid
}

/// 24x24 grid with two perpendicular occupied walls: a vertical wall at
/// x = 16 and a horizontal wall at y = 16, both spanning cells 2..=21.
pub fn cross_wall_grid() -> ProbabilityGrid {
    let mut grid = ProbabilityGrid::new(24, 24, 1.0, Point2D::ZERO).unwrap();
    for i in 2..=21 {
        grid.set_probability(GridCoord::new(16, i), 1.0);
        grid.set_probability(GridCoord::new(i, 16), 1.0);
    }
    grid
}

/// Sensor-frame scan of the cross-wall grid as seen from `true_pose`
/// (theta 0): five hits on each wall, away from the wall intersection.
pub fn cross_wall_scan(true_pose: Pose2D) -> Vec<Point2D> {
    let mut points = Vec::new();
    for i in (4..=12).step_by(2) {
        // Vertical wall at map x = 16
        points.push(Point2D::new(16.0 - true_pose.x, i as f32 - true_pose.y));
        // Horizontal wall at map y = 16
        points.push(Point2D::new(i as f32 - true_pose.x, 16.0 - true_pose.y));
    }
    points
}

/// Assert a 3x3 matrix is symmetric within tolerance.
pub fn assert_symmetric(m: &Matrix3, epsilon: f32) {
    for i in 0..3 {
        for j in 0..3 {
            assert!(
                (m[i][j] - m[j][i]).abs() <= epsilon,
                "matrix not symmetric at ({}, {}): {} vs {}",
                i,
                j,
                m[i][j],
                m[j][i]
            );
        }
    }
}

/// Assert a symmetric 3x3 matrix is positive semi-definite within
/// tolerance, via Sylvester's criterion on leading principal minors.
pub fn assert_positive_semidefinite(m: &Matrix3, epsilon: f32) {
    let m1 = m[0][0];
    let m2 = m[0][0] * m[1][1] - m[0][1] * m[1][0];
    let m3 = m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
        - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
        + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0]);

    assert!(m1 >= -epsilon, "leading minor 1 negative: {}", m1);
    assert!(m2 >= -epsilon, "leading minor 2 negative: {}", m2);
    assert!(m3 >= -epsilon, "leading minor 3 negative: {}", m3);
}

/// Grid handle with interior mutability, for exercising cache staleness:
/// lets a test mutate the map while a field still holds the binding.
#[derive(Clone)]
pub struct SharedGrid(pub Rc<RefCell<ProbabilityGrid>>);

impl SharedGrid {
    pub fn new(grid: ProbabilityGrid) -> Self {
        Self(Rc::new(RefCell::new(grid)))
    }

    pub fn set_probability(&self, coord: GridCoord, probability: f32) {
        self.0.borrow_mut().set_probability(coord, probability);
    }
}

impl MapQuery for SharedGrid {
    fn probability(&self, index: usize) -> f32 {
        self.0.borrow().probability(index)
    }

    fn probability_at(&self, x: i32, y: i32) -> f32 {
        self.0.borrow().probability_at(x, y)
    }

    fn is_out_of_bounds(&self, point: Point2D) -> bool {
        self.0.borrow().is_out_of_bounds(point)
    }

    fn width(&self) -> usize {
        self.0.borrow().width()
    }

    fn height(&self) -> usize {
        self.0.borrow().height()
    }

    fn cell_length(&self) -> f32 {
        self.0.borrow().cell_length()
    }

    fn obstacle_threshold(&self) -> f32 {
        self.0.borrow().obstacle_threshold()
    }

    fn world_to_map_point(&self, point: Point2D) -> Point2D {
        self.0.borrow().world_to_map_point(point)
    }

    fn map_to_world_point(&self, point: Point2D) -> Point2D {
        self.0.borrow().map_to_world_point(point)
    }

    fn world_to_map_pose(&self, pose: Pose2D) -> Pose2D {
        self.0.borrow().world_to_map_pose(pose)
    }

    fn map_to_world_pose(&self, pose: Pose2D) -> Pose2D {
        self.0.borrow().map_to_world_pose(pose)
    }
}
