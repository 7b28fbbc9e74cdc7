//! Gauss-Newton linearization of the scan-to-map alignment problem.

use crate::core::{Point2D, Pose2D};
use crate::grid::MapQuery;

use super::cache::CacheStrategy;
use super::error::MatchError;
use super::field::OccupancyField;
use super::types::{mirror_upper_triangle, HessianGradient, Vector3};

impl<M: MapQuery, C: CacheStrategy> OccupancyField<M, C> {
    /// Build the Gauss-Newton normal equations for one pose candidate.
    ///
    /// For each sensor-frame point: transform into the map frame with the
    /// rigid transform implied by `pose`, sample value and gradient, and
    /// accumulate the gradient `g += J^T r` and the approximate Hessian
    /// `H += J^T J` with residual `r = 1 - M`. The Hessian is mirrored
    /// into a full symmetric matrix after the loop.
    ///
    /// This is the classical first-order curvature approximation against a
    /// smooth occupancy surface; second derivatives are never computed.
    /// The caller owns the iteration loop and applies the solved update
    /// (see [`solve_update`]) to the pose.
    ///
    /// # Errors
    /// [`MatchError::EmptyScan`] if `points` is empty.
    pub fn hessian_and_gradient(
        &mut self,
        pose: Pose2D,
        points: &[Point2D],
    ) -> Result<HessianGradient, MatchError> {
        if points.is_empty() {
            return Err(MatchError::EmptyScan);
        }

        let (sin_t, cos_t) = pose.theta.sin_cos();

        let mut hg = HessianGradient::zero();
        let h = &mut hg.hessian;
        let g = &mut hg.gradient;

        for &p in points {
            let mapped = Point2D::new(
                pose.x + p.x * cos_t - p.y * sin_t,
                pose.y + p.x * sin_t + p.y * cos_t,
            );

            let (value, grad_x, grad_y) = self.interpolate_with_gradient(mapped);
            let residual = 1.0 - value;

            // d(mapped)/dtheta dotted with the map gradient
            let rot_deriv =
                (-sin_t * p.x - cos_t * p.y) * grad_x + (cos_t * p.x - sin_t * p.y) * grad_y;

            g[0] += grad_x * residual;
            g[1] += grad_y * residual;
            g[2] += rot_deriv * residual;

            h[0][0] += grad_x * grad_x;
            h[1][1] += grad_y * grad_y;
            h[2][2] += rot_deriv * rot_deriv;
            h[0][1] += grad_x * grad_y;
            h[0][2] += grad_x * rot_deriv;
            h[1][2] += grad_y * rot_deriv;
        }

        mirror_upper_triangle(h);

        Ok(hg)
    }
}

/// Solve `H * delta = g` for the pose update by Cramer's rule.
///
/// Returns the delta to **add** to the candidate pose, or `None` when the
/// system is singular or numerically unusable (near-zero determinant or
/// non-finite entries), which happens for scans with no occupancy gradient
/// under the footprint.
pub fn solve_update(hg: &HessianGradient) -> Option<Vector3> {
    let h = &hg.hessian;
    let g = &hg.gradient;

    let det = h[0][0] * (h[1][1] * h[2][2] - h[1][2] * h[2][1])
        - h[0][1] * (h[1][0] * h[2][2] - h[1][2] * h[2][0])
        + h[0][2] * (h[1][0] * h[2][1] - h[1][1] * h[2][0]);

    if !det.is_finite() || det.abs() < 1e-12 {
        return None;
    }

    let inv_det = 1.0 / det;

    let delta = [
        inv_det
            * (g[0] * (h[1][1] * h[2][2] - h[1][2] * h[2][1])
                - h[0][1] * (g[1] * h[2][2] - h[1][2] * g[2])
                + h[0][2] * (g[1] * h[2][1] - h[1][1] * g[2])),
        inv_det
            * (h[0][0] * (g[1] * h[2][2] - h[1][2] * g[2])
                - g[0] * (h[1][0] * h[2][2] - h[1][2] * h[2][0])
                + h[0][2] * (h[1][0] * g[2] - g[1] * h[2][0])),
        inv_det
            * (h[0][0] * (h[1][1] * g[2] - g[1] * h[2][1])
                - h[0][1] * (h[1][0] * g[2] - g[1] * h[2][0])
                + g[0] * (h[1][0] * h[2][1] - h[1][1] * h[2][0])),
    ];

    if delta.iter().any(|d| !d.is_finite()) {
        return None;
    }

    Some(delta)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GridCoord;
    use crate::grid::ProbabilityGrid;
    use approx::assert_relative_eq;

    #[test]
    fn test_empty_scan_rejected() {
        let grid = ProbabilityGrid::new(4, 4, 1.0, Point2D::ZERO).unwrap();
        let mut field = OccupancyField::new(&grid);

        let result = field.hessian_and_gradient(Pose2D::default(), &[]);
        assert_eq!(result, Err(MatchError::EmptyScan));
    }

    #[test]
    fn test_uniform_field_yields_zero_system() {
        let mut grid = ProbabilityGrid::new(4, 4, 1.0, Point2D::ZERO).unwrap();
        grid.fill(0.5);
        let mut field = OccupancyField::new(&grid);

        let points = [Point2D::new(1.0, 1.0)];
        let hg = field
            .hessian_and_gradient(Pose2D::default(), &points)
            .unwrap();

        assert_eq!(hg.gradient, [0.0; 3]);
        assert_eq!(hg.hessian, [[0.0; 3]; 3]);
    }

    #[test]
    fn test_hessian_is_symmetric() {
        let mut grid = ProbabilityGrid::new(16, 16, 1.0, Point2D::ZERO).unwrap();
        for y in 2..14 {
            grid.set_probability(GridCoord::new(8, y), 1.0);
            grid.set_probability(GridCoord::new(9, y), 0.6);
        }
        let mut field = OccupancyField::new(&grid);

        let points: Vec<Point2D> = (3..12).map(|y| Point2D::new(4.3, y as f32 - 6.0)).collect();
        let pose = Pose2D::new(4.0, 6.2, 0.1);
        let hg = field.hessian_and_gradient(pose, &points).unwrap();

        let h = hg.hessian;
        for i in 0..3 {
            for j in 0..3 {
                assert_relative_eq!(h[i][j], h[j][i]);
            }
        }
    }

    #[test]
    fn test_solve_update_known_system() {
        // Diagonal system: H = diag(2, 4, 8), g = (2, 4, 8) -> delta = (1, 1, 1)
        let hg = HessianGradient {
            hessian: [[2.0, 0.0, 0.0], [0.0, 4.0, 0.0], [0.0, 0.0, 8.0]],
            gradient: [2.0, 4.0, 8.0],
        };
        let delta = solve_update(&hg).unwrap();
        assert_relative_eq!(delta[0], 1.0, epsilon = 1e-6);
        assert_relative_eq!(delta[1], 1.0, epsilon = 1e-6);
        assert_relative_eq!(delta[2], 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_solve_update_singular_system() {
        assert_eq!(solve_update(&HessianGradient::zero()), None);

        // Rank-deficient: no information about theta
        let hg = HessianGradient {
            hessian: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 0.0]],
            gradient: [1.0, 1.0, 0.0],
        };
        assert_eq!(solve_update(&hg), None);
    }
}
