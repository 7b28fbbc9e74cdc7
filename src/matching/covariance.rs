//! Sigma-point pose covariance estimation.

use log::{debug, trace};

use crate::core::{Point2D, Pose2D};
use crate::grid::MapQuery;

use super::cache::CacheStrategy;
use super::error::MatchError;
use super::field::OccupancyField;
use super::types::Matrix3;

const NUM_SIGMA_POINTS: usize = 7;

impl<M: MapQuery, C: CacheStrategy> OccupancyField<M, C> {
    /// Estimate the pose covariance around a converged pose, in grid units.
    ///
    /// Evaluates the match likelihood at 7 sigma poses (the pose perturbed
    /// by the configured deltas independently along x, y, and theta, plus
    /// the pose itself), normalizes the likelihoods into weights, and
    /// returns the weighted outer-product spread around the weighted mean.
    ///
    /// This is local uncertainty quadrature over the same likelihood and
    /// interpolation model the matcher optimizes, not Kalman propagation.
    /// Run it only after optimization has converged; the result is in
    /// grid-cell units (see [`to_world_covariance`](Self::to_world_covariance)).
    ///
    /// # Errors
    /// - [`MatchError::EmptyScan`] if `points` is empty.
    /// - [`MatchError::DegenerateLikelihoods`] if the likelihood sum falls
    ///   below the configured epsilon.
    pub fn estimate_covariance(
        &mut self,
        pose: Pose2D,
        points: &[Point2D],
    ) -> Result<Matrix3, MatchError> {
        if points.is_empty() {
            return Err(MatchError::EmptyScan);
        }

        let dx = self.config().sigma_delta_x;
        let dy = self.config().sigma_delta_y;
        let dt = self.config().sigma_delta_theta;

        let sigma_poses: [Pose2D; NUM_SIGMA_POINTS] = [
            Pose2D::new(pose.x + dx, pose.y, pose.theta),
            Pose2D::new(pose.x - dx, pose.y, pose.theta),
            Pose2D::new(pose.x, pose.y + dy, pose.theta),
            Pose2D::new(pose.x, pose.y - dy, pose.theta),
            Pose2D::new(pose.x, pose.y, pose.theta + dt),
            Pose2D::new(pose.x, pose.y, pose.theta - dt),
            pose,
        ];

        let mut likelihoods = [0.0f32; NUM_SIGMA_POINTS];
        for (likelihood, &sigma_pose) in likelihoods.iter_mut().zip(sigma_poses.iter()) {
            *likelihood = self.likelihood_for_pose(sigma_pose, points);
        }
        trace!("sigma-point likelihoods: {likelihoods:?}");

        let sum: f32 = likelihoods.iter().sum();
        if sum.abs() < self.config().likelihood_epsilon {
            debug!("degenerate sigma-point likelihoods at pose {pose:?} (sum {sum:e})");
            return Err(MatchError::DegenerateLikelihoods);
        }
        let inv_sum = 1.0 / sum;

        let mut mean = [0.0f32; 3];
        for (&sigma_pose, &likelihood) in sigma_poses.iter().zip(likelihoods.iter()) {
            let w = likelihood * inv_sum;
            mean[0] += sigma_pose.x * w;
            mean[1] += sigma_pose.y * w;
            mean[2] += sigma_pose.theta * w;
        }

        let mut cov = [[0.0f32; 3]; 3];
        for (&sigma_pose, &likelihood) in sigma_poses.iter().zip(likelihoods.iter()) {
            let w = likelihood * inv_sum;
            let d = [
                sigma_pose.x - mean[0],
                sigma_pose.y - mean[1],
                sigma_pose.theta - mean[2],
            ];
            for i in 0..3 {
                for j in 0..3 {
                    cov[i][j] += w * d[i] * d[j];
                }
            }
        }

        Ok(cov)
    }

    /// Rescale a grid-unit covariance to world units using the bound map's
    /// cell length.
    pub fn to_world_covariance(&self, cov_grid: Matrix3) -> Matrix3 {
        scale_covariance_to_world(cov_grid, self.map().cell_length())
    }
}

/// Rescale a grid-unit pose covariance to world units.
///
/// Translation is stored in grid cells and rotation is scale-invariant:
/// translational variances scale by `cell_length^2`, translation-rotation
/// cross terms by `cell_length`, and the rotational variance is unchanged.
/// The result is mirrored symmetric.
pub fn scale_covariance_to_world(cov_grid: Matrix3, cell_length: f32) -> Matrix3 {
    let s = cell_length;
    let s2 = s * s;

    let mut cov = [[0.0f32; 3]; 3];
    cov[0][0] = cov_grid[0][0] * s2;
    cov[1][1] = cov_grid[1][1] * s2;
    cov[2][2] = cov_grid[2][2];

    cov[1][0] = cov_grid[1][0] * s2;
    cov[0][1] = cov[1][0];

    cov[2][0] = cov_grid[2][0] * s;
    cov[0][2] = cov[2][0];

    cov[2][1] = cov_grid[2][1] * s;
    cov[1][2] = cov[2][1];

    cov
}
