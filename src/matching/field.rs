//! Bilinear occupancy sampling with analytic gradients.

use crate::core::{Point2D, Pose2D};
use crate::grid::MapQuery;

use super::cache::{CacheStrategy, EpochCache};
use super::config::MatcherConfig;

/// Smooth occupancy surface over a grid map.
///
/// Binds a read-only map with an owned per-epoch probability cache and
/// samples the map as a continuous field: bilinearly interpolated
/// probability plus its analytic spatial gradient. This is the inner loop
/// shared by Gauss-Newton linearization and sigma-point covariance
/// estimation.
///
/// All sampling happens in continuous map coordinates (grid-cell units);
/// convert world poses through the map's transforms first.
///
/// The cache is the only mutable state. Call [`reset_cache`](Self::reset_cache)
/// between independent optimization contexts; for concurrent matching
/// against one map, give each worker its own field.
pub struct OccupancyField<M: MapQuery, C: CacheStrategy> {
    map: M,
    cache: C,
    obstacle_threshold: f32,
    config: MatcherConfig,
}

impl<M: MapQuery> OccupancyField<M, EpochCache> {
    /// Bind a map with a flat-array cache sized to its cell count.
    pub fn new(map: M) -> Self {
        let config = MatcherConfig::default();
        let cache = EpochCache::new(map.cell_count());
        Self::with_parts(map, cache, config)
    }

    /// Bind a map with a flat-array cache and an explicit configuration.
    pub fn with_config(map: M, config: MatcherConfig) -> Self {
        let cache = EpochCache::new(map.cell_count());
        Self::with_parts(map, cache, config)
    }
}

impl<M: MapQuery, C: CacheStrategy> OccupancyField<M, C> {
    /// Bind a map with a caller-supplied cache strategy.
    pub fn with_parts(map: M, cache: C, config: MatcherConfig) -> Self {
        let obstacle_threshold = map.obstacle_threshold();
        Self {
            map,
            cache,
            obstacle_threshold,
            config,
        }
    }

    /// The bound map.
    pub fn map(&self) -> &M {
        &self.map
    }

    /// The active configuration.
    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    /// Obstacle threshold captured from the map at binding time.
    pub fn obstacle_threshold(&self) -> f32 {
        self.obstacle_threshold
    }

    /// Invalidate all cached probabilities.
    ///
    /// Required between independent optimization contexts: a map update,
    /// a new scan, or a changed search origin. Skipping this silently
    /// reuses stale probabilities.
    pub fn reset_cache(&mut self) {
        self.cache.reset();
    }

    /// Interpolated occupancy probability at a continuous map coordinate.
    ///
    /// Out-of-map coordinates return 0.0 (free/unknown), never an error,
    /// so the optimizer sees a well-defined surface near map edges.
    pub fn interpolate(&mut self, point: Point2D) -> f32 {
        if self.map.is_out_of_bounds(point) {
            return 0.0;
        }

        let (fx, fy, corners) = self.footprint(point);
        let [p00, p10, p01, p11] = corners;

        let fx_inv = 1.0 - fx;
        let fy_inv = 1.0 - fy;

        (p00 * fx_inv + p10 * fx) * fy_inv + (p01 * fx_inv + p11 * fx) * fy
    }

    /// Interpolated probability and its analytic gradient (dM/dx, dM/dy).
    ///
    /// Out-of-map coordinates return (0.0, 0.0, 0.0). The gradient keeps
    /// the negated finite-difference sign convention: higher probability
    /// marks the obstacle direction, and with residual `1 - M` the sign
    /// propagates straight into the pose-update direction.
    pub fn interpolate_with_gradient(&mut self, point: Point2D) -> (f32, f32, f32) {
        if self.map.is_out_of_bounds(point) {
            return (0.0, 0.0, 0.0);
        }

        let (fx, fy, corners) = self.footprint(point);
        let [p00, p10, p01, p11] = corners;

        let dx1 = p00 - p10;
        let dx2 = p01 - p11;
        let dy1 = p00 - p01;
        let dy2 = p10 - p11;

        let fx_inv = 1.0 - fx;
        let fy_inv = 1.0 - fy;

        let value = (p00 * fx_inv + p10 * fx) * fy_inv + (p01 * fx_inv + p11 * fx) * fy;
        let grad_x = -(dx1 * fy_inv + dx2 * fy);
        let grad_y = -(dy1 * fx_inv + dy2 * fx);

        (value, grad_x, grad_y)
    }

    /// Sum of per-point residuals `1 - M` for a scan at a candidate pose.
    ///
    /// Points are in the sensor frame; the pose is in map coordinates.
    pub fn residual_for_pose(&mut self, pose: Pose2D, points: &[Point2D]) -> f32 {
        let (sin_t, cos_t) = pose.theta.sin_cos();

        let mut residual = 0.0;
        for &p in points {
            let mapped = Point2D::new(
                pose.x + p.x * cos_t - p.y * sin_t,
                pose.y + p.x * sin_t + p.y * cos_t,
            );
            residual += 1.0 - self.interpolate(mapped);
        }
        residual
    }

    /// Scalar match likelihood `1 - residual / num_points` at a pose.
    ///
    /// Returns 0.0 for an empty scan instead of dividing by zero.
    pub fn likelihood_for_pose(&mut self, pose: Pose2D, points: &[Point2D]) -> f32 {
        if points.is_empty() {
            return 0.0;
        }
        1.0 - self.residual_for_pose(pose, points) / points.len() as f32
    }

    /// Fractional offsets and the four corner probabilities around `point`.
    ///
    /// Caller must have bounds-checked `point`; the 2x2 footprint at its
    /// floor is then fully inside the map.
    fn footprint(&mut self, point: Point2D) -> (f32, f32, [f32; 4]) {
        let x0 = point.x.floor();
        let y0 = point.y.floor();
        let fx = point.x - x0;
        let fy = point.y - y0;

        let width = self.map.width();
        let index = y0 as usize * width + x0 as usize;

        let p00 = self.cached_probability(index);
        let p10 = self.cached_probability(index + 1);
        let p01 = self.cached_probability(index + width);
        let p11 = self.cached_probability(index + width + 1);

        (fx, fy, [p00, p10, p01, p11])
    }

    /// One probability read, memoized through the cache.
    fn cached_probability(&mut self, index: usize) -> f32 {
        if let Some(value) = self.cache.try_get(index) {
            return value;
        }
        let value = self.map.probability(index);
        self.cache.put(index, value);
        value
    }
}
