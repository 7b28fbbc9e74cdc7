//! Matcher configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the scan-match support field.
///
/// The sigma-point deltas control how far the covariance estimator probes
/// around the converged pose. Translation deltas are in grid cells,
/// the angular delta in radians.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MatcherConfig {
    /// Sigma-point perturbation along x (grid cells).
    #[serde(default = "default_sigma_delta_trans")]
    pub sigma_delta_x: f32,

    /// Sigma-point perturbation along y (grid cells).
    #[serde(default = "default_sigma_delta_trans")]
    pub sigma_delta_y: f32,

    /// Sigma-point perturbation of theta (radians).
    #[serde(default = "default_sigma_delta_theta")]
    pub sigma_delta_theta: f32,

    /// Likelihood-sum magnitude below which covariance estimation is
    /// rejected as degenerate.
    #[serde(default = "default_likelihood_epsilon")]
    pub likelihood_epsilon: f32,
}

fn default_sigma_delta_trans() -> f32 {
    1.5 // cells
}

fn default_sigma_delta_theta() -> f32 {
    0.05 // ~2.9 degrees
}

fn default_likelihood_epsilon() -> f32 {
    1e-6
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            sigma_delta_x: default_sigma_delta_trans(),
            sigma_delta_y: default_sigma_delta_trans(),
            sigma_delta_theta: default_sigma_delta_theta(),
            likelihood_epsilon: default_likelihood_epsilon(),
        }
    }
}

impl MatcherConfig {
    /// Configuration with custom sigma-point deltas.
    pub fn with_sigma_deltas(delta_x: f32, delta_y: f32, delta_theta: f32) -> Self {
        Self {
            sigma_delta_x: delta_x,
            sigma_delta_y: delta_y,
            sigma_delta_theta: delta_theta,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MatcherConfig::default();
        assert!((config.sigma_delta_x - 1.5).abs() < 1e-6);
        assert!((config.sigma_delta_y - 1.5).abs() < 1e-6);
        assert!((config.sigma_delta_theta - 0.05).abs() < 1e-6);
        assert!(config.likelihood_epsilon > 0.0);
    }

    #[test]
    fn test_with_sigma_deltas() {
        let config = MatcherConfig::with_sigma_deltas(1.0, 2.0, 0.1);
        assert!((config.sigma_delta_x - 1.0).abs() < 1e-6);
        assert!((config.sigma_delta_y - 2.0).abs() < 1e-6);
        assert!((config.sigma_delta_theta - 0.1).abs() < 1e-6);
    }
}
