//! Scan-matching inner loop: interpolation, linearization, covariance.
//!
//! This module is the numerically dense core executed several times per
//! incoming scan. It does not run the optimization itself — callers own
//! the Gauss-Newton iteration and bound its count — it supplies the pieces
//! each iteration consumes.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                 SCAN-MATCH SUPPORT PIPELINE                 │
//! │                                                             │
//! │  MapQuery (read-only grid)                                  │
//! │       │                                                     │
//! │       ▼                                                     │
//! │  ┌────────────┐   ┌──────────────────┐   ┌──────────────┐  │
//! │  │ EpochCache │──▶│ OccupancyField   │──▶│ hessian_and_ │  │
//! │  │ (per-cell) │   │ (bilinear value  │   │ gradient     │  │
//! │  └────────────┘   │  + gradient)     │   ├──────────────┤  │
//! │                   └──────────────────┘   │ estimate_    │  │
//! │                                          │ covariance   │  │
//! │                                          └──────────────┘  │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use drishti_match::{OccupancyField, Pose2D, solve_update};
//!
//! let mut field = OccupancyField::new(&grid);
//!
//! // One Gauss-Newton step (the caller loops and bounds iterations)
//! field.reset_cache();
//! let hg = field.hessian_and_gradient(pose, &scan_points)?;
//! if let Some(delta) = solve_update(&hg) {
//!     pose.x += delta[0];
//!     pose.y += delta[1];
//!     pose.theta += delta[2];
//! }
//!
//! // After convergence: pose uncertainty in world units
//! let cov = field.estimate_covariance(pose, &scan_points)?;
//! let cov_world = field.to_world_covariance(cov);
//! ```

mod cache;
mod config;
mod covariance;
mod error;
mod field;
mod linearize;
mod types;

pub use cache::{CacheStrategy, EpochCache};
pub use config::MatcherConfig;
pub use covariance::scale_covariance_to_world;
pub use error::MatchError;
pub use field::OccupancyField;
pub use linearize::solve_update;
pub use types::{HessianGradient, Matrix3, Vector3};
