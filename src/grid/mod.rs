//! Occupancy map access.
//!
//! The matcher consumes maps through the read-only [`MapQuery`] capability
//! trait; [`ProbabilityGrid`] is the bundled flat-array implementation used
//! by tests, demos, and simple deployments. Probability-update logic
//! (log-odds models, sensor fusion) is out of scope for this crate.

mod probability;
mod traits;

pub use probability::{GridError, ProbabilityGrid};
pub use traits::MapQuery;
