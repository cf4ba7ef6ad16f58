//! Rating system
//!
//! - `RatingModel`: per-participant composite rating
//! - `TeamStrengthModel`: roster-level strength used by the partitioner
//! - `compatibility`: pairwise fit score (informational)

pub mod compatibility;
pub mod composite;
pub mod strength;

pub use compatibility::{compatibility, team_cohesion};
pub use composite::{RatingBreakdown, RatingModel};
pub use strength::TeamStrengthModel;
