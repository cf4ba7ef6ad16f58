//! # roster_core - Two-Team Roster Balancing Engine
//!
//! Splits a pool of recreational players into two evenly matched teams and
//! explains the result.
//!
//! ## Pipeline
//! - `RatingModel`: raw stats → composite rating (0-5)
//! - `TeamStrengthModel`: ratings + position coverage + experience → strength
//! - `Partitioner`: snake-draft seed split, then bounded first-improvement swaps
//! - `Reporter`: formation, tags, balance score, winner, confidence, analysis
//! - `CandidateGenerator`: repeats the above over shuffled orderings
//!
//! The engine is pure: no I/O, no global state, and it only borrows the
//! participant records it is given.
//!
//! ```rust
//! use roster_core::{ParticipantStats, Position, RosterBalancer};
//!
//! let pool = vec![
//!     ParticipantStats::new("1", "Ana", Position::Goalkeeper, 3.5),
//!     ParticipantStats::new("2", "Bea", Position::Forward, 4.0),
//!     ParticipantStats::new("3", "Cy", Position::Defender, 3.0),
//!     ParticipantStats::new("4", "Dot", Position::Midfielder, 3.8),
//! ];
//! let result = RosterBalancer::default().balance(&pool).unwrap();
//! assert_eq!(result.team_a.len() + result.team_b.len(), 4);
//! ```

pub mod api;
pub mod balance;
pub mod config;
pub mod error;
pub mod models;
pub mod rating;

pub use api::{balance_roster, balance_roster_json, BalanceRequest, BalanceResponse};
pub use balance::{
    CandidateGenerator, Partition, Partitioner, Reporter, RosterBalancer, MAX_CANDIDATES,
};
pub use config::BalanceConfig;
pub use error::{BalanceError, Result};
pub use models::{
    BalancingResult, ParticipantStats, Position, PredictedWinner, PreferredSide, StrengthTag,
    Team, WeaknessTag,
};
pub use rating::{RatingModel, TeamStrengthModel};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;
