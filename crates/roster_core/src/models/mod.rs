pub mod participant;
pub mod team;

pub use participant::{
    ParticipantStats, ParticipantValidator, Position, PreferredSide, ValidationError,
    MAX_BASE_RATING,
};
pub use team::{BalancingResult, FormationCounts, PredictedWinner, StrengthTag, Team, WeaknessTag};
