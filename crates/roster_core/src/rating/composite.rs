//! Composite skill rating
//!
//! Folds a participant's self-declared rating and playing history into one
//! comparable score:
//!
//! `base + experience + goals/match + assists/match + win rate`, clamped to 0-5.

use crate::config::RatingWeights;
use crate::models::ParticipantStats;

/// Converts raw statistics into a composite rating
#[derive(Debug, Clone, Default)]
pub struct RatingModel {
    weights: RatingWeights,
}

impl RatingModel {
    pub fn new(weights: RatingWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &RatingWeights {
        &self.weights
    }

    pub fn rating(&self, p: &ParticipantStats) -> f64 {
        let w = &self.weights;
        let matches = f64::from(p.matches);
        let per_match = matches.max(1.0);

        let experience_bonus = (matches / w.experience_matches_cap).min(1.0) * w.experience_weight;
        let goal_bonus = (f64::from(p.goals) / per_match) * w.goal_weight;
        let assist_bonus = (f64::from(p.assists) / per_match) * w.assist_weight;
        let win_rate_bonus = p.win_rate * w.win_rate_weight;

        let total = p.base_rating + experience_bonus + goal_bonus + assist_bonus + win_rate_bonus;
        total.clamp(0.0, w.max_rating)
    }

    /// Component breakdown, for display
    pub fn breakdown(&self, p: &ParticipantStats) -> RatingBreakdown {
        let w = &self.weights;
        let matches = f64::from(p.matches);
        let per_match = matches.max(1.0);
        RatingBreakdown {
            base: p.base_rating,
            experience_bonus: (matches / w.experience_matches_cap).min(1.0) * w.experience_weight,
            goal_bonus: (f64::from(p.goals) / per_match) * w.goal_weight,
            assist_bonus: (f64::from(p.assists) / per_match) * w.assist_weight,
            win_rate_bonus: p.win_rate * w.win_rate_weight,
            composite: self.rating(p),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RatingBreakdown {
    pub base: f64,
    pub experience_bonus: f64,
    pub goal_bonus: f64,
    pub assist_bonus: f64,
    pub win_rate_bonus: f64,
    /// Clamped total
    pub composite: f64,
}
