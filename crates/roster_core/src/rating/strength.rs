//! Team strength
//!
//! Mean composite rating plus two bonuses: positional coverage across the
//! five categories and summed team experience. A one-position team scores
//! below a team of equal average skill with broader coverage.

use std::collections::HashSet;

use super::RatingModel;
use crate::config::StrengthWeights;
use crate::models::{ParticipantStats, Position};

#[derive(Debug, Clone, Default)]
pub struct TeamStrengthModel {
    rating: RatingModel,
    weights: StrengthWeights,
}

impl TeamStrengthModel {
    pub fn new(rating: RatingModel, weights: StrengthWeights) -> Self {
        Self { rating, weights }
    }

    pub fn rating_model(&self) -> &RatingModel {
        &self.rating
    }

    /// Strength of a roster. An empty roster has strength 0.
    pub fn strength(&self, team: &[&ParticipantStats]) -> f64 {
        if team.is_empty() {
            return 0.0;
        }

        self.average_rating(team) + self.diversity_bonus(team) + self.experience_bonus(team)
    }

    pub fn average_rating(&self, team: &[&ParticipantStats]) -> f64 {
        if team.is_empty() {
            return 0.0;
        }
        let total: f64 = team.iter().map(|p| self.rating.rating(p)).sum();
        total / team.len() as f64
    }

    pub fn diversity_bonus(&self, team: &[&ParticipantStats]) -> f64 {
        let distinct: HashSet<Position> = team.iter().map(|p| p.position).collect();
        let coverage = (distinct.len() as f64 / self.weights.position_categories).min(1.0);
        coverage * self.weights.diversity_weight
    }

    pub fn experience_bonus(&self, team: &[&ParticipantStats]) -> f64 {
        let matches: f64 = team.iter().map(|p| f64::from(p.matches)).sum();
        (matches / self.weights.team_matches_cap).min(1.0) * self.weights.experience_weight
    }
}
