//! Pairwise compatibility score
//!
//! Scores how well two participants fit together on the same side: shared
//! position, complementary preferred sides, similar experience and similar
//! rating. The partitioner does not consult it; callers can use it to
//! annotate a finished team.

use super::RatingModel;
use crate::models::{ParticipantStats, PreferredSide};

/// Average of four similarity terms, each in 0.0-1.0
pub fn compatibility(model: &RatingModel, a: &ParticipantStats, b: &ParticipantStats) -> f64 {
    let position = if a.position == b.position { 1.0 } else { 0.5 };

    let side = match (a.preferred_side, b.preferred_side) {
        (PreferredSide::Both, _) | (_, PreferredSide::Both) => 1.0,
        (x, y) if x != y => 1.0,
        _ => 0.5,
    };

    let most_matches = f64::from(a.matches.max(b.matches)).max(1.0);
    let experience = 1.0 - f64::from(a.matches.abs_diff(b.matches)) / most_matches;

    let max_rating = model.weights().max_rating;
    let rating = 1.0 - (model.rating(a) - model.rating(b)).abs() / max_rating;

    ((position + side + experience + rating) / 4.0).clamp(0.0, 1.0)
}

/// Mean pairwise compatibility within a roster, 1.0 for rosters under two
pub fn team_cohesion(model: &RatingModel, team: &[&ParticipantStats]) -> f64 {
    let mut total = 0.0;
    let mut pairs = 0usize;
    for (i, a) in team.iter().enumerate() {
        for b in &team[i + 1..] {
            total += compatibility(model, a, b);
            pairs += 1;
        }
    }
    if pairs == 0 {
        1.0
    } else {
        total / pairs as f64
    }
}
