//! Partition assessment
//!
//! Turns two rosters into a `BalancingResult`: formation labels, rule-based
//! strength/weakness tags per team, a 0-100 balance score, the predicted
//! winner, a heuristic confidence and a one-line analysis.

use crate::config::ReportConfig;
use crate::models::{
    BalancingResult, FormationCounts, ParticipantStats, PredictedWinner, StrengthTag, Team,
    WeaknessTag,
};
use crate::rating::TeamStrengthModel;

#[derive(Debug, Clone, Default)]
pub struct Reporter {
    strength: TeamStrengthModel,
    config: ReportConfig,
}

impl Reporter {
    pub fn new(strength: TeamStrengthModel, config: ReportConfig) -> Self {
        Self { strength, config }
    }

    pub fn report<'a>(
        &self,
        team_a: Vec<&'a ParticipantStats>,
        team_b: Vec<&'a ParticipantStats>,
    ) -> BalancingResult<'a> {
        let team_a = self.build_team(team_a);
        let team_b = self.build_team(team_b);

        let gap = (team_a.strength - team_b.strength).abs();
        let balance_score = self.balance_score(gap);
        let predicted_winner = self.predict_winner(team_a.strength, team_b.strength);
        let confidence = self.confidence(&team_a, &team_b, balance_score);
        let analysis = self.analysis(balance_score).to_string();

        BalancingResult { team_a, team_b, balance_score, predicted_winner, confidence, analysis }
    }

    fn build_team<'a>(&self, members: Vec<&'a ParticipantStats>) -> Team<'a> {
        let formation = FormationCounts::from_members(&members);
        let strength = self.strength.strength(&members);
        let strengths = self.strength_tags(&members, &formation);
        let weaknesses = self.weakness_tags(&members, &formation);
        Team { members, formation, strength, strengths, weaknesses }
    }

    fn strength_tags(
        &self,
        members: &[&ParticipantStats],
        formation: &FormationCounts,
    ) -> Vec<StrengthTag> {
        let cfg = &self.config;
        let goals: u32 = members.iter().map(|p| p.goals).sum();
        let assists: u32 = members.iter().map(|p| p.assists).sum();

        let mut tags = Vec::new();
        if goals > cfg.strong_attack_goals {
            tags.push(StrengthTag::StrongAttack);
        }
        if formation.defenders >= cfg.solid_defense_defenders {
            tags.push(StrengthTag::SolidDefense);
        }
        if assists > cfg.creative_midfield_assists {
            tags.push(StrengthTag::CreativeMidfield);
        }
        if average_matches(members) > cfg.experienced_avg_matches {
            tags.push(StrengthTag::ExperiencedSquad);
        }

        if tags.is_empty() {
            tags.push(StrengthTag::Balanced);
        }
        tags
    }

    fn weakness_tags(
        &self,
        members: &[&ParticipantStats],
        formation: &FormationCounts,
    ) -> Vec<WeaknessTag> {
        let cfg = &self.config;

        let mut tags = Vec::new();
        if formation.goalkeepers == 0 {
            tags.push(WeaknessTag::NoGoalkeeper);
        }
        if formation.defenders < cfg.min_defenders {
            tags.push(WeaknessTag::ThinDefense);
        }
        if self.strength.average_rating(members) < cfg.low_avg_rating {
            tags.push(WeaknessTag::LowAverageRating);
        }
        if average_matches(members) < cfg.inexperienced_avg_matches {
            tags.push(WeaknessTag::Inexperienced);
        }

        if tags.is_empty() {
            tags.push(WeaknessTag::NoApparentWeakness);
        }
        tags
    }

    /// `max(0, 100 - gap / spread * 100)`, rounded
    pub fn balance_score(&self, gap: f64) -> u8 {
        let score = 100.0 - (gap / self.config.max_strength_spread) * 100.0;
        score.round().clamp(0.0, 100.0) as u8
    }

    pub fn predict_winner(&self, strength_a: f64, strength_b: f64) -> PredictedWinner {
        if (strength_a - strength_b).abs() < self.config.draw_threshold {
            PredictedWinner::Draw
        } else if strength_a > strength_b {
            PredictedWinner::TeamA
        } else {
            PredictedWinner::TeamB
        }
    }

    fn confidence(&self, team_a: &Team<'_>, team_b: &Team<'_>, balance_score: u8) -> f64 {
        let cfg = &self.config;
        let pool_size = (team_a.len() + team_b.len()) as f64;
        let avg_matches = if pool_size > 0.0 {
            let total: u64 = team_a
                .members
                .iter()
                .chain(team_b.members.iter())
                .map(|p| u64::from(p.matches))
                .sum();
            total as f64 / pool_size
        } else {
            0.0
        };

        let size_term = (pool_size / cfg.confidence_pool_cap).min(1.0);
        let balance_term = f64::from(balance_score) / 100.0;
        let experience_term = (avg_matches / cfg.confidence_matches_cap).min(1.0);

        let confidence = cfg.confidence_pool_weight * size_term
            + cfg.confidence_balance_weight * balance_term
            + cfg.confidence_experience_weight * experience_term;
        confidence.clamp(0.0, 1.0)
    }

    pub fn analysis(&self, balance_score: u8) -> &'static str {
        let cfg = &self.config;
        if balance_score >= cfg.perfect_balance {
            "Teams are perfectly balanced; expect a close, competitive match."
        } else if balance_score >= cfg.good_balance {
            "Teams are well balanced with only a slight difference in strength."
        } else if balance_score >= cfg.fair_balance {
            "Teams are reasonably balanced, but one side has a noticeable edge."
        } else {
            "Teams are significantly unbalanced; we recommend re-drawing."
        }
    }
}

fn average_matches(members: &[&ParticipantStats]) -> f64 {
    if members.is_empty() {
        return 0.0;
    }
    let total: u64 = members.iter().map(|p| u64::from(p.matches)).sum();
    total as f64 / members.len() as f64
}
