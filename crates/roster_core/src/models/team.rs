use std::fmt;

use serde::Serialize;

use super::participant::{ParticipantStats, Position};

/// Positional headcount, rendered as `goalkeepers-defenders-midfielders-forwards`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct FormationCounts {
    pub goalkeepers: usize,
    pub defenders: usize,
    pub midfielders: usize,
    pub forwards: usize,
}

impl FormationCounts {
    pub fn from_members(members: &[&ParticipantStats]) -> Self {
        let mut counts = Self::default();
        for p in members {
            match p.position {
                Position::Goalkeeper => counts.goalkeepers += 1,
                Position::Defender | Position::Winger => counts.defenders += 1,
                Position::Midfielder => counts.midfielders += 1,
                Position::Forward => counts.forwards += 1,
            }
        }
        counts
    }

    pub fn label(&self) -> String {
        format!("{}-{}-{}-{}", self.goalkeepers, self.defenders, self.midfielders, self.forwards)
    }
}

impl fmt::Display for FormationCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StrengthTag {
    StrongAttack,
    SolidDefense,
    CreativeMidfield,
    ExperiencedSquad,
    /// Emitted alone when no other rule fires
    Balanced,
}

impl StrengthTag {
    pub fn label(&self) -> &'static str {
        match self {
            StrengthTag::StrongAttack => "strong attack",
            StrengthTag::SolidDefense => "solid defense",
            StrengthTag::CreativeMidfield => "creative midfield",
            StrengthTag::ExperiencedSquad => "experienced squad",
            StrengthTag::Balanced => "balanced",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WeaknessTag {
    NoGoalkeeper,
    ThinDefense,
    LowAverageRating,
    Inexperienced,
    /// Emitted alone when no other rule fires
    NoApparentWeakness,
}

impl WeaknessTag {
    pub fn label(&self) -> &'static str {
        match self {
            WeaknessTag::NoGoalkeeper => "no goalkeeper",
            WeaknessTag::ThinDefense => "thin defense",
            WeaknessTag::LowAverageRating => "low average rating",
            WeaknessTag::Inexperienced => "inexperienced squad",
            WeaknessTag::NoApparentWeakness => "no apparent weakness",
        }
    }
}

/// One side of a partition. Members borrow the caller's records.
#[derive(Debug, Clone, Serialize)]
pub struct Team<'a> {
    pub members: Vec<&'a ParticipantStats>,
    pub formation: FormationCounts,
    pub strength: f64,
    pub strengths: Vec<StrengthTag>,
    pub weaknesses: Vec<WeaknessTag>,
}

impl<'a> Team<'a> {
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn member_ids(&self) -> Vec<&'a str> {
        self.members.iter().map(|p| p.id.as_str()).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PredictedWinner {
    #[serde(rename = "teamA")]
    TeamA,
    #[serde(rename = "teamB")]
    TeamB,
    #[serde(rename = "draw")]
    Draw,
}

impl PredictedWinner {
    pub fn as_str(&self) -> &'static str {
        match self {
            PredictedWinner::TeamA => "teamA",
            PredictedWinner::TeamB => "teamB",
            PredictedWinner::Draw => "draw",
        }
    }
}

impl fmt::Display for PredictedWinner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Completed partition with its assessment
#[derive(Debug, Clone, Serialize)]
pub struct BalancingResult<'a> {
    pub team_a: Team<'a>,
    pub team_b: Team<'a>,
    /// 0-100, 100 = identical strength
    pub balance_score: u8,
    pub predicted_winner: PredictedWinner,
    /// 0.0-1.0 heuristic, not a calibrated probability
    pub confidence: f64,
    pub analysis: String,
}

impl BalancingResult<'_> {
    pub fn strength_gap(&self) -> f64 {
        (self.team_a.strength - self.team_b.strength).abs()
    }

    pub fn pool_size(&self) -> usize {
        self.team_a.len() + self.team_b.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formation_counts_laterals_as_defenders() {
        let gk = ParticipantStats::new("1", "A", Position::Goalkeeper, 3.0);
        let wg = ParticipantStats::new("2", "B", Position::Winger, 3.0);
        let df = ParticipantStats::new("3", "C", Position::Defender, 3.0);
        let fw = ParticipantStats::new("4", "D", Position::Forward, 3.0);
        let counts = FormationCounts::from_members(&[&gk, &wg, &df, &fw]);
        assert_eq!(counts.label(), "1-2-0-1");
    }

    #[test]
    fn test_empty_formation() {
        assert_eq!(FormationCounts::from_members(&[]).to_string(), "0-0-0-0");
    }

    #[test]
    fn test_predicted_winner_serialization() {
        assert_eq!(serde_json::to_string(&PredictedWinner::TeamA).unwrap(), "\"teamA\"");
        assert_eq!(serde_json::to_string(&PredictedWinner::Draw).unwrap(), "\"draw\"");
        assert_eq!(PredictedWinner::TeamB.to_string(), "teamB");
    }

    #[test]
    fn test_tag_labels() {
        assert_eq!(StrengthTag::StrongAttack.label(), "strong attack");
        assert_eq!(WeaknessTag::NoApparentWeakness.label(), "no apparent weakness");
        assert_eq!(serde_json::to_string(&WeaknessTag::NoGoalkeeper).unwrap(), "\"no_goalkeeper\"");
    }
}
