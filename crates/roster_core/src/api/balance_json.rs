//! JSON API for roster balancing
//!
//! Request/response types for callers that talk to the engine over JSON
//! (HTTP handlers, the CLI, scripting hosts).

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::balance::RosterBalancer;
use crate::config::BalanceConfig;
use crate::error::{BalanceError, Result};
use crate::models::{BalancingResult, ParticipantStats, Position, Team};
use crate::rating::RatingModel;
use crate::SCHEMA_VERSION;

/// Balancing request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceRequest {
    pub schema_version: u8,
    pub participants: Vec<ParticipantStats>,
    /// Number of shuffled candidates (default: 1, at most `MAX_CANDIDATES`)
    #[serde(default)]
    pub candidates: Option<usize>,
    /// Seed for shuffling; random when omitted
    #[serde(default)]
    pub seed: Option<u64>,
    /// Overrides the default tuning
    #[serde(default)]
    pub config: Option<BalanceConfig>,
}

/// Balancing response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceResponse {
    pub schema_version: u8,
    /// Seed actually used, `None` for a single in-order balance
    pub seed: Option<u64>,
    /// Best first
    pub candidates: Vec<CandidateSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateSummary {
    pub rank: usize,
    pub team_a: TeamSummary,
    pub team_b: TeamSummary,
    pub balance_score: u8,
    /// "teamA" | "teamB" | "draw"
    pub predicted_winner: String,
    pub confidence: f64,
    pub analysis: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamSummary {
    pub formation: String,
    pub strength: f64,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub players: Vec<PlayerSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerSummary {
    pub id: String,
    pub name: String,
    pub position: Position,
    pub rating: f64,
}

/// Balance a roster from a JSON request string, returning a JSON response
pub fn balance_roster_json(request_json: &str) -> Result<String> {
    let request: BalanceRequest = serde_json::from_str(request_json)?;
    let response = balance_roster(&request)?;
    serde_json::to_string(&response).map_err(BalanceError::Serialization)
}

/// Typed entry point behind `balance_roster_json`
pub fn balance_roster(request: &BalanceRequest) -> Result<BalanceResponse> {
    if request.schema_version != SCHEMA_VERSION {
        return Err(BalanceError::UnsupportedSchema {
            found: request.schema_version,
            expected: SCHEMA_VERSION,
        });
    }

    let config = request.config.clone().unwrap_or_default();
    let balancer = RosterBalancer::new(&config)?;
    let count = request.candidates.unwrap_or(1);

    let (seed, results) = if count == 1 && request.seed.is_none() {
        (None, vec![balancer.balance(&request.participants)?])
    } else {
        let seed = request.seed.unwrap_or_else(rand::random);
        debug!(seed, count, "shuffling roster");
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        (Some(seed), balancer.candidates(&request.participants, count, &mut rng)?)
    };

    let rating = balancer.rating_model();
    let candidates = results
        .iter()
        .enumerate()
        .map(|(i, result)| summarize(rating, i + 1, result))
        .collect();

    Ok(BalanceResponse { schema_version: SCHEMA_VERSION, seed, candidates })
}

fn summarize(rating: &RatingModel, rank: usize, result: &BalancingResult<'_>) -> CandidateSummary {
    CandidateSummary {
        rank,
        team_a: summarize_team(rating, &result.team_a),
        team_b: summarize_team(rating, &result.team_b),
        balance_score: result.balance_score,
        predicted_winner: result.predicted_winner.to_string(),
        confidence: result.confidence,
        analysis: result.analysis.clone(),
    }
}

fn summarize_team(rating: &RatingModel, team: &Team<'_>) -> TeamSummary {
    TeamSummary {
        formation: team.formation.label(),
        strength: team.strength,
        strengths: team.strengths.iter().map(|t| t.label().to_string()).collect(),
        weaknesses: team.weaknesses.iter().map(|t| t.label().to_string()).collect(),
        players: team
            .members
            .iter()
            .map(|p| PlayerSummary {
                id: p.id.clone(),
                name: p.name.clone(),
                position: p.position,
                rating: rating.rating(p),
            })
            .collect(),
    }
}
