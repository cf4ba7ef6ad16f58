//! # Balancer Configuration
//!
//! Every tuning constant of the rating, strength, search and report stages
//! lives here. `BalanceConfig::default()` reproduces the stock formulas.
//!
//! ```rust
//! use roster_core::config::BalanceConfig;
//!
//! let config = BalanceConfig::default();
//! assert_eq!(config.search.max_iterations, 10);
//! ```

use std::{env, fs};

use serde::{Deserialize, Serialize};

use crate::error::{BalanceError, Result};
use crate::models::MAX_BASE_RATING;

/// Env var holding a path to a JSON `BalanceConfig`
pub const CONFIG_PATH_ENV: &str = "ROSTER_BALANCE_CONFIG";

/// Composite rating weights
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RatingWeights {
    /// Matches at which the experience bonus saturates
    pub experience_matches_cap: f64,
    pub experience_weight: f64,
    /// Per goals-per-match
    pub goal_weight: f64,
    /// Per assists-per-match
    pub assist_weight: f64,
    pub win_rate_weight: f64,
    pub max_rating: f64,
}

impl Default for RatingWeights {
    fn default() -> Self {
        Self {
            experience_matches_cap: 50.0,
            experience_weight: 0.1,
            goal_weight: 0.05,
            assist_weight: 0.05,
            win_rate_weight: 0.1,
            max_rating: 5.0,
        }
    }
}

/// Team strength bonuses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrengthWeights {
    /// Denominator of the diversity bonus
    pub position_categories: f64,
    pub diversity_weight: f64,
    /// Summed matches at which the team experience bonus saturates
    pub team_matches_cap: f64,
    pub experience_weight: f64,
}

impl Default for StrengthWeights {
    fn default() -> Self {
        Self {
            position_categories: 5.0,
            diversity_weight: 0.2,
            team_matches_cap: 500.0,
            experience_weight: 0.1,
        }
    }
}

/// Local search bounds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Outer swap-search iterations
    pub max_iterations: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { max_iterations: 10 }
    }
}

/// Reporter thresholds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    // === Strength tags ===
    pub strong_attack_goals: u32,
    pub solid_defense_defenders: usize,
    pub creative_midfield_assists: u32,
    pub experienced_avg_matches: f64,

    // === Weakness tags ===
    pub min_defenders: usize,
    pub low_avg_rating: f64,
    pub inexperienced_avg_matches: f64,

    // === Outcome ===
    /// Strength gap under which the match is called a draw
    pub draw_threshold: f64,
    /// Strength gap mapped to a balance score of 0
    pub max_strength_spread: f64,

    // === Confidence ===
    pub confidence_pool_weight: f64,
    pub confidence_balance_weight: f64,
    pub confidence_experience_weight: f64,
    pub confidence_pool_cap: f64,
    pub confidence_matches_cap: f64,

    // === Analysis tiers (balance score) ===
    pub perfect_balance: u8,
    pub good_balance: u8,
    pub fair_balance: u8,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            strong_attack_goals: 20,
            solid_defense_defenders: 3,
            creative_midfield_assists: 10,
            experienced_avg_matches: 30.0,

            min_defenders: 2,
            low_avg_rating: 3.0,
            inexperienced_avg_matches: 10.0,

            draw_threshold: 0.3,
            max_strength_spread: 2.0,

            confidence_pool_weight: 0.3,
            confidence_balance_weight: 0.4,
            confidence_experience_weight: 0.3,
            confidence_pool_cap: 20.0,
            confidence_matches_cap: 50.0,

            perfect_balance: 90,
            good_balance: 75,
            fair_balance: 50,
        }
    }
}

/// Full balancer configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct BalanceConfig {
    #[serde(default)]
    pub rating: RatingWeights,
    #[serde(default)]
    pub strength: StrengthWeights,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

impl BalanceConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: BalanceConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from the file named by `ROSTER_BALANCE_CONFIG`, defaults when unset
    pub fn from_env() -> Result<Self> {
        let Ok(path) = env::var(CONFIG_PATH_ENV) else {
            return Ok(Self::default());
        };

        let path = path.trim();
        if path.is_empty() {
            return Ok(Self::default());
        }

        Self::from_file(path)
    }

    pub fn from_file(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|source| BalanceError::ConfigIo { path: path.to_string(), source })?;
        let config = Self::from_json(&content)?;
        tracing::info!(path, "loaded balance config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let r = &self.rating;
        if r.experience_matches_cap.is_nan() || r.experience_matches_cap <= 0.0 {
            return Err(invalid("rating caps must be positive"));
        }
        // Ratings share one 0..=5 scale with base ratings
        if r.max_rating.is_nan() || r.max_rating <= 0.0 || r.max_rating > MAX_BASE_RATING {
            return Err(invalid("rating.max_rating must be in (0, 5]"));
        }
        if [r.experience_weight, r.goal_weight, r.assist_weight, r.win_rate_weight]
            .iter()
            .any(|w| !w.is_finite() || *w < 0.0)
        {
            return Err(invalid("rating weights must be non-negative"));
        }

        let s = &self.strength;
        if s.position_categories <= 0.0 || s.team_matches_cap <= 0.0 {
            return Err(invalid("strength caps must be positive"));
        }
        if s.diversity_weight < 0.0 || s.experience_weight < 0.0 {
            return Err(invalid("strength weights must be non-negative"));
        }

        if self.search.max_iterations == 0 {
            return Err(invalid("search.max_iterations must be at least 1"));
        }

        let rep = &self.report;
        if rep.max_strength_spread <= 0.0 || rep.draw_threshold < 0.0 {
            return Err(invalid("report spread must be positive and draw threshold non-negative"));
        }
        if rep.confidence_pool_cap <= 0.0 || rep.confidence_matches_cap <= 0.0 {
            return Err(invalid("confidence caps must be positive"));
        }
        let weights = [
            rep.confidence_pool_weight,
            rep.confidence_balance_weight,
            rep.confidence_experience_weight,
        ];
        if weights.iter().any(|w| *w < 0.0) || (weights.iter().sum::<f64>() - 1.0).abs() > 1e-6 {
            return Err(invalid("confidence weights must be non-negative and sum to 1"));
        }
        if !(rep.perfect_balance > rep.good_balance
            && rep.good_balance > rep.fair_balance
            && rep.perfect_balance <= 100)
        {
            return Err(invalid("analysis tiers must be strictly descending and at most 100"));
        }

        Ok(())
    }
}

fn invalid(msg: &str) -> BalanceError {
    BalanceError::InvalidConfig(msg.to_string())
}
