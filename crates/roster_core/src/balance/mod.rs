//! Roster balancing pipeline
//!
//! participants → `Partitioner` (seed split + swap search) → `Reporter`
//! → `BalancingResult`, optionally repeated over shuffled orderings by
//! `CandidateGenerator`.

pub mod candidates;
pub mod partition;
pub mod report;

pub use candidates::{CandidateGenerator, MAX_CANDIDATES};
pub use partition::{
    validate_pool, Partition, Partitioner, SearchStats, DEFAULT_MAX_ITERATIONS, MIN_POOL_SIZE,
};
pub use report::Reporter;

use rand::Rng;
use tracing::info;

use crate::config::BalanceConfig;
use crate::error::Result;
use crate::models::{BalancingResult, ParticipantStats};
use crate::rating::{RatingModel, TeamStrengthModel};

/// Stateless facade wiring every stage from one `BalanceConfig`
#[derive(Debug, Clone)]
pub struct RosterBalancer {
    partitioner: Partitioner,
    reporter: Reporter,
}

impl Default for RosterBalancer {
    fn default() -> Self {
        Self::from_config(&BalanceConfig::default())
    }
}

impl RosterBalancer {
    pub fn new(config: &BalanceConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_config(config))
    }

    fn from_config(config: &BalanceConfig) -> Self {
        let rating = RatingModel::new(config.rating.clone());
        let strength = TeamStrengthModel::new(rating, config.strength.clone());
        Self {
            partitioner: Partitioner::new(strength.clone(), config.search.max_iterations),
            reporter: Reporter::new(strength, config.report.clone()),
        }
    }

    pub fn rating_model(&self) -> &RatingModel {
        self.partitioner.strength_model().rating_model()
    }

    pub fn partitioner(&self) -> &Partitioner {
        &self.partitioner
    }

    pub fn reporter(&self) -> &Reporter {
        &self.reporter
    }

    /// Single deterministic balance of the pool in its given order
    pub fn balance<'a>(&self, pool: &'a [ParticipantStats]) -> Result<BalancingResult<'a>> {
        let partition = self.partitioner.partition_slice(pool)?;
        let result = self.reporter.report(partition.team_a, partition.team_b);
        info!(
            pool = pool.len(),
            balance_score = result.balance_score,
            winner = %result.predicted_winner,
            "balanced roster"
        );
        Ok(result)
    }

    /// Ranked candidates from `count` shuffled orderings
    pub fn candidates<'a, R: Rng + ?Sized>(
        &self,
        pool: &'a [ParticipantStats],
        count: usize,
        rng: &mut R,
    ) -> Result<Vec<BalancingResult<'a>>> {
        CandidateGenerator::new(self.partitioner.clone(), self.reporter.clone())
            .generate(pool, count, rng)
    }
}
