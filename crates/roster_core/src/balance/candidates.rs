//! Multi-candidate generation
//!
//! The partitioner is deterministic for a given ordering, so alternative
//! line-ups come from shuffling the pool before each run. Randomness is
//! injected by the caller; seed a `ChaCha8Rng` for reproducible output.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::info;

use super::partition::{validate_pool, Partitioner};
use super::report::Reporter;
use crate::error::{BalanceError, Result};
use crate::models::{BalancingResult, ParticipantStats};

/// Upper bound on candidates per request
pub const MAX_CANDIDATES: usize = 1000;

#[derive(Debug, Clone, Default)]
pub struct CandidateGenerator {
    partitioner: Partitioner,
    reporter: Reporter,
}

impl CandidateGenerator {
    pub fn new(partitioner: Partitioner, reporter: Reporter) -> Self {
        Self { partitioner, reporter }
    }

    /// `count` candidates sorted by balance score, best first.
    /// `count` must be in `1..=MAX_CANDIDATES`.
    pub fn generate<'a, R: Rng + ?Sized>(
        &self,
        pool: &'a [ParticipantStats],
        count: usize,
        rng: &mut R,
    ) -> Result<Vec<BalancingResult<'a>>> {
        if count == 0 || count > MAX_CANDIDATES {
            return Err(BalanceError::InvalidCandidateCount { requested: count, max: MAX_CANDIDATES });
        }

        let mut order: Vec<&'a ParticipantStats> = pool.iter().collect();
        validate_pool(&order)?;

        let mut candidates = Vec::with_capacity(count);
        for _ in 0..count {
            order.shuffle(rng);
            let partition = self.partitioner.partition(&order)?;
            candidates.push(self.reporter.report(partition.team_a, partition.team_b));
        }

        // Stable: equal scores keep generation order
        candidates.sort_by(|a, b| b.balance_score.cmp(&a.balance_score));

        info!(
            pool = pool.len(),
            count,
            best = ?candidates.first().map(|c| c.balance_score),
            "generated balancing candidates"
        );
        Ok(candidates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Position;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn test_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(0)
    }

    fn team_a_ids<'a>(results: &[BalancingResult<'a>]) -> Vec<Vec<&'a str>> {
        results.iter().map(|r| r.team_a.member_ids()).collect()
    }

    fn pool(n: usize) -> Vec<ParticipantStats> {
        (0..n)
            .map(|i| {
                ParticipantStats::new(
                    format!("p{i}"),
                    format!("Player {i}"),
                    Position::ALL[i % Position::ALL.len()],
                    1.0 + (i as f64 * 0.61) % 4.0,
                )
                .with_history(i as u32 * 5, i as u32 % 4, i as u32 % 3, 0.4)
            })
            .collect()
    }

    #[test]
    fn test_zero_count_rejected() {
        let players = pool(4);
        let err = CandidateGenerator::default().generate(&players, 0, &mut test_rng()).unwrap_err();
        assert!(matches!(err, BalanceError::InvalidCandidateCount { requested: 0, .. }));
    }

    #[test]
    fn test_oversized_count_rejected_before_allocating() {
        let players = pool(2);
        let generator = CandidateGenerator::default();

        let err = generator.generate(&players, usize::MAX, &mut test_rng()).unwrap_err();
        assert!(matches!(
            err,
            BalanceError::InvalidCandidateCount { requested: usize::MAX, max: MAX_CANDIDATES }
        ));
        let err = generator.generate(&players, MAX_CANDIDATES + 1, &mut test_rng()).unwrap_err();
        assert!(matches!(err, BalanceError::InvalidCandidateCount { .. }));
    }

    #[test]
    fn test_count_at_limit_accepted() {
        let players = pool(2);
        let results =
            CandidateGenerator::default().generate(&players, MAX_CANDIDATES, &mut test_rng()).unwrap();
        assert_eq!(results.len(), MAX_CANDIDATES);
    }

    #[test]
    fn test_small_pool_rejected() {
        let players = pool(1);
        let err = CandidateGenerator::default().generate(&players, 3, &mut test_rng()).unwrap_err();
        assert!(matches!(err, BalanceError::InsufficientParticipants { found: 1 }));
    }

    #[test]
    fn test_candidates_sorted_descending() {
        let players = pool(11);
        let results = CandidateGenerator::default().generate(&players, 6, &mut test_rng()).unwrap();
        assert_eq!(results.len(), 6);
        for pair in results.windows(2) {
            assert!(pair[0].balance_score >= pair[1].balance_score);
        }
        for r in &results {
            assert_eq!(r.pool_size(), 11);
        }
    }

    #[test]
    fn test_same_seed_same_candidates() {
        let players = pool(10);
        let generator = CandidateGenerator::default();
        let first = generator.generate(&players, 4, &mut ChaCha8Rng::seed_from_u64(7)).unwrap();
        let second = generator.generate(&players, 4, &mut ChaCha8Rng::seed_from_u64(7)).unwrap();

        assert_eq!(team_a_ids(&first), team_a_ids(&second));
    }

    #[test]
    fn test_caller_pool_order_untouched() {
        let players = pool(8);
        let before: Vec<String> = players.iter().map(|p| p.id.clone()).collect();
        CandidateGenerator::default().generate(&players, 3, &mut test_rng()).unwrap();
        let after: Vec<String> = players.iter().map(|p| p.id.clone()).collect();
        assert_eq!(before, after);
    }
}
