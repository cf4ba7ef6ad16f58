//! Two-team partitioning
//!
//! 1. Seed split: rank the pool by composite rating (descending, stable) and
//!    alternate picks, even ranks to team A and odd ranks to team B. With an
//!    odd pool team A gets the extra player. Each team then lists its members
//!    in pool order.
//! 2. Refinement: bounded first-improvement hill climbing over single swaps.
//!    Each outer iteration scans (i in A, j in B) by slot and keeps the first
//!    swap that shrinks the strength gap. A swap puts each player into the
//!    other's slot. An iteration without an accepted swap ends the search
//!    early.
//!
//! The result depends only on the input ordering; there is no randomness here.

use tracing::debug;

use crate::error::{BalanceError, Result};
use crate::models::{ParticipantStats, ParticipantValidator};
use crate::rating::TeamStrengthModel;

/// Minimum pool size for a partition
pub const MIN_POOL_SIZE: usize = 2;

/// Default outer iteration budget of the swap search
pub const DEFAULT_MAX_ITERATIONS: usize = 10;

/// Raw two-team split plus search statistics
#[derive(Debug, Clone)]
pub struct Partition<'a> {
    pub team_a: Vec<&'a ParticipantStats>,
    pub team_b: Vec<&'a ParticipantStats>,
    pub search: SearchStats,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchStats {
    /// Outer iterations started
    pub iterations: usize,
    /// Swaps accepted
    pub swaps: usize,
    /// True when an iteration found no improving swap
    pub converged: bool,
}

#[derive(Debug, Clone)]
pub struct Partitioner {
    strength: TeamStrengthModel,
    max_iterations: usize,
}

impl Default for Partitioner {
    fn default() -> Self {
        Self::new(TeamStrengthModel::default(), DEFAULT_MAX_ITERATIONS)
    }
}

impl Partitioner {
    pub fn new(strength: TeamStrengthModel, max_iterations: usize) -> Self {
        Self { strength, max_iterations }
    }

    pub fn strength_model(&self) -> &TeamStrengthModel {
        &self.strength
    }

    /// Partition an owned slice of records
    pub fn partition_slice<'a>(&self, pool: &'a [ParticipantStats]) -> Result<Partition<'a>> {
        let refs: Vec<&'a ParticipantStats> = pool.iter().collect();
        self.partition(&refs)
    }

    /// Partition a pool of borrowed records, in the given order
    pub fn partition<'a>(&self, pool: &[&'a ParticipantStats]) -> Result<Partition<'a>> {
        validate_pool(pool)?;

        let (mut team_a, mut team_b) = self.seed_split(pool);
        let search = self.refine(&mut team_a, &mut team_b);

        debug!(
            pool = pool.len(),
            iterations = search.iterations,
            swaps = search.swaps,
            converged = search.converged,
            gap = self.gap(&team_a, &team_b),
            "partition complete"
        );

        Ok(Partition { team_a, team_b, search })
    }

    fn seed_split<'a>(
        &self,
        pool: &[&'a ParticipantStats],
    ) -> (Vec<&'a ParticipantStats>, Vec<&'a ParticipantStats>) {
        let rating = self.strength.rating_model();
        let mut ranked: Vec<(f64, usize)> =
            pool.iter().enumerate().map(|(idx, p)| (rating.rating(p), idx)).collect();
        // Stable: equal ratings keep input order
        ranked.sort_by(|x, y| y.0.total_cmp(&x.0));

        let mut on_a = vec![false; pool.len()];
        for (_, idx) in ranked.iter().step_by(2) {
            on_a[*idx] = true;
        }

        let mut team_a = Vec::with_capacity(pool.len().div_ceil(2));
        let mut team_b = Vec::with_capacity(pool.len() / 2);
        for (p, a) in pool.iter().zip(on_a) {
            if a {
                team_a.push(*p);
            } else {
                team_b.push(*p);
            }
        }
        (team_a, team_b)
    }

    fn refine<'a>(
        &self,
        team_a: &mut [&'a ParticipantStats],
        team_b: &mut [&'a ParticipantStats],
    ) -> SearchStats {
        let mut stats = SearchStats::default();

        for iteration in 0..self.max_iterations {
            stats.iterations += 1;
            let gap = self.gap(team_a, team_b);
            let mut improved = false;

            'scan: for i in 0..team_a.len() {
                for j in 0..team_b.len() {
                    std::mem::swap(&mut team_a[i], &mut team_b[j]);
                    let new_gap = self.gap(team_a, team_b);
                    if new_gap < gap {
                        debug!(iteration, i, j, gap, new_gap, "swap accepted");
                        improved = true;
                        stats.swaps += 1;
                        break 'scan;
                    }
                    std::mem::swap(&mut team_a[i], &mut team_b[j]);
                }
            }

            if !improved {
                stats.converged = true;
                break;
            }
        }

        stats
    }

    fn gap(&self, team_a: &[&ParticipantStats], team_b: &[&ParticipantStats]) -> f64 {
        (self.strength.strength(team_a) - self.strength.strength(team_b)).abs()
    }
}

/// Size check first, then per-record validation
pub fn validate_pool(pool: &[&ParticipantStats]) -> Result<()> {
    if pool.len() < MIN_POOL_SIZE {
        return Err(BalanceError::InsufficientParticipants { found: pool.len() });
    }

    for p in pool {
        ParticipantValidator::validate(p).map_err(|source| {
            tracing::warn!(id = %p.id, error = %source, "rejected participant");
            BalanceError::InvalidParticipant { id: p.id.clone(), source }
        })?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Position, ValidationError};
    use std::collections::HashSet;

    fn player(id: &str, position: Position, rating: f64) -> ParticipantStats {
        ParticipantStats::new(id, id, position, rating)
    }

    fn ids(team: &[&ParticipantStats]) -> Vec<String> {
        team.iter().map(|p| p.id.clone()).collect()
    }

    #[test]
    fn test_empty_and_single_pools_rejected() {
        let partitioner = Partitioner::default();
        assert!(matches!(
            partitioner.partition_slice(&[]),
            Err(BalanceError::InsufficientParticipants { found: 0 })
        ));
        let solo = [player("a", Position::Forward, 3.0)];
        assert!(matches!(
            partitioner.partition_slice(&solo),
            Err(BalanceError::InsufficientParticipants { found: 1 })
        ));
    }

    #[test]
    fn test_invalid_record_rejected_with_id() {
        let pool = [player("ok", Position::Forward, 3.0), player("bad", Position::Defender, 7.0)];
        match Partitioner::default().partition_slice(&pool) {
            Err(BalanceError::InvalidParticipant { id, source }) => {
                assert_eq!(id, "bad");
                assert_eq!(source, ValidationError::RatingOutOfRange(7.0));
            }
            other => panic!("expected InvalidParticipant, got {other:?}"),
        }
    }

    #[test]
    fn test_two_player_pool() {
        let pool = [player("low", Position::Defender, 2.0), player("high", Position::Forward, 4.0)];
        let part = Partitioner::default().partition_slice(&pool).unwrap();
        assert_eq!(ids(&part.team_a), vec!["high"]);
        assert_eq!(ids(&part.team_b), vec!["low"]);
        // Only candidate swap mirrors the gap, never strictly smaller
        assert_eq!(part.search.swaps, 0);
        assert!(part.search.converged);
    }

    #[test]
    fn test_seed_split_alternates_by_rating() {
        // Same position everywhere so strength is mean rating + constants
        let pool: Vec<ParticipantStats> = [1.0, 5.0, 3.0, 4.0, 2.0]
            .iter()
            .enumerate()
            .map(|(i, r)| player(&format!("p{i}"), Position::Midfielder, *r))
            .collect();
        let refs: Vec<&ParticipantStats> = pool.iter().collect();
        let (a, b) = Partitioner::default().seed_split(&refs);
        // Ranked: p1(5) p3(4) p2(3) p4(2) p0(1); teams listed in pool order
        assert_eq!(ids(&a), vec!["p0", "p1", "p2"]);
        assert_eq!(ids(&b), vec!["p3", "p4"]);
    }

    #[test]
    fn test_equal_ratings_keep_input_order() {
        let pool: Vec<ParticipantStats> =
            (0..4).map(|i| player(&format!("p{i}"), Position::Defender, 3.0)).collect();
        let refs: Vec<&ParticipantStats> = pool.iter().collect();
        let (a, b) = Partitioner::default().seed_split(&refs);
        assert_eq!(ids(&a), vec!["p0", "p2"]);
        assert_eq!(ids(&b), vec!["p1", "p3"]);
    }

    #[test]
    fn test_refinement_reduces_gap() {
        // Seed gives A = {5.0, 3.0, 1.0} (GK, FW, FW) and B = {4.0, 2.0}
        let pool = vec![
            player("a", Position::Goalkeeper, 5.0),
            player("b", Position::Defender, 4.0),
            player("c", Position::Forward, 3.0),
            player("d", Position::Defender, 2.0),
            player("e", Position::Forward, 1.0),
        ];
        let refs: Vec<&ParticipantStats> = pool.iter().collect();
        let partitioner = Partitioner::default();
        let (seed_a, seed_b) = partitioner.seed_split(&refs);
        let seed_gap = partitioner.gap(&seed_a, &seed_b);

        let part = partitioner.partition(&refs).unwrap();
        let final_gap = partitioner.gap(&part.team_a, &part.team_b);
        assert!(final_gap <= seed_gap);
        assert!(part.search.iterations <= DEFAULT_MAX_ITERATIONS);
    }

    fn midfielders(ratings: &[f64]) -> Vec<ParticipantStats> {
        ratings
            .iter()
            .enumerate()
            .map(|(i, r)| player(&format!("p{i}"), Position::Midfielder, *r))
            .collect()
    }

    #[test]
    fn test_single_swap_hand_computed() {
        // One position and no history, so gap = |mean(A) - mean(B)|
        let pool = midfielders(&[5.0, 4.0, 3.0, 0.0]);
        let part = Partitioner::default().partition_slice(&pool).unwrap();

        // Seed A = [p0 5, p2 3] mean 4, B = [p1 4, p3 0] mean 2, gap 2.
        // First pair (p0, p1) gives A = [p1, p2] 3.5, B = [p0, p3] 2.5, gap 1.
        // No single swap from there gets under 1.
        assert_eq!(ids(&part.team_a), vec!["p1", "p2"]);
        assert_eq!(ids(&part.team_b), vec!["p0", "p3"]);
        assert_eq!(part.search, SearchStats { iterations: 2, swaps: 1, converged: true });
    }

    #[test]
    fn test_first_improving_swap_taken_in_slot_order() {
        let pool = midfielders(&[3.0, 0.5, 5.0, 2.0, 1.0, 1.5]);
        let partitioner = Partitioner::default();
        let refs: Vec<&ParticipantStats> = pool.iter().collect();

        // Ranked p2 p0 p3 p5 p4 p1: A = [p2, p3, p4] 8/3, B = [p0, p1, p5] 5/3
        let (seed_a, seed_b) = partitioner.seed_split(&refs);
        assert_eq!(ids(&seed_a), vec!["p2", "p3", "p4"]);
        assert_eq!(ids(&seed_b), vec!["p0", "p1", "p5"]);

        // Iteration 1 takes slot (0, 0), p2 <-> p0: gap 1 -> 1/3, although
        // slot (1, 1) would reach 0 at once. Iteration 2 scans on to slot
        // (2, 2), p4 <-> p5: A = {3, 2, 1.5}, B = {5, 0.5, 1}, gap 0.
        let part = partitioner.partition(&refs).unwrap();
        assert_eq!(ids(&part.team_a), vec!["p0", "p3", "p5"]);
        assert_eq!(ids(&part.team_b), vec!["p2", "p1", "p4"]);
        assert_eq!(part.search, SearchStats { iterations: 3, swaps: 2, converged: true });
        assert_eq!(partitioner.gap(&part.team_a, &part.team_b), 0.0);
    }

    #[test]
    fn test_iteration_cap_respected() {
        let pool: Vec<ParticipantStats> = (0..12)
            .map(|i| {
                let pos = Position::ALL[i % Position::ALL.len()];
                player(&format!("p{i}"), pos, (i as f64 * 0.37) % 5.0)
            })
            .collect();
        let part = Partitioner::new(TeamStrengthModel::default(), 1).partition_slice(&pool).unwrap();
        assert_eq!(part.search.iterations, 1);
        assert!(part.search.swaps <= 1);
    }

    #[test]
    fn test_partition_is_deterministic_and_complete() {
        let pool: Vec<ParticipantStats> = (0..9)
            .map(|i| {
                let pos = Position::ALL[i % Position::ALL.len()];
                player(&format!("p{i}"), pos, 1.0 + (i as f64 * 0.45) % 4.0)
                    .with_history(i as u32 * 7, i as u32, 2, 0.5)
            })
            .collect();
        let partitioner = Partitioner::default();
        let first = partitioner.partition_slice(&pool).unwrap();
        let second = partitioner.partition_slice(&pool).unwrap();

        assert_eq!(ids(&first.team_a), ids(&second.team_a));
        assert_eq!(ids(&first.team_b), ids(&second.team_b));
        assert_eq!(first.team_a.len(), 5);
        assert_eq!(first.team_b.len(), 4);

        let all: HashSet<String> =
            ids(&first.team_a).into_iter().chain(ids(&first.team_b)).collect();
        assert_eq!(all.len(), pool.len());
    }

    #[test]
    fn test_partition_borrows_without_mutating() {
        let pool = vec![player("a", Position::Forward, 4.0), player("b", Position::Forward, 3.0)];
        let snapshot = pool.clone();
        let part = Partitioner::default().partition_slice(&pool).unwrap();
        assert!(std::ptr::eq(part.team_a[0], &pool[0]));
        assert_eq!(pool, snapshot);
    }
}
