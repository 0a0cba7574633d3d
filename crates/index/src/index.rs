//! The concurrent ranked index

use std::time::Instant;

use parking_lot::RwLock;
use podium_core::{Error, Participant, Result, ScoreRange};
use rand::Rng;
use tracing::{debug, info};

use crate::arena::RecordArena;
use crate::seed::{self, SeedConfig};

/// Concurrent, tie-aware ranked index over a fixed participant population.
///
/// Readers take the shared side of the lock and receive cloned snapshots.
/// The periodic updater takes the exclusive side once per batch — the
/// perturbation and the rank recomputation happen under a single
/// acquisition, so readers observe either the pre-batch or the post-batch
/// state, never a partially sorted one.
///
/// Constructed explicitly and shared via `Arc`; there is no process-wide
/// global.
pub struct RankedIndex {
    inner: RwLock<RecordArena>,
}

impl RankedIndex {
    /// Build and rank the initial population. Called once at startup,
    /// before the index is first queried.
    pub fn seed<R: Rng>(config: &SeedConfig, rng: &mut R) -> Self {
        let records = seed::generate(config, rng);
        let arena = RecordArena::new(records, config.rating_range);
        info!(population = arena.len(), "seeded ranked index");
        Self {
            inner: RwLock::new(arena),
        }
    }

    /// Build the index from explicit records, for callers that manage their
    /// own population instead of random seeding. Usernames must be unique.
    /// Ranks are computed before the value is returned.
    pub fn from_records(records: Vec<Participant>, rating_range: ScoreRange) -> Self {
        Self {
            inner: RwLock::new(RecordArena::new(records, rating_range)),
        }
    }

    /// Number of participants. Fixed for the process lifetime.
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Whether the population is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// First `min(limit, population)` records in descending rating order,
    /// each carrying its current rank. A limit beyond the population is not
    /// an error; the caller simply gets the whole board.
    pub fn top(&self, limit: usize) -> Vec<Participant> {
        self.inner.read().top(limit)
    }

    /// Exact lookup by username. A miss is an absent result, not an error.
    pub fn lookup(&self, username: &str) -> Option<Participant> {
        self.inner.read().lookup(username).cloned()
    }

    /// Case-insensitive search: the exact match (if any) first, then up to
    /// `max_partials` other records whose name contains the fragment,
    /// scanned in rating order.
    ///
    /// The fragment is trimmed and lowercased here; empty after trimming is
    /// an input error. The whole scan runs under one shared acquisition, so
    /// a single result set never mixes pre- and post-batch records.
    pub fn search(&self, fragment: &str, max_partials: usize) -> Result<Vec<Participant>> {
        let query = fragment.trim().to_lowercase();
        if query.is_empty() {
            return Err(Error::EmptyQuery);
        }
        Ok(self.inner.read().search(&query, max_partials))
    }

    /// One update batch: perturb `k` records (uniform draws with
    /// replacement), then recompute every rank, under a single exclusive
    /// acquisition.
    pub fn run_update_batch<R: Rng>(&self, k: usize, rng: &mut R) {
        let start = Instant::now();
        {
            let mut arena = self.inner.write();
            arena.apply_score_updates(k, rng);
            arena.recompute_ranks();
        }
        debug!(
            batch = k,
            elapsed_us = start.elapsed().as_micros() as u64,
            "applied score updates and recomputed ranks"
        );
    }

    /// Re-run the ranking pass without touching any rating. Idempotent: the
    /// stable sort leaves an already-sorted sequence untouched.
    pub fn recompute_ranks(&self) {
        self.inner.write().recompute_ranks();
    }

    /// Verify that the ordered sequence and the name mapping cover the same
    /// record set. A failure means the single-writer discipline was broken;
    /// callers must treat it as fatal, not repair it.
    pub fn verify_consistency(&self) -> Result<()> {
        self.inner.read().check_views()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const RANGE: ScoreRange = ScoreRange::new(100, 5000);

    fn sample_index() -> RankedIndex {
        RankedIndex::from_records(
            vec![
                Participant::new("alice_3", 1200),
                Participant::new("alice_30", 4000),
                Participant::new("alice_31", 900),
                Participant::new("bob_7", 5000),
            ],
            RANGE,
        )
    }

    #[test]
    fn test_ranks_for_mixed_multiset() {
        // Ratings {50, 80, 80, 30}: rank = 1 + count of strictly greater.
        let index = RankedIndex::from_records(
            vec![
                Participant::new("a_0", 50),
                Participant::new("a_1", 80),
                Participant::new("a_2", 80),
                Participant::new("a_3", 30),
            ],
            ScoreRange::new(0, 100),
        );
        assert_eq!(index.lookup("a_0").unwrap().rank, 3);
        assert_eq!(index.lookup("a_1").unwrap().rank, 1);
        assert_eq!(index.lookup("a_2").unwrap().rank, 1);
        assert_eq!(index.lookup("a_3").unwrap().rank, 4);
    }

    #[test]
    fn test_top_limit_zero_is_empty() {
        assert!(sample_index().top(0).is_empty());
    }

    #[test]
    fn test_top_beyond_population_returns_population() {
        let index = sample_index();
        assert_eq!(index.top(1_000).len(), 4);
    }

    #[test]
    fn test_search_exact_match_first() {
        let index = sample_index();
        let results = index.search("alice_3", 10).unwrap();
        let names: Vec<&str> = results.iter().map(|p| p.username.as_str()).collect();
        // Exact hit first despite its low rating; partials in rating order,
        // excluding the exact match itself.
        assert_eq!(names, vec!["alice_3", "alice_30", "alice_31"]);
    }

    #[test]
    fn test_search_normalizes_case_and_whitespace() {
        let index = sample_index();
        let results = index.search("  ALICE_3 ", 10).unwrap();
        assert_eq!(results[0].username, "alice_3");
    }

    #[test]
    fn test_search_without_exact_match() {
        let index = sample_index();
        let results = index.search("alice", 10).unwrap();
        let names: Vec<&str> = results.iter().map(|p| p.username.as_str()).collect();
        assert_eq!(names, vec!["alice_30", "alice_3", "alice_31"]);
    }

    #[test]
    fn test_search_zero_results_is_ok() {
        let index = sample_index();
        assert!(index.search("zelda", 10).unwrap().is_empty());
    }

    #[test]
    fn test_search_empty_query_rejected() {
        let index = sample_index();
        assert!(matches!(index.search("", 10), Err(Error::EmptyQuery)));
        assert!(matches!(index.search("   ", 10), Err(Error::EmptyQuery)));
    }

    #[test]
    fn test_batch_preserves_population_and_consistency() {
        let index = sample_index();
        let mut rng = StdRng::seed_from_u64(21);
        for _ in 0..10 {
            index.run_update_batch(50, &mut rng);
        }
        assert_eq!(index.len(), 4);
        index.verify_consistency().unwrap();
    }

    #[test]
    fn test_recompute_is_idempotent() {
        let index = sample_index();
        let first = index.top(4);
        index.recompute_ranks();
        index.recompute_ranks();
        assert_eq!(index.top(4), first);
    }

    #[test]
    fn test_seeded_index_is_ranked_and_consistent() {
        let config = SeedConfig {
            population: 250,
            ..SeedConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(22);
        let index = RankedIndex::seed(&config, &mut rng);

        assert_eq!(index.len(), 250);
        index.verify_consistency().unwrap();

        let top = index.top(250);
        assert_eq!(top[0].rank, 1);
        for pair in top.windows(2) {
            assert!(pair[0].rating >= pair[1].rating);
        }
    }
}
