//! Record arena with the two coupled leaderboard views
//!
//! The arena owns every `Participant`; `by_rating` and `by_name` hold only
//! indices into it. Not thread-safe on its own — `RankedIndex` wraps it in
//! the reader/writer lock and enforces the batch discipline.

use std::collections::HashMap;

use podium_core::{Error, Participant, Result, ScoreRange};
use rand::Rng;

use crate::rank::competition_ranks;

pub(crate) struct RecordArena {
    /// Ownership arena. Slots are never added or removed after construction.
    records: Vec<Participant>,
    /// Arena indices sorted by descending rating. Stable sort, so the order
    /// among equal ratings does not change across a single invocation.
    by_rating: Vec<u32>,
    /// Username -> arena index.
    by_name: HashMap<String, u32>,
    /// Bounds for perturbation draws.
    rating_range: ScoreRange,
}

impl RecordArena {
    /// Build the arena and both views, then run the initial ranking pass.
    ///
    /// Duplicate usernames would collapse in `by_name` and surface later as
    /// a `ViewDesync`; callers must pass unique names.
    pub(crate) fn new(records: Vec<Participant>, rating_range: ScoreRange) -> Self {
        let by_rating: Vec<u32> = (0..records.len() as u32).collect();
        let by_name: HashMap<String, u32> = records
            .iter()
            .enumerate()
            .map(|(i, p)| (p.username.clone(), i as u32))
            .collect();
        let mut arena = Self {
            records,
            by_rating,
            by_name,
            rating_range,
        };
        arena.recompute_ranks();
        arena
    }

    pub(crate) fn len(&self) -> usize {
        self.records.len()
    }

    /// Perturb `k` records drawn uniformly with replacement; a record drawn
    /// twice keeps the last draw. Leaves the sorted and rank invariants
    /// violated until the next `recompute_ranks`.
    pub(crate) fn apply_score_updates<R: Rng>(&mut self, k: usize, rng: &mut R) {
        if self.records.is_empty() {
            return;
        }
        for _ in 0..k {
            let idx = rng.gen_range(0..self.records.len());
            self.records[idx].rating =
                rng.gen_range(self.rating_range.min..=self.rating_range.max);
        }
    }

    /// Stable re-sort of `by_rating` by descending rating, then one forward
    /// pass assigning competition ranks.
    pub(crate) fn recompute_ranks(&mut self) {
        let records = &self.records;
        self.by_rating.sort_by(|&a, &b| {
            records[b as usize]
                .rating
                .cmp(&records[a as usize].rating)
        });

        let sorted_ratings: Vec<u32> = self
            .by_rating
            .iter()
            .map(|&i| self.records[i as usize].rating)
            .collect();
        let ranks = competition_ranks(&sorted_ratings);
        for (pos, &i) in self.by_rating.iter().enumerate() {
            self.records[i as usize].rank = ranks[pos];
        }
    }

    /// First `min(limit, population)` records in rating order, cloned out so
    /// a later batch cannot mutate what the caller holds.
    pub(crate) fn top(&self, limit: usize) -> Vec<Participant> {
        self.by_rating
            .iter()
            .take(limit)
            .map(|&i| self.records[i as usize].clone())
            .collect()
    }

    pub(crate) fn lookup(&self, username: &str) -> Option<&Participant> {
        self.by_name
            .get(username)
            .map(|&i| &self.records[i as usize])
    }

    /// Exact match first (if any), then up to `max_partials` substring
    /// matches scanned in rating order, excluding the exact match. `query`
    /// must already be trimmed and lowercased.
    pub(crate) fn search(&self, query: &str, max_partials: usize) -> Vec<Participant> {
        let mut results = Vec::new();
        if let Some(exact) = self.lookup(query) {
            results.push(exact.clone());
        }

        let mut partials = 0;
        for &i in &self.by_rating {
            if partials >= max_partials {
                break;
            }
            let record = &self.records[i as usize];
            let lowered = record.username.to_lowercase();
            if lowered.contains(query) && lowered != query {
                results.push(record.clone());
                partials += 1;
            }
        }
        results
    }

    /// Verify that both views cover exactly the arena's record set: same
    /// cardinality, `by_rating` a permutation of arena indices, every name
    /// mapped to the slot that carries it.
    pub(crate) fn check_views(&self) -> Result<()> {
        let desync = Error::ViewDesync {
            sequence: self.by_rating.len(),
            mapping: self.by_name.len(),
        };

        if self.by_rating.len() != self.records.len() || self.by_name.len() != self.records.len()
        {
            return Err(desync);
        }

        let mut seen = vec![false; self.records.len()];
        for &i in &self.by_rating {
            match seen.get_mut(i as usize) {
                Some(slot) if !*slot => *slot = true,
                _ => return Err(desync),
            }
        }

        for (name, &i) in &self.by_name {
            let held = self.records.get(i as usize).map(|p| p.username.as_str());
            if held != Some(name.as_str()) {
                return Err(desync);
            }
        }
        Ok(())
    }
}
