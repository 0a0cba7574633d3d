//! Concurrent ranked index for the podium leaderboard
//!
//! One arena of participant records with two coupled views over it: a
//! sequence ordered by descending rating (top-N and rank queries) and a
//! name-to-record mapping (O(1) exact lookup). Both views hold only arena
//! indices, so a rating mutation is visible through both without a
//! synchronization gap.
//!
//! A single reader/writer lock guards the arena. Query operations take the
//! shared side and hand out cloned snapshots; the periodic updater takes the
//! exclusive side exactly once per batch, covering the perturbation and the
//! rank recomputation together, so no reader ever observes updated ratings
//! with stale ranks.

#![warn(clippy::all)]

mod arena;
mod index;
mod rank;
mod seed;

pub use index::RankedIndex;
pub use seed::SeedConfig;
