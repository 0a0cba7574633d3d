//! Participant record and rating bounds

use serde::{Deserialize, Serialize};

/// A single leaderboard participant.
///
/// The record is a single logical entity: the ordered sequence and the
/// name mapping both refer to the same arena slot, never to copies.
/// `username` is immutable after seeding, `rating` is mutated by update
/// batches, and `rank` is written only by the ranking pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    /// Unique name: a lowercase base name plus a `_<sequence>` suffix.
    pub username: String,
    /// Current rating.
    pub rating: u32,
    /// Competition-style rank. Participants with equal ratings share it;
    /// the next distinct rating takes its 1-based sorted position.
    pub rank: u32,
}

impl Participant {
    /// Create an unranked record. Rank stays 0 until the first ranking pass.
    pub fn new(username: impl Into<String>, rating: u32) -> Self {
        Self {
            username: username.into(),
            rating,
            rank: 0,
        }
    }
}

/// Inclusive rating bounds used for the initial seed and every perturbation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreRange {
    /// Lowest rating a draw can produce.
    pub min: u32,
    /// Highest rating a draw can produce.
    pub max: u32,
}

impl ScoreRange {
    /// Construct a range. `min` must not exceed `max`; a draw from an
    /// inverted range panics at the call site.
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// Whether `rating` falls inside the bounds.
    pub fn contains(&self, rating: u32) -> bool {
        self.min <= rating && rating <= self.max
    }
}
