//! Fixed defaults for population, cadence, and paging
//!
//! Every tunable lives here so the index, the updater, and the server agree
//! on one set of numbers. The server may override population and cadence via
//! environment variables; the paging sizes are part of the query contract.

use crate::types::ScoreRange;
use std::time::Duration;

/// Number of participants seeded at startup.
pub const DEFAULT_POPULATION: usize = 10_000;

/// Rating bounds for the initial seed and every perturbation draw.
pub const DEFAULT_RATING_RANGE: ScoreRange = ScoreRange::new(100, 5000);

/// Records returned by the leaderboard page (fewer if the population is
/// smaller).
pub const LEADERBOARD_PAGE_SIZE: usize = 100;

/// Partial matches a search returns beyond the exact hit.
pub const SEARCH_PARTIAL_LIMIT: usize = 10;

/// Records perturbed per update batch.
pub const DEFAULT_UPDATE_BATCH: usize = 50;

/// Interval between update batches.
pub const DEFAULT_UPDATE_INTERVAL: Duration = Duration::from_secs(10);

/// Listening port when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 8080;

/// Base names usernames are drawn from at seed time. Draws repeat; the
/// unique sequence suffix keeps usernames distinct.
pub const DEFAULT_NAME_POOL: &[&str] = &[
    "rahul", "arjun", "priya", "vikram", "anisha", "rohan", "sara", "kabir",
];
