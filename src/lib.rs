//! Podium: in-memory tie-aware leaderboard
//!
//! Re-exports the library surface. The HTTP binary lives in `podium-server`.

pub use podium_core::limits;
pub use podium_core::{Error, Participant, Result, ScoreRange};
pub use podium_index::{RankedIndex, SeedConfig};
