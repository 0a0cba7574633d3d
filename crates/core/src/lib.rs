//! Core types for the podium leaderboard
//!
//! This crate defines the foundational pieces shared by the index and the
//! server:
//! - Participant: the single record type both leaderboard views share
//! - ScoreRange: inclusive rating bounds for seeding and perturbation
//! - Error: error taxonomy (invalid input, invariant violation, config)
//! - limits: fixed defaults for population, cadence, and paging

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod limits;
pub mod types;

pub use error::{Error, Result};
pub use types::{Participant, ScoreRange};
