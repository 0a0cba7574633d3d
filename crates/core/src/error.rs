//! Error types for the leaderboard
//!
//! Uses `thiserror` for automatic `Display` and `Error` implementations.
//!
//! The taxonomy is deliberately small: an empty search query is a client
//! error, a lookup miss is an absent result (`Option`, not an error), and a
//! view desync is an internal-consistency fault that callers must treat as
//! fatal rather than repair.

use thiserror::Error;

/// Result type alias used across the workspace
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the ranked index and the server boundary
#[derive(Debug, Error)]
pub enum Error {
    /// Search query was empty after trimming. Client error, never fatal.
    #[error("search query must not be empty")]
    EmptyQuery,

    /// The ordered sequence and the name mapping disagree on the record set.
    /// Unreachable under the single-writer discipline; fatal if detected.
    #[error("ranked index desync: {sequence} records in sequence, {mapping} in name map")]
    ViewDesync {
        /// Number of entries in the ordered sequence.
        sequence: usize,
        /// Number of entries in the name mapping.
        mapping: usize,
    },

    /// A configuration value was set but malformed. Fatal at startup.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
