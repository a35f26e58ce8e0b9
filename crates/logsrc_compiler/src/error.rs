//! Error types for compiler operations.

use thiserror::Error;

/// Errors that can occur while building stanza tables or compiling.
///
/// None of these is reachable from [`crate::Compiler::compile`] with the
/// built-in table; they surface from custom tables and artifact handling.
#[derive(Debug, Error)]
pub enum Error {
    /// A stanza definition has a blank template.
    #[error("stanza '{id}' has an empty template")]
    EmptyTemplate {
        /// Id of the offending definition.
        id: String,
    },

    /// Two definitions share a rank, leaving their order undefined.
    #[error("stanzas '{first}' and '{second}' share rank {rank}")]
    DuplicateRank {
        /// The shared rank.
        rank: u32,
        /// Id of the first definition with this rank.
        first: String,
        /// Id of the second definition with this rank.
        second: String,
    },

    /// Two definitions share an id.
    #[error("duplicate stanza id '{0}'")]
    DuplicateId(String),

    /// JSON serialization error.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Lockfile read/write error.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type alias for compiler operations.
pub type Result<T> = std::result::Result<T, Error>;
