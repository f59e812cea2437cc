//! Error types for texture operations.

use thiserror::Error;

/// Error type for texture operations.
#[derive(Error, Debug)]
pub enum OpsError {
    /// Pyramid generation was requested from a level that does not exist.
    #[error("invalid start level {start_level} for texture with {num_levels} levels")]
    InvalidStartLevel {
        /// Requested start level
        start_level: usize,
        /// Number of levels actually present
        num_levels: usize,
    },

    /// A core type invariant was violated.
    #[error(transparent)]
    Core(#[from] tex_core::Error),
}

/// Result type for texture operations.
pub type OpsResult<T> = Result<T, OpsError>;
