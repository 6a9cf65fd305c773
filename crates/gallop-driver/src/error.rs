//! Error types for gallop-driver

use thiserror::Error;

/// Driver error type
#[derive(Debug, Error)]
pub enum Error {
    /// The round was still running after the configured number of ticks
    #[error("round {round} did not finish within {limit} ticks")]
    TickLimitExceeded { round: u32, limit: u64 },

    /// Core error
    #[error("core error: {0}")]
    Core(#[from] gallop_core::Error),
}

/// Result type for driver operations
pub type Result<T> = std::result::Result<T, Error>;
