//! Error types for construction and persistence.
//!
//! Stepping never fails. Only construction parameters and the state file
//! boundary produce errors.

use std::path::PathBuf;

use thiserror::Error;

/// Invalid construction parameters.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Size supplied by a caller was zero or negative
    #[error("size must be positive, got {0}")]
    NonPositiveSize(i64),

    /// Zero-length automaton or grid requested through the typed API
    #[error("size must be at least 1")]
    EmptySize,

    /// Rule number outside [0, 255] that is not the random sentinel
    #[error("rule number must be in 0..=255 or -1 for random, got {0}")]
    RuleOutOfRange(i64),

    /// Side length whose N×N cell count does not fit in memory addressing
    #[error("grid side {0} is too large")]
    SizeTooLarge(usize),
}

/// Failure reading or writing a persisted automaton state.
#[derive(Error, Debug)]
pub enum PersistError {
    #[error("state file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
