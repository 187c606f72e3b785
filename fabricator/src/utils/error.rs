//! Error types
//!
//! Every failure carries the path of the offending store file so a run
//! that dies says which file and why. Nothing is retried; this is a
//! one-shot tool and fail-fast is the policy.

use std::path::PathBuf;

/// Result alias used throughout the fabricator
pub type AppResult<T> = Result<T, SeedError>;

/// Fabricator error
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Generation picks reporters uniformly from the roster, so an empty
    /// roster is a precondition violation, not a degenerate run.
    #[error("user roster {path} is empty; seed at least one user first")]
    EmptyRoster { path: PathBuf },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
