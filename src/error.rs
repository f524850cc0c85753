//! Error types

use std::path::PathBuf;
use thiserror::Error;

/// Why a message produced no offer. These are normal outcomes, not faults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ExtractError {
    /// Rejected by the validity gate
    #[error("message is not an offer candidate")]
    NoCandidate,
    /// Every description strategy fell through to the sentinel
    #[error("no product description could be derived")]
    UnresolvedDescription,
}

impl ExtractError {
    /// Stable snake_case code used in JSON output.
    pub fn code(&self) -> &'static str {
        match self {
            ExtractError::NoCandidate => "no_candidate",
            ExtractError::UnresolvedDescription => "unresolved_description",
        }
    }
}

/// Failures loading the relay configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}
