//! Error types shared across the crate.
//!
//! File-shaped failures get their own variants so the CLI can report a
//! missing primer file, a syntax error, and a wrong top-level shape as
//! three different messages.

use std::path::PathBuf;

use thiserror::Error;

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, BisociateError>;

/// All failure modes surfaced to the CLI
#[derive(Debug, Error)]
pub enum BisociateError {
    /// Primer file does not exist at the given path
    #[error("primer file not found: {path:?}")]
    PrimerNotFound { path: PathBuf },

    /// Primer file exists but could not be read
    #[error("failed to read primer file {path:?}: {source}")]
    PrimerRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Primer file is not valid YAML
    #[error("failed to parse primer file {path:?}: {source}")]
    PrimerParse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    /// Primer file parsed but does not hold a top-level list of strings
    #[error("primer file {path:?} has the wrong shape: {detail}")]
    PrimerSchema { path: PathBuf, detail: String },

    /// Bad CLI-supplied configuration (missing problem, out-of-range values)
    #[error("{0}")]
    Config(String),

    /// The inference service rejected or failed a request
    #[error("inference request failed: {0}")]
    Inference(String),
}
