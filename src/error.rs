//! Errors raised while probing the AnimeThemes API.

use std::path::PathBuf;
use thiserror::Error;

/// Failures that end a probe run.
///
/// A non-200 status is not one of these; it is reported as
/// [`crate::probe::ProbeOutcome::Rejected`].
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("Invalid API URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Malformed JSON response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Failed to write response snapshot {}: {source}", .path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write report: {0}")]
    Report(#[from] std::io::Error),
}
