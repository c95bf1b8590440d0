//! Timestamped JSON dumps of successful API responses.

use crate::error::ProbeError;
use chrono::{DateTime, Local};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::info;

pub const SNAPSHOT_PREFIX: &str = "anime_api_response_";

#[must_use]
pub fn snapshot_file_name(at: &DateTime<Local>) -> String {
    format!("{SNAPSHOT_PREFIX}{}.json", at.format("%Y%m%d_%H%M%S"))
}

/// Path for a snapshot taken at `at`. With no directory the bare file name is
/// returned, which resolves against the working directory.
#[must_use]
pub fn snapshot_path(dir: Option<&Path>, at: &DateTime<Local>) -> PathBuf {
    let name = snapshot_file_name(at);
    match dir {
        Some(dir) => dir.join(name),
        None => PathBuf::from(name),
    }
}

/// Writes `document` as 2-space indented JSON and returns where it went.
pub async fn write_snapshot(
    dir: Option<&Path>,
    document: &Value,
    at: &DateTime<Local>,
) -> Result<PathBuf, ProbeError> {
    let path = snapshot_path(dir, at);
    let content = serde_json::to_vec_pretty(document)?;

    fs::write(&path, content)
        .await
        .map_err(|source| ProbeError::Persist {
            path: path.clone(),
            source,
        })?;

    info!("Saved response snapshot to {}", path.display());
    Ok(path)
}
