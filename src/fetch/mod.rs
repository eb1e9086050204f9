pub mod dataset;

use crate::error::{LeaderboardError, Result};
use dataset::DatasetResponse;
use std::path::Path;
use tracing::{debug, info};

/// Public datasets-server query serving the leaderboard snapshot.
pub const DEFAULT_DATASET_URL: &str = "https://datasets-server.huggingface.co/rows?dataset=GSMA/leaderboard&config=default&split=train&offset=0&length=100";

/// One GET against the dataset endpoint. No retry, no backoff; transport
/// failures and non-OK statuses surface as a single fetch error.
pub fn fetch_snapshot(url: &str) -> Result<DatasetResponse> {
    debug!(url, "requesting leaderboard snapshot");
    let response = ureq::get(url)
        .call()
        .map_err(|e| LeaderboardError::Fetch(e.to_string()))?;
    let snapshot: DatasetResponse = response
        .into_json()
        .map_err(|e| LeaderboardError::Fetch(format!("invalid response body: {e}")))?;
    info!(rows = snapshot.rows.len(), "snapshot fetched");
    Ok(snapshot)
}

/// Read a snapshot from a local JSON file (the `--input` path).
pub fn read_snapshot(path: &Path) -> Result<DatasetResponse> {
    let content = std::fs::read_to_string(path)?;
    let snapshot = serde_json::from_str(&content)?;
    Ok(snapshot)
}
