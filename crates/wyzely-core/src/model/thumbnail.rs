// ── Camera thumbnail domain types ──

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::entity_id::MacAddress;

/// Record of one event thumbnail written to disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Thumbnail {
    /// Where the image was written.
    pub path: PathBuf,
    /// Source URL on the Wyze CDN.
    pub url: String,
    /// Camera the event belongs to.
    pub mac: MacAddress,
    /// Event timestamp, recovered from the file name.
    pub timestamp: DateTime<Utc>,
}
