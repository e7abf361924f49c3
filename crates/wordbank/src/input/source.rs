//! Data source metadata.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Metadata about a vocabulary file that was read or written.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceMetadata {
    /// File name without path.
    pub file: String,
    /// Full path to the file.
    pub path: PathBuf,
    /// SHA-256 hash of the file contents.
    pub hash: String,
    /// File size in bytes.
    pub size_bytes: u64,
    /// Number of records after flattening.
    pub record_count: usize,
    /// When the file was read or written.
    pub loaded_at: DateTime<Utc>,
}

impl SourceMetadata {
    /// Build metadata from the raw bytes of a file.
    pub fn from_contents(path: PathBuf, contents: &[u8]) -> Self {
        let file = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self {
            file,
            path,
            hash: content_hash(contents),
            size_bytes: contents.len() as u64,
            record_count: 0,
            loaded_at: Utc::now(),
        }
    }

    /// Set the record count.
    pub fn with_record_count(mut self, count: usize) -> Self {
        self.record_count = count;
        self
    }
}

/// Hash file contents as `sha256:<hex>`.
pub fn content_hash(contents: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(contents);
    format!("sha256:{:x}", hasher.finalize())
}
