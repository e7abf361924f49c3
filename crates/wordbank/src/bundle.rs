//! Merge several vocabulary files into one categorized row list.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Result, WordbankError};
use crate::input::SourceMetadata;
use crate::output::{to_pretty_json, write_text};
use crate::validation::DuplicateId;

/// One input of a bundle: a file and the category its rows get.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleSource {
    pub category: String,
    pub path: PathBuf,
}

impl BundleSource {
    pub fn new(category: impl Into<String>, path: impl Into<PathBuf>) -> Result<Self> {
        let category = category.into();
        if category.trim().is_empty() {
            return Err(WordbankError::Config(
                "bundle category must not be empty".to_string(),
            ));
        }
        Ok(Self {
            category,
            path: path.into(),
        })
    }
}

impl FromStr for BundleSource {
    type Err = WordbankError;

    /// Parse `CATEGORY=PATH`.
    fn from_str(s: &str) -> Result<Self> {
        let (category, path) = s.split_once('=').ok_or_else(|| {
            WordbankError::Config(format!("expected CATEGORY=PATH, got '{}'", s))
        })?;
        Self::new(category.trim(), path.trim())
    }
}

/// One row of the merged word list.
///
/// `word_id` and `word` are copied from the record as-is; a field the record
/// lacks is left out of the row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BundleRow {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word_id: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word: Option<Value>,
    pub category: String,
}

/// Rows from every source, plus the ids that collide across them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bundle {
    pub sources: Vec<SourceMetadata>,
    pub rows: Vec<BundleRow>,
    /// Ids used by more than one row, across all sources.
    pub conflicts: Vec<DuplicateId>,
}

impl Bundle {
    /// Number of rows carrying the given category.
    pub fn category_count(&self, category: &str) -> usize {
        self.rows.iter().filter(|r| r.category == category).count()
    }

    /// The rows as a JSON array, 2-space indented, non-ASCII kept literal.
    pub fn to_json(&self) -> Result<String> {
        to_pretty_json(&self.rows, b"  ")
    }

    /// Write the rows to `path`, replacing any existing file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let text = self.to_json()?;
        write_text(path.as_ref(), &text)
    }
}
