//! Vocabulary file loader: read, strip, parse strictly, flatten.

use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::dataset::{flatten, Dataset};
use crate::error::{Result, WordbankError};

use super::source::SourceMetadata;
use super::strip::{Stripper, DEFAULT_EXPORT_PREFIX};

/// Parser configuration.
#[derive(Debug, Clone)]
pub struct ParserConfig {
    /// Export declaration removed before parsing.
    pub export_prefix: String,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            export_prefix: DEFAULT_EXPORT_PREFIX.to_string(),
        }
    }
}

/// Loads vocabulary files into a flat [`Dataset`].
#[derive(Debug, Clone)]
pub struct Parser {
    stripper: Stripper,
}

impl Parser {
    /// Create a parser with default configuration.
    pub fn new() -> Self {
        Self {
            stripper: Stripper::new(),
        }
    }

    /// Create a parser with custom configuration.
    pub fn with_config(config: &ParserConfig) -> Result<Self> {
        Ok(Self {
            stripper: Stripper::with_prefix(&config.export_prefix)?,
        })
    }

    /// Read a file and return its records with source metadata.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<(Dataset, SourceMetadata)> {
        let path = path.as_ref();

        let contents = fs::read(path).map_err(|e| WordbankError::io(path, e))?;
        let text = String::from_utf8(contents).map_err(|source| WordbankError::Encoding {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), bytes = text.len(), "read vocabulary file");

        let dataset = self.parse_str(&text)?;
        let source = SourceMetadata::from_contents(path.to_path_buf(), text.as_bytes())
            .with_record_count(dataset.len());

        Ok((dataset, source))
    }

    /// Strip, parse and flatten text already in memory.
    pub fn parse_str(&self, raw: &str) -> Result<Dataset> {
        let stripped = self.stripper.strip(raw);
        let root = parse_strict(&stripped)?;
        let dataset = flatten(root)?;
        debug!(records = dataset.len(), "flattened dataset");
        Ok(dataset)
    }

    /// Access the stripper this parser uses.
    pub fn stripper(&self) -> &Stripper {
        &self.stripper
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse strict JSON, reporting the failing line on error.
///
/// Line and column are 1-based, the column counted in characters;
/// `context` is the trimmed text of that line.
pub fn parse_strict(text: &str) -> Result<Value> {
    serde_json::from_str(text).map_err(|e| {
        let line = e.line();
        let line_text = line
            .checked_sub(1)
            .and_then(|idx| text.split('\n').nth(idx))
            .unwrap_or_default();

        WordbankError::Parse {
            line,
            column: char_column(line_text, e.column()),
            message: strip_position(&e.to_string()),
            context: line_text.trim().to_string(),
        }
    })
}

/// Convert serde_json's byte column into a character column on `line`.
///
/// A column inside a multi-byte character snaps to that character; bytes
/// past the end of the line count one each.
fn char_column(line: &str, byte_column: usize) -> usize {
    let Some(offset) = byte_column.checked_sub(1) else {
        return 0;
    };
    let mut end = offset.min(line.len());
    while !line.is_char_boundary(end) {
        end -= 1;
    }
    line[..end].chars().count() + 1 + offset.saturating_sub(line.len())
}

/// serde_json appends " at line X column Y"; the error carries those separately.
fn strip_position(message: &str) -> String {
    match message.rfind(" at line ") {
        Some(idx) => message[..idx].to_string(),
        None => message.to_string(),
    }
}
