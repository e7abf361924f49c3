//! Render a dataset back to an `export default` data file.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::dataset::Dataset;
use crate::error::{Result, WordbankError};
use crate::input::DEFAULT_EXPORT_PREFIX;

/// Writes datasets as indented JSON behind an export declaration.
#[derive(Debug, Clone)]
pub struct Serializer {
    prefix: String,
    indent: String,
}

impl Serializer {
    /// `export default` with 4-space indentation.
    pub fn new() -> Self {
        Self::with_options(DEFAULT_EXPORT_PREFIX, 4)
    }

    pub fn with_options(prefix: &str, indent_width: usize) -> Self {
        Self {
            prefix: prefix.to_string(),
            indent: " ".repeat(indent_width),
        }
    }

    /// Render the full file text. Non-ASCII characters are written literally.
    pub fn render(&self, dataset: &Dataset) -> Result<String> {
        let body = to_pretty_json(dataset, self.indent.as_bytes())?;
        Ok(format!("{} {}", self.prefix, body))
    }

    /// Render and write to `path`, replacing any existing file.
    ///
    /// Nothing touches the disk until rendering has succeeded.
    pub fn write(&self, dataset: &Dataset, path: impl AsRef<Path>) -> Result<String> {
        let text = self.render(dataset)?;
        write_text(path.as_ref(), &text)?;
        Ok(text)
    }
}

impl Default for Serializer {
    fn default() -> Self {
        Self::new()
    }
}

/// Pretty-print any value with the given indent.
pub(crate) fn to_pretty_json<T: Serialize + ?Sized>(value: &T, indent: &[u8]) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(indent);
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Write text to a file, creating parent directories as needed.
pub(crate) fn write_text(path: &Path, text: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| WordbankError::io(parent, e))?;
        }
    }

    let mut file = File::create(path).map_err(|e| WordbankError::io(path, e))?;
    file.write_all(text.as_bytes())
        .map_err(|e| WordbankError::io(path, e))?;

    Ok(())
}
