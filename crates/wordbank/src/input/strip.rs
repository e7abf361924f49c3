//! Textual pre-pass that turns a JavaScript-flavored data literal into strict JSON.
//!
//! The pass is purely regex based and has two known blind spots that are kept
//! as is: a `//` inside a quoted string is treated as a comment, and a
//! trailing comma before a closing `}` is not repaired.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::Result;

/// Export declaration stripped by default.
pub const DEFAULT_EXPORT_PREFIX: &str = "export default";

static DEFAULT_EXPORT: Lazy<Regex> = Lazy::new(|| export_regex(DEFAULT_EXPORT_PREFIX).unwrap());

static LINE_COMMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"//.*").unwrap());

static TRAILING_COMMA: Lazy<Regex> = Lazy::new(|| Regex::new(r",\s*\]").unwrap());

fn export_regex(prefix: &str) -> Result<Regex> {
    Ok(Regex::new(&format!(r"{}\s*", regex::escape(prefix)))?)
}

/// Strips export syntax, line comments, a trailing `;` and trailing commas
/// before `]`.
#[derive(Debug, Clone)]
pub struct Stripper {
    export: Regex,
}

impl Stripper {
    /// Create a stripper for the `export default` prefix.
    pub fn new() -> Self {
        Self {
            export: DEFAULT_EXPORT.clone(),
        }
    }

    /// Create a stripper for a custom export declaration.
    pub fn with_prefix(prefix: &str) -> Result<Self> {
        Ok(Self {
            export: export_regex(prefix)?,
        })
    }

    /// Run the pre-pass. Never fails; leftover damage shows up when parsing.
    pub fn strip(&self, raw: &str) -> String {
        // Comments must go first: `1, // last\n]` only collapses once the comment is gone.
        let text = self.export.replacen(raw, 1, "");
        let text = LINE_COMMENT.replace_all(&text, "");

        let text = text.trim();
        let text = text.strip_suffix(';').unwrap_or(text);

        TRAILING_COMMA.replace_all(text, "]").into_owned()
    }
}

impl Default for Stripper {
    fn default() -> Self {
        Self::new()
    }
}
