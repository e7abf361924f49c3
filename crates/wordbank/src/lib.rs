//! Wordbank: repair, flatten and check hand-authored vocabulary files.
//!
//! Vocabulary files are JavaScript-flavored data literals: an
//! `export default` declaration, `//` comments, trailing commas and nested
//! groups of `{word, word_id}` records. Wordbank turns them into strict JSON,
//! flattens the groups, and reports duplicate words, duplicate ids and words
//! that break the format rules.
//!
//! # Known limitations
//!
//! - A `//` inside a string value is treated as a comment.
//! - A trailing comma before `}` is not repaired and fails to parse.
//!
//! # Example
//!
//! ```no_run
//! use wordbank::Wordbank;
//!
//! let wordbank = Wordbank::new();
//! let outcome = wordbank.normalize("life.js", "life_fixed.js").unwrap();
//! println!("Records: {}", outcome.record_count());
//!
//! let report = wordbank.check("life_fixed.js").unwrap();
//! println!("Issues: {}", report.issue_count());
//! ```

pub mod bundle;
pub mod dataset;
pub mod error;
pub mod input;
pub mod output;
pub mod validation;

mod wordbank;

pub use crate::wordbank::{
    fixed_path_for, NormalizeOutcome, Wordbank, WordbankConfig, DEFAULT_FIXED_FILE,
    DEFAULT_RAW_FILE,
};
pub use bundle::{Bundle, BundleRow, BundleSource};
pub use dataset::{flatten, Dataset, Record};
pub use error::{Result, WordbankError};
pub use input::{Parser, ParserConfig, SourceMetadata, Stripper};
pub use output::Serializer;
pub use validation::{
    FormatIssue, FormatRules, Observation, ObservationType, Severity, ValidationReport,
};
