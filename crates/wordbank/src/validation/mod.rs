//! Validation engine for detecting vocabulary issues.

mod observation;
mod report;
mod validators;

pub use observation::{
    format_values, DuplicateId, DuplicateWord, FormatIssue, FormatViolation, Observation,
    ObservationType, Severity,
};
pub use report::ValidationReport;
pub(crate) use validators::find_duplicate_ids;
pub use validators::{
    FormatRules, FormatValidator, IdDuplicateValidator, ValidationEngine, Validator,
    WordDuplicateValidator, DEFAULT_MAX_WORD_LEN,
};
