//! Collected validation results for one dataset.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::input::SourceMetadata;

use super::observation::{DuplicateId, DuplicateWord, FormatViolation, Observation, Severity};

/// The three reports produced by a check run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationReport {
    /// File the dataset came from, when it came from a file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<SourceMetadata>,
    /// Number of records scanned.
    pub total_records: usize,
    pub word_duplicates: Vec<DuplicateWord>,
    pub id_duplicates: Vec<DuplicateId>,
    pub format_violations: Vec<FormatViolation>,
    pub checked_at: DateTime<Utc>,
}

impl ValidationReport {
    /// Sort observations into their reports, keeping their order.
    pub fn from_observations(total_records: usize, observations: Vec<Observation>) -> Self {
        let mut report = Self {
            source: None,
            total_records,
            word_duplicates: Vec::new(),
            id_duplicates: Vec::new(),
            format_violations: Vec::new(),
            checked_at: Utc::now(),
        };

        for observation in observations {
            match observation {
                Observation::DuplicateWord(d) => report.word_duplicates.push(d),
                Observation::DuplicateId(d) => report.id_duplicates.push(d),
                Observation::FormatViolation(v) => report.format_violations.push(v),
            }
        }

        report
    }

    /// Attach source metadata.
    pub fn with_source(mut self, source: SourceMetadata) -> Self {
        self.source = Some(source);
        self
    }

    /// True when no report has any entry.
    pub fn is_clean(&self) -> bool {
        self.issue_count() == 0
    }

    pub fn issue_count(&self) -> usize {
        self.word_duplicates.len() + self.id_duplicates.len() + self.format_violations.len()
    }

    /// Highest severity present, if any.
    pub fn max_severity(&self) -> Option<Severity> {
        self.observations().map(|o| o.severity()).max()
    }

    /// All entries as observations, grouped by report.
    pub fn observations(&self) -> impl Iterator<Item = Observation> + '_ {
        let words = self
            .word_duplicates
            .iter()
            .cloned()
            .map(Observation::DuplicateWord);
        let ids = self.id_duplicates.iter().cloned().map(Observation::DuplicateId);
        let formats = self
            .format_violations
            .iter()
            .cloned()
            .map(Observation::FormatViolation);
        words.chain(ids).chain(formats)
    }
}
