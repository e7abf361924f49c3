//! Observation types for vocabulary issues.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Type of observation/issue detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObservationType {
    /// The same word appears under several ids.
    DuplicateWord,
    /// The same id is shared by several words.
    DuplicateId,
    /// The word breaks the length or character rules.
    FormatViolation,
}

impl ObservationType {
    /// Get a human-readable label for the observation type.
    pub fn label(&self) -> &'static str {
        match self {
            ObservationType::DuplicateWord => "Duplicate Word",
            ObservationType::DuplicateId => "Duplicate ID",
            ObservationType::FormatViolation => "Format Violation",
        }
    }
}

/// Severity level of an observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational only, may not require action.
    Info,
    /// Potential issue that should be reviewed.
    Warning,
    /// Definite issue that should be addressed.
    Error,
}

impl Severity {
    /// Get a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Info => "Info",
            Severity::Warning => "Warning",
            Severity::Error => "Error",
        }
    }
}

/// A rule a single word can break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormatIssue {
    /// More characters than allowed.
    TooLong,
    /// Something other than CJK ideographs, ASCII letters or digits.
    SpecialCharacters,
}

impl FormatIssue {
    /// Short label as shown next to the word.
    pub fn label(&self) -> &'static str {
        match self {
            FormatIssue::TooLong => "太长",
            FormatIssue::SpecialCharacters => "含特殊字符",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            FormatIssue::TooLong => "too long",
            FormatIssue::SpecialCharacters => "contains special characters",
        }
    }
}

/// A word listed under more than one id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DuplicateWord {
    pub word: String,
    /// Every id the word appears under, in record order.
    pub word_ids: Vec<Value>,
}

/// An id shared by more than one record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DuplicateId {
    /// The shared id; `null` groups records with no id.
    pub word_id: Value,
    /// Every word using the id, in record order.
    pub words: Vec<String>,
}

/// A record whose word breaks one or more format rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormatViolation {
    /// Position of the record in the dataset.
    pub index: usize,
    pub word: String,
    pub word_id: Value,
    pub issues: Vec<FormatIssue>,
}

impl FormatViolation {
    /// Issue labels joined with `, `.
    pub fn issue_labels(&self) -> String {
        self.issues
            .iter()
            .map(|i| i.label())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// An observation about vocabulary quality.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Observation {
    DuplicateWord(DuplicateWord),
    DuplicateId(DuplicateId),
    FormatViolation(FormatViolation),
}

impl Observation {
    pub fn observation_type(&self) -> ObservationType {
        match self {
            Observation::DuplicateWord(_) => ObservationType::DuplicateWord,
            Observation::DuplicateId(_) => ObservationType::DuplicateId,
            Observation::FormatViolation(_) => ObservationType::FormatViolation,
        }
    }

    /// Duplicate ids are errors; everything else is a warning.
    pub fn severity(&self) -> Severity {
        match self {
            Observation::DuplicateId(_) => Severity::Error,
            Observation::DuplicateWord(_) | Observation::FormatViolation(_) => Severity::Warning,
        }
    }

    /// Human-readable one-line description.
    pub fn description(&self) -> String {
        match self {
            Observation::DuplicateWord(d) => format!(
                "'{}' appears {} times (IDs: {})",
                d.word,
                d.word_ids.len(),
                format_values(&d.word_ids)
            ),
            Observation::DuplicateId(d) => {
                let words: Vec<Value> = d.words.iter().map(|w| Value::from(w.as_str())).collect();
                format!("ID {} conflict: {}", d.word_id, format_values(&words))
            }
            Observation::FormatViolation(v) => {
                format!("{} ({}): {}", v.word, v.word_id, v.issue_labels())
            }
        }
    }
}

/// Render values as a JSON-style list with `, ` separators.
pub fn format_values(values: &[Value]) -> String {
    let items: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    format!("[{}]", items.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_duplicate_word_description() {
        let obs = Observation::DuplicateWord(DuplicateWord {
            word: "爱".to_string(),
            word_ids: vec![json!(1), json!(2)],
        });
        assert_eq!(obs.description(), "'爱' appears 2 times (IDs: [1, 2])");
        assert_eq!(obs.severity(), Severity::Warning);
    }

    #[test]
    fn test_duplicate_id_description() {
        let obs = Observation::DuplicateId(DuplicateId {
            word_id: json!(5),
            words: vec!["书".to_string(), "笔".to_string()],
        });
        assert_eq!(obs.description(), "ID 5 conflict: [\"书\", \"笔\"]");
        assert_eq!(obs.severity(), Severity::Error);
    }

    #[test]
    fn test_format_violation_labels() {
        let v = FormatViolation {
            index: 0,
            word: "爱爱爱爱爱爱!".to_string(),
            word_id: json!(3),
            issues: vec![FormatIssue::TooLong, FormatIssue::SpecialCharacters],
        };
        assert_eq!(v.issue_labels(), "太长, 含特殊字符");
        assert_eq!(
            Observation::FormatViolation(v).description(),
            "爱爱爱爱爱爱! (3): 太长, 含特殊字符"
        );
    }

    #[test]
    fn test_observation_serializes_with_type_tag() {
        let obs = Observation::DuplicateId(DuplicateId {
            word_id: Value::Null,
            words: vec!["a".to_string(), "b".to_string()],
        });
        let value = serde_json::to_value(&obs).unwrap();
        assert_eq!(value["type"], "duplicate_id");
        assert_eq!(value["word_id"], Value::Null);
    }

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Info < Severity::Warning);
        assert!(Severity::Warning < Severity::Error);
    }
}
