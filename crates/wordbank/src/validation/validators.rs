//! Validators for checking a vocabulary dataset.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::dataset::Dataset;

use super::observation::{DuplicateId, DuplicateWord, FormatIssue, FormatViolation, Observation};

/// CJK unified ideographs (U+4E00..=U+9FA5), ASCII letters and digits only.
static WORD_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\u{4e00}-\u{9fa5}a-zA-Z0-9]+$").unwrap());

/// Default maximum word length in characters.
pub const DEFAULT_MAX_WORD_LEN: usize = 6;

/// Trait for validators.
pub trait Validator {
    /// Name used in logs.
    fn name(&self) -> &'static str;

    /// Run validation and return observations.
    fn validate(&self, dataset: &Dataset) -> Vec<Observation>;
}

/// Reports words that appear more than once.
pub struct WordDuplicateValidator;

impl Validator for WordDuplicateValidator {
    fn name(&self) -> &'static str {
        "word_duplicate_validator"
    }

    fn validate(&self, dataset: &Dataset) -> Vec<Observation> {
        let mut word_ids: IndexMap<String, Vec<Value>> = IndexMap::new();

        for record in dataset {
            word_ids.entry(record.word()).or_default().push(record.word_id());
        }

        word_ids
            .into_iter()
            .filter(|(_, ids)| ids.len() > 1)
            .map(|(word, word_ids)| Observation::DuplicateWord(DuplicateWord { word, word_ids }))
            .collect()
    }
}

/// Reports ids shared by more than one record.
pub struct IdDuplicateValidator;

impl Validator for IdDuplicateValidator {
    fn name(&self) -> &'static str {
        "id_duplicate_validator"
    }

    fn validate(&self, dataset: &Dataset) -> Vec<Observation> {
        find_duplicate_ids(dataset.iter().map(|r| (r.word_id(), r.word())))
            .into_iter()
            .map(Observation::DuplicateId)
            .collect()
    }
}

/// Group words by id and keep the groups with more than one member.
///
/// JSON values are not hashable, so ids are keyed by their JSON text.
pub(crate) fn find_duplicate_ids(
    entries: impl IntoIterator<Item = (Value, String)>,
) -> Vec<DuplicateId> {
    let mut groups: IndexMap<String, DuplicateId> = IndexMap::new();

    for (word_id, word) in entries {
        groups
            .entry(word_id.to_string())
            .or_insert_with(|| DuplicateId {
                word_id,
                words: Vec::new(),
            })
            .words
            .push(word);
    }

    groups
        .into_values()
        .filter(|group| group.words.len() > 1)
        .collect()
}

/// Limits a word must respect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatRules {
    /// Maximum length in characters.
    pub max_word_len: usize,
}

impl Default for FormatRules {
    fn default() -> Self {
        Self {
            max_word_len: DEFAULT_MAX_WORD_LEN,
        }
    }
}

impl FormatRules {
    /// Issues for one (already trimmed) word, in a fixed order.
    pub fn check(&self, word: &str) -> Vec<FormatIssue> {
        let mut issues = Vec::new();
        if word.chars().count() > self.max_word_len {
            issues.push(FormatIssue::TooLong);
        }
        if !WORD_PATTERN.is_match(word) {
            issues.push(FormatIssue::SpecialCharacters);
        }
        issues
    }
}

/// Flags every record whose word breaks the format rules.
#[derive(Default)]
pub struct FormatValidator {
    rules: FormatRules,
}

impl FormatValidator {
    pub fn new(rules: FormatRules) -> Self {
        Self { rules }
    }
}

impl Validator for FormatValidator {
    fn name(&self) -> &'static str {
        "format_validator"
    }

    fn validate(&self, dataset: &Dataset) -> Vec<Observation> {
        dataset
            .iter()
            .enumerate()
            .filter_map(|(index, record)| {
                let word = record.word();
                let issues = self.rules.check(&word);
                if issues.is_empty() {
                    return None;
                }
                Some(Observation::FormatViolation(FormatViolation {
                    index,
                    word,
                    word_id: record.word_id(),
                    issues,
                }))
            })
            .collect()
    }
}

/// Runs a set of validators over a dataset.
pub struct ValidationEngine {
    validators: Vec<Box<dyn Validator>>,
}

impl ValidationEngine {
    /// Create a new validation engine with all default validators.
    pub fn new() -> Self {
        Self::with_rules(FormatRules::default())
    }

    /// Default validators with custom format rules.
    pub fn with_rules(rules: FormatRules) -> Self {
        Self {
            validators: vec![
                Box::new(WordDuplicateValidator),
                Box::new(IdDuplicateValidator),
                Box::new(FormatValidator::new(rules)),
            ],
        }
    }

    /// Run all validators and collect observations in validator order.
    pub fn validate(&self, dataset: &Dataset) -> Vec<Observation> {
        let mut all_observations = Vec::new();

        for validator in &self.validators {
            let observations = validator.validate(dataset);
            tracing::debug!(
                validator = validator.name(),
                count = observations.len(),
                "validator finished"
            );
            all_observations.extend(observations);
        }

        all_observations
    }
}

impl Default for ValidationEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Parser;
    use serde_json::json;

    fn dataset(text: &str) -> Dataset {
        Parser::new().parse_str(text).unwrap()
    }

    #[test]
    fn test_duplicate_words() {
        let data = dataset(r#"[{"word":"爱","word_id":1},{"word":"爱","word_id":2}]"#);

        let words = WordDuplicateValidator.validate(&data);
        assert_eq!(
            words,
            vec![Observation::DuplicateWord(DuplicateWord {
                word: "爱".to_string(),
                word_ids: vec![json!(1), json!(2)],
            })]
        );
        assert!(IdDuplicateValidator.validate(&data).is_empty());
    }

    #[test]
    fn test_duplicate_words_compare_trimmed() {
        let data = dataset(r#"[{"word":" 书","word_id":1},{"word":"书 ","word_id":2},{"word":"笔","word_id":3}]"#);
        let obs = WordDuplicateValidator.validate(&data);
        assert_eq!(obs.len(), 1);
    }

    #[test]
    fn test_duplicate_ids_keep_first_seen_order() {
        let data = dataset(
            r#"[{"word":"a","word_id":2},{"word":"b","word_id":1},{"word":"c","word_id":2},{"word":"d","word_id":1}]"#,
        );
        let obs = IdDuplicateValidator.validate(&data);
        let ids: Vec<Value> = obs
            .iter()
            .map(|o| match o {
                Observation::DuplicateId(d) => d.word_id.clone(),
                other => panic!("unexpected {other:?}"),
            })
            .collect();
        assert_eq!(ids, vec![json!(2), json!(1)]);
    }

    #[test]
    fn test_missing_ids_group_as_null() {
        let data = dataset(r#"[{"word":"a"},{"word":"b","word_id":null}]"#);
        let obs = IdDuplicateValidator.validate(&data);
        assert_eq!(
            obs,
            vec![Observation::DuplicateId(DuplicateId {
                word_id: Value::Null,
                words: vec!["a".to_string(), "b".to_string()],
            })]
        );
    }

    #[test]
    fn test_string_and_number_ids_differ() {
        let data = dataset(r#"[{"word":"a","word_id":1},{"word":"b","word_id":"1"}]"#);
        assert!(IdDuplicateValidator.validate(&data).is_empty());
    }

    #[test]
    fn test_format_rules() {
        let rules = FormatRules::default();
        assert_eq!(rules.check("爱爱爱爱爱爱爱"), vec![FormatIssue::TooLong]);
        assert_eq!(rules.check("ab!"), vec![FormatIssue::SpecialCharacters]);
        assert!(rules.check("爱").is_empty());
        assert!(rules.check("abc123").is_empty());
        assert_eq!(rules.check(""), vec![FormatIssue::SpecialCharacters]);
        assert_eq!(
            rules.check("一二三四五六,"),
            vec![FormatIssue::TooLong, FormatIssue::SpecialCharacters]
        );
    }

    #[test]
    fn test_format_rules_reject_full_width_and_extension_chars() {
        let rules = FormatRules::default();
        assert_eq!(rules.check("你好！"), vec![FormatIssue::SpecialCharacters]);
        assert_eq!(rules.check("ａｂ"), vec![FormatIssue::SpecialCharacters]);
        assert_eq!(rules.check("一 二"), vec![FormatIssue::SpecialCharacters]);
    }

    #[test]
    fn test_format_validator_reports_every_record() {
        let data = dataset(r#"[{"word":"a-b","word_id":1},{"word":"a-b","word_id":2},{"word":"ok","word_id":3}]"#);
        let obs = FormatValidator::default().validate(&data);
        assert_eq!(obs.len(), 2);
        match &obs[1] {
            Observation::FormatViolation(v) => {
                assert_eq!(v.index, 1);
                assert_eq!(v.word_id, json!(2));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_custom_max_len() {
        let rules = FormatRules { max_word_len: 2 };
        assert_eq!(rules.check("abc"), vec![FormatIssue::TooLong]);
        assert!(rules.check("ab").is_empty());
    }

    #[test]
    fn test_engine_runs_all_validators() {
        let data = dataset(r#"[{"word":"爱!","word_id":1},{"word":"爱!","word_id":1}]"#);
        let obs = ValidationEngine::new().validate(&data);
        assert_eq!(obs.len(), 4);
    }
}
