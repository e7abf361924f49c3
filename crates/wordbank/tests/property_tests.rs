//! Property-based tests for the wordbank pipeline.
//!
//! These tests use proptest to generate random vocabularies and verify that
//! stripping, flattening, serialization and validation keep their invariants.
//!
//! # Running Property Tests
//!
//! ```bash
//! cargo test -p wordbank --test property_tests
//!
//! # More cases
//! PROPTEST_CASES=10000 cargo test -p wordbank --test property_tests
//! ```

use proptest::prelude::*;
use serde_json::{json, Value};

use wordbank::{flatten, Dataset, Parser, Serializer, Stripper, Wordbank};

// =============================================================================
// Test Strategies
// =============================================================================

/// Words drawn from CJK, ASCII and a little punctuation.
fn word_like() -> impl Strategy<Value = String> {
    prop_oneof![
        "[一-龥]{1,8}",
        "[a-zA-Z0-9]{1,8}",
        "[一-龥a-z!,. ]{0,8}",
    ]
}

/// Ids that are usually unique but sometimes collide.
fn id_like() -> impl Strategy<Value = Value> {
    prop_oneof![
        (0u32..50).prop_map(Value::from),
        "w[0-9]{1,2}".prop_map(Value::from),
        Just(Value::Null),
    ]
}

fn record_like() -> impl Strategy<Value = Value> {
    (word_like(), id_like()).prop_map(|(word, id)| json!({"word": word, "word_id": id}))
}

/// Nested groups of records, up to a few levels deep.
fn nested_records() -> impl Strategy<Value = Value> {
    let leaf = record_like();
    leaf.prop_recursive(4, 64, 6, |inner| {
        prop::collection::vec(inner, 0..6).prop_map(Value::Array)
    })
}

fn root_array() -> impl Strategy<Value = Value> {
    prop::collection::vec(nested_records(), 0..8).prop_map(Value::Array)
}

/// Generate completely random text (edge cases)
fn random_text() -> impl Strategy<Value = String> {
    prop::collection::vec(any::<char>(), 0..200).prop_map(|chars| chars.into_iter().collect())
}

/// Collect records depth-first, the way flattening should.
fn expected_records(value: &Value, out: &mut Vec<Value>) {
    match value {
        Value::Array(items) => items.iter().for_each(|item| expected_records(item, out)),
        Value::Object(_) => out.push(value.clone()),
        _ => {}
    }
}

// =============================================================================
// Flatten Properties
// =============================================================================

mod flatten_tests {
    use super::*;

    proptest! {
        /// Flattening a nested tree equals flattening its depth-first record list.
        #[test]
        fn nesting_does_not_change_order(root in root_array()) {
            let mut flat = Vec::new();
            expected_records(&root, &mut flat);

            let nested = flatten(root).unwrap();
            let direct = flatten(Value::Array(flat)).unwrap();
            prop_assert_eq!(nested, direct);
        }

        /// Wrapping the whole list in another array changes nothing.
        #[test]
        fn extra_wrapping_is_transparent(root in root_array()) {
            let wrapped = Value::Array(vec![root.clone()]);
            prop_assert_eq!(flatten(root).unwrap(), flatten(wrapped).unwrap());
        }
    }
}

// =============================================================================
// Stripper Properties
// =============================================================================

mod stripper_tests {
    use super::*;

    proptest! {
        /// Stripping strict text twice equals stripping it once.
        #[test]
        fn strip_is_idempotent_on_strict_text(root in root_array()) {
            let strict = serde_json::to_string_pretty(&root).unwrap();
            let stripper = Stripper::new();
            let once = stripper.strip(&strict);
            prop_assert_eq!(stripper.strip(&once), once);
        }

        /// The stripper never panics on arbitrary text.
        #[test]
        fn strip_never_panics(input in random_text()) {
            let _ = Stripper::new().strip(&input);
        }

        /// The parser returns an error rather than panicking on arbitrary text.
        #[test]
        fn parse_never_panics(input in random_text()) {
            let _ = Parser::new().parse_str(&input);
        }
    }
}

// =============================================================================
// Serializer Properties
// =============================================================================

mod serializer_tests {
    use super::*;

    proptest! {
        /// Serialize, strip and parse gives back the same dataset.
        #[test]
        fn serialize_round_trips(root in root_array()) {
            let dataset = flatten(root).unwrap();
            let text = Serializer::new().render(&dataset).unwrap();
            let reparsed: Dataset = Parser::new().parse_str(&text).unwrap();
            prop_assert_eq!(reparsed, dataset);
        }

        /// Rendered text never escapes CJK characters.
        #[test]
        fn serializer_keeps_cjk_literal(word in "[一-龥]{1,6}") {
            let dataset = flatten(json!([{"word": word.clone(), "word_id": 1}])).unwrap();
            let text = Serializer::new().render(&dataset).unwrap();
            prop_assert!(text.contains(&word));
            prop_assert!(!text.contains("\\u"));
        }
    }
}

// =============================================================================
// Validation Properties
// =============================================================================

mod validation_tests {
    use super::*;

    proptest! {
        /// Checking is deterministic apart from the timestamp.
        #[test]
        fn check_is_deterministic(root in root_array()) {
            let dataset = flatten(root).unwrap();
            let wordbank = Wordbank::new();
            let a = wordbank.check_dataset(&dataset);
            let b = wordbank.check_dataset(&dataset);

            prop_assert_eq!(a.word_duplicates, b.word_duplicates);
            prop_assert_eq!(a.id_duplicates, b.id_duplicates);
            prop_assert_eq!(a.format_violations, b.format_violations);
        }

        /// Every reported group really has more than one member, and the
        /// duplicate-word groups account for every repeated word.
        #[test]
        fn duplicate_groups_are_consistent(root in root_array()) {
            let dataset = flatten(root).unwrap();
            let report = Wordbank::new().check_dataset(&dataset);

            for group in &report.word_duplicates {
                prop_assert!(group.word_ids.len() > 1);
                let count = dataset.iter().filter(|r| r.word() == group.word).count();
                prop_assert_eq!(count, group.word_ids.len());
            }
            for group in &report.id_duplicates {
                prop_assert!(group.words.len() > 1);
            }

            let repeated_records: usize = report.word_duplicates.iter().map(|g| g.word_ids.len()).sum();
            let mut distinct: Vec<String> = dataset.iter().map(|r| r.word()).collect();
            distinct.sort();
            distinct.dedup();
            let unique_records = distinct.len() - report.word_duplicates.len();
            prop_assert_eq!(repeated_records + unique_records, dataset.len());
        }

        /// Format violations point at real records, at most one per record.
        #[test]
        fn format_violations_match_records(root in root_array()) {
            let dataset = flatten(root).unwrap();
            let report = Wordbank::new().check_dataset(&dataset);

            let mut last_index = None;
            for violation in &report.format_violations {
                prop_assert!(!violation.issues.is_empty());
                prop_assert_eq!(&dataset.records()[violation.index].word(), &violation.word);
                prop_assert!(last_index.map_or(true, |i| i < violation.index));
                last_index = Some(violation.index);
            }
        }
    }
}
