//! Recursive flattening of nested record groups.

use serde_json::Value;
use tracing::debug;

use crate::error::{Result, WordbankError};

use super::record::{Dataset, Record};

/// Collapse an arbitrarily nested array of arrays of objects into one
/// ordered dataset.
///
/// Objects become records in encounter order, nested arrays are walked
/// depth-first, and every other value is dropped. A root that is not an
/// array is an error.
pub fn flatten(root: Value) -> Result<Dataset> {
    match root {
        Value::Array(items) => {
            let mut dataset = Dataset::new();
            collect(items, &mut dataset);
            Ok(dataset)
        }
        other => Err(WordbankError::RootNotArray {
            found: json_type_name(&other),
        }),
    }
}

fn collect(items: Vec<Value>, dataset: &mut Dataset) {
    for item in items {
        match item {
            Value::Array(inner) => collect(inner, dataset),
            Value::Object(map) => dataset.push(Record::new(map)),
            other => debug!(kind = json_type_name(&other), "dropping non-record value"),
        }
    }
}

/// Name of a JSON value's type, for messages.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
