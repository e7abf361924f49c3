//! Vocabulary records and the flattened dataset.

mod flatten;
mod record;

pub use flatten::{flatten, json_type_name};
pub use record::{Dataset, Record};
