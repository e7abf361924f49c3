//! Output rendering and file writing.

mod serializer;

pub use serializer::Serializer;
pub(crate) use serializer::{to_pretty_json, write_text};
