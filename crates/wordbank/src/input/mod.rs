//! Input loading: syntax stripping, strict parsing and source metadata.

mod parser;
mod source;
mod strip;

pub use parser::{parse_strict, Parser, ParserConfig};
pub use source::{content_hash, SourceMetadata};
pub use strip::{Stripper, DEFAULT_EXPORT_PREFIX};
