//! Fuzz target for the vocabulary loader.
//!
//! This fuzzer tests that stripping, strict parsing and flattening:
//! 1. Never panic on malformed input
//! 2. Report parse errors with a position inside the stripped text

#![no_main]

use libfuzzer_sys::fuzz_target;
use wordbank::{Parser, WordbankError};

fuzz_target!(|data: &[u8]| {
    // Only process reasonable-sized inputs to avoid OOM
    if data.len() > 100_000 {
        return;
    }

    let text = String::from_utf8_lossy(data);
    let parser = Parser::new();

    if let Err(WordbankError::Parse { line, .. }) = parser.parse_str(&text) {
        let stripped = parser.stripper().strip(&text);
        assert!(line <= stripped.split('\n').count() + 1);
    }
});
