//! Fuzz target: the tag-tree tokenizer/parser.
//!
//! Drives arbitrary bytes through `parser::tagtree::parse` and asserts it
//! never panics regardless of malformed nesting, truncated tags, or
//! non-ASCII content.
//!
//! cargo fuzz run fuzz_tag_tree

#![no_main]

use aether_config::error::ErrorBuffer;
use aether_config::parser::tagtree;
use aether_config::schema::default_schema;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut schema = default_schema();
    let mut errors: ErrorBuffer<64> = ErrorBuffer::new();
    tagtree::parse(data, &mut schema, &mut errors);
});
