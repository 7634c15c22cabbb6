//! Fuzz target: the bit-frame parser.
//!
//! Drives arbitrary byte buffers through `parser::bitframe::parse` and
//! asserts it never panics regardless of length or content.
//!
//! cargo fuzz run fuzz_bit_frame

#![no_main]

use aether_config::error::ErrorBuffer;
use aether_config::parser::bitframe;
use aether_config::schema::default_schema;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut schema = default_schema();
    let mut errors: ErrorBuffer<64> = ErrorBuffer::new();
    bitframe::parse(Some(data), &mut schema, &mut errors);
});
