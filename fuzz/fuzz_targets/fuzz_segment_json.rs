//! Fuzz target for request segment JSON decoding.
//!
//! Arbitrary bytes must never panic the decoder, length queries or
//! validation. They may only produce Ok or Err.

#![no_main]

use gg_serve_data::{validate_sequence, Data, DataLimits};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(segments) = serde_json::from_slice::<Vec<Data>>(data) {
        let _ = validate_sequence(&segments, &DataLimits::default());
        for segment in &segments {
            let _ = segment.length();
        }
    }
});
