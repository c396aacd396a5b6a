// IDE: cargo-fuzz target
// Run with: cargo fuzz run fuzz_sanitize
// Purpose: Find panics in the html5ever-backed sanitizer
// Focus: Malformed, deeply nested, and truncated markup
#![no_main]

use commenthub::sanitizer::sanitize;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // We don't care about the output, we're looking for:
        // 1. Panics inside the parser or the tree walk
        // 2. Infinite loops (timeouts) on pathological nesting
        let _ = sanitize(s);
    }
});
