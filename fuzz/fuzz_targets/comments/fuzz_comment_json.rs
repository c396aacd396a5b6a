// IDE: cargo-fuzz target
// Run with: cargo fuzz run fuzz_comment_json
// Purpose: fuzz NewComment JSON -> Comment::new
// Note: exercises the whole validation chain, including UUID parsing and
// HTML sanitization of the text field.
#![no_main]

use commenthub::domain::{Comment, NewComment};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(fields) = serde_json::from_slice::<NewComment>(data) {
        // We don't care about the result (Ok/Err), we're looking for:
        // 1. Panics (unwrap/expect failures)
        // 2. Infinite loops (timeouts)
        // 3. Memory issues (out-of-bounds, etc.)
        let _ = Comment::new(fields);
    }
});
