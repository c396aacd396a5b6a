// IDE: cargo-fuzz target
// Run with: cargo fuzz run fuzz_comment_author
// Purpose: Test grapheme counting edge cases in the author length rule
// Focus: Emoji, combining characters, zero-width joiners
#![no_main]

use commenthub::domain::CommentAuthor;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let input = String::from_utf8_lossy(data).to_string();

    // Focus on cases that might break grapheme counting:
    // - Emoji with modifiers (family emoji counts as 1 grapheme)
    // - Combining diacriticals (é = e + ´)
    // - Zero-width joiners/non-joiners
    let _ = CommentAuthor::parse(input);
});
