use serde::Serialize;
use sha2::{Digest, Sha256};

/// Fingerprint of a comment's meaningful content, computed once when the
/// comment is built and never again. Used for change detection only, not
/// as an integrity measure.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ContentHash(String);

impl ContentHash {
    /// Computes the SHA-256 of `content`, rendered as lowercase hex.
    pub fn from_content(content: &str) -> Self {
        let digest = Sha256::digest(content.as_bytes());
        Self(format!("{digest:x}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ContentHash {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ContentHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
