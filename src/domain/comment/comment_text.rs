use crate::domain::CommentError;
use crate::sanitizer;

/// The sanitized, trimmed body of a comment. This is the value that gets
/// stored and returned; the raw submission never leaves the factory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentText(String);

impl CommentText {
    /// Sentinel body stored when a comment is deleted.
    pub const DELETION_MARKER: &'static str = ".xX This comment has been deleted Xx.";

    /// Sanitizes and trims raw comment text. Fails if nothing usable is
    /// left once markup and active content are stripped.
    pub fn parse(raw: String) -> Result<Self, CommentError> {
        let sanitized = sanitizer::sanitize(&raw);
        let trimmed = sanitized.trim();

        if trimmed.is_empty() {
            return Err(CommentError::EmptySanitizedText);
        }

        Ok(Self(trimmed.to_string()))
    }

    pub(crate) fn deletion_marker() -> Self {
        Self(Self::DELETION_MARKER.to_string())
    }

    pub fn is_deletion_marker(&self) -> bool {
        self.0 == Self::DELETION_MARKER
    }
}

impl AsRef<str> for CommentText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CommentText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
