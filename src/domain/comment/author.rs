use unicode_segmentation::UnicodeSegmentation;

use crate::domain::CommentError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentAuthor(String);

impl CommentAuthor {
    /// Placeholder written over the author's name when a comment is deleted.
    pub const DELETED: &'static str = "deleted";

    /// Returns an instance of `CommentAuthor` if the display name is at
    /// least 2 graphemes long. The raw input is kept as-is; no trimming.
    pub fn parse(s: String) -> Result<Self, CommentError> {
        if s.graphemes(true).count() < 2 {
            return Err(CommentError::MissingOrShortAuthor);
        }

        Ok(Self(s))
    }

    pub(crate) fn deleted() -> Self {
        Self(Self::DELETED.to_string())
    }
}

impl AsRef<str> for CommentAuthor {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CommentAuthor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
