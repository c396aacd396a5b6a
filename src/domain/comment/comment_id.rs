use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::CommentError;

/// Identifier for a comment (and for the comment a reply points at).
/// Wraps a v4 UUID; callers exchange the hyphenated string form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CommentId(Uuid);

impl CommentId {
    /// Mints a fresh, collision-resistant identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Structural validity check on a caller-supplied identifier. Says
    /// nothing about whether such a comment exists.
    pub fn parse(candidate: &str) -> Result<Self, CommentError> {
        let id = Uuid::parse_str(candidate).map_err(|_| CommentError::InvalidId)?;
        Ok(Self(id))
    }

    pub fn is_valid(candidate: &str) -> bool {
        Uuid::parse_str(candidate).is_ok()
    }
}

impl std::fmt::Display for CommentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
