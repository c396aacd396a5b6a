use serde::Serialize;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    #[error("source cannot be empty or whitespace")]
    Empty,

    #[error(
        "source contains forbidden characters. The following are not allowed: / ( ) \" < > \\ {{ }}"
    )]
    ForbiddenCharacters,
}

/// Where a comment was submitted from, e.g. `"web"` or `"mobile"`.
/// Normalized to a trimmed, lowercase tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Source(String);

impl Source {
    pub fn parse(s: String) -> Result<Self, SourceError> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(SourceError::Empty);
        }

        let forbidden_characters = ['/', '(', ')', '"', '<', '>', '\\', '{', '}'];
        if trimmed.chars().any(|c| forbidden_characters.contains(&c)) {
            return Err(SourceError::ForbiddenCharacters);
        }

        Ok(Self(trimmed.to_lowercase()))
    }
}

impl AsRef<str> for Source {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
