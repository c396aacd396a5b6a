use std::fmt::{self, Debug, Formatter};

use crate::domain::SourceError;
use crate::utils;

/// Why a comment could not be built. One variant per failure kind, so
/// callers can branch on the kind and users can read the message.
#[derive(thiserror::Error, Clone, PartialEq, Eq)]
pub enum CommentError {
    #[error("invalid id: not a well-formed comment identifier")]
    InvalidId,

    #[error("comment author's name must be at least 2 characters long")]
    MissingOrShortAuthor,

    #[error("comment must be attached to a post")]
    MissingPostId,

    #[error("comment must contain text that is at least 1 character long")]
    MissingOrEmptyText,

    #[error("comment must have a source")]
    MissingSource,

    #[error("comment contains no usable text")]
    EmptySanitizedText,

    #[error("invalid source")]
    InvalidSource(#[from] SourceError),
}

impl Debug for CommentError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        utils::error_chain_fmt(self, f)
    }
}
