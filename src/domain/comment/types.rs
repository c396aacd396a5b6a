use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{Comment, CommentError, CommentId, ContentHash, Source};

/// Raw fields for a new comment, exactly as submitted. Everything except
/// `published` is optional at this layer; [`Comment::new`] decides what is
/// actually required and in which order the checks run.
#[derive(Deserialize, Debug, Default, Clone)]
pub struct NewComment {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub post_id: Option<String>,
    #[serde(default)]
    pub reply_to_id: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub published: bool,
    #[serde(default)]
    pub created_on: Option<DateTime<Utc>>,
    #[serde(default)]
    pub modified_on: Option<DateTime<Utc>>,
}

impl TryFrom<NewComment> for Comment {
    type Error = CommentError;

    fn try_from(value: NewComment) -> Result<Self, Self::Error> {
        Comment::new(value)
    }
}

// For returning comments to callers - owns data
#[derive(Serialize, Debug)]
pub struct CommentResponseBody {
    pub id: CommentId,
    pub post_id: String,
    pub reply_to_id: Option<CommentId>,
    pub author: String,
    pub text: String,
    pub source: Source,
    pub published: bool,
    pub deleted: bool,
    pub hash: ContentHash,
    pub created_on: DateTime<Utc>,
    pub modified_on: DateTime<Utc>,
}

impl From<&Comment> for CommentResponseBody {
    fn from(comment: &Comment) -> Self {
        Self {
            id: comment.id(),
            post_id: comment.post_id().to_string(),
            reply_to_id: comment.reply_to_id(),
            author: comment.author().to_string(),
            text: comment.text().to_string(),
            source: comment.source().clone(),
            published: comment.is_published(),
            deleted: comment.is_deleted(),
            hash: comment.hash().clone(),
            created_on: comment.created_on(),
            modified_on: comment.modified_on(),
        }
    }
}
