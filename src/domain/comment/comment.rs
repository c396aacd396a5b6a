use chrono::{DateTime, Utc};

use crate::domain::{
    CommentAuthor, CommentError, CommentId, CommentText, ContentHash, NewComment, Source,
};

/// A comment on a post. Built through [`Comment::new`], which validates
/// every field before anything observable exists. Identity fields (`id`,
/// `post_id`, `reply_to_id`, `source`, `hash`) never change afterwards;
/// the only mutations are the three lifecycle transitions.
#[derive(Debug, Clone)]
pub struct Comment {
    id: CommentId,
    post_id: String,
    reply_to_id: Option<CommentId>,
    author: CommentAuthor,
    text: CommentText,
    source: Source,
    published: bool,
    created_on: Option<DateTime<Utc>>,
    modified_on: Option<DateTime<Utc>>,
    hash: ContentHash,
}

impl Comment {
    /// Validates raw fields and builds the comment.
    ///
    /// Checks run in a fixed order and the first failure wins: supplied id,
    /// author, post id, raw text, source presence, reply-to id, sanitized
    /// text, source shape. A missing id is not an error; a fresh one is
    /// generated.
    #[tracing::instrument(name = "Validating new comment", skip(fields))]
    pub fn new(fields: NewComment) -> Result<Self, CommentError> {
        let id = match fields.id.as_deref() {
            Some(candidate) if !candidate.is_empty() => CommentId::parse(candidate)?,
            _ => CommentId::generate(),
        };

        let author = match fields.author {
            Some(author) => CommentAuthor::parse(author)?,
            None => return Err(CommentError::MissingOrShortAuthor),
        };

        let post_id = match fields.post_id {
            Some(post_id) if !post_id.is_empty() => post_id,
            _ => return Err(CommentError::MissingPostId),
        };

        let raw_text = match fields.text {
            Some(text) if !text.is_empty() => text,
            _ => return Err(CommentError::MissingOrEmptyText),
        };

        let raw_source = match fields.source {
            Some(source) if !source.is_empty() => source,
            _ => return Err(CommentError::MissingSource),
        };

        let reply_to_id = match fields.reply_to_id.as_deref() {
            Some(candidate) if !candidate.is_empty() => Some(CommentId::parse(candidate)?),
            _ => None,
        };

        let text = CommentText::parse(raw_text)?;
        let source = Source::parse(raw_source)?;

        // Change fingerprint over the meaningful content. Computed exactly
        // once; deletion later rewrites author/text without touching it.
        let hash = ContentHash::from_content(&format!(
            "{}{}{}{}{}",
            text.as_ref(),
            fields.published,
            author.as_ref(),
            post_id,
            reply_to_id.map(|id| id.to_string()).unwrap_or_default(),
        ));

        Ok(Self {
            id,
            post_id,
            reply_to_id,
            author,
            text,
            source,
            published: fields.published,
            created_on: fields.created_on,
            modified_on: fields.modified_on,
            hash,
        })
    }

    pub fn id(&self) -> CommentId {
        self.id
    }

    pub fn post_id(&self) -> &str {
        &self.post_id
    }

    pub fn reply_to_id(&self) -> Option<CommentId> {
        self.reply_to_id
    }

    pub fn author(&self) -> &str {
        self.author.as_ref()
    }

    /// The sanitized, trimmed body (or the deletion marker).
    pub fn text(&self) -> &str {
        self.text.as_ref()
    }

    pub fn source(&self) -> &Source {
        &self.source
    }

    pub fn hash(&self) -> &ContentHash {
        &self.hash
    }

    /// Creation time. When no timestamp was supplied at construction this
    /// falls back to the clock, so repeated reads move with the current
    /// time rather than returning one stable value.
    pub fn created_on(&self) -> DateTime<Utc> {
        self.created_on.unwrap_or_else(Utc::now)
    }

    /// Last-modified time, with the same clock fallback as [`created_on`](Self::created_on).
    pub fn modified_on(&self) -> DateTime<Utc> {
        self.modified_on.unwrap_or_else(Utc::now)
    }

    pub fn is_published(&self) -> bool {
        self.published
    }

    pub fn is_deleted(&self) -> bool {
        self.text.is_deletion_marker()
    }

    pub fn publish(&mut self) {
        self.published = true;
    }

    pub fn unpublish(&mut self) {
        self.published = false;
    }

    /// Soft-deletes the comment: author and text are overwritten with fixed
    /// placeholders. There is no undelete. `published`, `hash`, identifiers
    /// and timestamps keep their values.
    pub fn mark_deleted(&mut self) {
        self.text = CommentText::deletion_marker();
        self.author = CommentAuthor::deleted();
    }
}
