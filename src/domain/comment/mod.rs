mod author;
mod comment;
mod comment_id;
mod comment_text;
mod content_hash;
mod error;
mod source;
mod types;

pub use author::CommentAuthor;
pub use comment::Comment;
pub use comment_id::CommentId;
pub use comment_text::CommentText;
pub use content_hash::ContentHash;
pub use error::CommentError;
pub use source::{Source, SourceError};
pub use types::*;
