//! Comment entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::post::Post;

/// A comment attached to a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    /// Unique comment identifier.
    pub id: i64,
    /// Parent post.
    pub post_id: i64,
    /// Owning account.
    pub author_id: i64,
    /// Comment text.
    pub body: String,
    /// When the comment was created.
    pub created_at: DateTime<Utc>,
    /// When the comment was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a comment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateComment {
    /// Parent post.
    pub post_id: i64,
    /// Owning account.
    pub author_id: i64,
    /// Comment text.
    pub body: String,
}

/// A comment loaded together with its parent post.
///
/// Object-level checks on comments need the post's author as well as the
/// comment's own author.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullComment {
    /// The comment itself.
    pub comment: Comment,
    /// The post the comment belongs to.
    pub post: Post,
}

impl FullComment {
    /// Id of the comment's author.
    pub fn author_id(&self) -> i64 {
        self.comment.author_id
    }

    /// Id of the parent post's author.
    pub fn post_author_id(&self) -> i64 {
        self.post.author_id
    }
}
