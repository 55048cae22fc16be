//! Post entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A published post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    /// Unique post identifier.
    pub id: i64,
    /// Owning account.
    pub author_id: i64,
    /// Post title.
    pub title: String,
    /// Post body.
    pub body: String,
    /// When the post was created.
    pub created_at: DateTime<Utc>,
    /// When the post was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePost {
    /// Owning account.
    pub author_id: i64,
    /// Post title.
    pub title: String,
    /// Post body.
    pub body: String,
}

/// Partial update of a post; `None` leaves the field untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePost {
    /// New title.
    pub title: Option<String>,
    /// New body.
    pub body: Option<String>,
}

impl Post {
    /// Applies a partial update in place and bumps `updated_at`.
    pub fn apply(&mut self, update: UpdatePost) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(body) = update.body {
            self.body = body;
        }
        self.updated_at = Utc::now();
    }
}
