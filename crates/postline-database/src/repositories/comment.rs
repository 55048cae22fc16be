//! Comment repository contract.

use async_trait::async_trait;

use postline_core::result::AppResult;
use postline_entity::comment::{Comment, CreateComment};

/// Storage for comments.
#[async_trait]
pub trait CommentRepository: Send + Sync + std::fmt::Debug + 'static {
    /// Insert a new comment.
    async fn create(&self, data: CreateComment) -> AppResult<Comment>;

    /// Find a comment by primary key.
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Comment>>;

    /// Comments on a post, oldest first.
    async fn list_by_post(&self, post_id: i64) -> AppResult<Vec<Comment>>;

    /// Replace a comment's body. Fails with `NotFound` for an unknown id.
    async fn update_body(&self, id: i64, body: String) -> AppResult<Comment>;

    /// Delete a comment. Returns whether a row was removed.
    async fn delete(&self, id: i64) -> AppResult<bool>;

    /// Delete every comment on a post. Returns the number removed.
    async fn delete_by_post(&self, post_id: i64) -> AppResult<u64>;
}
