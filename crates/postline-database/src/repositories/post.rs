//! Post repository contract.

use async_trait::async_trait;

use postline_core::result::AppResult;
use postline_entity::post::{CreatePost, Post, UpdatePost};

/// Storage for posts.
#[async_trait]
pub trait PostRepository: Send + Sync + std::fmt::Debug + 'static {
    /// Insert a new post.
    async fn create(&self, data: CreatePost) -> AppResult<Post>;

    /// Find a post by primary key.
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Post>>;

    /// All posts, newest first.
    async fn list(&self) -> AppResult<Vec<Post>>;

    /// Apply a partial update. Fails with `NotFound` for an unknown id.
    async fn update(&self, id: i64, data: UpdatePost) -> AppResult<Post>;

    /// Delete a post. Returns whether a row was removed.
    async fn delete(&self, id: i64) -> AppResult<bool>;
}
