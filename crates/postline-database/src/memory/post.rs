//! In-memory post repository.

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;

use postline_core::error::AppError;
use postline_core::result::AppResult;
use postline_entity::post::{CreatePost, Post, UpdatePost};

use super::IdSequence;
use crate::repositories::PostRepository;

/// Posts keyed by id.
#[derive(Debug, Default)]
pub struct MemoryPostRepository {
    posts: DashMap<i64, Post>,
    ids: IdSequence,
}

impl MemoryPostRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PostRepository for MemoryPostRepository {
    async fn create(&self, data: CreatePost) -> AppResult<Post> {
        let now = Utc::now();
        let post = Post {
            id: self.ids.next(),
            author_id: data.author_id,
            title: data.title,
            body: data.body,
            created_at: now,
            updated_at: now,
        };
        self.posts.insert(post.id, post.clone());
        Ok(post)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Post>> {
        Ok(self.posts.get(&id).map(|p| p.clone()))
    }

    async fn list(&self) -> AppResult<Vec<Post>> {
        let mut posts: Vec<Post> = self.posts.iter().map(|e| e.value().clone()).collect();
        posts.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(posts)
    }

    async fn update(&self, id: i64, data: UpdatePost) -> AppResult<Post> {
        let mut post = self
            .posts
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found(format!("Post {id} not found")))?;
        post.apply(data);
        Ok(post.clone())
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        Ok(self.posts.remove(&id).is_some())
    }
}
