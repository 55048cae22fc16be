//! In-memory comment repository.

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;

use postline_core::error::AppError;
use postline_core::result::AppResult;
use postline_entity::comment::{Comment, CreateComment};

use super::IdSequence;
use crate::repositories::CommentRepository;

/// Comments keyed by id.
#[derive(Debug, Default)]
pub struct MemoryCommentRepository {
    comments: DashMap<i64, Comment>,
    ids: IdSequence,
}

impl MemoryCommentRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CommentRepository for MemoryCommentRepository {
    async fn create(&self, data: CreateComment) -> AppResult<Comment> {
        let now = Utc::now();
        let comment = Comment {
            id: self.ids.next(),
            post_id: data.post_id,
            author_id: data.author_id,
            body: data.body,
            created_at: now,
            updated_at: now,
        };
        self.comments.insert(comment.id, comment.clone());
        Ok(comment)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Comment>> {
        Ok(self.comments.get(&id).map(|c| c.clone()))
    }

    async fn list_by_post(&self, post_id: i64) -> AppResult<Vec<Comment>> {
        let mut comments: Vec<Comment> = self
            .comments
            .iter()
            .filter(|e| e.post_id == post_id)
            .map(|e| e.value().clone())
            .collect();
        comments.sort_by_key(|c| c.id);
        Ok(comments)
    }

    async fn update_body(&self, id: i64, body: String) -> AppResult<Comment> {
        let mut comment = self
            .comments
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found(format!("Comment {id} not found")))?;
        comment.body = body;
        comment.updated_at = Utc::now();
        Ok(comment.clone())
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        Ok(self.comments.remove(&id).is_some())
    }

    async fn delete_by_post(&self, post_id: i64) -> AppResult<u64> {
        // Counted inside retain; other writers may change len() meanwhile.
        let mut removed = 0u64;
        self.comments.retain(|_, c| {
            let keep = c.post_id != post_id;
            if !keep {
                removed += 1;
            }
            keep
        });
        Ok(removed)
    }
}
