//! Comment operations: create, list, update, delete.

use std::sync::Arc;

use tracing::info;

use postline_auth::PermissionEvaluator;
use postline_auth::permission::operations::{
    COMMENT_CREATE, COMMENT_DELETE, COMMENT_UPDATE, COMMENT_VIEW,
};
use postline_core::error::AppError;
use postline_database::repositories::{CommentRepository, PostRepository};
use postline_entity::comment::{Comment, CreateComment, FullComment};
use postline_entity::post::Post;

use crate::context::RequestContext;

/// Handles comment use cases.
#[derive(Debug, Clone)]
pub struct CommentService {
    /// Post repository.
    post_repo: Arc<dyn PostRepository>,
    /// Comment repository.
    comment_repo: Arc<dyn CommentRepository>,
    /// Permission evaluator.
    evaluator: Arc<PermissionEvaluator>,
}

impl CommentService {
    /// Creates a new comment service.
    pub fn new(
        post_repo: Arc<dyn PostRepository>,
        comment_repo: Arc<dyn CommentRepository>,
        evaluator: Arc<PermissionEvaluator>,
    ) -> Self {
        Self {
            post_repo,
            comment_repo,
            evaluator,
        }
    }

    /// Adds a comment by the caller to an existing post.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        post_id: i64,
        body: String,
    ) -> Result<Comment, AppError> {
        self.evaluator.check_operation(COMMENT_CREATE, &ctx.principal)?;
        self.find_post(post_id).await?;

        let comment = self
            .comment_repo
            .create(CreateComment {
                post_id,
                author_id: ctx.user_id(),
                body,
            })
            .await?;

        // The post may have been deleted, and its comments cascaded, meanwhile.
        if self.post_repo.find_by_id(post_id).await?.is_none() {
            self.comment_repo.delete(comment.id).await?;
            return Err(AppError::not_found(format!("Post {post_id} not found")));
        }

        info!(
            comment_id = comment.id,
            post_id,
            user_id = ctx.user_id(),
            "Comment created"
        );
        Ok(comment)
    }

    /// Lists the comments on a post.
    pub async fn list(&self, ctx: &RequestContext, post_id: i64) -> Result<Vec<Comment>, AppError> {
        self.evaluator.check_operation(COMMENT_VIEW, &ctx.principal)?;
        self.find_post(post_id).await?;
        self.comment_repo.list_by_post(post_id).await
    }

    /// Replaces a comment's body. Only its author may do so.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        comment_id: i64,
        body: String,
    ) -> Result<Comment, AppError> {
        let full = self.find_full(comment_id).await?;
        self.evaluator.check_object(COMMENT_UPDATE, &ctx.principal, &full)?;
        let comment = self.comment_repo.update_body(comment_id, body).await?;
        info!(comment_id, user_id = ctx.user_id(), "Comment updated");
        Ok(comment)
    }

    /// Deletes a comment. Allowed to its author, the post's author, and admins.
    pub async fn delete(&self, ctx: &RequestContext, comment_id: i64) -> Result<(), AppError> {
        let full = self.find_full(comment_id).await?;
        self.evaluator.check_object(COMMENT_DELETE, &ctx.principal, &full)?;
        self.comment_repo.delete(comment_id).await?;
        info!(comment_id, user_id = ctx.user_id(), "Comment deleted");
        Ok(())
    }

    async fn find_post(&self, post_id: i64) -> Result<Post, AppError> {
        self.post_repo
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Post {post_id} not found")))
    }

    // Comment-level rules need the parent post's author too.
    async fn find_full(&self, comment_id: i64) -> Result<FullComment, AppError> {
        let comment = self
            .comment_repo
            .find_by_id(comment_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Comment {comment_id} not found")))?;
        let post = self.find_post(comment.post_id).await?;
        Ok(FullComment { comment, post })
    }
}
