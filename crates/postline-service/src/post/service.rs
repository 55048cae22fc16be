//! Post operations: list, create, view, update, delete.

use std::sync::Arc;

use tracing::info;

use postline_auth::PermissionEvaluator;
use postline_auth::permission::operations::{
    POST_CREATE, POST_DELETE, POST_UPDATE, POST_VIEW, POST_VIEW_LIST,
};
use postline_core::error::AppError;
use postline_database::repositories::{CommentRepository, PostRepository};
use postline_entity::post::{CreatePost, Post, UpdatePost};

use crate::context::RequestContext;

/// Handles post use cases.
#[derive(Debug, Clone)]
pub struct PostService {
    /// Post repository.
    post_repo: Arc<dyn PostRepository>,
    /// Comment repository, for cascading deletes.
    comment_repo: Arc<dyn CommentRepository>,
    /// Permission evaluator.
    evaluator: Arc<PermissionEvaluator>,
}

impl PostService {
    /// Creates a new post service.
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

    /// Lists all posts.
    pub async fn list(&self, ctx: &RequestContext) -> Result<Vec<Post>, AppError> {
        self.evaluator.check_operation(POST_VIEW_LIST, &ctx.principal)?;
        self.post_repo.list().await
    }

    /// Creates a post authored by the caller.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        title: String,
        body: String,
    ) -> Result<Post, AppError> {
        self.evaluator.check_operation(POST_CREATE, &ctx.principal)?;
        let post = self
            .post_repo
            .create(CreatePost {
                author_id: ctx.user_id(),
                title,
                body,
            })
            .await?;
        info!(post_id = post.id, user_id = ctx.user_id(), "Post created");
        Ok(post)
    }

    /// Gets one post.
    pub async fn get(&self, ctx: &RequestContext, id: i64) -> Result<Post, AppError> {
        let post = self.find(id).await?;
        self.evaluator.check_object(POST_VIEW, &ctx.principal, &post)?;
        Ok(post)
    }

    /// Updates a post. Only its author may do so.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: i64,
        data: UpdatePost,
    ) -> Result<Post, AppError> {
        let post = self.find(id).await?;
        self.evaluator.check_object(POST_UPDATE, &ctx.principal, &post)?;
        let post = self.post_repo.update(id, data).await?;
        info!(post_id = id, user_id = ctx.user_id(), "Post updated");
        Ok(post)
    }

    /// Deletes a post and its comments. Allowed to the author and admins.
    pub async fn delete(&self, ctx: &RequestContext, id: i64) -> Result<(), AppError> {
        let post = self.find(id).await?;
        self.evaluator.check_object(POST_DELETE, &ctx.principal, &post)?;

        // Post first: a comment racing in after the cascade sees the post gone.
        self.post_repo.delete(id).await?;
        let removed_comments = self.comment_repo.delete_by_post(id).await?;
        info!(
            post_id = id,
            user_id = ctx.user_id(),
            removed_comments,
            "Post deleted"
        );
        Ok(())
    }

    async fn find(&self, id: i64) -> Result<Post, AppError> {
        self.post_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Post {id} not found")))
    }
}
