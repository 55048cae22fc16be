//! Account read operations.

use std::sync::Arc;

use postline_auth::PermissionEvaluator;
use postline_auth::permission::operations::USER_VIEW_LIST;
use postline_core::error::AppError;
use postline_database::repositories::UserRepository;
use postline_entity::user::User;

use crate::context::RequestContext;

/// Handles account lookups.
#[derive(Debug, Clone)]
pub struct UserService {
    /// User repository.
    user_repo: Arc<dyn UserRepository>,
    /// Permission evaluator.
    evaluator: Arc<PermissionEvaluator>,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(user_repo: Arc<dyn UserRepository>, evaluator: Arc<PermissionEvaluator>) -> Self {
        Self {
            user_repo,
            evaluator,
        }
    }

    /// Gets the current user's account.
    pub async fn me(&self, ctx: &RequestContext) -> Result<User, AppError> {
        self.user_repo
            .find_by_id(ctx.user_id())
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }

    /// Lists every account. Gated by `user:view_list`.
    pub async fn list(&self, ctx: &RequestContext) -> Result<Vec<User>, AppError> {
        self.evaluator
            .check_operation(USER_VIEW_LIST, &ctx.principal)?;
        self.user_repo.list().await
    }
}
