//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use postline_auth::{PasswordHasher, PasswordValidator, PermissionEvaluator, SessionIssuer};
use postline_core::config::AppConfig;
use postline_core::error::AppError;
use postline_database::memory::{
    MemoryCommentRepository, MemoryPostRepository, MemoryUserRepository,
};
use postline_database::repositories::{CommentRepository, PostRepository, UserRepository};
use postline_service::{AuthService, CommentService, PostService, UserService};

/// Repository handles the services are built on.
#[derive(Debug, Clone)]
pub struct Repositories {
    /// User repository
    pub users: Arc<dyn UserRepository>,
    /// Post repository
    pub posts: Arc<dyn PostRepository>,
    /// Comment repository
    pub comments: Arc<dyn CommentRepository>,
}

impl Repositories {
    /// Fresh, empty in-memory repositories.
    pub fn in_memory() -> Self {
        Self {
            users: Arc::new(MemoryUserRepository::new()),
            posts: Arc::new(MemoryPostRepository::new()),
            comments: Arc::new(MemoryCommentRepository::new()),
        }
    }
}

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Repositories ─────────────────────────────────────────
    /// Repository handles
    pub repos: Repositories,

    // ── Services ─────────────────────────────────────────────
    /// Registration, login, refresh, authentication
    pub auth_service: Arc<AuthService>,
    /// Account reads
    pub user_service: Arc<UserService>,
    /// Posts
    pub post_service: Arc<PostService>,
    /// Comments
    pub comment_service: Arc<CommentService>,
}

impl AppState {
    /// Wires services over the given repositories, hashing with the configured cost.
    pub fn new(config: AppConfig, repos: Repositories) -> Result<Self, AppError> {
        let hasher = PasswordHasher::from_config(&config.auth)?;
        Self::with_hasher(config, repos, hasher)
    }

    /// Wires services with an explicit password hasher.
    pub fn with_hasher(
        config: AppConfig,
        repos: Repositories,
        hasher: PasswordHasher,
    ) -> Result<Self, AppError> {
        let issuer = Arc::new(SessionIssuer::new(&config.auth)?);
        let evaluator = Arc::new(PermissionEvaluator::standard()?);
        let validator = Arc::new(PasswordValidator::new(&config.auth));

        let auth_service = Arc::new(AuthService::new(
            Arc::clone(&repos.users),
            Arc::new(hasher),
            validator,
            issuer,
        ));
        let user_service = Arc::new(UserService::new(
            Arc::clone(&repos.users),
            Arc::clone(&evaluator),
        ));
        let post_service = Arc::new(PostService::new(
            Arc::clone(&repos.posts),
            Arc::clone(&repos.comments),
            Arc::clone(&evaluator),
        ));
        let comment_service = Arc::new(CommentService::new(
            Arc::clone(&repos.posts),
            Arc::clone(&repos.comments),
            Arc::clone(&evaluator),
        ));

        Ok(Self {
            config: Arc::new(config),
            repos,
            auth_service,
            user_service,
            post_service,
            comment_service,
        })
    }
}
