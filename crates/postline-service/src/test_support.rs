//! Shared wiring for service unit tests.

use std::sync::Arc;

use postline_auth::{PasswordHasher, PasswordValidator, PermissionEvaluator, SessionIssuer};
use postline_core::config::AuthConfig;
use postline_database::memory::{
    MemoryCommentRepository, MemoryPostRepository, MemoryUserRepository,
};
use postline_database::repositories::UserRepository;
use postline_entity::user::{User, UserRole};

use crate::auth::{AuthService, RegisterInput};
use crate::comment::CommentService;
use crate::context::RequestContext;
use crate::post::PostService;
use crate::user::UserService;

pub(crate) struct TestServices {
    pub users: Arc<MemoryUserRepository>,
    pub comments: Arc<MemoryCommentRepository>,
    pub auth: AuthService,
    pub user: UserService,
    pub post: PostService,
    pub comment: CommentService,
}

impl TestServices {
    pub fn new() -> Self {
        let config = AuthConfig {
            jwt_secret: "service-test-secret".into(),
            ..AuthConfig::default()
        };
        let users = Arc::new(MemoryUserRepository::new());
        let posts = Arc::new(MemoryPostRepository::new());
        let comments = Arc::new(MemoryCommentRepository::new());
        let evaluator = Arc::new(PermissionEvaluator::standard().unwrap());

        let auth = AuthService::new(
            users.clone(),
            Arc::new(PasswordHasher::with_params(8, 1, 1).unwrap()),
            Arc::new(PasswordValidator::new(&config)),
            Arc::new(SessionIssuer::new(&config).unwrap()),
        );

        Self {
            users: users.clone(),
            comments: comments.clone(),
            auth,
            user: UserService::new(users, evaluator.clone()),
            post: PostService::new(posts.clone(), comments.clone(), evaluator.clone()),
            comment: CommentService::new(posts, comments, evaluator),
        }
    }

    /// Registers an account with the given role and returns its context.
    pub async fn account(&self, username: &str, role: UserRole) -> RequestContext {
        let session = self
            .auth
            .register(RegisterInput {
                username: username.into(),
                email: format!("{username}@example.com"),
                password: "password".into(),
            })
            .await
            .unwrap();
        let user: User = self.users.set_role(session.user.id, role).await.unwrap();
        RequestContext::for_user(&user)
    }
}
