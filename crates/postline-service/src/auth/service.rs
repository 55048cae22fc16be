//! Account registration, login, token refresh, and access-token authentication.

use std::sync::Arc;

use tracing::{info, warn};

use postline_auth::{AuthError, PasswordHasher, PasswordValidator, SessionIssuer, TokenPair};
use postline_core::config::bootstrap::BootstrapAdmin;
use postline_core::error::AppError;
use postline_database::repositories::UserRepository;
use postline_entity::user::{CreateUser, User, UserRole};

use crate::context::RequestContext;

/// Registration data.
#[derive(Debug, Clone)]
pub struct RegisterInput {
    /// Desired username.
    pub username: String,
    /// Email address.
    pub email: String,
    /// Plaintext password.
    pub password: String,
}

/// Login credentials.
#[derive(Debug, Clone)]
pub struct LoginInput {
    /// Username.
    pub username: String,
    /// Plaintext password.
    pub password: String,
}

/// An account together with a freshly issued token pair.
#[derive(Debug, Clone)]
pub struct AuthSession {
    /// The authenticated account.
    pub user: User,
    /// Access and refresh tokens.
    pub tokens: TokenPair,
}

/// Handles credential checks and session token issuance.
#[derive(Debug, Clone)]
pub struct AuthService {
    /// User repository.
    user_repo: Arc<dyn UserRepository>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Password policy.
    validator: Arc<PasswordValidator>,
    /// Token issuer.
    issuer: Arc<SessionIssuer>,
}

impl AuthService {
    /// Creates a new auth service.
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        hasher: Arc<PasswordHasher>,
        validator: Arc<PasswordValidator>,
        issuer: Arc<SessionIssuer>,
    ) -> Self {
        Self {
            user_repo,
            hasher,
            validator,
            issuer,
        }
    }

    /// Registers a regular account and signs it in.
    pub async fn register(&self, input: RegisterInput) -> Result<AuthSession, AppError> {
        let user = self
            .create_account(&input.username, &input.email, &input.password, UserRole::User)
            .await?;
        info!(user_id = user.id, username = %user.username, "User registered");
        self.start_session(user)
    }

    /// Verifies a username/password pair and signs the account in.
    ///
    /// An unknown username and a wrong password produce the same error.
    pub async fn login(&self, input: LoginInput) -> Result<AuthSession, AppError> {
        let Some(user) = self.user_repo.find_by_username(&input.username).await? else {
            self.hasher.verify_missing(&input.password);
            return Err(AuthError::InvalidCredentials.into());
        };

        if !self.hasher.verify(&input.password, &user.password_hash) {
            return Err(AuthError::InvalidCredentials.into());
        }

        info!(user_id = user.id, username = %user.username, "User logged in");
        self.start_session(user)
    }

    /// Exchanges a refresh token for a new pair.
    pub async fn refresh(&self, refresh_token: &str) -> Result<AuthSession, AppError> {
        let (tokens, subject) = self.issuer.refresh(refresh_token)?;
        let user = self.load_subject(subject).await?;
        Ok(AuthSession { user, tokens })
    }

    /// Resolves an access token to a request context.
    ///
    /// The account is loaded on every call, so role changes apply to tokens
    /// that were issued before the change.
    pub async fn authenticate(&self, access_token: &str) -> Result<RequestContext, AppError> {
        let claims = self.issuer.authenticate_access(access_token)?;
        let user = self.load_subject(claims.subject()).await?;
        Ok(RequestContext::for_user(&user))
    }

    /// Creates the configured admin account unless the username already exists.
    ///
    /// Returns the created account, or `None` when it was already present.
    pub async fn ensure_admin(&self, admin: BootstrapAdmin<'_>) -> Result<Option<User>, AppError> {
        if let Some(existing) = self.user_repo.find_by_username(admin.username).await? {
            if !existing.is_admin() {
                warn!(
                    username = %existing.username,
                    "Bootstrap admin username belongs to a non-admin account; leaving it unchanged"
                );
            }
            return Ok(None);
        }

        let user = self
            .create_account(admin.username, admin.email, admin.password, UserRole::Admin)
            .await?;
        info!(user_id = user.id, username = %user.username, "Bootstrap admin created");
        Ok(Some(user))
    }

    async fn create_account(
        &self,
        username: &str,
        email: &str,
        password: &str,
        role: UserRole,
    ) -> Result<User, AppError> {
        self.validator.validate(password)?;

        if self.user_repo.find_by_username(username).await?.is_some() {
            return Err(AppError::conflict(format!(
                "Username '{username}' is already taken"
            )));
        }
        if self.user_repo.find_by_email(email).await?.is_some() {
            return Err(AppError::conflict(format!(
                "Email '{email}' is already registered"
            )));
        }

        let password_hash = self.hasher.hash(password)?;
        self.user_repo
            .create(CreateUser {
                username: username.to_string(),
                email: email.to_string(),
                password_hash,
                role,
            })
            .await
    }

    async fn load_subject(&self, subject: i64) -> Result<User, AppError> {
        let user = self
            .user_repo
            .find_by_id(subject)
            .await?
            .ok_or(AuthError::UnknownSubject(subject))?;
        Ok(user)
    }

    fn start_session(&self, user: User) -> Result<AuthSession, AppError> {
        let tokens = self.issuer.issue_pair(user.id)?;
        Ok(AuthSession { user, tokens })
    }
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use postline_core::config::{AuthConfig, BootstrapConfig};
    use postline_core::error::ErrorKind;
    use postline_database::memory::MemoryUserRepository;

    use super::*;
    use crate::test_support::TestServices;

    fn register(username: &str) -> RegisterInput {
        RegisterInput {
            username: username.into(),
            email: format!("{username}@example.com"),
            password: "hunter22".into(),
        }
    }

    #[tokio::test]
    async fn test_register_then_login() {
        let services = TestServices::new();
        let session = services.auth.register(register("alice")).await.unwrap();
        assert_eq!(session.user.role, UserRole::User);
        assert_ne!(session.user.password_hash, "hunter22");

        let login = services
            .auth
            .login(LoginInput {
                username: "alice".into(),
                password: "hunter22".into(),
            })
            .await
            .unwrap();
        assert_eq!(login.user.id, session.user.id);
    }

    #[tokio::test]
    async fn test_duplicate_registration_conflicts() {
        let services = TestServices::new();
        services.auth.register(register("alice")).await.unwrap();

        let err = services.auth.register(register("alice")).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Conflict);
    }

    #[tokio::test]
    async fn test_short_password_rejected() {
        let services = TestServices::new();
        let mut input = register("alice");
        input.password = "abc".into();

        let err = services.auth.register(input).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[tokio::test]
    async fn test_bad_login_is_indistinguishable() {
        let services = TestServices::new();
        services.auth.register(register("alice")).await.unwrap();

        let wrong_password = services
            .auth
            .login(LoginInput {
                username: "alice".into(),
                password: "nope".into(),
            })
            .await
            .unwrap_err();
        let unknown_user = services
            .auth
            .login(LoginInput {
                username: "mallory".into(),
                password: "hunter22".into(),
            })
            .await
            .unwrap_err();

        assert_eq!(wrong_password.kind, ErrorKind::Unauthorized);
        assert_eq!(wrong_password.message, unknown_user.message);
    }

    #[tokio::test]
    async fn test_unknown_user_login_pays_hashing_cost() {
        let config = AuthConfig {
            jwt_secret: "login-cost-secret".into(),
            ..AuthConfig::default()
        };
        let auth = AuthService::new(
            Arc::new(MemoryUserRepository::new()),
            Arc::new(PasswordHasher::with_params(4096, 2, 1).unwrap()),
            Arc::new(PasswordValidator::new(&config)),
            Arc::new(SessionIssuer::new(&config).unwrap()),
        );
        auth.register(register("alice")).await.unwrap();

        let login = |username: &str| LoginInput {
            username: username.into(),
            password: "nope".into(),
        };

        let started = Instant::now();
        auth.login(login("alice")).await.unwrap_err();
        let wrong_password = started.elapsed();

        let started = Instant::now();
        auth.login(login("mallory")).await.unwrap_err();
        let unknown_user = started.elapsed();

        assert!(
            unknown_user * 4 >= wrong_password,
            "unknown user took {unknown_user:?}, wrong password took {wrong_password:?}"
        );
    }

    #[tokio::test]
    async fn test_authenticate_reloads_role() {
        let services = TestServices::new();
        let session = services.auth.register(register("alice")).await.unwrap();

        let ctx = services.auth.authenticate(&session.tokens.access_token).await.unwrap();
        assert!(!ctx.is_admin());

        services.users.set_role(session.user.id, UserRole::Admin).await.unwrap();
        let ctx = services.auth.authenticate(&session.tokens.access_token).await.unwrap();
        assert!(ctx.is_admin());
    }

    #[tokio::test]
    async fn test_refresh_token_cannot_authenticate() {
        let services = TestServices::new();
        let session = services.auth.register(register("alice")).await.unwrap();

        let err = services
            .auth
            .authenticate(&session.tokens.refresh_token)
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Unauthorized);

        let refreshed = services.auth.refresh(&session.tokens.refresh_token).await.unwrap();
        assert_eq!(refreshed.user.id, session.user.id);
        assert!(services.auth.refresh(&session.tokens.access_token).await.is_err());
    }

    #[tokio::test]
    async fn test_ensure_admin_is_idempotent() {
        let services = TestServices::new();
        let config = BootstrapConfig {
            admin_username: Some("root".into()),
            admin_email: Some("root@example.com".into()),
            admin_password: Some("rootpass".into()),
        };
        let admin = config.admin().unwrap();

        let created = services.auth.ensure_admin(admin.clone()).await.unwrap();
        assert!(created.unwrap().is_admin());
        assert!(services.auth.ensure_admin(admin).await.unwrap().is_none());
    }
}
