//! User repository contract.

use async_trait::async_trait;

use postline_core::result::AppResult;
use postline_entity::user::{CreateUser, User, UserRole};

/// Storage for accounts.
///
/// Usernames and emails are unique, compared case-insensitively.
#[async_trait]
pub trait UserRepository: Send + Sync + std::fmt::Debug + 'static {
    /// Insert a new account. Fails with `Conflict` if the username or email is taken.
    async fn create(&self, data: CreateUser) -> AppResult<User>;

    /// Find an account by primary key.
    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>>;

    /// Find an account by username.
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;

    /// Find an account by email.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// All accounts, ordered by id.
    async fn list(&self) -> AppResult<Vec<User>>;

    /// Change an account's role. Fails with `NotFound` for an unknown id.
    async fn set_role(&self, id: i64, role: UserRole) -> AppResult<User>;
}
