//! In-memory user repository.

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use tracing::debug;

use postline_core::error::AppError;
use postline_core::result::AppResult;
use postline_entity::user::{CreateUser, User, UserRole};

use super::IdSequence;
use crate::repositories::UserRepository;

/// Accounts keyed by id, with case-insensitive username and email indexes.
#[derive(Debug, Default)]
pub struct MemoryUserRepository {
    users: DashMap<i64, User>,
    by_username: DashMap<String, i64>,
    by_email: DashMap<String, i64>,
    ids: IdSequence,
}

impl MemoryUserRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    fn lookup(&self, index: &DashMap<String, i64>, key: &str) -> Option<User> {
        let id = *index.get(&normalize(key))?;
        self.users.get(&id).map(|u| u.clone())
    }
}

fn normalize(key: &str) -> String {
    key.trim().to_lowercase()
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn create(&self, data: CreateUser) -> AppResult<User> {
        // Index entries are claimed username first, then email, so two
        // concurrent registrations cannot both pass the uniqueness check.
        let username_slot = match self.by_username.entry(normalize(&data.username)) {
            Entry::Occupied(_) => {
                return Err(AppError::conflict(format!(
                    "Username '{}' is already taken",
                    data.username
                )));
            }
            Entry::Vacant(slot) => slot,
        };
        let email_slot = match self.by_email.entry(normalize(&data.email)) {
            Entry::Occupied(_) => {
                return Err(AppError::conflict(format!(
                    "Email '{}' is already registered",
                    data.email
                )));
            }
            Entry::Vacant(slot) => slot,
        };

        let now = Utc::now();
        let user = User {
            id: self.ids.next(),
            username: data.username,
            email: data.email,
            password_hash: data.password_hash,
            role: data.role,
            joined_at: now,
            updated_at: now,
        };

        self.users.insert(user.id, user.clone());
        username_slot.insert(user.id);
        email_slot.insert(user.id);

        debug!(user_id = user.id, username = %user.username, "Created user");
        Ok(user)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        Ok(self.users.get(&id).map(|u| u.clone()))
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        Ok(self.lookup(&self.by_username, username))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self.lookup(&self.by_email, email))
    }

    async fn list(&self) -> AppResult<Vec<User>> {
        let mut users: Vec<User> = self.users.iter().map(|e| e.value().clone()).collect();
        users.sort_by_key(|u| u.id);
        Ok(users)
    }

    async fn set_role(&self, id: i64, role: UserRole) -> AppResult<User> {
        let mut user = self
            .users
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found(format!("User {id} not found")))?;
        user.role = role;
        user.updated_at = Utc::now();
        debug!(user_id = id, role = %role, "Changed user role");
        Ok(user.clone())
    }
}
