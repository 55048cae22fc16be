//! Request context carrying the authenticated principal.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use postline_auth::Principal;
use postline_entity::user::{User, UserRole};

/// Context for the current authenticated request.
///
/// Built by the request authenticator from a freshly loaded account and
/// passed into service methods so that every operation knows who is acting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated principal.
    pub principal: Principal,
    /// The username, for logging.
    pub username: String,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a context for `user`, stamped with the current time.
    pub fn for_user(user: &User) -> Self {
        Self {
            principal: Principal::from(user),
            username: user.username.clone(),
            request_time: Utc::now(),
        }
    }

    /// The acting account id.
    pub fn user_id(&self) -> i64 {
        self.principal.id
    }

    /// The acting account's role.
    pub fn role(&self) -> UserRole {
        self.principal.role
    }

    /// Returns whether the current user is an admin.
    pub fn is_admin(&self) -> bool {
        self.principal.is_admin()
    }
}
