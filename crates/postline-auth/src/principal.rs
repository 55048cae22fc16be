//! The authenticated identity attached to a request.

use serde::{Deserialize, Serialize};

use postline_entity::{User, UserRole};

/// Id and role of the caller, loaded fresh for every request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    /// Account id.
    pub id: i64,
    /// Role at the time the request was authenticated.
    pub role: UserRole,
}

impl Principal {
    /// Creates a principal.
    pub fn new(id: i64, role: UserRole) -> Self {
        Self { id, role }
    }

    /// Whether the principal holds the admin role.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

impl From<&User> for Principal {
    fn from(user: &User) -> Self {
        Self::new(user.id, user.role)
    }
}
