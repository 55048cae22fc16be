//! First-admin seeding configuration.

use serde::{Deserialize, Serialize};

/// Credentials for an administrator account created at startup.
///
/// All three fields must be set for seeding to happen.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BootstrapConfig {
    /// Admin login name.
    #[serde(default)]
    pub admin_username: Option<String>,
    /// Admin email address.
    #[serde(default)]
    pub admin_email: Option<String>,
    /// Admin plaintext password; hashed before storage.
    #[serde(default)]
    pub admin_password: Option<String>,
}

/// A fully specified bootstrap admin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapAdmin<'a> {
    /// Admin login name.
    pub username: &'a str,
    /// Admin email address.
    pub email: &'a str,
    /// Admin plaintext password.
    pub password: &'a str,
}

impl BootstrapConfig {
    /// Returns the admin credentials when every field is present and non-empty.
    pub fn admin(&self) -> Option<BootstrapAdmin<'_>> {
        let username = self.admin_username.as_deref().filter(|s| !s.is_empty())?;
        let email = self.admin_email.as_deref().filter(|s| !s.is_empty())?;
        let password = self.admin_password.as_deref().filter(|s| !s.is_empty())?;
        Some(BootstrapAdmin {
            username,
            email,
            password,
        })
    }
}
