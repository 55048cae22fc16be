//! Authentication configuration.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Shipped default signing secret. Refused when running in production.
pub const PLACEHOLDER_JWT_SECRET: &str = "CHANGE_ME_IN_PRODUCTION";

/// Environment name in which the placeholder secret is refused.
pub const PRODUCTION_ENV: &str = "production";

/// Token signing and credential hashing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Shared secret for HMAC token signing.
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    /// Signing algorithm name. Only the HMAC family is accepted.
    #[serde(default = "default_jwt_algorithm")]
    pub jwt_algorithm: String,
    /// Access token lifetime in minutes.
    #[serde(default = "default_token_ttl")]
    pub access_token_ttl_minutes: u64,
    /// Refresh token lifetime in minutes.
    #[serde(default = "default_token_ttl")]
    pub refresh_token_ttl_minutes: u64,
    /// Clock-skew tolerance applied to `exp`, in seconds.
    #[serde(default)]
    pub leeway_seconds: u64,
    /// Minimum accepted password length on registration.
    #[serde(default = "default_password_min")]
    pub password_min_length: usize,
    /// Argon2 memory cost in KiB.
    #[serde(default = "default_argon2_memory")]
    pub argon2_memory_kib: u32,
    /// Argon2 iteration count.
    #[serde(default = "default_argon2_iterations")]
    pub argon2_iterations: u32,
    /// Argon2 lane count.
    #[serde(default = "default_argon2_parallelism")]
    pub argon2_parallelism: u32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: default_jwt_secret(),
            jwt_algorithm: default_jwt_algorithm(),
            access_token_ttl_minutes: default_token_ttl(),
            refresh_token_ttl_minutes: default_token_ttl(),
            leeway_seconds: 0,
            password_min_length: default_password_min(),
            argon2_memory_kib: default_argon2_memory(),
            argon2_iterations: default_argon2_iterations(),
            argon2_parallelism: default_argon2_parallelism(),
        }
    }
}

impl AuthConfig {
    /// Checks the signing secret for the given environment.
    ///
    /// A blank secret is refused everywhere; the shipped placeholder is
    /// refused in production.
    pub fn validate_for(&self, env: &str) -> Result<(), AppError> {
        if self.jwt_secret.trim().is_empty() {
            return Err(AppError::configuration("auth.jwt_secret must not be empty"));
        }

        if env.trim().eq_ignore_ascii_case(PRODUCTION_ENV)
            && self.jwt_secret == PLACEHOLDER_JWT_SECRET
        {
            return Err(AppError::configuration(
                "auth.jwt_secret must be set in production (set POSTLINE__AUTH__JWT_SECRET)",
            ));
        }

        Ok(())
    }
}

fn default_jwt_secret() -> String {
    PLACEHOLDER_JWT_SECRET.to_string()
}

fn default_jwt_algorithm() -> String {
    "HS256".to_string()
}

// One week.
fn default_token_ttl() -> u64 {
    60 * 24 * 7
}

fn default_password_min() -> usize {
    4
}

fn default_argon2_memory() -> u32 {
    19 * 1024
}

fn default_argon2_iterations() -> u32 {
    2
}

fn default_argon2_parallelism() -> u32 {
    1
}
