//! Argon2id password hashing and verification.

use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{
        PasswordHash, PasswordHasher as ArgonHasher, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};

use postline_core::config::AuthConfig;

use crate::error::AuthError;

/// Handles password hashing and verification using Argon2id.
///
/// The salt is generated internally on every call, so hashing the same
/// plaintext twice yields two different digests. Compare with
/// [`PasswordHasher::verify`], never with string equality.
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    /// Cost parameters used for new digests.
    params: Params,
}

impl PasswordHasher {
    /// Creates a hasher with the library's default Argon2id cost.
    pub fn new() -> Self {
        Self {
            params: Params::default(),
        }
    }

    /// Creates a hasher from the configured cost parameters.
    pub fn from_config(config: &AuthConfig) -> Result<Self, AuthError> {
        Self::with_params(
            config.argon2_memory_kib,
            config.argon2_iterations,
            config.argon2_parallelism,
        )
    }

    /// Creates a hasher with explicit memory (KiB), iteration, and lane counts.
    pub fn with_params(memory_kib: u32, iterations: u32, parallelism: u32) -> Result<Self, AuthError> {
        let params = Params::new(memory_kib, iterations, parallelism, None)
            .map_err(|e| AuthError::Hashing(format!("invalid Argon2 parameters: {e}")))?;
        Ok(Self { params })
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }

    /// Hashes a plaintext password with a freshly generated salt.
    ///
    /// Returns the PHC-formatted digest, which embeds salt and parameters.
    pub fn hash(&self, plaintext: &str) -> Result<String, AuthError> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = self
            .argon2()
            .hash_password(plaintext.as_bytes(), &salt)
            .map_err(|e| AuthError::Hashing(e.to_string()))?;

        Ok(hash.to_string())
    }

    /// Verifies a plaintext password against a stored digest.
    ///
    /// The digest comparison is constant-time. A digest that cannot be
    /// parsed is treated as a mismatch rather than an error.
    pub fn verify(&self, plaintext: &str, digest: &str) -> bool {
        let parsed = match PasswordHash::new(digest) {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!(error = %e, "Stored password digest is not a valid PHC string");
                return false;
            }
        };

        // Verification re-derives with the parameters embedded in the digest.
        self.argon2()
            .verify_password(plaintext.as_bytes(), &parsed)
            .is_ok()
    }

    /// Spends one Argon2 derivation on `plaintext` and reports a mismatch.
    ///
    /// Used when there is no stored digest to compare against, so that an
    /// unknown account costs as much as a wrong password.
    pub fn verify_missing(&self, plaintext: &str) -> bool {
        let salt = SaltString::generate(&mut OsRng);
        let _ = self.argon2().hash_password(plaintext.as_bytes(), &salt);
        false
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}
