//! Token verification.

use chrono::{DateTime, Utc};
use jsonwebtoken::errors::ErrorKind as JwtErrorKind;
use jsonwebtoken::{DecodingKey, Validation, decode};

use postline_core::config::AuthConfig;

use super::claims::Claims;
use super::{signing_algorithm, signing_secret};
use crate::error::AuthError;

/// Verifies token signatures and expiry against the configured secret.
///
/// Expiry is evaluated against a caller-supplied instant rather than the
/// library's wall clock, which keeps decoding deterministic under test.
#[derive(Clone)]
pub struct JwtDecoder {
    decoding_key: DecodingKey,
    validation: Validation,
    leeway_seconds: i64,
}

impl JwtDecoder {
    /// Creates a decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Result<Self, AuthError> {
        let algorithm = signing_algorithm(&config.jwt_algorithm)?;

        let mut validation = Validation::new(algorithm);
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.validate_aud = false;

        Ok(Self {
            decoding_key: DecodingKey::from_secret(signing_secret(&config.jwt_secret)?),
            validation,
            leeway_seconds: i64::try_from(config.leeway_seconds).unwrap_or(i64::MAX),
        })
    }

    /// Verifies `token` and returns its claims if it is still valid at `now`.
    ///
    /// The signature is checked before expiry, so a forged token is always
    /// reported as such even when its claimed `exp` has passed.
    pub fn decode(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, AuthError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
            match e.kind() {
                JwtErrorKind::InvalidSignature | JwtErrorKind::InvalidAlgorithm => {
                    AuthError::InvalidSignature
                }
                _ => AuthError::MalformedToken(e.to_string()),
            }
        })?;

        let claims = data.claims;
        if claims.is_expired_at(now, self.leeway_seconds) {
            return Err(AuthError::Expired);
        }
        Ok(claims)
    }
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("algorithms", &self.validation.algorithms)
            .field("leeway_seconds", &self.leeway_seconds)
            .finish_non_exhaustive()
    }
}
