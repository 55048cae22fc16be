//! Token signing with per-kind lifetimes.

use chrono::{DateTime, TimeDelta, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use uuid::Uuid;

use postline_core::config::AuthConfig;

use super::claims::{Claims, TokenKind};
use super::{signing_algorithm, signing_secret};
use crate::error::AuthError;

/// A freshly signed token together with its expiry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    /// Compact signed token.
    pub token: String,
    /// Instant after which the token is rejected.
    pub expires_at: DateTime<Utc>,
}

/// Signs access and refresh tokens with the configured secret.
#[derive(Clone)]
pub struct JwtEncoder {
    encoding_key: EncodingKey,
    header: Header,
    access_ttl: TimeDelta,
    refresh_ttl: TimeDelta,
}

impl JwtEncoder {
    /// Creates an encoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Result<Self, AuthError> {
        let algorithm = signing_algorithm(&config.jwt_algorithm)?;
        Ok(Self {
            encoding_key: EncodingKey::from_secret(signing_secret(&config.jwt_secret)?),
            header: Header::new(algorithm),
            access_ttl: lifetime(config.access_token_ttl_minutes)?,
            refresh_ttl: lifetime(config.refresh_token_ttl_minutes)?,
        })
    }

    /// Lifetime applied to tokens of the given kind.
    pub fn lifetime(&self, kind: TokenKind) -> TimeDelta {
        match kind {
            TokenKind::Access => self.access_ttl,
            TokenKind::Refresh => self.refresh_ttl,
        }
    }

    /// Signs a token of `kind` for `subject`, issued at `now`.
    pub fn encode(
        &self,
        subject: i64,
        kind: TokenKind,
        now: DateTime<Utc>,
    ) -> Result<IssuedToken, AuthError> {
        let expires_at = now
            .checked_add_signed(self.lifetime(kind))
            .ok_or_else(|| AuthError::Encoding("token expiry overflows".into()))?;

        let claims = Claims {
            sub: subject,
            kind,
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
            jti: Uuid::new_v4(),
        };

        let token = encode(&self.header, &claims, &self.encoding_key)
            .map_err(|e| AuthError::Encoding(e.to_string()))?;

        Ok(IssuedToken { token, expires_at })
    }
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncoder")
            .field("algorithm", &self.header.alg)
            .field("access_ttl", &self.access_ttl)
            .field("refresh_ttl", &self.refresh_ttl)
            .finish_non_exhaustive()
    }
}

fn lifetime(minutes: u64) -> Result<TimeDelta, AuthError> {
    i64::try_from(minutes)
        .ok()
        .and_then(TimeDelta::try_minutes)
        .ok_or_else(|| AuthError::Encoding(format!("token lifetime of {minutes} minutes is out of range")))
}
