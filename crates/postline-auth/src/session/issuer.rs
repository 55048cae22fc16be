//! Session issuer: mints token pairs and rotates them on refresh.
//!
//! Tokens are never stored server-side. A refresh token that has already
//! been exchanged stays valid until its own `exp`; there is no revocation
//! store to consult.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use postline_core::config::AuthConfig;

use crate::error::AuthError;
use crate::jwt::{Claims, JwtDecoder, JwtEncoder, TokenKind};

/// A paired access and refresh token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// Token accepted by protected endpoints.
    pub access_token: String,
    /// Access token expiry.
    pub access_expires_at: DateTime<Utc>,
    /// Token accepted by the refresh endpoint.
    pub refresh_token: String,
    /// Refresh token expiry.
    pub refresh_expires_at: DateTime<Utc>,
}

/// Issues, refreshes, and verifies session tokens.
#[derive(Debug, Clone)]
pub struct SessionIssuer {
    encoder: JwtEncoder,
    decoder: JwtDecoder,
}

impl SessionIssuer {
    /// Builds an issuer whose encoder and decoder share one configuration.
    pub fn new(config: &AuthConfig) -> Result<Self, AuthError> {
        Ok(Self {
            encoder: JwtEncoder::new(config)?,
            decoder: JwtDecoder::new(config)?,
        })
    }

    /// Builds an issuer from an already constructed encoder/decoder pair.
    pub fn from_parts(encoder: JwtEncoder, decoder: JwtDecoder) -> Self {
        Self { encoder, decoder }
    }

    /// Issues a fresh pair for `subject` at the current time.
    pub fn issue_pair(&self, subject: i64) -> Result<TokenPair, AuthError> {
        self.issue_pair_at(subject, Utc::now())
    }

    /// Issues a fresh pair for `subject` as of `now`.
    pub fn issue_pair_at(&self, subject: i64, now: DateTime<Utc>) -> Result<TokenPair, AuthError> {
        let access = self.encoder.encode(subject, TokenKind::Access, now)?;
        let refresh = self.encoder.encode(subject, TokenKind::Refresh, now)?;

        Ok(TokenPair {
            access_token: access.token,
            access_expires_at: access.expires_at,
            refresh_token: refresh.token,
            refresh_expires_at: refresh.expires_at,
        })
    }

    /// Exchanges a refresh token for a brand-new pair.
    pub fn refresh(&self, refresh_token: &str) -> Result<(TokenPair, i64), AuthError> {
        self.refresh_at(refresh_token, Utc::now())
    }

    /// Exchanges a refresh token for a brand-new pair as of `now`.
    ///
    /// Fails with [`AuthError::WrongTokenKind`] when handed an access token.
    pub fn refresh_at(
        &self,
        refresh_token: &str,
        now: DateTime<Utc>,
    ) -> Result<(TokenPair, i64), AuthError> {
        let claims = self.verify(refresh_token, TokenKind::Refresh, now)?;
        let subject = claims.subject();
        let pair = self.issue_pair_at(subject, now)?;
        info!(user_id = subject, "Rotated session tokens");
        Ok((pair, subject))
    }

    /// Verifies an access token and returns its claims.
    pub fn authenticate_access(&self, access_token: &str) -> Result<Claims, AuthError> {
        self.authenticate_access_at(access_token, Utc::now())
    }

    /// Verifies an access token as of `now`.
    pub fn authenticate_access_at(
        &self,
        access_token: &str,
        now: DateTime<Utc>,
    ) -> Result<Claims, AuthError> {
        self.verify(access_token, TokenKind::Access, now)
    }

    fn verify(&self, token: &str, kind: TokenKind, now: DateTime<Utc>) -> Result<Claims, AuthError> {
        let claims = self.decoder.decode(token, now)?;
        claims.require_kind(kind)?;
        Ok(claims)
    }
}
