//! Claim set carried inside every session token.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AuthError;

/// Claims payload embedded in every access and refresh token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the account id. Serialized as a decimal string.
    #[serde(with = "subject")]
    pub sub: i64,
    /// Token kind. Part of the signed payload so it cannot be swapped.
    #[serde(rename = "type")]
    pub kind: TokenKind,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
    /// Random token id; keeps tokens minted in the same second distinct.
    pub jti: Uuid,
}

/// Distinguishes access tokens from refresh tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    /// Token accepted by protected endpoints.
    Access,
    /// Token accepted only by the refresh endpoint.
    Refresh,
}

impl TokenKind {
    /// Wire name of the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Access => "access",
            Self::Refresh => "refresh",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Claims {
    /// Returns the account id from the subject claim.
    pub fn subject(&self) -> i64 {
        self.sub
    }

    /// Returns the issue time as a `DateTime<Utc>`.
    pub fn issued_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.iat, 0).unwrap_or(DateTime::UNIX_EPOCH)
    }

    /// Returns the expiration as a `DateTime<Utc>`.
    pub fn expires_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.exp, 0).unwrap_or(DateTime::UNIX_EPOCH)
    }

    /// Checks whether this token is past its expiry at `now`.
    pub fn is_expired_at(&self, now: DateTime<Utc>, leeway_seconds: i64) -> bool {
        now.timestamp() > self.exp.saturating_add(leeway_seconds)
    }

    /// Fails with [`AuthError::WrongTokenKind`] unless the token is of `expected` kind.
    pub fn require_kind(&self, expected: TokenKind) -> Result<(), AuthError> {
        if self.kind == expected {
            Ok(())
        } else {
            Err(AuthError::WrongTokenKind {
                expected,
                found: self.kind,
            })
        }
    }
}

/// Subject (de)serialization: written as a string, read from a string or a number.
mod subject {
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(i64),
        Text(String),
    }

    pub fn serialize<S: Serializer>(sub: &i64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&sub.to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
        match Raw::deserialize(deserializer)? {
            Raw::Number(n) => Ok(n),
            Raw::Text(s) => s
                .parse()
                .map_err(|_| D::Error::custom(format!("subject '{s}' is not an integer id"))),
        }
    }
}
