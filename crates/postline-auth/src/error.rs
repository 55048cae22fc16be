//! Error taxonomy of the authentication and authorization core.
//!
//! Authentication failures all collapse into one generic 401 message at the
//! application boundary so that clients cannot tell which check rejected
//! them. The precise variant is only ever logged.

use thiserror::Error;

use postline_core::error::{AppError, ErrorKind};

use crate::jwt::TokenKind;

/// Message returned to clients for every token/header failure.
pub const GENERIC_UNAUTHORIZED: &str = "Could not validate credentials";

/// Message returned to clients for a failed username/password check.
pub const INVALID_CREDENTIALS: &str = "Invalid username or password";

/// Errors raised by the hasher, token codec, session issuer, and evaluator.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    /// No `Authorization` header, or a scheme other than `Bearer`.
    #[error("missing or malformed bearer credentials")]
    MissingCredentials,

    /// Username unknown or password mismatch.
    #[error("invalid username or password")]
    InvalidCredentials,

    /// The token signature does not verify against the configured secret.
    #[error("token signature is invalid")]
    InvalidSignature,

    /// The token is past its `exp`.
    #[error("token has expired")]
    Expired,

    /// The token is not a well-formed signed claim set.
    #[error("token is malformed: {0}")]
    MalformedToken(String),

    /// A token of one kind was presented where the other kind is required.
    #[error("expected {expected} token, got {found} token")]
    WrongTokenKind {
        /// Kind the caller required.
        expected: TokenKind,
        /// Kind carried by the token.
        found: TokenKind,
    },

    /// The subject of a verified token no longer exists.
    #[error("token subject {0} does not exist")]
    UnknownSubject(i64),

    /// No rule grants the principal the requested operation.
    #[error("permission denied for '{operation}'")]
    PermissionDenied {
        /// The `"<resource>:<action>"` string that was checked.
        operation: String,
    },

    /// The operation names a resource kind absent from the permission table.
    #[error("unknown resource kind in operation '{0}'")]
    UnknownResource(String),

    /// An object-level check was made against a target of another kind.
    #[error("operation '{operation}' checked against a '{target}' object")]
    ResourceMismatch {
        /// The operation that was checked.
        operation: String,
        /// Resource kind of the supplied target.
        target: String,
    },

    /// A rule list names the same action twice.
    #[error("duplicate rule for action '{action}' on '{resource}'")]
    DuplicateRule {
        /// Resource kind of the offending class.
        resource: String,
        /// The repeated action.
        action: String,
    },

    /// The configured signing algorithm is not a supported symmetric one.
    #[error("unsupported signing algorithm '{0}'")]
    UnsupportedAlgorithm(String),

    /// The configured signing secret is blank.
    #[error("token signing secret is empty")]
    EmptySecret,

    /// Password hashing failed.
    #[error("password hashing failed: {0}")]
    Hashing(String),

    /// Token signing failed.
    #[error("token encoding failed: {0}")]
    Encoding(String),
}

impl AuthError {
    /// Whether this error means the caller failed to authenticate (HTTP 401).
    pub fn is_authentication_failure(&self) -> bool {
        matches!(
            self,
            Self::MissingCredentials
                | Self::InvalidCredentials
                | Self::InvalidSignature
                | Self::Expired
                | Self::MalformedToken(_)
                | Self::WrongTokenKind { .. }
                | Self::UnknownSubject(_)
        )
    }

    /// Whether this error indicates a wiring fault rather than a client error.
    pub fn is_configuration_fault(&self) -> bool {
        matches!(
            self,
            Self::UnknownResource(_)
                | Self::ResourceMismatch { .. }
                | Self::DuplicateRule { .. }
                | Self::UnsupportedAlgorithm(_)
                | Self::EmptySecret
        )
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials => {
                tracing::debug!("Rejected login: invalid username or password");
                AppError::unauthorized(INVALID_CREDENTIALS)
            }
            AuthError::PermissionDenied { operation } => {
                AppError::forbidden(format!("Permission denied for '{operation}'"))
            }
            e if e.is_authentication_failure() => {
                tracing::debug!(reason = %e, "Rejected credentials");
                AppError::unauthorized(GENERIC_UNAUTHORIZED)
            }
            e if e.is_configuration_fault() => {
                tracing::error!(error = %e, "Authorization misconfiguration");
                AppError::with_source(ErrorKind::Configuration, "Internal server error", e)
            }
            e => AppError::with_source(ErrorKind::Internal, "Internal server error", e),
        }
    }
}
