//! `Authorization: Bearer <token>` header parsing.

use crate::error::AuthError;

const SCHEME: &str = "bearer";

/// Extracts the token from an `Authorization` header value.
///
/// The scheme is matched case-insensitively. A missing header, another
/// scheme, or an empty token all yield [`AuthError::MissingCredentials`].
pub fn parse_bearer(header: Option<&str>) -> Result<&str, AuthError> {
    let value = header.ok_or(AuthError::MissingCredentials)?.trim();
    let (scheme, token) = value
        .split_once(char::is_whitespace)
        .ok_or(AuthError::MissingCredentials)?;

    if !scheme.eq_ignore_ascii_case(SCHEME) {
        return Err(AuthError::MissingCredentials);
    }

    let token = token.trim();
    if token.is_empty() {
        return Err(AuthError::MissingCredentials);
    }
    Ok(token)
}
