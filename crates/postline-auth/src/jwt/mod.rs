//! Signed session token encoding, decoding, and claims.

pub mod claims;
pub mod decoder;
pub mod encoder;

use std::str::FromStr;

use jsonwebtoken::Algorithm;

use crate::error::AuthError;

pub use claims::{Claims, TokenKind};
pub use decoder::JwtDecoder;
pub use encoder::{IssuedToken, JwtEncoder};

/// Parses the configured algorithm name, accepting only the HMAC family.
///
/// The signing secret is symmetric, so asymmetric algorithm names are a
/// configuration error rather than something to attempt at runtime.
pub fn signing_algorithm(name: &str) -> Result<Algorithm, AuthError> {
    let algorithm = Algorithm::from_str(name.trim())
        .map_err(|_| AuthError::UnsupportedAlgorithm(name.to_string()))?;

    match algorithm {
        Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512 => Ok(algorithm),
        _ => Err(AuthError::UnsupportedAlgorithm(name.to_string())),
    }
}

/// Returns the signing secret bytes, refusing a blank secret.
pub fn signing_secret(secret: &str) -> Result<&[u8], AuthError> {
    if secret.trim().is_empty() {
        return Err(AuthError::EmptySecret);
    }
    Ok(secret.as_bytes())
}
