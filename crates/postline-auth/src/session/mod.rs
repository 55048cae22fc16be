//! Access/refresh token pair issuance and refresh-token rotation.

pub mod issuer;

pub use issuer::{SessionIssuer, TokenPair};
