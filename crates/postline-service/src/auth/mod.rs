//! Registration, login, token refresh, and request authentication.

pub mod service;

pub use service::{AuthService, AuthSession, LoginInput, RegisterInput};
