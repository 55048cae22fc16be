//! # postline-api
//!
//! HTTP API layer for Postline built on Axum.
//!
//! Provides the REST endpoints, the bearer-token request authenticator,
//! request logging and CORS middleware, DTOs, and error-to-status mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use error::ApiError;
pub use state::AppState;
