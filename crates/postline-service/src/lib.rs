//! # postline-service
//!
//! Business logic service layer for Postline. Each service orchestrates
//! repositories, credential hashing, token issuance, and permission checks
//! to implement one application use case.
//!
//! Services follow constructor injection: all dependencies are provided at
//! construction time via `Arc` references.

pub mod auth;
pub mod comment;
pub mod context;
pub mod post;
pub mod user;

#[cfg(test)]
pub(crate) mod test_support;

pub use auth::{AuthService, AuthSession, LoginInput, RegisterInput};
pub use comment::CommentService;
pub use context::RequestContext;
pub use post::PostService;
pub use user::UserService;
