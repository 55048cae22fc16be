//! # postline-database
//!
//! Persistence seam for Postline. Services depend only on the repository
//! traits in [`repositories`]; [`memory`] provides the concurrent in-memory
//! implementations the server ships with.

pub mod memory;
pub mod repositories;

pub use memory::{MemoryCommentRepository, MemoryPostRepository, MemoryUserRepository};
pub use repositories::{CommentRepository, PostRepository, UserRepository};
