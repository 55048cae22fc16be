//! # postline-entity
//!
//! Domain entity models for Postline: accounts, posts, and comments. Every
//! struct here is a plain value; persistence lives behind the repository
//! traits in `postline-database`.

pub mod comment;
pub mod post;
pub mod user;

pub use comment::{Comment, FullComment};
pub use post::Post;
pub use user::{User, UserRole};
