//! Repository traits for all Postline entities.

pub mod comment;
pub mod post;
pub mod user;

pub use comment::CommentRepository;
pub use post::PostRepository;
pub use user::UserRepository;
