//! Concurrent in-memory repositories backed by `DashMap`.

pub mod comment;
pub mod post;
pub mod user;

use std::sync::atomic::{AtomicI64, Ordering};

pub use comment::MemoryCommentRepository;
pub use post::MemoryPostRepository;
pub use user::MemoryUserRepository;

/// Monotonic primary-key generator starting at 1.
#[derive(Debug)]
pub(crate) struct IdSequence(AtomicI64);

impl IdSequence {
    pub(crate) fn new() -> Self {
        Self(AtomicI64::new(1))
    }

    pub(crate) fn next(&self) -> i64 {
        self.0.fetch_add(1, Ordering::Relaxed)
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::new()
    }
}
