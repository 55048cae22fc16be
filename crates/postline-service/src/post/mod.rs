//! Post services.

pub mod service;

pub use service::PostService;
