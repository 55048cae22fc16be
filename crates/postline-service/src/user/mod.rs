//! Account read services.

pub mod service;

pub use service::UserService;
