//! End-to-end tests driving the HTTP API over in-memory storage.

mod auth_test;
mod comment_test;
mod helpers;
mod permission_test;
mod post_test;
