//! Role- and ownership-based permission rules and their evaluation.
//!
//! Operations are named `"<resource>:<action>"`. Operation-level rules are
//! checked before any object is loaded; object-level rules are checked
//! against a concrete [`PermissionTarget`].

pub mod evaluator;
pub mod operations;
pub mod rules;
pub mod table;
pub mod target;

pub use evaluator::PermissionEvaluator;
pub use rules::{Grant, Operation, OwnerReference, PermissionRule, ResourceKind};
pub use table::{PermissionClass, PermissionTable};
pub use target::PermissionTarget;
