//! Objects that object-level rules can be evaluated against.

use postline_entity::{FullComment, Post, User};

use super::rules::{OwnerReference, ResourceKind};

/// A loaded object exposing its kind and ownership fields.
pub trait PermissionTarget {
    /// Kind of the object; must match the operation's resource prefix.
    fn resource_kind(&self) -> ResourceKind;

    /// Account id behind `reference`, if this kind of object has one.
    fn owner_id(&self, reference: OwnerReference) -> Option<i64>;
}

impl PermissionTarget for Post {
    fn resource_kind(&self) -> ResourceKind {
        ResourceKind::Post
    }

    fn owner_id(&self, reference: OwnerReference) -> Option<i64> {
        match reference {
            OwnerReference::Author => Some(self.author_id),
            OwnerReference::ParentAuthor => None,
        }
    }
}

impl PermissionTarget for FullComment {
    fn resource_kind(&self) -> ResourceKind {
        ResourceKind::Comment
    }

    fn owner_id(&self, reference: OwnerReference) -> Option<i64> {
        match reference {
            OwnerReference::Author => Some(self.author_id()),
            OwnerReference::ParentAuthor => Some(self.post_author_id()),
        }
    }
}

// An account owns itself.
impl PermissionTarget for User {
    fn resource_kind(&self) -> ResourceKind {
        ResourceKind::User
    }

    fn owner_id(&self, reference: OwnerReference) -> Option<i64> {
        match reference {
            OwnerReference::Author => Some(self.id),
            OwnerReference::ParentAuthor => None,
        }
    }
}
