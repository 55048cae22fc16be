//! The permission table: per-resource rule lists, built once at startup.

use std::collections::{HashMap, HashSet};

use postline_entity::UserRole;

use crate::error::AuthError;

use super::rules::{Grant, OwnerReference, PermissionRule, ResourceKind};

/// Operation-level and object-level rules for one resource kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PermissionClass {
    operation_rules: Vec<PermissionRule>,
    object_rules: Vec<PermissionRule>,
}

impl PermissionClass {
    /// Builds a class, rejecting any list that names an action twice.
    pub fn new(
        resource: ResourceKind,
        operation_rules: Vec<PermissionRule>,
        object_rules: Vec<PermissionRule>,
    ) -> Result<Self, AuthError> {
        ensure_unique(resource, &operation_rules)?;
        ensure_unique(resource, &object_rules)?;
        Ok(Self {
            operation_rules,
            object_rules,
        })
    }

    /// Rules checked without a target instance.
    pub fn operation_rules(&self) -> &[PermissionRule] {
        &self.operation_rules
    }

    /// Rules checked against a target instance.
    pub fn object_rules(&self) -> &[PermissionRule] {
        &self.object_rules
    }
}

fn ensure_unique(resource: ResourceKind, rules: &[PermissionRule]) -> Result<(), AuthError> {
    let mut seen = HashSet::new();
    for rule in rules {
        if !seen.insert(rule.action.as_str()) {
            return Err(AuthError::DuplicateRule {
                resource: resource.to_string(),
                action: rule.action.clone(),
            });
        }
    }
    Ok(())
}

/// Read-only registry of permission classes keyed by resource kind.
///
/// Constructed before the server accepts requests and shared behind an
/// `Arc` afterwards; nothing mutates it once built.
#[derive(Debug, Clone, Default)]
pub struct PermissionTable {
    classes: HashMap<ResourceKind, PermissionClass>,
}

impl PermissionTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the class for `resource`.
    pub fn with_class(mut self, resource: ResourceKind, class: PermissionClass) -> Self {
        self.classes.insert(resource, class);
        self
    }

    /// The rule set the service ships with.
    pub fn standard() -> Result<Self, AuthError> {
        use Grant::{All, Owner, Role};
        use OwnerReference::{Author, ParentAuthor};

        let admin = Role(UserRole::Admin);

        let post = PermissionClass::new(
            ResourceKind::Post,
            vec![
                PermissionRule::new("create", [All]),
                PermissionRule::new("view_list", [All]),
            ],
            vec![
                PermissionRule::new("update", [Owner(Author)]),
                PermissionRule::new("delete", [admin, Owner(Author)]),
                PermissionRule::new("view", [All]),
            ],
        )?;

        let comment = PermissionClass::new(
            ResourceKind::Comment,
            vec![
                PermissionRule::new("create", [All]),
                PermissionRule::new("view", [All]),
            ],
            vec![
                PermissionRule::new("update", [Owner(Author)]),
                PermissionRule::new("delete", [admin, Owner(Author), Owner(ParentAuthor)]),
                PermissionRule::new("view", [All]),
            ],
        )?;

        let user = PermissionClass::new(
            ResourceKind::User,
            vec![PermissionRule::new("view_list", [admin])],
            Vec::new(),
        )?;

        Ok(Self::new()
            .with_class(ResourceKind::Post, post)
            .with_class(ResourceKind::Comment, comment)
            .with_class(ResourceKind::User, user))
    }

    /// Ordered operation-level rules for `resource`.
    pub fn operation_rules(&self, resource: ResourceKind) -> Result<&[PermissionRule], AuthError> {
        self.class(resource).map(PermissionClass::operation_rules)
    }

    /// Ordered object-level rules for `resource`.
    pub fn object_rules(&self, resource: ResourceKind) -> Result<&[PermissionRule], AuthError> {
        self.class(resource).map(PermissionClass::object_rules)
    }

    fn class(&self, resource: ResourceKind) -> Result<&PermissionClass, AuthError> {
        self.classes
            .get(&resource)
            .ok_or_else(|| AuthError::UnknownResource(resource.to_string()))
    }
}
