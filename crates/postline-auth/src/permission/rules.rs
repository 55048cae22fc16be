//! Rule vocabulary: resource kinds, grants, and operation names.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use postline_entity::UserRole;

use crate::error::AuthError;
use crate::principal::Principal;

use super::target::PermissionTarget;

/// Closed set of resource kinds known to the permission table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    /// Blog posts.
    Post,
    /// Comments on posts.
    Comment,
    /// Accounts.
    User,
}

impl ResourceKind {
    /// Prefix used in operation names.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Post => "post",
            Self::Comment => "comment",
            Self::User => "user",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceKind {
    type Err = AuthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "post" => Ok(Self::Post),
            "comment" => Ok(Self::Comment),
            "user" => Ok(Self::User),
            other => Err(AuthError::UnknownResource(other.to_string())),
        }
    }
}

/// Which ownership field of the target a grant refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OwnerReference {
    /// The target's own author.
    Author,
    /// The author of the target's parent (a comment's post).
    ParentAuthor,
}

/// One entry in a rule's allowed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Grant {
    /// Any authenticated principal.
    All,
    /// Principals holding this role.
    Role(UserRole),
    /// The principal whose id matches the referenced owner field.
    Owner(OwnerReference),
}

impl Grant {
    /// Whether this grant admits `principal`.
    ///
    /// Owner grants only resolve against a target; with no target they admit
    /// nobody.
    pub fn admits(&self, principal: &Principal, target: Option<&dyn PermissionTarget>) -> bool {
        match self {
            Self::All => true,
            Self::Role(role) => principal.role == *role,
            Self::Owner(reference) => target
                .and_then(|t| t.owner_id(*reference))
                .is_some_and(|owner| owner == principal.id),
        }
    }
}

/// An action name and the grants that allow it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionRule {
    /// Action name, the part after `:` in an operation.
    pub action: String,
    /// Grants; any one of them suffices.
    pub allowed: Vec<Grant>,
}

impl PermissionRule {
    /// Creates a rule.
    pub fn new(action: impl Into<String>, allowed: impl IntoIterator<Item = Grant>) -> Self {
        Self {
            action: action.into(),
            allowed: allowed.into_iter().collect(),
        }
    }

    /// Whether any grant in this rule admits `principal`.
    pub fn admits(&self, principal: &Principal, target: Option<&dyn PermissionTarget>) -> bool {
        self.allowed.iter().any(|g| g.admits(principal, target))
    }
}

/// A parsed `"<resource>:<action>"` operation name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operation<'a> {
    /// Resource prefix.
    pub resource: ResourceKind,
    /// Action suffix.
    pub action: &'a str,
}

impl<'a> Operation<'a> {
    /// Splits `operation` on its first `:` and resolves the resource prefix.
    ///
    /// A missing separator or an unknown prefix is reported as
    /// [`AuthError::UnknownResource`] carrying the whole operation string.
    pub fn parse(operation: &'a str) -> Result<Self, AuthError> {
        let (prefix, action) = operation
            .split_once(':')
            .ok_or_else(|| AuthError::UnknownResource(operation.to_string()))?;
        let resource = prefix
            .parse()
            .map_err(|_| AuthError::UnknownResource(operation.to_string()))?;
        Ok(Self { resource, action })
    }
}

impl fmt::Display for Operation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.resource, self.action)
    }
}
