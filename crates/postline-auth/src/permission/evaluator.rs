//! Allow/deny decisions over the permission table.

use std::sync::Arc;

use tracing::debug;

use crate::error::AuthError;
use crate::principal::Principal;

use super::rules::{Operation, PermissionRule};
use super::table::PermissionTable;
use super::target::PermissionTarget;

/// Evaluates operation names against an immutable [`PermissionTable`].
///
/// For each check, the first rule whose action matches decides. A missing
/// rule is a denial, never an allow.
#[derive(Debug, Clone)]
pub struct PermissionEvaluator {
    table: Arc<PermissionTable>,
}

impl PermissionEvaluator {
    /// Creates an evaluator over a shared table.
    pub fn new(table: Arc<PermissionTable>) -> Self {
        Self { table }
    }

    /// Evaluator over [`PermissionTable::standard`].
    pub fn standard() -> Result<Self, AuthError> {
        Ok(Self::new(Arc::new(PermissionTable::standard()?)))
    }

    /// The underlying table.
    pub fn table(&self) -> &PermissionTable {
        &self.table
    }

    /// Checks an operation that does not involve a specific object.
    pub fn check_operation(&self, operation: &str, principal: &Principal) -> Result<(), AuthError> {
        let op = Operation::parse(operation)?;
        let rules = self.table.operation_rules(op.resource)?;
        decide(operation, op.action, rules, principal, None)
    }

    /// Checks an operation against a loaded object.
    ///
    /// The target's kind must equal the operation's resource prefix;
    /// anything else is a wiring mistake and is reported as
    /// [`AuthError::ResourceMismatch`].
    pub fn check_object<T>(
        &self,
        operation: &str,
        principal: &Principal,
        target: &T,
    ) -> Result<(), AuthError>
    where
        T: PermissionTarget,
    {
        let op = Operation::parse(operation)?;
        if target.resource_kind() != op.resource {
            return Err(AuthError::ResourceMismatch {
                operation: operation.to_string(),
                target: target.resource_kind().to_string(),
            });
        }
        let rules = self.table.object_rules(op.resource)?;
        decide(operation, op.action, rules, principal, Some(target as &dyn PermissionTarget))
    }
}

fn decide(
    operation: &str,
    action: &str,
    rules: &[PermissionRule],
    principal: &Principal,
    target: Option<&dyn PermissionTarget>,
) -> Result<(), AuthError> {
    let allowed = rules
        .iter()
        .find(|rule| rule.action == action)
        .is_some_and(|rule| rule.admits(principal, target));

    if allowed {
        Ok(())
    } else {
        debug!(
            user_id = principal.id,
            role = %principal.role,
            operation = %operation,
            "Permission denied"
        );
        Err(AuthError::PermissionDenied {
            operation: operation.to_string(),
        })
    }
}
