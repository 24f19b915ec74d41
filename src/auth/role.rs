//! Role assignment data model.
//!
//! An Azure role definition carries four pattern lists: control-plane
//! allow/deny (`actions`/`not_actions`) and data-plane allow/deny
//! (`data_actions`/`not_data_actions`). All patterns are parsed at
//! construction so matching never re-splits strings.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

use super::pattern::{ActionPattern, PatternError};

/// The four pattern lists of one role definition.
#[derive(Debug, Clone, Default)]
pub struct RolePermissions {
    actions: Vec<ActionPattern>,
    not_actions: Vec<ActionPattern>,
    data_actions: Vec<ActionPattern>,
    not_data_actions: Vec<ActionPattern>,
}

impl RolePermissions {
    /// Parses the four pattern lists. Fails with the offending string if any
    /// pattern is malformed; a broken role definition must never be silently
    /// treated as "grants nothing".
    pub fn new<S: AsRef<str>>(
        actions: &[S],
        not_actions: &[S],
        data_actions: &[S],
        not_data_actions: &[S],
    ) -> Result<Self, PatternError> {
        Ok(Self {
            actions: parse_patterns(actions)?,
            not_actions: parse_patterns(not_actions)?,
            data_actions: parse_patterns(data_actions)?,
            not_data_actions: parse_patterns(not_data_actions)?,
        })
    }

    /// Checks whether this permission set grants an action.
    ///
    /// Allow/deny is evaluated independently for the control-plane pair and
    /// the data-plane pair, then OR-combined: a role can grant via either
    /// plane.
    pub fn grants(&self, action: &ActionPattern) -> bool {
        (any_match(&self.actions, action) && !any_match(&self.not_actions, action))
            || (any_match(&self.data_actions, action)
                && !any_match(&self.not_data_actions, action))
    }
}

fn parse_patterns<S: AsRef<str>>(raw: &[S]) -> Result<Vec<ActionPattern>, PatternError> {
    raw.iter().map(|s| s.as_ref().parse()).collect()
}

fn any_match(patterns: &[ActionPattern], action: &ActionPattern) -> bool {
    patterns.iter().any(|pattern| pattern.matches(action))
}

/// The principal a role is assigned to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub id: String,
    pub kind: String,
}

impl fmt::Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.id, self.kind)
    }
}

/// One role assignment: a permission set bound to a scope and a principal.
///
/// `scope` and `condition` are carried for display only; conditional (ABAC)
/// assignments are not evaluated and count as unconditionally granting.
#[derive(Debug, Clone)]
pub struct AssignedRole {
    pub id: String,
    pub name: String,
    pub scope: String,
    pub principal: Principal,
    pub permissions: RolePermissions,
    pub condition: Option<String>,
}

impl AssignedRole {
    /// Checks whether this role grants an action.
    pub fn grants_action(&self, action: &ActionPattern) -> bool {
        self.permissions.grants(action)
    }

    pub fn is_conditional(&self) -> bool {
        self.condition.is_some()
    }
}

/// A lightweight reference to an assigned role, used when citing which role
/// satisfied a permission check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoleRef {
    pub id: String,
    pub name: String,
}

impl From<&AssignedRole> for RoleRef {
    fn from(role: &AssignedRole) -> Self {
        Self {
            id: role.id.clone(),
            name: role.name.clone(),
        }
    }
}

/// The frozen role-assignment snapshot for one preflight run, keyed by scope
/// (subscription ID or the root management group ID).
#[derive(Debug, Clone, Default)]
pub struct RoleAssignments {
    by_scope: HashMap<String, Vec<AssignedRole>>,
    root_management_group: Option<String>,
}

impl RoleAssignments {
    pub fn new(
        by_scope: HashMap<String, Vec<AssignedRole>>,
        root_management_group: Option<String>,
    ) -> Self {
        Self {
            by_scope,
            root_management_group,
        }
    }

    /// Roles assigned at one scope. A scope with no recorded assignments
    /// yields an empty slice (a valid state: the principal simply has no
    /// roles there).
    pub fn for_scope(&self, scope: &str) -> &[AssignedRole] {
        self.by_scope.get(scope).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Roles relevant to the scanning subscription: its own scope plus the
    /// root management group scope, whose assignments are inherited.
    pub fn for_scanning_subscription(&self, subscription_id: &str) -> Vec<AssignedRole> {
        let mut roles = self.for_scope(subscription_id).to_vec();
        if let Some(root) = &self.root_management_group {
            roles.extend(self.for_scope(root).iter().cloned());
        }
        roles
    }
}
