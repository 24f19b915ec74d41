//! Permission resolution: does any assigned role grant a required action?

use super::pattern::PatternError;
use super::role::{AssignedRole, RoleRef};

/// The outcome of resolving one required action against a set of assigned
/// roles.
#[derive(Debug, Clone)]
pub struct PermissionCheck {
    /// The required action string, as listed in the catalog.
    pub action: String,

    /// The first role that grants the action, if any. Order only affects
    /// which role is cited, not whether the action counts as granted.
    pub satisfied_by: Option<RoleRef>,
}

impl PermissionCheck {
    pub fn granted(&self) -> bool {
        self.satisfied_by.is_some()
    }
}

/// Resolves a required action against assigned roles.
///
/// The required string is parsed once; a malformed catalog entry fails fast
/// instead of silently evaluating to "not granted", which would disguise a
/// catalog typo as a real permission gap.
pub fn resolve(required: &str, roles: &[AssignedRole]) -> Result<PermissionCheck, PatternError> {
    let pattern = required.parse()?;
    let satisfying_role = roles.iter().find(|role| role.grants_action(&pattern));

    if let Some(role) = satisfying_role {
        if role.is_conditional() {
            // Conditions are not evaluated; the grant may be narrower than
            // reported.
            log::warn!(
                "Role '{}' satisfies '{}' but carries a condition that is not evaluated",
                role.name,
                required
            );
        }
    }

    Ok(PermissionCheck {
        action: required.to_string(),
        satisfied_by: satisfying_role.map(RoleRef::from),
    })
}
