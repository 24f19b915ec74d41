//! Permission evaluation engine.
//!
//! Resolves whether the deploying identity's assigned roles cover the
//! required-permission catalogs, using structured wildcard matching over
//! Azure action strings.

pub mod catalog;
pub mod check;
pub mod pattern;
pub mod resolver;
pub mod role;

pub use check::{AuthCheck, AuthChecks, OperatorRole};
pub use pattern::{ActionPattern, PatternError};
pub use resolver::{resolve, PermissionCheck};
pub use role::{AssignedRole, Principal, RoleAssignments, RolePermissions, RoleRef};
