//! Snapshot file loading.
//!
//! The binary does not talk to Azure itself; it consumes a JSON snapshot of
//! the facts a run needs: subscriptions with their VM inventory, role
//! assignments keyed by scope, and usage quota limits per region. This module
//! holds the serde wire types and their conversion into the core model.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::auth::pattern::PatternError;
use crate::auth::role::{AssignedRole, Principal, RoleAssignments, RolePermissions};
use crate::model::Subscription;
use crate::quota::limits::{RegionalQuotaLimits, UsageQuotaLimit};

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("Failed to read snapshot file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to parse snapshot file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Role '{role}' at scope {scope} has a malformed pattern: {source}")]
    RolePattern {
        role: String,
        scope: String,
        source: PatternError,
    },

    #[error("Subscription {0} is not present in the snapshot")]
    UnknownSubscription(String),
}

/// The deserialized snapshot file.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Snapshot {
    #[serde(default)]
    root_management_group: Option<String>,
    subscriptions: Vec<SubscriptionRecord>,
    #[serde(default)]
    role_assignments: HashMap<String, Vec<RoleAssignmentRecord>>,
    #[serde(default)]
    quota_limits: HashMap<String, HashMap<String, QuotaLimitRecord>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SubscriptionRecord {
    id: String,
    name: String,
    #[serde(default)]
    regions: BTreeMap<String, u64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RoleAssignmentRecord {
    id: String,
    name: String,
    scope: String,
    principal: PrincipalRecord,
    permissions: PermissionsRecord,
    #[serde(default)]
    condition: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PrincipalRecord {
    id: String,
    #[serde(rename = "type")]
    kind: String,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct PermissionsRecord {
    #[serde(default)]
    actions: Vec<String>,
    #[serde(default)]
    not_actions: Vec<String>,
    #[serde(default)]
    data_actions: Vec<String>,
    #[serde(default)]
    not_data_actions: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct QuotaLimitRecord {
    display_name: String,
    limit: u64,
    usage: u64,
}

impl Snapshot {
    /// Reads and parses the snapshot file.
    pub fn load(path: &Path) -> Result<Self, SnapshotError> {
        let contents = fs::read_to_string(path).map_err(|source| SnapshotError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Looks up a subscription by ID.
    pub fn subscription(&self, id: &str) -> Result<Subscription, SnapshotError> {
        self.subscriptions
            .iter()
            .find(|record| record.id == id)
            .map(|record| Subscription {
                id: record.id.clone(),
                name: record.name.clone(),
                regions: record.regions.clone(),
            })
            .ok_or_else(|| SnapshotError::UnknownSubscription(id.to_string()))
    }

    /// Converts the role assignment records into the parsed form used for
    /// matching. All pattern strings are parsed here; a malformed one fails
    /// the load with the offending role named.
    pub fn role_assignments(&self) -> Result<RoleAssignments, SnapshotError> {
        let mut by_scope = HashMap::with_capacity(self.role_assignments.len());
        for (scope, records) in &self.role_assignments {
            let roles = records
                .iter()
                .map(|record| record.to_assigned_role())
                .collect::<Result<Vec<_>, _>>()?;
            by_scope.insert(scope.clone(), roles);
        }

        Ok(RoleAssignments::new(
            by_scope,
            self.root_management_group.clone(),
        ))
    }

    /// The usage quota limits per region, as the scanning subscription sees
    /// them.
    pub fn quota_limits(&self) -> HashMap<String, RegionalQuotaLimits> {
        self.quota_limits
            .iter()
            .map(|(region, records)| {
                let limits = records
                    .iter()
                    .map(|(name, record)| {
                        (
                            name.clone(),
                            UsageQuotaLimit {
                                name: name.clone(),
                                display_name: record.display_name.clone(),
                                limit: record.limit,
                                usage: record.usage,
                            },
                        )
                    })
                    .collect();
                (region.clone(), RegionalQuotaLimits::new(region.clone(), limits))
            })
            .collect()
    }
}

impl RoleAssignmentRecord {
    fn to_assigned_role(&self) -> Result<AssignedRole, SnapshotError> {
        let permissions = RolePermissions::new(
            &self.permissions.actions,
            &self.permissions.not_actions,
            &self.permissions.data_actions,
            &self.permissions.not_data_actions,
        )
        .map_err(|source| SnapshotError::RolePattern {
            role: self.name.clone(),
            scope: self.scope.clone(),
            source,
        })?;

        Ok(AssignedRole {
            id: self.id.clone(),
            name: self.name.clone(),
            scope: self.scope.clone(),
            principal: Principal {
                id: self.principal.id.clone(),
                kind: self.principal.kind.clone(),
            },
            permissions,
            condition: self.condition.clone(),
        })
    }
}
