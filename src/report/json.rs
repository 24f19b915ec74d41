//! Machine-readable JSON report.

use serde::Serialize;

use crate::auth::check::AuthCheck;
use crate::model::SubscriptionRef;
use crate::preflight::PreflightCheck;
use crate::quota::checks::QuotaCheckOutcome;

/// The full preflight result in its wire form.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub deployment_config: DeploymentConfig,
    pub vm_count: u64,
    pub success: bool,
    pub permissions_check: PermissionsReport,
    pub usage_quota_check: QuotaReport,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentConfig {
    pub integration_type: crate::model::IntegrationType,
    pub scanning_subscription: SubscriptionRef,
    pub monitored_subscriptions: Vec<SubscriptionRef>,
    pub regions: Vec<String>,
    pub use_nat_gateway: bool,
    pub batch_size: u64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionsReport {
    pub success: bool,
    pub scanning_subscription: SubscriptionPermissions,
    pub monitored_subscriptions: Vec<SubscriptionPermissions>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionPermissions {
    pub subscription: SubscriptionRef,
    pub success: bool,
    pub checked_permissions: usize,
    pub missing_permissions: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotaReport {
    pub success: bool,
    pub subscription: SubscriptionRef,
    pub quota_checks: Vec<RegionQuotaReport>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionQuotaReport {
    pub region: String,
    pub vm_count: u64,
    pub success: bool,
    pub quotas: Vec<QuotaEntry>,
}

/// One quota line. `limit`/`usage` are absent and `error` is set when the
/// check could not be evaluated, which is distinct from a failed check.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotaEntry {
    pub name: String,
    pub display_name: String,
    pub required: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<u64>,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fix_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Report {
    pub fn from_preflight(preflight: &PreflightCheck) -> Self {
        let auth = &preflight.auth_checks;
        let quota = &preflight.quota_checks;

        Self {
            deployment_config: DeploymentConfig {
                integration_type: preflight.plan.integration_type,
                scanning_subscription: SubscriptionRef::from(&preflight.plan.scanning_subscription),
                monitored_subscriptions: preflight
                    .plan
                    .monitored_subscriptions
                    .iter()
                    .map(SubscriptionRef::from)
                    .collect(),
                regions: preflight.plan.regions.clone(),
                use_nat_gateway: preflight.plan.use_nat_gateway,
                batch_size: preflight.plan.batch_size,
            },
            vm_count: preflight.total_vms(),
            success: preflight.success(),
            permissions_check: PermissionsReport {
                success: auth.all_checks_pass(),
                scanning_subscription: subscription_permissions(&auth.scanning_subscription),
                monitored_subscriptions: auth
                    .monitored_subscriptions
                    .iter()
                    .map(subscription_permissions)
                    .collect(),
            },
            usage_quota_check: QuotaReport {
                success: quota.all_checks_pass(),
                subscription: quota.subscription.clone(),
                quota_checks: quota
                    .regions
                    .iter()
                    .map(|region| RegionQuotaReport {
                        region: region.region.name.clone(),
                        vm_count: region.region.vm_count,
                        success: region.success(),
                        quotas: region.outcomes.iter().map(quota_entry).collect(),
                    })
                    .collect(),
            },
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

fn subscription_permissions(check: &AuthCheck) -> SubscriptionPermissions {
    SubscriptionPermissions {
        subscription: check.subscription.clone(),
        success: check.success(),
        checked_permissions: check.checked_permissions.len(),
        missing_permissions: check
            .missing_permissions()
            .iter()
            .map(|permission| permission.action.clone())
            .collect(),
    }
}

fn quota_entry(outcome: &QuotaCheckOutcome) -> QuotaEntry {
    match outcome {
        QuotaCheckOutcome::Evaluated(check) => QuotaEntry {
            name: check.kind.name().to_string(),
            display_name: check.kind.display_name().to_string(),
            required: check.required_quota,
            limit: Some(check.configured_limit),
            usage: Some(check.current_usage),
            success: check.success(),
            fix_url: (!check.success()).then(|| check.kind.fix_url().to_string()),
            error: None,
        },
        QuotaCheckOutcome::Unavailable { kind, error } => QuotaEntry {
            name: kind.name().to_string(),
            display_name: kind.display_name().to_string(),
            required: 0,
            limit: None,
            usage: None,
            success: false,
            fix_url: None,
            error: Some(error.to_string()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quota::check::{QuotaKind, UsageQuotaCheck};
    use crate::quota::QuotaError;

    #[test]
    fn evaluated_entry_carries_limit_and_usage() {
        let entry = quota_entry(&QuotaCheckOutcome::Evaluated(UsageQuotaCheck {
            kind: QuotaKind::TotalRegionalVcpus,
            region: "eastus".to_string(),
            required_quota: 38,
            configured_limit: 40,
            current_usage: 0,
        }));

        assert_eq!(entry.name, "cores");
        assert_eq!(entry.limit, Some(40));
        assert_eq!(entry.usage, Some(0));
        assert!(entry.success);
        assert!(entry.fix_url.is_none());
        assert!(entry.error.is_none());
    }

    #[test]
    fn failed_entry_carries_a_fix_url() {
        let entry = quota_entry(&QuotaCheckOutcome::Evaluated(UsageQuotaCheck {
            kind: QuotaKind::TotalPublicIps,
            region: "eastus".to_string(),
            required_quota: 3,
            configured_limit: 2,
            current_usage: 0,
        }));

        assert!(!entry.success);
        assert!(entry.fix_url.is_some());
    }

    #[test]
    fn unavailable_entry_carries_the_error() {
        let entry = quota_entry(&QuotaCheckOutcome::Unavailable {
            kind: QuotaKind::TotalRegionalVcpus,
            error: QuotaError::MissingRegion {
                region: "eastus".to_string(),
            },
        });

        assert!(!entry.success);
        assert!(entry.limit.is_none());
        assert!(entry.error.unwrap().contains("eastus"));
    }
}
