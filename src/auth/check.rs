//! Auth checks: required-permission catalogs evaluated per subscription.

use super::catalog;
use super::pattern::PatternError;
use super::resolver::{self, PermissionCheck};
use super::role::RoleAssignments;
use crate::model::{DeploymentPlan, Subscription, SubscriptionRef};

/// Which catalog an auth check evaluates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatorRole {
    ScanningSubscription,
    MonitoredSubscription,
}

impl OperatorRole {
    fn required_actions(self) -> &'static [&'static str] {
        match self {
            OperatorRole::ScanningSubscription => catalog::SCANNING_SUBSCRIPTION_ACTIONS,
            OperatorRole::MonitoredSubscription => catalog::MONITORED_SUBSCRIPTION_ACTIONS,
        }
    }
}

/// The result of checking one subscription against its required-permission
/// catalog.
#[derive(Debug, Clone)]
pub struct AuthCheck {
    pub subscription: SubscriptionRef,
    pub operator_role: OperatorRole,
    pub checked_permissions: Vec<PermissionCheck>,
}

impl AuthCheck {
    /// Evaluates the broad scanning-subscription catalog. The roles passed
    /// in should include both subscription-scope and root-management-group
    /// assignments.
    pub fn scanning(
        subscription: &Subscription,
        assignments: &RoleAssignments,
    ) -> Result<Self, PatternError> {
        let roles = assignments.for_scanning_subscription(&subscription.id);
        Self::new(subscription, OperatorRole::ScanningSubscription, &roles)
    }

    /// Evaluates the narrow monitored-subscription catalog.
    pub fn monitored(
        subscription: &Subscription,
        assignments: &RoleAssignments,
    ) -> Result<Self, PatternError> {
        let roles = assignments.for_scope(&subscription.id);
        Self::new(subscription, OperatorRole::MonitoredSubscription, roles)
    }

    fn new(
        subscription: &Subscription,
        operator_role: OperatorRole,
        roles: &[super::role::AssignedRole],
    ) -> Result<Self, PatternError> {
        let checked_permissions = operator_role
            .required_actions()
            .iter()
            .map(|action| resolver::resolve(action, roles))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            subscription: SubscriptionRef::from(subscription),
            operator_role,
            checked_permissions,
        })
    }

    pub fn success(&self) -> bool {
        self.checked_permissions.iter().all(PermissionCheck::granted)
    }

    /// The catalog entries that no assigned role grants.
    pub fn missing_permissions(&self) -> Vec<&PermissionCheck> {
        self.checked_permissions
            .iter()
            .filter(|check| !check.granted())
            .collect()
    }
}

/// One scanning-subscription check grouped with one check per monitored
/// subscription.
#[derive(Debug, Clone)]
pub struct AuthChecks {
    pub scanning_subscription: AuthCheck,
    pub monitored_subscriptions: Vec<AuthCheck>,
}

impl AuthChecks {
    pub fn evaluate(
        plan: &DeploymentPlan,
        assignments: &RoleAssignments,
    ) -> Result<Self, PatternError> {
        let scanning_subscription = AuthCheck::scanning(&plan.scanning_subscription, assignments)?;

        let monitored_subscriptions = plan
            .monitored_subscriptions
            .iter()
            .map(|subscription| AuthCheck::monitored(subscription, assignments))
            .collect::<Result<Vec<_>, _>>()?;

        for check in std::iter::once(&scanning_subscription).chain(&monitored_subscriptions) {
            if !check.success() {
                log::debug!(
                    "Subscription {} is missing {} required permissions",
                    check.subscription.id,
                    check.missing_permissions().len()
                );
            }
        }

        Ok(Self {
            scanning_subscription,
            monitored_subscriptions,
        })
    }

    pub fn all_checks_pass(&self) -> bool {
        self.scanning_subscription.success()
            && self
                .monitored_subscriptions
                .iter()
                .all(AuthCheck::success)
    }
}
