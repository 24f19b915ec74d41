//! Top-level preflight evaluation combining auth and quota checks.

use std::collections::HashMap;

use crate::auth::check::AuthChecks;
use crate::auth::pattern::PatternError;
use crate::auth::role::RoleAssignments;
use crate::model::DeploymentPlan;
use crate::quota::checks::QuotaChecks;
use crate::quota::limits::RegionalQuotaLimits;

/// The full result of a preflight run for one deployment plan.
#[derive(Debug, Clone)]
pub struct PreflightCheck {
    pub plan: DeploymentPlan,
    pub auth_checks: AuthChecks,
    pub quota_checks: QuotaChecks,
}

impl PreflightCheck {
    /// Evaluates every auth and quota check for the plan. A failed check is
    /// recorded in the result rather than returned as an error; only
    /// malformed role-definition patterns abort the run.
    pub fn run(
        plan: DeploymentPlan,
        assignments: &RoleAssignments,
        quota_limits: &HashMap<String, RegionalQuotaLimits>,
    ) -> Result<Self, PatternError> {
        let auth_checks = AuthChecks::evaluate(&plan, assignments)?;
        let quota_checks = QuotaChecks::evaluate(&plan, quota_limits);

        Ok(Self {
            plan,
            auth_checks,
            quota_checks,
        })
    }

    pub fn success(&self) -> bool {
        self.auth_checks.all_checks_pass() && self.quota_checks.all_checks_pass()
    }

    /// Virtual machines across every monitored subscription in the plan.
    pub fn total_vms(&self) -> u64 {
        self.plan.total_vms()
    }
}
