//! The per-region quota check battery.

use std::collections::HashMap;

use super::check::{QuotaKind, UsageQuotaCheck};
use super::limits::RegionalQuotaLimits;
use super::QuotaError;
use crate::model::{DeploymentPlan, RegionInventory, SubscriptionRef};

/// One quota check's outcome: evaluated (pass or fail, with numbers) or
/// unavailable because the underlying data was missing.
///
/// Reporting must be able to distinguish "checked and failed" from "could
/// not be checked"; an unavailable check never counts as passing.
#[derive(Debug, Clone)]
pub enum QuotaCheckOutcome {
    Evaluated(UsageQuotaCheck),
    Unavailable { kind: QuotaKind, error: QuotaError },
}

impl QuotaCheckOutcome {
    pub fn kind(&self) -> QuotaKind {
        match self {
            QuotaCheckOutcome::Evaluated(check) => check.kind,
            QuotaCheckOutcome::Unavailable { kind, .. } => *kind,
        }
    }

    pub fn passed(&self) -> bool {
        match self {
            QuotaCheckOutcome::Evaluated(check) => check.success(),
            QuotaCheckOutcome::Unavailable { .. } => false,
        }
    }
}

/// The four quota checks for one target region.
#[derive(Debug, Clone)]
pub struct RegionQuotaChecks {
    pub region: RegionInventory,
    pub outcomes: Vec<QuotaCheckOutcome>,
}

impl RegionQuotaChecks {
    fn evaluate(
        region: RegionInventory,
        limits: Option<&RegionalQuotaLimits>,
        batch_size: u64,
        use_nat_gateway: bool,
    ) -> Self {
        let outcomes = QuotaKind::ALL
            .into_iter()
            .map(|kind| {
                let result = match limits {
                    Some(limits) => {
                        UsageQuotaCheck::evaluate(kind, limits, &region, batch_size, use_nat_gateway)
                    }
                    None => Err(QuotaError::MissingRegion {
                        region: region.name.clone(),
                    }),
                };
                match result {
                    Ok(check) => QuotaCheckOutcome::Evaluated(check),
                    Err(error) => {
                        // A check that cannot be evaluated does not abort
                        // its siblings.
                        log::warn!(
                            "Cannot evaluate quota '{}' in {}: {}",
                            kind.name(),
                            region.name,
                            error
                        );
                        QuotaCheckOutcome::Unavailable { kind, error }
                    }
                }
            })
            .collect();

        Self { region, outcomes }
    }

    pub fn success(&self) -> bool {
        self.outcomes.iter().all(QuotaCheckOutcome::passed)
    }
}

/// The full quota check battery for every target region, scoped to the
/// scanning subscription's quota visibility.
#[derive(Debug, Clone)]
pub struct QuotaChecks {
    pub subscription: SubscriptionRef,
    pub regions: Vec<RegionQuotaChecks>,
}

impl QuotaChecks {
    /// Builds the four checks per plan region, seeded with that region's
    /// aggregated VM inventory and the plan's NAT-gateway flag.
    pub fn evaluate(
        plan: &DeploymentPlan,
        quota_limits: &HashMap<String, RegionalQuotaLimits>,
    ) -> Self {
        let regions = plan
            .region_inventory()
            .into_iter()
            .map(|region| {
                RegionQuotaChecks::evaluate(
                    region.clone(),
                    quota_limits.get(&region.name),
                    plan.batch_size,
                    plan.use_nat_gateway,
                )
            })
            .collect();

        Self {
            subscription: SubscriptionRef::from(&plan.scanning_subscription),
            regions,
        }
    }

    pub fn all_checks_pass(&self) -> bool {
        self.regions.iter().all(RegionQuotaChecks::success)
    }
}
