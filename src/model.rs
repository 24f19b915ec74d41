//! Deployment plan data model.
//!
//! Value objects constructed once per preflight run: subscriptions with
//! their per-region VM inventory, and the deployment plan tying them
//! together.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

/// Whether the scanner is integrated at the tenant level (many monitored
/// subscriptions) or for a single subscription.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IntegrationType {
    #[default]
    Tenant,
    Subscription,
}

/// The aggregated VM count for one region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionInventory {
    pub name: String,
    pub vm_count: u64,
}

/// An Azure subscription with the VM inventory detected per region.
#[derive(Debug, Clone)]
pub struct Subscription {
    pub id: String,
    pub name: String,
    /// Region name to detected VM count.
    pub regions: BTreeMap<String, u64>,
}

impl Subscription {
    /// Total VMs across all regions.
    pub fn total_vms(&self) -> u64 {
        self.regions.values().sum()
    }
}

impl fmt::Display for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}

/// A lightweight subscription reference carried on check results and in
/// reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubscriptionRef {
    pub id: String,
    pub name: String,
}

impl From<&Subscription> for SubscriptionRef {
    fn from(subscription: &Subscription) -> Self {
        Self {
            id: subscription.id.clone(),
            name: subscription.name.clone(),
        }
    }
}

/// The deployment under validation.
///
/// `regions` is always a subset of the regions observed across the
/// monitored subscriptions; unknown requested regions are filtered out (with
/// a warning) before the plan is constructed.
#[derive(Debug, Clone)]
pub struct DeploymentPlan {
    pub integration_type: IntegrationType,
    pub scanning_subscription: Subscription,
    pub monitored_subscriptions: Vec<Subscription>,
    pub regions: Vec<String>,
    pub use_nat_gateway: bool,
    /// Number of target VMs one scan worker processes concurrently.
    pub batch_size: u64,
}

impl DeploymentPlan {
    /// Total VMs across all monitored subscriptions, restricted to the
    /// plan's regions.
    pub fn total_vms(&self) -> u64 {
        self.region_inventory().iter().map(|r| r.vm_count).sum()
    }

    /// Per-region VM counts summed across all monitored subscriptions, in
    /// plan-region order.
    pub fn region_inventory(&self) -> Vec<RegionInventory> {
        self.regions
            .iter()
            .map(|region| RegionInventory {
                name: region.clone(),
                vm_count: self
                    .monitored_subscriptions
                    .iter()
                    .filter_map(|sub| sub.regions.get(region))
                    .sum(),
            })
            .collect()
    }
}
