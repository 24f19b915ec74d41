//! Per-kind usage quota checks.
//!
//! Each [`QuotaKind`] is one row of a small variant table: its provider
//! quota name, the underlying limit records it aggregates, and which
//! requirement formula applies. No trait-object hierarchy; the per-kind
//! behavior lives in `match` arms.

use super::limits::RegionalQuotaLimits;
use super::requirements;
use super::QuotaError;
use crate::model::RegionInventory;

/// Azure portal blade for requesting quota increases.
const QUOTA_REQUEST_URL: &str =
    "https://portal.azure.com/#blade/Microsoft_Azure_Capacity/QuotaRequestsBlade";

/// The four independently capped quota pools that can block a deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuotaKind {
    TotalRegionalVcpus,
    DsFamilyVcpus,
    TotalPublicIps,
    StandardPublicIps,
}

impl QuotaKind {
    pub const ALL: [QuotaKind; 4] = [
        QuotaKind::TotalRegionalVcpus,
        QuotaKind::DsFamilyVcpus,
        QuotaKind::TotalPublicIps,
        QuotaKind::StandardPublicIps,
    ];

    /// Provider-specific quota identifier.
    pub fn name(self) -> &'static str {
        match self {
            QuotaKind::TotalRegionalVcpus => "cores",
            QuotaKind::DsFamilyVcpus => {
                "SUM_standardDSv3Family_standardDSv4Family_standardDSv5Family"
            }
            QuotaKind::TotalPublicIps => "PublicIPAddresses",
            QuotaKind::StandardPublicIps => "IPv4StandardSkuPublicIpAddresses",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            QuotaKind::TotalRegionalVcpus => "Total Regional vCPUs",
            QuotaKind::DsFamilyVcpus => "Sum of vCPU families (DSv3, DSv4, and DSv5)",
            QuotaKind::TotalPublicIps => "Total Regional Public IPs",
            QuotaKind::StandardPublicIps => "Public IPv4 Addresses - Standard",
        }
    }

    /// The named limit records this kind aggregates. The DS-family check
    /// sums three per-SKU-family pools because the provider can satisfy the
    /// requirement from any mix of the three.
    pub fn limit_names(self) -> &'static [&'static str] {
        match self {
            QuotaKind::TotalRegionalVcpus => &["cores"],
            QuotaKind::DsFamilyVcpus => &[
                "standardDSv3Family",
                "standardDSv4Family",
                "standardDSv5Family",
            ],
            QuotaKind::TotalPublicIps => &["PublicIPAddresses"],
            QuotaKind::StandardPublicIps => &["IPv4StandardSkuPublicIpAddresses"],
        }
    }

    /// URL for requesting an increase of this quota.
    pub fn fix_url(self) -> &'static str {
        QUOTA_REQUEST_URL
    }

    fn required_quota(self, vm_count: u64, batch_size: u64, use_nat_gateway: bool) -> u64 {
        match self {
            QuotaKind::TotalRegionalVcpus | QuotaKind::DsFamilyVcpus => {
                requirements::required_vcpus(vm_count, batch_size)
            }
            QuotaKind::TotalPublicIps | QuotaKind::StandardPublicIps => {
                requirements::required_public_ips(vm_count, use_nat_gateway, batch_size)
            }
        }
    }
}

/// One evaluated quota check: required quantity vs configured limit and
/// current usage in one region.
#[derive(Debug, Clone)]
pub struct UsageQuotaCheck {
    pub kind: QuotaKind,
    pub region: String,
    pub required_quota: u64,
    pub configured_limit: u64,
    pub current_usage: u64,
}

impl UsageQuotaCheck {
    /// Evaluates one quota kind against one region's reported limits.
    ///
    /// Fails with [`QuotaError::MissingLimit`] if any underlying limit
    /// record was not reported.
    pub fn evaluate(
        kind: QuotaKind,
        limits: &RegionalQuotaLimits,
        inventory: &RegionInventory,
        batch_size: u64,
        use_nat_gateway: bool,
    ) -> Result<Self, QuotaError> {
        let mut configured_limit = 0;
        let mut current_usage = 0;
        for name in kind.limit_names() {
            let limit = limits.get(name)?;
            configured_limit += limit.limit;
            current_usage += limit.usage;
        }

        Ok(Self {
            kind,
            region: inventory.name.clone(),
            required_quota: kind.required_quota(inventory.vm_count, batch_size, use_nat_gateway),
            configured_limit,
            current_usage,
        })
    }

    /// The configured limit must cover the requirement on top of quota
    /// already consumed by other workloads.
    pub fn success(&self) -> bool {
        self.configured_limit >= self.required_quota + self.current_usage
    }
}
