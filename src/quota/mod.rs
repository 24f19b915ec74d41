//! Usage quota evaluation engine.
//!
//! Derives the resource quantities a deployment needs per region from the
//! VM inventory and batching policy, and compares them against the scanning
//! subscription's configured limits and current usage.

pub mod check;
pub mod checks;
pub mod limits;
pub mod requirements;

use thiserror::Error;

pub use check::{QuotaKind, UsageQuotaCheck};
pub use checks::{QuotaCheckOutcome, QuotaChecks, RegionQuotaChecks};
pub use limits::{RegionalQuotaLimits, UsageQuotaLimit};
pub use requirements::{required_public_ips, required_vcpus, DEFAULT_BATCH_SIZE};

/// Errors for quota data that the provider did not report.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QuotaError {
    #[error("Quota '{quota}' was not reported for region {region}")]
    MissingLimit { quota: String, region: String },

    #[error("No usage quota limits available for region {region}")]
    MissingRegion { region: String },
}
