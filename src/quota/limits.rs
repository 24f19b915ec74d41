//! Usage quota limits as reported by the cloud provider.

use std::collections::HashMap;

use super::QuotaError;

/// One quota kind's configured limit and current usage in one region, as
/// reported by the provider. An immutable snapshot for the duration of one
/// preflight run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsageQuotaLimit {
    pub name: String,
    pub display_name: String,
    pub limit: u64,
    pub usage: u64,
}

/// All quota limits reported for one region of the scanning subscription.
#[derive(Debug, Clone)]
pub struct RegionalQuotaLimits {
    region: String,
    limits: HashMap<String, UsageQuotaLimit>,
}

impl RegionalQuotaLimits {
    pub fn new(region: impl Into<String>, limits: HashMap<String, UsageQuotaLimit>) -> Self {
        Self {
            region: region.into(),
            limits,
        }
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    /// Looks up a named limit. A missing record is a hard error: the
    /// provider did not report that quota kind, which must not be treated
    /// as a zero limit.
    pub fn get(&self, quota_name: &str) -> Result<&UsageQuotaLimit, QuotaError> {
        self.limits
            .get(quota_name)
            .ok_or_else(|| QuotaError::MissingLimit {
                quota: quota_name.to_string(),
                region: self.region.clone(),
            })
    }
}
