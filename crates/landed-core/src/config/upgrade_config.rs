use serde::{Deserialize, Serialize};

use super::defaults;

/// Evidence-upgrade controller configuration.
///
/// Same-level attempts are throttled harder than attempts that could cross
/// into a higher evidence level, and failed lookups get a short retry backoff
/// so an outage never counts as a full cooldown.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UpgradeConfig {
    /// Cooldown after an attempt on a `baseline` report (could still cross up).
    pub crossing_cooldown_secs: u64,
    /// Cooldown after an attempt on an `evidence` report (same-level no-op).
    pub same_level_cooldown_secs: u64,
    /// Backoff after a failed (retryable) lookup.
    pub retry_backoff_secs: u64,
    /// Credits debited per external lookup.
    pub lookup_credit_cost: u32,
}

impl Default for UpgradeConfig {
    fn default() -> Self {
        Self {
            crossing_cooldown_secs: defaults::DEFAULT_CROSSING_COOLDOWN_SECS,
            same_level_cooldown_secs: defaults::DEFAULT_SAME_LEVEL_COOLDOWN_SECS,
            retry_backoff_secs: defaults::DEFAULT_RETRY_BACKOFF_SECS,
            lookup_credit_cost: defaults::DEFAULT_LOOKUP_CREDIT_COST,
        }
    }
}
