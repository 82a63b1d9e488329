//! Cooldown window selection.
//!
//! Same-level attempts are throttled harder than attempts that could cross
//! into a higher evidence level: a baseline report still has something to
//! gain, while a repeated attempt on an evidence-backed report is a likely
//! no-op hammering the external source. Failed lookups get a short retry
//! backoff instead — an outage must never look like a consumed cooldown.

use landed_core::config::UpgradeConfig;
use landed_core::models::{AttemptResult, EvidenceLevel};

/// The cooldown window that applies to the next attempt for a report.
pub fn window_secs(
    level: EvidenceLevel,
    last_result: Option<AttemptResult>,
    config: &UpgradeConfig,
) -> u64 {
    if last_result == Some(AttemptResult::Failed) {
        return config.retry_backoff_secs;
    }
    match level {
        EvidenceLevel::Baseline => config.crossing_cooldown_secs,
        EvidenceLevel::Evidence | EvidenceLevel::Verified => config.same_level_cooldown_secs,
    }
}
