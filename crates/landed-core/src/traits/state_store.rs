use chrono::{DateTime, Utc};

use crate::errors::UpgradeError;
use crate::models::{AttemptResult, EvidenceUpgradeState};

/// Per-report upgrade cooldown state.
///
/// `begin_attempt` is the serialization point for the whole engine: the
/// check-and-set must be atomic per report key, so that of N concurrent
/// callers inside the window exactly one proceeds. Attempts for different
/// reports must not contend.
pub trait UpgradeStateStore: Send + Sync {
    /// Current state for a report, if any attempt was ever made.
    fn get(&self, report_id: &str) -> Option<EvidenceUpgradeState>;

    /// Atomically check the cooldown window and record the attempt start.
    ///
    /// Returns `UpgradeError::RateLimited` (with a positive retry-after) when
    /// the previous attempt is still inside `window_secs`.
    fn begin_attempt(
        &self,
        report_id: &str,
        now: DateTime<Utc>,
        window_secs: u64,
    ) -> Result<(), UpgradeError>;

    /// Record how the attempt started by `begin_attempt` ended.
    fn complete_attempt(
        &self,
        report_id: &str,
        result: AttemptResult,
        error_code: Option<String>,
        now: DateTime<Utc>,
    );
}
