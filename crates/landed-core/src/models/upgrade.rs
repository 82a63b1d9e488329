//! Evidence-upgrade attempt state and outcomes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::report::Report;

/// How the last upgrade attempt for a report ended.
///
/// `Failed` is distinct from `NotFound` on purpose: a transient lookup failure
/// must never make a report look exhausted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum AttemptResult {
    /// The lookup returned new evidence.
    Found,
    /// The lookup completed but found nothing new.
    NotFound,
    /// The lookup failed (timeout, transport); retryable.
    Failed,
}

/// Per-report cooldown state. Governs the rate limit on upgrade attempts.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EvidenceUpgradeState {
    pub last_attempt_at: Option<DateTime<Utc>>,
    pub last_success_at: Option<DateTime<Utc>>,
    pub last_result: Option<AttemptResult>,
    /// Error code of the last failed attempt, when `last_result` is `failed`.
    pub last_error_code: Option<String>,
}

/// What an upgrade attempt produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum UpgradeFinding {
    /// New evidence was attached and the report was re-derived.
    NewEvidence,
    /// The lookup completed with nothing new; the report is unchanged.
    /// This is a legitimate terminal outcome, not a failure.
    NoNewEvidence,
}

/// Successful result of `upgrade`: the (possibly re-derived) report plus what
/// the attempt found.
#[derive(Debug, Clone)]
pub struct UpgradeOutcome {
    pub report: Report,
    pub finding: UpgradeFinding,
}

/// Query sent to the external market-evidence lookup.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EvidenceQuery {
    pub product_name: String,
    pub category: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    /// HS-code hint from analysis or prior evidence, if any.
    pub hs_code_hint: Option<String>,
}
