//! The `Report` aggregate root.
//!
//! A report is created once per analysis and re-derived — not patched — when
//! new evidence arrives. Callers persist each derived version.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::confidence::ConfidenceTier;
use super::cost::CostRange;
use super::inferred::InferredInputs;
use super::risk::{RiskFlag, RiskScores};

/// Evidence-confidence ladder for a report.
///
/// Derives `Ord`: the ladder is strictly monotonic per report. Once
/// `verified`, a report never regresses — merge levels with [`EvidenceLevel::merged`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS,
)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum EvidenceLevel {
    /// No externally verified signal.
    Baseline,
    /// At least one verified signal attached.
    Evidence,
    /// An external verification/order process confirmed quotes. Terminal.
    Verified,
}

impl EvidenceLevel {
    /// Monotonic merge: the level can only go up.
    pub fn merged(self, other: EvidenceLevel) -> EvidenceLevel {
        self.max(other)
    }
}

/// Verification state set by the external order/verification subsystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum VerificationStatus {
    Unverified,
    Verified,
}

/// Boolean evidence signals summarized on the report.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReportSignals {
    /// Similar import records were found.
    pub has_import_evidence: bool,
    /// At least one supplier candidate was observed.
    pub has_supplier_candidates: bool,
    /// External verification state.
    pub verification: VerificationStatus,
}

/// The cost/risk assessment body of a report.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BaselineAssessment {
    pub cost: CostRange,
    pub risk: RiskScores,
    pub flags: Vec<RiskFlag>,
    /// The provenance-tagged inputs the cost figures were computed from.
    pub inputs: InferredInputs,
    pub evidence_level: EvidenceLevel,
}

/// Kinds of recommended next actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum NextActionKind {
    ConfirmHsCode,
    CollectInputs,
    RequestSupplierQuotes,
    VerifySampleOrder,
}

/// One recommended next action. Lower `priority` sorts first.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NextAction {
    pub kind: NextActionKind,
    pub title: String,
    pub detail: String,
    pub priority: u8,
}

/// The versioned report value consumed downstream.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Report {
    /// UUID v4 identifier, stable across re-derivations.
    pub id: String,
    /// See [`crate::constants::REPORT_SCHEMA_VERSION`].
    pub schema_version: u32,
    /// Derivation counter; each re-derivation produces version + 1.
    pub version: u32,
    pub product_name: String,
    pub category: String,
    pub confidence: ConfidenceTier,
    pub signals: ReportSignals,
    pub baseline: BaselineAssessment,
    /// Deterministically ordered recommended actions.
    pub next_actions: Vec<NextAction>,
    /// When the first version of this report was created.
    pub created_at: DateTime<Utc>,
    /// When this version was derived.
    pub derived_at: DateTime<Utc>,
}
