use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Heuristic risk scores in [0, 100].
///
/// `total` is always recomputed from the three components — construct via
/// [`RiskScores::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RiskScores {
    pub tariff: u8,
    pub compliance: u8,
    pub supply: u8,
    /// Rounded mean of the three components.
    pub total: u8,
}

impl RiskScores {
    /// Build scores; the total is the rounded mean of the components.
    pub fn new(tariff: u8, compliance: u8, supply: u8) -> Self {
        let total = ((tariff as f64 + compliance as f64 + supply as f64) / 3.0).round() as u8;
        Self {
            tariff,
            compliance,
            supply,
            total,
        }
    }
}

/// Flags surfaced on a report alongside the numeric scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum RiskFlag {
    /// No HS classification candidate exists.
    HsUnknown,
    /// More than one HS classification candidate exists.
    HsAmbiguous,
    /// No price signal; cost figures are unestimated.
    CostUnestimated,
    /// Zero similar historical import records.
    NoImportHistory,
    /// Upstream image analysis was unavailable.
    AnalysisUnavailable,
}
