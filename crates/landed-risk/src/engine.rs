//! RiskEngine — aggregates the per-factor scores and derives report flags.

use tracing::{debug, instrument};

use landed_core::models::{CostRange, MarketEstimate, RiskFlag, RiskScores};

use crate::factors::{compliance, supply, tariff};

/// Deterministic risk aggregation over the available market signals.
///
/// An absent market estimate is scored as zero candidates and zero records —
/// the worst case for tariff and supply, by design of the factor tables.
#[derive(Debug, Default)]
pub struct RiskEngine;

impl RiskEngine {
    pub fn new() -> Self {
        Self
    }

    /// Aggregate the three factor scores. The total is the rounded mean.
    #[instrument(skip_all, fields(has_market = market.is_some()))]
    pub fn score(&self, market: Option<&MarketEstimate>) -> RiskScores {
        let hs_count = market.map(|m| m.hs_candidates.len()).unwrap_or(0);
        let records = market.map(|m| m.similar_record_count).unwrap_or(0);

        let scores = RiskScores::new(
            tariff::calculate(hs_count),
            compliance::calculate(),
            supply::calculate(records),
        );
        debug!(
            tariff = scores.tariff,
            compliance = scores.compliance,
            supply = scores.supply,
            total = scores.total,
            "risk scored"
        );
        scores
    }

    /// Flags surfaced on the report alongside the numeric scores.
    /// Ordering is fixed so repeated derivations are byte-identical.
    pub fn flags(
        &self,
        market: Option<&MarketEstimate>,
        cost: &CostRange,
        analysis_available: bool,
    ) -> Vec<RiskFlag> {
        let hs_count = market.map(|m| m.hs_candidates.len()).unwrap_or(0);
        let records = market.map(|m| m.similar_record_count).unwrap_or(0);

        let mut flags = Vec::new();
        if !analysis_available {
            flags.push(RiskFlag::AnalysisUnavailable);
        }
        match hs_count {
            0 => flags.push(RiskFlag::HsUnknown),
            1 => {}
            _ => flags.push(RiskFlag::HsAmbiguous),
        }
        if !cost.is_estimated() {
            flags.push(RiskFlag::CostUnestimated);
        }
        if records == 0 {
            flags.push(RiskFlag::NoImportHistory);
        }
        flags
    }
}
