//! Landed-cost scenarios and ranges.
//!
//! Floating-point currency throughout; rounding happens only at presentation
//! boundaries (`rounded_to_cents`), never mid-computation.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::inferred::Percentiles;

/// One fully-priced landed-cost scenario.
///
/// `total_landed_cost` is always recomputed from the four components —
/// construct via [`CostScenario::new`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CostScenario {
    pub unit_price: f64,
    pub shipping_per_unit: f64,
    pub duty_per_unit: f64,
    pub fee_per_unit: f64,
    pub total_landed_cost: f64,
}

impl CostScenario {
    /// Build a scenario; the total is the sum of the four components.
    pub fn new(unit_price: f64, shipping_per_unit: f64, duty_per_unit: f64, fee_per_unit: f64) -> Self {
        Self {
            unit_price,
            shipping_per_unit,
            duty_per_unit,
            fee_per_unit,
            total_landed_cost: unit_price + shipping_per_unit + duty_per_unit + fee_per_unit,
        }
    }

    /// Presentation-boundary rounding to 2 decimal places.
    pub fn rounded_to_cents(&self) -> Self {
        let r = |v: f64| (v * 100.0).round() / 100.0;
        // Re-sum from rounded components so the displayed total matches them.
        Self::new(
            r(self.unit_price),
            r(self.shipping_per_unit),
            r(self.duty_per_unit),
            r(self.fee_per_unit),
        )
    }
}

/// What the unit-price side of a cost range is based on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum CostBasis {
    /// Unit price bounds come from observed market quotes/records.
    MarketQuotes,
    /// No price signal existed; unit price is zero and the cost must be
    /// presented as unestimated, never as a real zero-cost result.
    Unestimated,
}

/// Percentile triples for the variable cost components.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CostComponentRanges {
    pub shipping_per_unit: Percentiles,
    pub duty_per_unit: Percentiles,
    pub fee_per_unit: Percentiles,
    pub total_landed_cost: Percentiles,
}

/// The evaluator's output: two named scenarios plus component ranges.
///
/// Invariant: `conservative.total_landed_cost >= standard.total_landed_cost`.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CostRange {
    pub standard: CostScenario,
    pub conservative: CostScenario,
    pub range: CostComponentRanges,
    pub basis: CostBasis,
}

impl CostRange {
    /// Whether this range carries a usable price signal.
    pub fn is_estimated(&self) -> bool {
        self.basis == CostBasis::MarketQuotes
    }
}
