//! Cost model evaluation.
//!
//! Standard scenario: minimum observed unit price + p50 freight/duty/fees
//! (optimistic but real). Conservative scenario: maximum observed price +
//! p90 freight/duty/fees. Duty is ad valorem (`unit_price × duty_rate`), so
//! it scales with the price tier instead of being a flat fee.

use landed_core::models::{
    CostBasis, CostComponentRanges, CostRange, CostScenario, InferredInput, InferredInputs,
    MarketEstimate, Percentiles,
};

/// Observed/estimated unit price bounds feeding the evaluator.
#[derive(Debug, Clone, Copy)]
pub struct PriceBounds {
    pub min: f64,
    pub max: f64,
}

impl PriceBounds {
    /// Extract bounds from a market estimate, if it carries a price signal.
    pub fn from_market(market: Option<&MarketEstimate>) -> Option<Self> {
        market?.price_range.map(|r| Self {
            min: r.min,
            max: r.max,
        })
    }

    fn mid(&self) -> f64 {
        (self.min + self.max) / 2.0
    }
}

fn range_of(input: &InferredInput<f64>) -> Percentiles {
    input
        .range
        .unwrap_or(Percentiles::new(input.value, input.value, input.value))
}

/// Evaluate the cost model.
///
/// With no price signal at all the result carries `CostBasis::Unestimated`
/// and zero unit price for both scenarios — the assembler must present that
/// as "unestimated", never as a real zero-cost figure.
pub fn evaluate(price_bounds: Option<PriceBounds>, inputs: &InferredInputs) -> CostRange {
    let shipping = range_of(&inputs.shipping_per_unit);
    let duty_rate = range_of(&inputs.duty_rate);
    let fees = range_of(&inputs.fees_per_unit);

    let (bounds, basis) = match price_bounds {
        Some(b) => (b, CostBasis::MarketQuotes),
        None => (PriceBounds { min: 0.0, max: 0.0 }, CostBasis::Unestimated),
    };

    let standard = CostScenario::new(
        bounds.min,
        shipping.p50,
        bounds.min * duty_rate.p50,
        fees.p50,
    );
    let conservative = CostScenario::new(
        bounds.max,
        shipping.p90,
        bounds.max * duty_rate.p90,
        fees.p90,
    );

    let duty = Percentiles::new(
        bounds.min * duty_rate.p10,
        bounds.mid() * duty_rate.p50,
        bounds.max * duty_rate.p90,
    );
    let total = Percentiles::new(
        bounds.min + shipping.p10 + duty.p10 + fees.p10,
        bounds.mid() + shipping.p50 + duty.p50 + fees.p50,
        bounds.max + shipping.p90 + duty.p90 + fees.p90,
    );

    CostRange {
        standard,
        conservative,
        range: CostComponentRanges {
            shipping_per_unit: shipping,
            duty_per_unit: duty,
            fee_per_unit: fees,
            total_landed_cost: total,
        },
        basis,
    }
}
