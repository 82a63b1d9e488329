//! Provenance-tagged inferred inputs for the cost model.
//!
//! Every cost-model variable the engine fills in carries the source tier that
//! actually produced it plus a statistical range — never a bare scalar guess.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::confidence::Confidence;

/// Evidence tier that produced an inferred value.
///
/// Derives `Ord`: the declaration order IS the precedence ladder. A value's
/// source must reflect the strongest evidence that actually contributed to it,
/// not the deepest evidence available for the category in general.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Provenance {
    /// Global fallback constant — no product-specific evidence.
    Assumed,
    /// Category-keyed default row.
    FromCategory,
    /// Estimated from an HS-code candidate.
    FromHsEstimate,
    /// Resolved against the customs duty schedule (or a user declaration
    /// of equivalent strength).
    FromCustoms,
}

impl Provenance {
    /// Whether this tier counts as an externally verified signal.
    /// Category defaults describe the category, not this product.
    pub fn is_verified_signal(self) -> bool {
        self > Provenance::FromCategory
    }
}

/// A p10/p50/p90 triple around a numeric estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Percentiles {
    pub p10: f64,
    pub p50: f64,
    pub p90: f64,
}

impl Percentiles {
    /// Symmetric range: `p50 ± p50 × spread`, floored at zero.
    pub fn around(value: f64, spread: f64) -> Self {
        Self {
            p10: (value * (1.0 - spread)).max(0.0),
            p50: value,
            p90: value * (1.0 + spread),
        }
    }

    /// Exact triple. Caller guarantees `p10 <= p50 <= p90`.
    pub fn new(p10: f64, p50: f64, p90: f64) -> Self {
        Self { p10, p50, p90 }
    }

    /// Width of the range (p90 − p10).
    pub fn width(&self) -> f64 {
        self.p90 - self.p10
    }
}

/// Universal wrapper for any inferred cost-model variable.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InferredInput<T> {
    /// The resolved value.
    pub value: T,
    /// Strongest evidence tier that contributed to the value.
    pub source: Provenance,
    /// Statistical range, present for numeric variables.
    pub range: Option<Percentiles>,
    /// Human-auditable justification for the value.
    pub explanation: String,
    /// Confidence in the value. Correlates inversely with range width.
    pub confidence: Confidence,
}

impl<T> InferredInput<T> {
    /// A non-numeric inferred value (no range).
    pub fn plain(
        value: T,
        source: Provenance,
        explanation: impl Into<String>,
        confidence: Confidence,
    ) -> Self {
        Self {
            value,
            source,
            range: None,
            explanation: explanation.into(),
            confidence,
        }
    }
}

/// Freight mode for the shipping leg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ShippingMode {
    Sea,
    Air,
    Express,
}

/// The full set of cost-model inputs the inference engine must fill.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InferredInputs {
    pub shipping_mode: InferredInput<ShippingMode>,
    /// Per-unit actual weight in grams.
    pub unit_weight_g: InferredInput<f64>,
    /// Per-unit packed volume in cubic metres.
    pub unit_volume_m3: InferredInput<f64>,
    /// Units per export carton.
    pub carton_pack: InferredInput<u32>,
    /// Per-unit billable weight in kg: max(actual, volumetric).
    pub billable_weight_kg: InferredInput<f64>,
    /// Ad-valorem duty rate as a fraction (0.16 = 16%).
    pub duty_rate: InferredInput<f64>,
    /// Per-unit port/handling/brokerage fees.
    pub fees_per_unit: InferredInput<f64>,
    /// Per-unit freight cost for the resolved mode.
    pub shipping_per_unit: InferredInput<f64>,
}

impl InferredInputs {
    /// Count of inputs backed by an externally verified signal
    /// (source above `from_category`).
    pub fn verified_signal_count(&self) -> usize {
        [
            self.shipping_mode.source,
            self.unit_weight_g.source,
            self.unit_volume_m3.source,
            self.carton_pack.source,
            self.billable_weight_kg.source,
            self.duty_rate.source,
            self.fees_per_unit.source,
            self.shipping_per_unit.source,
        ]
        .into_iter()
        .filter(|s| s.is_verified_signal())
        .count()
    }
}

/// User-supplied facts. Each present field overrides inference for that
/// variable and is trusted as given.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(default)]
pub struct UserInputs {
    pub shipping_mode: Option<ShippingMode>,
    pub unit_weight_g: Option<f64>,
    pub unit_volume_m3: Option<f64>,
    pub carton_pack: Option<u32>,
    pub duty_rate: Option<f64>,
    pub fees_per_unit: Option<f64>,
}

impl UserInputs {
    /// Whether no override is present at all.
    pub fn is_empty(&self) -> bool {
        self.shipping_mode.is_none()
            && self.unit_weight_g.is_none()
            && self.unit_volume_m3.is_none()
            && self.carton_pack.is_none()
            && self.duty_rate.is_none()
            && self.fees_per_unit.is_none()
    }
}
