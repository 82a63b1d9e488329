use serde::{Deserialize, Serialize};

use super::defaults;

/// Inference subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InferenceConfig {
    /// Freight rate per billable kg, sea mode.
    pub freight_rate_sea_per_kg: f64,
    /// Freight rate per billable kg, air mode.
    pub freight_rate_air_per_kg: f64,
    /// Freight rate per billable kg, express mode.
    pub freight_rate_express_per_kg: f64,
    /// Duty rate used when an HS candidate exists but the chapter is not in
    /// the customs schedule.
    pub fallback_duty_rate: f64,
    /// Minimum candidate confidence for an HS-derived duty resolution.
    pub hs_candidate_min_confidence: f64,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            freight_rate_sea_per_kg: defaults::DEFAULT_FREIGHT_RATE_SEA_PER_KG,
            freight_rate_air_per_kg: defaults::DEFAULT_FREIGHT_RATE_AIR_PER_KG,
            freight_rate_express_per_kg: defaults::DEFAULT_FREIGHT_RATE_EXPRESS_PER_KG,
            fallback_duty_rate: defaults::DEFAULT_FALLBACK_DUTY_RATE,
            hs_candidate_min_confidence: defaults::DEFAULT_HS_CANDIDATE_MIN_CONFIDENCE,
        }
    }
}
