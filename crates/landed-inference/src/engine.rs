//! InferenceEngine — runs every per-field resolver chain and assembles the
//! full `InferredInputs` record.

use tracing::{debug, instrument};

use landed_core::config::InferenceConfig;
use landed_core::models::{
    ImageAnalysisResult, InferredInputs, MarketEstimate, Provenance, UserInputs,
};

use crate::categories::{self, GENERAL};
use crate::resolvers::{duty, freight, packaging};
use crate::spread;

/// Fills every cost-model input, tagged with provenance and range.
pub struct InferenceEngine {
    config: InferenceConfig,
}

impl InferenceEngine {
    pub fn new(config: InferenceConfig) -> Self {
        Self { config }
    }

    /// Get the engine configuration.
    pub fn config(&self) -> &InferenceConfig {
        &self.config
    }

    /// Resolve all cost-model inputs.
    ///
    /// `analysis` may be absent (upstream failure) and `market` may be absent
    /// (no market data found) — both degrade the provenance of the affected
    /// fields instead of failing.
    #[instrument(skip_all, fields(has_analysis = analysis.is_some(), has_market = market.is_some()))]
    pub fn infer(
        &self,
        analysis: Option<&ImageAnalysisResult>,
        market: Option<&MarketEstimate>,
        user: &UserInputs,
    ) -> InferredInputs {
        let category = analysis.and_then(|a| categories::lookup(&a.category));
        if analysis.is_some() && category.is_none() {
            debug!("category unrecognized, using general merchandise fallback");
        }

        let shipping_mode = packaging::shipping_mode(user, category);
        let unit_weight_g = packaging::unit_weight_g(user, category);
        let unit_volume_m3 = packaging::unit_volume_m3(user, category);
        let carton_pack = packaging::carton_pack(user, category);
        let fees_per_unit = packaging::fees_per_unit(user, category);

        let duty_rate = self.resolve_duty(analysis, market, user, category);

        let billable_weight_kg = freight::billable_weight(&unit_weight_g, &unit_volume_m3);
        let shipping_per_unit =
            freight::shipping_per_unit(&billable_weight_kg, &shipping_mode, &self.config);

        let inputs = InferredInputs {
            shipping_mode,
            unit_weight_g,
            unit_volume_m3,
            carton_pack,
            billable_weight_kg,
            duty_rate,
            fees_per_unit,
            shipping_per_unit,
        };
        debug!(
            verified_signals = inputs.verified_signal_count(),
            duty_source = ?inputs.duty_rate.source,
            "inference complete"
        );
        inputs
    }

    fn resolve_duty(
        &self,
        analysis: Option<&ImageAnalysisResult>,
        market: Option<&MarketEstimate>,
        user: &UserInputs,
        category: Option<&'static categories::CategoryDefaults>,
    ) -> landed_core::models::InferredInput<f64> {
        if let Some(rate) = user.duty_rate {
            return spread::user_numeric(rate, "duty rate declared by user");
        }
        let hs_guess = analysis.and_then(|a| a.hs_code_guess.as_deref());
        if let Some(resolved) = duty::resolve(market, hs_guess, &self.config) {
            return resolved;
        }
        match category {
            Some(row) => spread::numeric(
                row.duty_rate,
                Provenance::FromCategory,
                format!("duty rate from {} category defaults", row.key),
            ),
            None => spread::numeric(
                GENERAL.duty_rate,
                Provenance::Assumed,
                "duty rate assumed from general merchandise baseline",
            ),
        }
    }
}

impl Default for InferenceEngine {
    fn default() -> Self {
        Self::new(InferenceConfig::default())
    }
}
