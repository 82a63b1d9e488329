//! Freight derivations: billable weight and per-unit shipping cost.

use landed_core::config::InferenceConfig;
use landed_core::constants::VOLUMETRIC_KG_PER_M3;
use landed_core::models::{Confidence, InferredInput, Percentiles, ShippingMode};

use crate::spread;

/// Per-unit billable weight in kg: `max(actual, volumetric)`.
///
/// Standard freight billing charges whichever is greater — taking an average
/// here would systematically under-bill bulky-but-light goods.
pub fn billable_weight(
    weight_g: &InferredInput<f64>,
    volume_m3: &InferredInput<f64>,
) -> InferredInput<f64> {
    let actual_kg = weight_g.value / 1000.0;
    let volumetric_kg = volume_m3.value * VOLUMETRIC_KG_PER_M3;
    let value = actual_kg.max(volumetric_kg);

    // The derived value is only as strong as its weaker contributor.
    let source = weight_g.source.min(volume_m3.source);
    let basis = if volumetric_kg > actual_kg {
        "dimensional weight governs"
    } else {
        "actual weight governs"
    };

    // max() is monotone, so applying it per percentile is sound.
    let range = match (weight_g.range, volume_m3.range) {
        (Some(w), Some(v)) => Some(Percentiles::new(
            (w.p10 / 1000.0).max(v.p10 * VOLUMETRIC_KG_PER_M3),
            (w.p50 / 1000.0).max(v.p50 * VOLUMETRIC_KG_PER_M3),
            (w.p90 / 1000.0).max(v.p90 * VOLUMETRIC_KG_PER_M3),
        )),
        _ => Some(Percentiles::around(value, spread::spread_for(source))),
    };

    InferredInput {
        value,
        source,
        range,
        explanation: format!(
            "billable weight {value:.3} kg = max(actual {actual_kg:.3} kg, \
             volumetric {volumetric_kg:.3} kg); {basis}"
        ),
        confidence: Confidence::new(
            spread::confidence_for(source)
                .value()
                .min(weight_g.confidence.value())
                .min(volume_m3.confidence.value()),
        ),
    }
}

/// Freight rate per billable kg for a mode.
pub fn rate_per_kg(mode: ShippingMode, config: &InferenceConfig) -> f64 {
    match mode {
        ShippingMode::Sea => config.freight_rate_sea_per_kg,
        ShippingMode::Air => config.freight_rate_air_per_kg,
        ShippingMode::Express => config.freight_rate_express_per_kg,
    }
}

/// Per-unit shipping cost: billable weight × mode rate.
pub fn shipping_per_unit(
    billable_kg: &InferredInput<f64>,
    mode: &InferredInput<ShippingMode>,
    config: &InferenceConfig,
) -> InferredInput<f64> {
    let rate = rate_per_kg(mode.value, config);
    let value = billable_kg.value * rate;
    let source = billable_kg.source.min(mode.source);

    let range = billable_kg
        .range
        .map(|r| Percentiles::new(r.p10 * rate, r.p50 * rate, r.p90 * rate));

    InferredInput {
        value,
        source,
        range,
        explanation: format!(
            "shipping {value:.3}/unit = {:.3} kg billable × {rate:.2}/kg ({:?} freight)",
            billable_kg.value, mode.value
        ),
        confidence: Confidence::new(billable_kg.confidence.value().min(mode.confidence.value())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use landed_core::models::Provenance;

    #[test]
    fn billable_takes_the_max_not_the_average() {
        // 200 g actual but 0.006 m³ → volumetric 1.002 kg dominates.
        let weight = spread::numeric(200.0, Provenance::FromCategory, "w");
        let volume = spread::numeric(0.006, Provenance::FromCategory, "v");
        let billable = billable_weight(&weight, &volume);
        assert!((billable.value - 1.002).abs() < 1e-9);
        assert!(billable.explanation.contains("dimensional weight governs"));
    }

    #[test]
    fn derived_source_is_the_weaker_contributor() {
        let weight = spread::numeric(500.0, Provenance::FromCustoms, "w");
        let volume = spread::numeric(0.001, Provenance::Assumed, "v");
        let billable = billable_weight(&weight, &volume);
        assert_eq!(billable.source, Provenance::Assumed);
    }

    #[test]
    fn shipping_scales_with_mode_rate() {
        let config = InferenceConfig::default();
        let weight = spread::numeric(1000.0, Provenance::FromCategory, "w");
        let volume = spread::numeric(0.001, Provenance::FromCategory, "v");
        let billable = billable_weight(&weight, &volume);

        let sea = InferredInput::plain(
            ShippingMode::Sea,
            Provenance::FromCategory,
            "m",
            spread::confidence_for(Provenance::FromCategory),
        );
        let air = InferredInput::plain(
            ShippingMode::Air,
            Provenance::FromCategory,
            "m",
            spread::confidence_for(Provenance::FromCategory),
        );

        let by_sea = shipping_per_unit(&billable, &sea, &config);
        let by_air = shipping_per_unit(&billable, &air, &config);
        assert!(by_air.value > by_sea.value);
    }
}
