//! Physical/packaging field resolution: shipping mode, weight, volume,
//! carton pack, fees. Market evidence carries no data for these, so the
//! chain is user → category → assumed.

use landed_core::models::{
    Confidence, InferredInput, Percentiles, Provenance, ShippingMode, UserInputs,
};

use crate::categories::{CategoryDefaults, GENERAL};
use crate::spread;

use super::resolve_scalar;

pub fn shipping_mode(
    user: &UserInputs,
    category: Option<&'static CategoryDefaults>,
) -> InferredInput<ShippingMode> {
    if let Some(mode) = user.shipping_mode {
        return InferredInput::plain(
            mode,
            Provenance::FromCustoms,
            "shipping mode declared by user",
            Confidence::new(spread::USER_DECLARED_CONFIDENCE),
        );
    }
    match category {
        Some(row) => InferredInput::plain(
            row.shipping_mode,
            Provenance::FromCategory,
            format!("shipping mode typical for {} category", row.key),
            spread::confidence_for(Provenance::FromCategory),
        ),
        None => InferredInput::plain(
            GENERAL.shipping_mode,
            Provenance::Assumed,
            "shipping mode assumed: sea freight baseline",
            spread::confidence_for(Provenance::Assumed),
        ),
    }
}

pub fn unit_weight_g(
    user: &UserInputs,
    category: Option<&'static CategoryDefaults>,
) -> InferredInput<f64> {
    resolve_scalar(
        "unit weight (g)",
        user.unit_weight_g,
        category.map(|row| (row.unit_weight_g, row.key)),
        GENERAL.unit_weight_g,
    )
}

pub fn unit_volume_m3(
    user: &UserInputs,
    category: Option<&'static CategoryDefaults>,
) -> InferredInput<f64> {
    resolve_scalar(
        "unit volume (m³)",
        user.unit_volume_m3,
        category.map(|row| (row.unit_volume_m3, row.key)),
        GENERAL.unit_volume_m3,
    )
}

pub fn fees_per_unit(
    user: &UserInputs,
    category: Option<&'static CategoryDefaults>,
) -> InferredInput<f64> {
    resolve_scalar(
        "fees per unit",
        user.fees_per_unit,
        category.map(|row| (row.fees_per_unit, row.key)),
        GENERAL.fees_per_unit,
    )
}

pub fn carton_pack(
    user: &UserInputs,
    category: Option<&'static CategoryDefaults>,
) -> InferredInput<u32> {
    if let Some(pack) = user.carton_pack {
        return InferredInput {
            value: pack,
            source: Provenance::FromCustoms,
            range: Some(Percentiles::around(
                pack as f64,
                spread::spread_for(Provenance::FromCustoms),
            )),
            explanation: "carton pack declared by user".to_string(),
            confidence: Confidence::new(spread::USER_DECLARED_CONFIDENCE),
        };
    }
    let (value, source, explanation) = match category {
        Some(row) => (
            row.carton_pack,
            Provenance::FromCategory,
            format!("carton pack from {} category defaults", row.key),
        ),
        None => (
            GENERAL.carton_pack,
            Provenance::Assumed,
            "carton pack assumed from general merchandise baseline".to_string(),
        ),
    };
    InferredInput {
        value,
        source,
        range: Some(Percentiles::around(value as f64, spread::spread_for(source))),
        explanation,
        confidence: spread::confidence_for(source),
    }
}
