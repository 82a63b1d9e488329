//! Provenance-driven spreads and confidences.
//!
//! Spread width strictly decreases as the source tier strengthens, and
//! confidence moves the opposite way. Downstream risk scoring and the UI
//! depend on this inverse correlation; it is an invariant, not a style choice.

use landed_core::models::{Confidence, InferredInput, Percentiles, Provenance};

/// Confidence assigned to user-declared values.
pub const USER_DECLARED_CONFIDENCE: f64 = 0.95;

/// Relative spread applied around a point estimate from this source tier.
pub fn spread_for(source: Provenance) -> f64 {
    match source {
        Provenance::Assumed => 0.60,
        Provenance::FromCategory => 0.35,
        Provenance::FromHsEstimate => 0.20,
        Provenance::FromCustoms => 0.10,
    }
}

/// Confidence assigned to a value from this source tier.
pub fn confidence_for(source: Provenance) -> Confidence {
    Confidence::new(match source {
        Provenance::Assumed => 0.30,
        Provenance::FromCategory => 0.55,
        Provenance::FromHsEstimate => 0.75,
        Provenance::FromCustoms => 0.90,
    })
}

/// Build a numeric inferred input with the tier's spread and confidence.
pub fn numeric(value: f64, source: Provenance, explanation: impl Into<String>) -> InferredInput<f64> {
    InferredInput {
        value,
        source,
        range: Some(Percentiles::around(value, spread_for(source))),
        explanation: explanation.into(),
        confidence: confidence_for(source),
    }
}

/// Build a numeric inferred input from a user declaration: strongest
/// applicable tag, tier spread, but user-grade confidence.
pub fn user_numeric(value: f64, explanation: impl Into<String>) -> InferredInput<f64> {
    InferredInput {
        value,
        source: Provenance::FromCustoms,
        range: Some(Percentiles::around(value, spread_for(Provenance::FromCustoms))),
        explanation: explanation.into(),
        confidence: Confidence::new(USER_DECLARED_CONFIDENCE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spread_strictly_decreases_along_the_ladder() {
        let ladder = [
            Provenance::Assumed,
            Provenance::FromCategory,
            Provenance::FromHsEstimate,
            Provenance::FromCustoms,
        ];
        for pair in ladder.windows(2) {
            assert!(spread_for(pair[0]) > spread_for(pair[1]));
        }
    }

    #[test]
    fn confidence_strictly_increases_along_the_ladder() {
        let ladder = [
            Provenance::Assumed,
            Provenance::FromCategory,
            Provenance::FromHsEstimate,
            Provenance::FromCustoms,
        ];
        for pair in ladder.windows(2) {
            assert!(confidence_for(pair[0]).value() < confidence_for(pair[1]).value());
        }
    }
}
