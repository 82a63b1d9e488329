//! Duty-rate resolution.
//!
//! Tag semantics: `from_customs` means the rate came from a duty-schedule hit
//! for an HS candidate backed by import records; `from_hs_estimate` means an
//! HS signal existed (an uncorroborated model guess, or a candidate whose
//! chapter is not in the schedule) but the rate is an estimate. `from_customs`
//! is the stronger tag and always wins when both could apply.

use landed_core::config::InferenceConfig;
use landed_core::models::{HsCandidate, InferredInput, MarketEstimate, Provenance};

use crate::spread;

/// Ad-valorem duty rate by 2-digit HS chapter.
static DUTY_SCHEDULE: &[(&str, f64, &str)] = &[
    ("17", 0.04, "sugar confectionery"),
    ("18", 0.05, "cocoa preparations"),
    ("39", 0.045, "plastic articles"),
    ("42", 0.08, "leather goods"),
    ("61", 0.16, "knit apparel"),
    ("62", 0.162, "woven apparel"),
    ("63", 0.093, "made-up textiles"),
    ("64", 0.12, "footwear"),
    ("69", 0.06, "ceramic articles"),
    ("71", 0.055, "jewelry"),
    ("73", 0.029, "steel articles"),
    ("85", 0.026, "electrical machinery"),
    ("94", 0.029, "furniture"),
    ("95", 0.0, "toys and games"),
];

fn schedule_rate(chapter: &str) -> Option<(f64, &'static str)> {
    DUTY_SCHEDULE
        .iter()
        .find(|(ch, _, _)| *ch == chapter)
        .map(|(_, rate, label)| (*rate, *label))
}

/// Resolve the duty rate from HS evidence, if any applies.
///
/// Returns `None` when no usable HS signal exists, letting the caller fall
/// through to the category rung.
pub fn resolve(
    market: Option<&MarketEstimate>,
    analysis_hs_guess: Option<&str>,
    config: &InferenceConfig,
) -> Option<InferredInput<f64>> {
    // Strongest first: a record-backed candidate resolving against the schedule.
    if let Some(candidate) = best_candidate(market, config) {
        if let Some(chapter) = candidate.chapter() {
            if let Some((rate, label)) = schedule_rate(chapter) {
                return Some(spread::numeric(
                    rate,
                    Provenance::FromCustoms,
                    format!(
                        "duty rate {:.1}% from customs schedule chapter {chapter} ({label}), \
                         matched HS candidate {}",
                        rate * 100.0,
                        candidate.code
                    ),
                ));
            }
        }
        // A candidate exists but its chapter has no schedule entry.
        return Some(spread::numeric(
            config.fallback_duty_rate,
            Provenance::FromHsEstimate,
            format!(
                "duty rate estimated at {:.1}% for unscheduled HS candidate {}",
                config.fallback_duty_rate * 100.0,
                candidate.code
            ),
        ));
    }

    // Next: the analysis model's own HS guess, uncorroborated by records.
    let guess = analysis_hs_guess?;
    let chapter = guess.get(..2).filter(|c| c.bytes().all(|b| b.is_ascii_digit()))?;
    let (rate, label) = schedule_rate(chapter)?;
    Some(spread::numeric(
        rate,
        Provenance::FromHsEstimate,
        format!(
            "duty rate {:.1}% estimated from image-analysis HS guess {guess} \
             (chapter {chapter}, {label})",
            rate * 100.0
        ),
    ))
}

/// The record-backed candidate with the highest confidence at or above the
/// configured floor.
fn best_candidate<'a>(
    market: Option<&'a MarketEstimate>,
    config: &InferenceConfig,
) -> Option<&'a HsCandidate> {
    market?
        .hs_candidates
        .iter()
        .filter(|c| c.confidence.value() >= config.hs_candidate_min_confidence)
        .max_by(|a, b| {
            a.confidence
                .value()
                .partial_cmp(&b.confidence.value())
                .unwrap_or(std::cmp::Ordering::Equal)
        })
}
