use landed_core::models::*;
use proptest::prelude::*;

// ── Confidence ───────────────────────────────────────────────────────────

#[test]
fn confidence_clamps_to_unit_interval() {
    assert_eq!(Confidence::new(1.7).value(), 1.0);
    assert_eq!(Confidence::new(-0.2).value(), 0.0);
    assert_eq!(Confidence::new(0.42).value(), 0.42);
}

#[test]
fn confidence_tier_banding() {
    assert_eq!(
        ConfidenceTier::from_confidence(Confidence::new(0.85)),
        ConfidenceTier::High
    );
    assert_eq!(
        ConfidenceTier::from_confidence(Confidence::new(0.6)),
        ConfidenceTier::Medium
    );
    assert_eq!(
        ConfidenceTier::from_confidence(Confidence::new(0.1)),
        ConfidenceTier::Low
    );
}

// ── Provenance ladder ────────────────────────────────────────────────────

#[test]
fn provenance_orders_weakest_to_strongest() {
    assert!(Provenance::Assumed < Provenance::FromCategory);
    assert!(Provenance::FromCategory < Provenance::FromHsEstimate);
    assert!(Provenance::FromHsEstimate < Provenance::FromCustoms);
}

#[test]
fn category_defaults_are_not_verified_signals() {
    assert!(!Provenance::Assumed.is_verified_signal());
    assert!(!Provenance::FromCategory.is_verified_signal());
    assert!(Provenance::FromHsEstimate.is_verified_signal());
    assert!(Provenance::FromCustoms.is_verified_signal());
}

#[test]
fn provenance_serializes_snake_case() {
    let json = serde_json::to_string(&Provenance::FromHsEstimate).unwrap();
    assert_eq!(json, "\"from_hs_estimate\"");
}

// ── Percentiles ──────────────────────────────────────────────────────────

#[test]
fn percentiles_around_is_symmetric_and_nonnegative() {
    let p = Percentiles::around(10.0, 0.35);
    assert!((p.p10 - 6.5).abs() < 1e-9);
    assert_eq!(p.p50, 10.0);
    assert!((p.p90 - 13.5).abs() < 1e-9);

    // Large spreads never push p10 below zero.
    let q = Percentiles::around(1.0, 1.5);
    assert_eq!(q.p10, 0.0);
}

// ── CostScenario ─────────────────────────────────────────────────────────

#[test]
fn cost_scenario_total_is_sum_of_components() {
    let s = CostScenario::new(3.2, 0.45, 0.512, 0.3);
    assert_eq!(
        s.total_landed_cost,
        s.unit_price + s.shipping_per_unit + s.duty_per_unit + s.fee_per_unit
    );
}

#[test]
fn rounded_scenario_total_matches_rounded_components() {
    let s = CostScenario::new(3.333_333, 0.456_789, 0.512_345, 0.299_999);
    let r = s.rounded_to_cents();
    assert_eq!(
        r.total_landed_cost,
        r.unit_price + r.shipping_per_unit + r.duty_per_unit + r.fee_per_unit
    );
    assert_eq!(r.unit_price, 3.33);
}

// ── RiskScores ───────────────────────────────────────────────────────────

#[test]
fn risk_total_is_rounded_mean() {
    let r = RiskScores::new(65, 40, 30);
    assert_eq!(r.total, 45); // (65 + 40 + 30) / 3 = 45
    let r = RiskScores::new(70, 40, 50);
    assert_eq!(r.total, 53); // 160 / 3 = 53.33 → 53
}

proptest! {
    #[test]
    fn risk_total_is_always_the_rounded_mean(
        tariff in 0u8..=100,
        compliance in 0u8..=100,
        supply in 0u8..=100,
    ) {
        let r = RiskScores::new(tariff, compliance, supply);
        let mean = (tariff as f64 + compliance as f64 + supply as f64) / 3.0;
        prop_assert_eq!(r.total, mean.round() as u8);
        prop_assert!(r.total >= tariff.min(compliance).min(supply));
        prop_assert!(r.total <= tariff.max(compliance).max(supply));
    }

    #[test]
    fn confidence_never_escapes_the_unit_interval(raw in -10.0f64..10.0) {
        let c = Confidence::new(raw);
        prop_assert!((0.0..=1.0).contains(&c.value()));
    }
}

// ── EvidenceLevel ────────────────────────────────────────────────────────

#[test]
fn evidence_level_merge_is_monotonic() {
    use EvidenceLevel::*;
    assert_eq!(Verified.merged(Baseline), Verified);
    assert_eq!(Baseline.merged(Evidence), Evidence);
    assert_eq!(Evidence.merged(Evidence), Evidence);
    assert_eq!(Verified.merged(Evidence), Verified);
}

// ── HS candidates ────────────────────────────────────────────────────────

#[test]
fn hs_candidate_chapter_prefix() {
    let c = HsCandidate {
        code: "611020".to_string(),
        confidence: Confidence::new(0.8),
        reason: "knit pullover".to_string(),
    };
    assert_eq!(c.chapter(), Some("61"));

    let bad = HsCandidate {
        code: "x".to_string(),
        confidence: Confidence::new(0.2),
        reason: String::new(),
    };
    assert_eq!(bad.chapter(), None);
}

// ── Report serde ─────────────────────────────────────────────────────────

#[test]
fn unknown_fields_are_tolerated_on_read() {
    // Forward compatibility: consumers (and we ourselves) must accept
    // payloads carrying fields this schema version does not know about.
    let json = r#"{
        "price_range": {"min": 1.0, "max": 2.0},
        "hs_candidates": [],
        "similar_record_count": 3,
        "suppliers": [],
        "moq": null,
        "lead_time": null,
        "confidence_tier": "medium",
        "evidence_source": "test_records",
        "some_future_field": {"nested": true}
    }"#;
    let estimate: MarketEstimate = serde_json::from_str(json).unwrap();
    assert_eq!(estimate.similar_record_count, 3);
    assert!(estimate.has_import_evidence());
}
