use landed_core::models::*;
use landed_cost::{evaluate, PriceBounds};
use landed_inference::spread;
use proptest::prelude::*;

fn arb_provenance() -> impl Strategy<Value = Provenance> {
    prop_oneof![
        Just(Provenance::Assumed),
        Just(Provenance::FromCategory),
        Just(Provenance::FromHsEstimate),
        Just(Provenance::FromCustoms),
    ]
}

fn make_inputs(
    shipping: f64,
    duty_rate: f64,
    fees: f64,
    source: Provenance,
) -> InferredInputs {
    let mode = InferredInput::plain(
        ShippingMode::Sea,
        source,
        "m",
        spread::confidence_for(source),
    );
    InferredInputs {
        shipping_mode: mode,
        unit_weight_g: spread::numeric(300.0, source, "w"),
        unit_volume_m3: spread::numeric(0.002, source, "v"),
        carton_pack: InferredInput {
            value: 40,
            source,
            range: Some(Percentiles::around(40.0, spread::spread_for(source))),
            explanation: "c".to_string(),
            confidence: spread::confidence_for(source),
        },
        billable_weight_kg: spread::numeric(0.4, source, "b"),
        duty_rate: spread::numeric(duty_rate, source, "d"),
        fees_per_unit: spread::numeric(fees, source, "f"),
        shipping_per_unit: spread::numeric(shipping, source, "s"),
    }
}

proptest! {
    // ── Conservative never cheaper ───────────────────────────────────────

    #[test]
    fn conservative_total_dominates_standard(
        min in 0.0f64..1_000.0,
        extra in 0.0f64..1_000.0,
        shipping in 0.0f64..100.0,
        duty_rate in 0.0f64..0.5,
        fees in 0.0f64..50.0,
        source in arb_provenance(),
    ) {
        let inputs = make_inputs(shipping, duty_rate, fees, source);
        let cost = evaluate(
            Some(PriceBounds { min, max: min + extra }),
            &inputs,
        );
        prop_assert!(
            cost.conservative.total_landed_cost >= cost.standard.total_landed_cost
        );
    }

    // ── Totals are exact recomputed sums ─────────────────────────────────

    #[test]
    fn total_equals_component_sum(
        min in 0.0f64..1_000.0,
        extra in 0.0f64..1_000.0,
        shipping in 0.0f64..100.0,
        duty_rate in 0.0f64..0.5,
        fees in 0.0f64..50.0,
        source in arb_provenance(),
    ) {
        let inputs = make_inputs(shipping, duty_rate, fees, source);
        let cost = evaluate(Some(PriceBounds { min, max: min + extra }), &inputs);
        for s in [cost.standard, cost.conservative] {
            prop_assert_eq!(
                s.total_landed_cost,
                s.unit_price + s.shipping_per_unit + s.duty_per_unit + s.fee_per_unit
            );
        }
    }

    // ── Unestimated basis is always explicit ─────────────────────────────

    #[test]
    fn absent_price_signal_always_flags_unestimated(
        shipping in 0.0f64..100.0,
        duty_rate in 0.0f64..0.5,
        fees in 0.0f64..50.0,
        source in arb_provenance(),
    ) {
        let inputs = make_inputs(shipping, duty_rate, fees, source);
        let cost = evaluate(None, &inputs);
        prop_assert_eq!(cost.basis, CostBasis::Unestimated);
        prop_assert_eq!(cost.standard.unit_price, 0.0);
    }
}
