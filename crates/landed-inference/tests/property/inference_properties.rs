use landed_core::models::Provenance;
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

// ── Range width shrinks as evidence strengthens ──────────────────────────

proptest! {
    #[test]
    fn stronger_source_always_yields_narrower_range(
        value in 0.01f64..10_000.0,
        a in arb_provenance(),
        b in arb_provenance(),
    ) {
        prop_assume!(a < b);
        let weak = spread::numeric(value, a, "weak");
        let strong = spread::numeric(value, b, "strong");
        let ww = weak.range.unwrap().width();
        let sw = strong.range.unwrap().width();
        prop_assert!(
            sw < ww,
            "width did not shrink: {:?}={} vs {:?}={}", a, ww, b, sw
        );
    }

    #[test]
    fn confidence_moves_inverse_to_width(
        value in 0.01f64..10_000.0,
        a in arb_provenance(),
        b in arb_provenance(),
    ) {
        prop_assume!(a != b);
        let x = spread::numeric(value, a, "x");
        let y = spread::numeric(value, b, "y");
        let (wider, narrower) = if x.range.unwrap().width() > y.range.unwrap().width() {
            (x, y)
        } else {
            (y, x)
        };
        prop_assert!(wider.confidence.value() < narrower.confidence.value());
    }

    #[test]
    fn ranges_bracket_the_point_value(
        value in 0.0f64..10_000.0,
        source in arb_provenance(),
    ) {
        let input = spread::numeric(value, source, "p");
        let range = input.range.unwrap();
        prop_assert!(range.p10 <= value + f64::EPSILON);
        prop_assert!(range.p90 + f64::EPSILON >= value);
        prop_assert!(range.p10 >= 0.0);
    }
}
