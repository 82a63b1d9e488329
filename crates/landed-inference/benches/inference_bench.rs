use criterion::{black_box, criterion_group, criterion_main, Criterion};
use landed_core::models::*;
use landed_inference::InferenceEngine;

fn full_market() -> MarketEstimate {
    MarketEstimate {
        price_range: Some(PriceRange { min: 2.0, max: 5.0 }),
        hs_candidates: vec![HsCandidate {
            code: "611020".to_string(),
            confidence: Confidence::new(0.85),
            reason: "import records".to_string(),
        }],
        similar_record_count: 12,
        suppliers: vec![],
        moq: None,
        lead_time: None,
        confidence_tier: ConfidenceTier::High,
        evidence_source: "bench_records".to_string(),
    }
}

fn bench_infer(c: &mut Criterion) {
    let engine = InferenceEngine::default();
    let analysis = ImageAnalysisResult {
        product_name: "Knit pullover".to_string(),
        category: "apparel".to_string(),
        description: "bench".to_string(),
        confidence: Confidence::new(0.9),
        hs_code_guess: Some("611020".to_string()),
        keywords: vec![],
    };
    let market = full_market();
    let user = UserInputs::default();

    c.bench_function("infer_full_market", |b| {
        b.iter(|| {
            black_box(engine.infer(
                black_box(Some(&analysis)),
                black_box(Some(&market)),
                black_box(&user),
            ))
        })
    });

    c.bench_function("infer_no_market", |b| {
        b.iter(|| black_box(engine.infer(black_box(Some(&analysis)), None, black_box(&user))))
    });
}

criterion_group!(benches, bench_infer);
criterion_main!(benches);
