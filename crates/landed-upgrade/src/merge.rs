//! Append-only evidence merging.
//!
//! Merging two market estimates can only widen what is known: candidate and
//! supplier sets are unioned (deduplicated), counts and tiers take the max,
//! and observed ranges take the envelope. Nothing is ever removed.

use landed_core::models::{
    HsCandidate, LeadTimeRange, MarketEstimate, MoqRange, PriceRange, SupplierRecord,
};

/// Merge freshly-found evidence into the previously known estimate.
pub fn merge(prior: Option<&MarketEstimate>, found: &MarketEstimate) -> MarketEstimate {
    let Some(prior) = prior else {
        return found.clone();
    };

    MarketEstimate {
        price_range: merge_price(prior.price_range, found.price_range),
        hs_candidates: merge_candidates(&prior.hs_candidates, &found.hs_candidates),
        similar_record_count: prior.similar_record_count.max(found.similar_record_count),
        suppliers: merge_suppliers(&prior.suppliers, &found.suppliers),
        moq: merge_moq(prior.moq, found.moq),
        lead_time: merge_lead_time(prior.lead_time, found.lead_time),
        confidence_tier: prior.confidence_tier.max(found.confidence_tier),
        evidence_source: found.evidence_source.clone(),
    }
}

fn merge_price(a: Option<PriceRange>, b: Option<PriceRange>) -> Option<PriceRange> {
    match (a, b) {
        (Some(a), Some(b)) => Some(PriceRange {
            min: a.min.min(b.min),
            max: a.max.max(b.max),
        }),
        (some, None) | (None, some) => some,
    }
}

fn merge_candidates(prior: &[HsCandidate], found: &[HsCandidate]) -> Vec<HsCandidate> {
    let mut merged: Vec<HsCandidate> = prior.to_vec();
    for candidate in found {
        match merged.iter_mut().find(|c| c.code == candidate.code) {
            Some(existing) => {
                // Same code seen again: keep the stronger attribution.
                if candidate.confidence.value() > existing.confidence.value() {
                    *existing = candidate.clone();
                }
            }
            None => merged.push(candidate.clone()),
        }
    }
    merged
}

fn merge_suppliers(prior: &[SupplierRecord], found: &[SupplierRecord]) -> Vec<SupplierRecord> {
    let mut merged: Vec<SupplierRecord> = prior.to_vec();
    for supplier in found {
        match merged.iter_mut().find(|s| s.name == supplier.name) {
            Some(existing) => {
                if supplier.last_seen > existing.last_seen {
                    *existing = supplier.clone();
                }
            }
            None => merged.push(supplier.clone()),
        }
    }
    merged
}

fn merge_moq(a: Option<MoqRange>, b: Option<MoqRange>) -> Option<MoqRange> {
    match (a, b) {
        (Some(a), Some(b)) => Some(MoqRange {
            min_units: a.min_units.min(b.min_units),
            max_units: a.max_units.max(b.max_units),
        }),
        (some, None) | (None, some) => some,
    }
}

fn merge_lead_time(a: Option<LeadTimeRange>, b: Option<LeadTimeRange>) -> Option<LeadTimeRange> {
    match (a, b) {
        (Some(a), Some(b)) => Some(LeadTimeRange {
            min_days: a.min_days.min(b.min_days),
            max_days: a.max_days.max(b.max_days),
        }),
        (some, None) | (None, some) => some,
    }
}
