//! External trade-record / supplier lookup result types.
//!
//! A `MarketEstimate` may be entirely absent — "no market data found" is a
//! valid, first-class case for every consumer in this workspace, not an error.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::confidence::{Confidence, ConfidenceTier};

/// Observed unit price range for comparable products.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PriceRange {
    /// Minimum observed unit price.
    pub min: f64,
    /// Maximum observed unit price.
    pub max: f64,
}

impl PriceRange {
    /// Midpoint of the observed range.
    pub fn mid(&self) -> f64 {
        (self.min + self.max) / 2.0
    }
}

/// One HS classification candidate from historical import records.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct HsCandidate {
    /// Harmonized System code (6–10 digits).
    pub code: String,
    /// How confident the lookup is in this classification.
    pub confidence: Confidence,
    /// Human-readable reason this code was proposed.
    pub reason: String,
}

impl HsCandidate {
    /// The 2-digit HS chapter prefix, if the code is well-formed.
    pub fn chapter(&self) -> Option<&str> {
        if self.code.len() >= 2 && self.code[..2].bytes().all(|b| b.is_ascii_digit()) {
            Some(&self.code[..2])
        } else {
            None
        }
    }
}

/// A supplier observed in historical import records.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SupplierRecord {
    /// Supplier name as it appears in the records.
    pub name: String,
    /// Number of import records attributed to this supplier.
    pub record_count: u32,
    /// Most recent record involving this supplier.
    pub last_seen: DateTime<Utc>,
    /// Evidence snippet (e.g. a bill-of-lading excerpt).
    pub evidence: String,
}

/// Minimum order quantity range across observed suppliers.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MoqRange {
    pub min_units: u32,
    pub max_units: u32,
}

/// Production + transit lead time range in days.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LeadTimeRange {
    pub min_days: u32,
    pub max_days: u32,
}

/// Aggregated market evidence for one product, from the external
/// trade-record lookup.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MarketEstimate {
    /// Observed unit price range. Unit currency is the account currency.
    pub price_range: Option<PriceRange>,
    /// HS classification candidates, strongest first.
    #[serde(default)]
    pub hs_candidates: Vec<HsCandidate>,
    /// Count of similar historical import records found.
    pub similar_record_count: u32,
    /// Suppliers observed shipping comparable products.
    #[serde(default)]
    pub suppliers: Vec<SupplierRecord>,
    /// MOQ range across observed suppliers, when known.
    pub moq: Option<MoqRange>,
    /// Lead time range, when known.
    pub lead_time: Option<LeadTimeRange>,
    /// Overall confidence tier of this estimate.
    pub confidence_tier: ConfidenceTier,
    /// Label of the evidence source (e.g. "us_import_records").
    pub evidence_source: String,
}

impl MarketEstimate {
    /// Whether any import-record evidence backs this estimate.
    pub fn has_import_evidence(&self) -> bool {
        self.similar_record_count > 0 || !self.suppliers.is_empty()
    }
}
