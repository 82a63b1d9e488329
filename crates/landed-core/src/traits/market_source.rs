use crate::errors::LookupError;
use crate::models::{EvidenceQuery, MarketEstimate};

/// External trade-record / supplier lookup collaborator.
///
/// `Ok(None)` means the lookup completed and found nothing — a legitimate
/// outcome. `Err` means the lookup itself failed and may be retried. The two
/// must never be conflated. Implementations own their timeout policy.
pub trait MarketEvidenceSource: Send + Sync {
    fn lookup(&self, query: &EvidenceQuery) -> Result<Option<MarketEstimate>, LookupError>;
}
