use super::ledger_error::LedgerError;
use super::lookup_error::LookupError;

/// Operation-level failures of the evidence upgrade controller.
///
/// These are the only engine failures surfaced to callers as errors;
/// inference- and scoring-level problems are absorbed into report state.
#[derive(Debug, thiserror::Error)]
pub enum UpgradeError {
    /// The per-report cooldown window is still active. No external call was
    /// made and no credit was charged. Callers must surface this distinctly
    /// from generic failure.
    #[error("upgrade rate limited: retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u64 },

    /// The external lookup failed. Retryable.
    #[error("evidence lookup failed: {0}")]
    Lookup(#[from] LookupError),

    /// The credit ledger declined to fund the lookup.
    #[error("credit rejected: {0}")]
    CreditRejected(#[from] LedgerError),
}
