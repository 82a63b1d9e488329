use crate::errors::LedgerError;

/// Credit ledger capability for metered external lookups.
///
/// Always injected explicitly — there is no default implementation that
/// silently succeeds.
pub trait CreditLedger: Send + Sync {
    /// Debit `units` credits for an operation on `report_id`.
    fn debit(&self, report_id: &str, units: u32) -> Result<(), LedgerError>;
}
