/// Credit-ledger failures for metered external lookups.
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error("insufficient credit for report {report_id}")]
    InsufficientCredit { report_id: String },

    #[error("credit ledger unavailable: {reason}")]
    Unavailable { reason: String },
}
