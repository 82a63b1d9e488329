/// External market-evidence lookup failures.
///
/// These are transient, retryable failures. "No evidence found" is NOT an
/// error — the lookup returns `Ok(None)` for that, and the two must never be
/// conflated: a timeout does not mean a report is exhausted.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("evidence lookup timed out after {elapsed_ms}ms")]
    Timeout { elapsed_ms: u64 },

    #[error("evidence lookup transport error: {reason}")]
    Transport { reason: String },
}

impl LookupError {
    /// Stable machine-readable code, recorded in the upgrade state.
    pub fn code(&self) -> &'static str {
        match self {
            LookupError::Timeout { .. } => "lookup_timeout",
            LookupError::Transport { .. } => "lookup_transport",
        }
    }
}
