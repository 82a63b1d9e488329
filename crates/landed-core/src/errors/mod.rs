//! Error handling for the Landed engine.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod ledger_error;
pub mod lookup_error;
pub mod upgrade_error;

pub use config_error::ConfigError;
pub use ledger_error::LedgerError;
pub use lookup_error::LookupError;
pub use upgrade_error::UpgradeError;

/// Top-level engine error.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// An upstream producer the engine depends on was unavailable.
    /// Recoverable by retrying upstream; not retried here.
    #[error("upstream input unavailable: {stage}")]
    InputUnavailable { stage: String },

    #[error(transparent)]
    Upgrade(#[from] UpgradeError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Convenience result alias used across the workspace.
pub type EngineResult<T> = Result<T, EngineError>;
