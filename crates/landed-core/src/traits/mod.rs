pub mod ledger;
pub mod market_source;
pub mod state_store;

pub use ledger::CreditLedger;
pub use market_source::MarketEvidenceSource;
pub use state_store::UpgradeStateStore;
