//! # landed-core
//!
//! Foundation crate for the Landed cost-inference engine.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::EngineConfig;
pub use errors::{EngineError, EngineResult};
pub use models::{
    Confidence, CostRange, EvidenceLevel, InferredInput, InferredInputs, Provenance, Report,
    RiskScores,
};
