//! Evidence-level derivation.
//!
//! The ladder is strictly monotonic per report: an external verification
//! event is sticky and derivation never demotes — callers merge the derived
//! level with the prior one via `EvidenceLevel::merged`.

use landed_core::models::{EvidenceLevel, InferredInputs, VerificationStatus};

/// Derive the evidence level from the inferred inputs and the external
/// verification state.
///
/// Market data alone does not guarantee a verified signal: what counts is
/// whether at least one resolved input is backed by evidence above the
/// category-default tier.
pub fn derive_level(
    inputs: &InferredInputs,
    verification: VerificationStatus,
) -> EvidenceLevel {
    if verification == VerificationStatus::Verified {
        return EvidenceLevel::Verified;
    }
    if inputs.verified_signal_count() > 0 {
        EvidenceLevel::Evidence
    } else {
        EvidenceLevel::Baseline
    }
}
