pub mod analysis;
pub mod confidence;
pub mod cost;
pub mod inferred;
pub mod market;
pub mod report;
pub mod risk;
pub mod upgrade;

pub use analysis::ImageAnalysisResult;
pub use confidence::{Confidence, ConfidenceTier};
pub use cost::{CostBasis, CostComponentRanges, CostRange, CostScenario};
pub use inferred::{
    InferredInput, InferredInputs, Percentiles, Provenance, ShippingMode, UserInputs,
};
pub use market::{
    HsCandidate, LeadTimeRange, MarketEstimate, MoqRange, PriceRange, SupplierRecord,
};
pub use report::{
    BaselineAssessment, EvidenceLevel, NextAction, NextActionKind, Report, ReportSignals,
    VerificationStatus,
};
pub use risk::{RiskFlag, RiskScores};
pub use upgrade::{
    AttemptResult, EvidenceQuery, EvidenceUpgradeState, UpgradeFinding, UpgradeOutcome,
};
