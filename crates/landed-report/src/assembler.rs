//! ReportAssembler — runs the inference → cost → risk pipeline and composes
//! the versioned `Report` aggregate.

use chrono::{DateTime, Utc};
use tracing::{debug, instrument};

use landed_core::config::EngineConfig;
use landed_core::constants::{GENERAL_MERCHANDISE, REPORT_SCHEMA_VERSION};
use landed_core::models::{
    BaselineAssessment, ConfidenceTier, ImageAnalysisResult, MarketEstimate, Report,
    ReportSignals, UserInputs, VerificationStatus,
};
use landed_cost::PriceBounds;
use landed_inference::InferenceEngine;
use landed_risk::{evidence, RiskEngine};

use crate::actions;

/// Everything one derivation needs. Groups the optional upstream inputs so
/// the assembler itself stays a pure function of this context.
pub struct AssembleContext<'a> {
    /// Image-analysis output; `None` when the upstream producer failed.
    pub analysis: Option<&'a ImageAnalysisResult>,
    /// Market evidence; absence is a valid, first-class case.
    pub market: Option<&'a MarketEstimate>,
    pub user_inputs: &'a UserInputs,
    /// External verification state for this product.
    pub verification: VerificationStatus,
    /// The previous report version when re-deriving after new evidence.
    pub prior: Option<&'a Report>,
    pub now: DateTime<Utc>,
}

/// Composes inference, cost, and risk outputs into a `Report`.
pub struct ReportAssembler {
    inference: InferenceEngine,
    risk: RiskEngine,
}

impl ReportAssembler {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            inference: InferenceEngine::new(config.inference.clone()),
            risk: RiskEngine::new(),
        }
    }

    /// Derive one report version.
    ///
    /// Re-derivation (with `prior` set) reuses the report identity, bumps the
    /// version, and merges the evidence level monotonically — a derivation
    /// can only ever add evidence, never remove it.
    #[instrument(skip_all, fields(
        prior_version = ctx.prior.map(|p| p.version),
        has_market = ctx.market.is_some(),
    ))]
    pub fn assemble(&self, ctx: &AssembleContext<'_>) -> Report {
        let inputs = self
            .inference
            .infer(ctx.analysis, ctx.market, ctx.user_inputs);
        let cost = landed_cost::evaluate(PriceBounds::from_market(ctx.market), &inputs);
        let risk = self.risk.score(ctx.market);
        let flags = self.risk.flags(ctx.market, &cost, ctx.analysis.is_some());

        let derived_level = evidence::derive_level(&inputs, ctx.verification);
        let evidence_level = match ctx.prior {
            Some(prior) => prior.baseline.evidence_level.merged(derived_level),
            None => derived_level,
        };

        let signals = ReportSignals {
            has_import_evidence: ctx
                .market
                .map(|m| m.has_import_evidence())
                .unwrap_or(false),
            has_supplier_candidates: ctx
                .market
                .map(|m| !m.suppliers.is_empty())
                .unwrap_or(false),
            verification: ctx.verification,
        };

        let next_actions = actions::derive(
            ctx.market.map(|m| m.hs_candidates.len()).unwrap_or(0),
            ctx.market.map(|m| m.similar_record_count).unwrap_or(0),
            cost.is_estimated(),
            signals.has_supplier_candidates,
        );

        let (id, version, created_at) = match ctx.prior {
            Some(prior) => (prior.id.clone(), prior.version + 1, prior.created_at),
            None => (uuid::Uuid::new_v4().to_string(), 1, ctx.now),
        };

        let report = Report {
            id,
            schema_version: REPORT_SCHEMA_VERSION,
            version,
            product_name: ctx
                .analysis
                .map(|a| a.product_name.clone())
                .unwrap_or_else(|| "Unknown product".to_string()),
            category: ctx
                .analysis
                .map(|a| a.category.clone())
                .unwrap_or_else(|| GENERAL_MERCHANDISE.to_string()),
            confidence: self.confidence_tier(ctx),
            signals,
            baseline: BaselineAssessment {
                cost,
                risk,
                flags,
                inputs,
                evidence_level,
            },
            next_actions,
            created_at,
            derived_at: ctx.now,
        };
        debug!(
            report_id = %report.id,
            version = report.version,
            evidence_level = ?report.baseline.evidence_level,
            "report assembled"
        );
        report
    }

    /// Analysis unavailable pins the tier to Low; otherwise the analysis
    /// confidence is banded and lifted to the market tier when that is higher.
    fn confidence_tier(&self, ctx: &AssembleContext<'_>) -> ConfidenceTier {
        let Some(analysis) = ctx.analysis else {
            return ConfidenceTier::Low;
        };
        let from_analysis = ConfidenceTier::from_confidence(analysis.confidence);
        match ctx.market {
            Some(market) => from_analysis.max(market.confidence_tier),
            None => from_analysis,
        }
    }
}
