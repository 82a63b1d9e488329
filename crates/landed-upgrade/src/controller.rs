//! UpgradeController — the one I/O-performing operation in the engine.
//!
//! Order of operations is load-bearing: the cooldown gate is checked (and the
//! attempt recorded) atomically before the ledger is charged or any external
//! call is made. A rate-limited attempt therefore costs nothing and touches
//! nothing external.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, instrument, warn};

use landed_core::config::EngineConfig;
use landed_core::errors::UpgradeError;
use landed_core::models::{
    AttemptResult, EvidenceLevel, EvidenceQuery, ImageAnalysisResult, MarketEstimate, Report,
    UpgradeFinding, UpgradeOutcome, UserInputs,
};
use landed_core::traits::{CreditLedger, MarketEvidenceSource, UpgradeStateStore};
use landed_report::{AssembleContext, ReportAssembler};

use crate::cooldown;
use crate::merge;

/// The stored report plus the source inputs it was derived from.
/// Re-derivation needs the originals; the report alone is not enough.
pub struct UpgradeContext<'a> {
    pub report: &'a Report,
    pub analysis: Option<&'a ImageAnalysisResult>,
    pub market: Option<&'a MarketEstimate>,
    pub user_inputs: &'a UserInputs,
}

/// Attaches additional external evidence to reports, rate-limited per report.
pub struct UpgradeController {
    source: Box<dyn MarketEvidenceSource>,
    ledger: Box<dyn CreditLedger>,
    store: Arc<dyn UpgradeStateStore>,
    assembler: ReportAssembler,
    config: EngineConfig,
}

impl UpgradeController {
    pub fn new(
        config: EngineConfig,
        source: Box<dyn MarketEvidenceSource>,
        ledger: Box<dyn CreditLedger>,
        store: Arc<dyn UpgradeStateStore>,
    ) -> Self {
        let assembler = ReportAssembler::new(&config);
        Self {
            source,
            ledger,
            store,
            assembler,
            config,
        }
    }

    /// Attempt to attach new evidence to a report.
    ///
    /// Outcomes: a re-derived report (`NewEvidence`), the unchanged report
    /// (`NoNewEvidence` — a legitimate result, not a failure), or an error:
    /// `RateLimited` (cooldown active, nothing external happened),
    /// `CreditRejected`, or `Lookup` (transient, retryable after the short
    /// backoff — never recorded as "not found").
    #[instrument(skip_all, fields(report_id = %ctx.report.id, version = ctx.report.version))]
    pub fn upgrade(
        &self,
        ctx: &UpgradeContext<'_>,
        now: DateTime<Utc>,
    ) -> Result<UpgradeOutcome, UpgradeError> {
        let report_id = ctx.report.id.as_str();
        let level = ctx.report.baseline.evidence_level;

        // Verified is terminal for this engine; nothing left to attach.
        if level == EvidenceLevel::Verified {
            debug!("report already verified, skipping lookup");
            return Ok(UpgradeOutcome {
                report: ctx.report.clone(),
                finding: UpgradeFinding::NoNewEvidence,
            });
        }

        let last_result = self.store.get(report_id).and_then(|s| s.last_result);
        let window = cooldown::window_secs(level, last_result, &self.config.upgrade);
        self.store.begin_attempt(report_id, now, window)?;

        if let Err(e) = self
            .ledger
            .debit(report_id, self.config.upgrade.lookup_credit_cost)
        {
            warn!(error = %e, "credit debit rejected");
            self.store.complete_attempt(
                report_id,
                AttemptResult::Failed,
                Some("credit_rejected".to_string()),
                now,
            );
            return Err(UpgradeError::CreditRejected(e));
        }

        let query = self.build_query(ctx);
        match self.source.lookup(&query) {
            Err(e) => {
                warn!(error = %e, code = e.code(), "evidence lookup failed");
                self.store.complete_attempt(
                    report_id,
                    AttemptResult::Failed,
                    Some(e.code().to_string()),
                    now,
                );
                Err(UpgradeError::Lookup(e))
            }
            Ok(None) => {
                debug!("lookup completed with no new evidence");
                self.store
                    .complete_attempt(report_id, AttemptResult::NotFound, None, now);
                Ok(UpgradeOutcome {
                    report: ctx.report.clone(),
                    finding: UpgradeFinding::NoNewEvidence,
                })
            }
            Ok(Some(found)) => {
                let merged = merge::merge(ctx.market, &found);
                let report = self.assembler.assemble(&AssembleContext {
                    analysis: ctx.analysis,
                    market: Some(&merged),
                    user_inputs: ctx.user_inputs,
                    verification: ctx.report.signals.verification,
                    prior: Some(ctx.report),
                    now,
                });
                self.store
                    .complete_attempt(report_id, AttemptResult::Found, None, now);
                debug!(
                    new_version = report.version,
                    evidence_level = ?report.baseline.evidence_level,
                    "evidence attached"
                );
                Ok(UpgradeOutcome {
                    report,
                    finding: UpgradeFinding::NewEvidence,
                })
            }
        }
    }

    fn build_query(&self, ctx: &UpgradeContext<'_>) -> EvidenceQuery {
        let hs_code_hint = ctx
            .market
            .and_then(|m| m.hs_candidates.first().map(|c| c.code.clone()))
            .or_else(|| ctx.analysis.and_then(|a| a.hs_code_guess.clone()));
        EvidenceQuery {
            product_name: ctx.report.product_name.clone(),
            category: ctx.report.category.clone(),
            keywords: ctx
                .analysis
                .map(|a| a.keywords.clone())
                .unwrap_or_default(),
            hs_code_hint,
        }
    }
}
