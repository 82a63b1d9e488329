//! In-memory upgrade-state store.
//!
//! The dashmap entry guard is held across the whole check-and-set in
//! `begin_attempt`, which makes the cooldown gate atomic per report key:
//! of N concurrent callers inside the window, exactly one records the
//! attempt and proceeds. Different report keys never contend.

use chrono::{DateTime, Utc};
use dashmap::DashMap;

use landed_core::errors::UpgradeError;
use landed_core::models::{AttemptResult, EvidenceUpgradeState};
use landed_core::traits::UpgradeStateStore;

/// Process-local `UpgradeStateStore` keyed by report id.
#[derive(Debug, Default)]
pub struct InMemoryUpgradeStore {
    states: DashMap<String, EvidenceUpgradeState>,
}

impl InMemoryUpgradeStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UpgradeStateStore for InMemoryUpgradeStore {
    fn get(&self, report_id: &str) -> Option<EvidenceUpgradeState> {
        self.states.get(report_id).map(|entry| entry.value().clone())
    }

    fn begin_attempt(
        &self,
        report_id: &str,
        now: DateTime<Utc>,
        window_secs: u64,
    ) -> Result<(), UpgradeError> {
        let mut entry = self.states.entry(report_id.to_string()).or_default();
        if let Some(last) = entry.last_attempt_at {
            let elapsed = (now - last).num_seconds().max(0);
            if (elapsed as u64) < window_secs {
                let retry_after_secs = (window_secs - elapsed as u64).max(1);
                return Err(UpgradeError::RateLimited { retry_after_secs });
            }
        }
        entry.last_attempt_at = Some(now);
        Ok(())
    }

    fn complete_attempt(
        &self,
        report_id: &str,
        result: AttemptResult,
        error_code: Option<String>,
        now: DateTime<Utc>,
    ) {
        let mut entry = self.states.entry(report_id.to_string()).or_default();
        entry.last_result = Some(result);
        entry.last_error_code = error_code;
        if result == AttemptResult::Found {
            entry.last_success_at = Some(now);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(secs: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(1_750_000_000 + secs, 0).unwrap()
    }

    #[test]
    fn first_attempt_always_passes() {
        let store = InMemoryUpgradeStore::new();
        assert!(store.begin_attempt("r1", at(0), 300).is_ok());
    }

    #[test]
    fn second_attempt_inside_window_is_rate_limited() {
        let store = InMemoryUpgradeStore::new();
        store.begin_attempt("r1", at(0), 300).unwrap();
        let err = store.begin_attempt("r1", at(10), 300).unwrap_err();
        match err {
            UpgradeError::RateLimited { retry_after_secs } => {
                assert_eq!(retry_after_secs, 290);
            }
            other => panic!("expected RateLimited, got {other:?}"),
        }
    }

    #[test]
    fn attempt_after_window_passes() {
        let store = InMemoryUpgradeStore::new();
        store.begin_attempt("r1", at(0), 300).unwrap();
        assert!(store.begin_attempt("r1", at(301), 300).is_ok());
    }

    #[test]
    fn different_reports_do_not_contend() {
        let store = InMemoryUpgradeStore::new();
        store.begin_attempt("r1", at(0), 300).unwrap();
        assert!(store.begin_attempt("r2", at(1), 300).is_ok());
    }

    #[test]
    fn complete_records_result_and_success_time() {
        let store = InMemoryUpgradeStore::new();
        store.begin_attempt("r1", at(0), 300).unwrap();
        store.complete_attempt("r1", AttemptResult::Found, None, at(2));

        let state = store.get("r1").unwrap();
        assert_eq!(state.last_result, Some(AttemptResult::Found));
        assert_eq!(state.last_success_at, Some(at(2)));
        assert!(state.last_error_code.is_none());
    }
}
