//! Fit Analysis scheduler: simulated asynchronous scoring, one job per prospect.
//!
//! State per record: `unscored → pending → scored`. The score itself is a placeholder
//! drawn from [10, 90]; there is no model behind it.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use rand::Rng;
use serde::Serialize;
use tracing::{info, warn};

use crate::models::ProspectId;
use crate::random::RandomSource;
use crate::roster::store::{ProspectStore, StoreError};

pub const MIN_PLACEHOLDER_SCORE: u8 = 10;
pub const MAX_PLACEHOLDER_SCORE: u8 = 90;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum AnalysisStatus {
    Unscored,
    Pending,
    Scored { fit_score: u8 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum TriggerOutcome {
    Scheduled,
    AlreadyPending,
    AlreadyScored { fit_score: u8 },
}

#[derive(Clone)]
pub struct FitAnalysisScheduler {
    store: Arc<ProspectStore>,
    rng: Arc<RandomSource>,
    pending: Arc<Mutex<HashSet<ProspectId>>>,
    delay: Duration,
}

impl FitAnalysisScheduler {
    pub fn new(store: Arc<ProspectStore>, rng: Arc<RandomSource>, delay: Duration) -> Self {
        Self {
            store,
            rng,
            pending: Arc::new(Mutex::new(HashSet::new())),
            delay,
        }
    }

    pub fn status(&self, id: &ProspectId) -> Result<AnalysisStatus, StoreError> {
        let record = self
            .store
            .get(id)
            .ok_or_else(|| StoreError::NotFound(id.clone()))?;
        Ok(self.status_of(id, record.fit_score))
    }

    /// Status for a record already in hand (avoids a second store lookup per row).
    pub fn status_of(&self, id: &ProspectId, fit_score: Option<u8>) -> AnalysisStatus {
        match fit_score {
            Some(fit_score) => AnalysisStatus::Scored { fit_score },
            None if self.pending.lock().contains(id) => AnalysisStatus::Pending,
            None => AnalysisStatus::Unscored,
        }
    }

    /// Starts an analysis for `id` unless it is already scored or in flight.
    ///
    /// The completion runs on a spawned task after the configured delay; the caller
    /// never waits on it.
    pub fn trigger(&self, id: &ProspectId) -> Result<TriggerOutcome, StoreError> {
        let record = self
            .store
            .get(id)
            .ok_or_else(|| StoreError::NotFound(id.clone()))?;

        if let Some(fit_score) = record.fit_score {
            return Ok(TriggerOutcome::AlreadyScored { fit_score });
        }

        if !self.pending.lock().insert(id.clone()) {
            return Ok(TriggerOutcome::AlreadyPending);
        }

        info!(prospect = %id, delay_ms = self.delay.as_millis() as u64, "fit analysis scheduled");

        let scheduler = self.clone();
        let id = id.clone();
        tokio::spawn(async move {
            tokio::time::sleep(scheduler.delay).await;
            scheduler.finish(&id);
        });

        Ok(TriggerOutcome::Scheduled)
    }

    fn finish(&self, id: &ProspectId) {
        match complete_analysis(&self.store, &self.rng, id) {
            Ok(score) => info!(prospect = %id, score, "fit analysis complete"),
            Err(e) => warn!(prospect = %id, "fit analysis completion failed: {e}"),
        }
        self.pending.lock().remove(id);
    }
}

/// Completion step: keeps an existing score, otherwise stores a fresh placeholder.
///
/// Safe to run more than once for the same record; later runs return the first score.
pub fn complete_analysis(
    store: &ProspectStore,
    rng: &RandomSource,
    id: &ProspectId,
) -> Result<u8, StoreError> {
    if let Some(existing) = store.get(id).and_then(|p| p.fit_score) {
        return Ok(existing);
    }
    let candidate =
        rng.with(|rng| rng.random_range(MIN_PLACEHOLDER_SCORE..=MAX_PLACEHOLDER_SCORE));
    store.set_fit_score(id, candidate)
}
