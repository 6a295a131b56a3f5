//! Record Store: the authoritative in-memory list of prospects.
//!
//! Records are seeded once and never added or removed afterwards. The only two
//! mutations are `toggle_interest` and `set_fit_score`.

use std::collections::HashSet;

use parking_lot::RwLock;
use thiserror::Error;
use tracing::{debug, info};

use crate::models::{Prospect, ProspectId};

pub const MAX_FIT_SCORE: u8 = 100;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("duplicate prospect id '{0}' in seed data")]
    DuplicateId(ProspectId),

    #[error("prospect '{0}' not found")]
    NotFound(ProspectId),

    #[error("fit score {0} is outside 0-100")]
    ScoreOutOfRange(u8),
}

pub struct ProspectStore {
    records: RwLock<Vec<Prospect>>,
}

impl ProspectStore {
    /// Builds the store from a fixed dataset. Ids must be unique.
    pub fn seed(records: Vec<Prospect>) -> Result<Self, StoreError> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.id.clone()) {
                return Err(StoreError::DuplicateId(record.id.clone()));
            }
            if let Some(score) = record.fit_score {
                if score > MAX_FIT_SCORE {
                    return Err(StoreError::ScoreOutOfRange(score));
                }
            }
        }
        info!("Record store seeded with {} prospects", records.len());
        Ok(Self {
            records: RwLock::new(records),
        })
    }

    /// Clone of every record, in seed order.
    pub fn snapshot(&self) -> Vec<Prospect> {
        self.records.read().clone()
    }

    pub fn get(&self, id: &ProspectId) -> Option<Prospect> {
        self.records.read().iter().find(|p| &p.id == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    /// Flips `is_interested` and returns the updated record. No other field changes.
    pub fn toggle_interest(&self, id: &ProspectId) -> Result<Prospect, StoreError> {
        let mut records = self.records.write();
        let record = records
            .iter_mut()
            .find(|p| &p.id == id)
            .ok_or_else(|| StoreError::NotFound(id.clone()))?;
        record.is_interested = !record.is_interested;
        debug!(prospect = %id, interested = record.is_interested, "interest toggled");
        Ok(record.clone())
    }

    /// Assigns a fit score unless one is already present.
    ///
    /// Returns the score the record holds afterwards: the existing one when the record
    /// was already scored, otherwise `candidate`.
    pub fn set_fit_score(&self, id: &ProspectId, candidate: u8) -> Result<u8, StoreError> {
        if candidate > MAX_FIT_SCORE {
            return Err(StoreError::ScoreOutOfRange(candidate));
        }
        let mut records = self.records.write();
        let record = records
            .iter_mut()
            .find(|p| &p.id == id)
            .ok_or_else(|| StoreError::NotFound(id.clone()))?;
        match record.fit_score {
            Some(existing) => {
                debug!(prospect = %id, existing, "fit score already set; keeping it");
                Ok(existing)
            }
            None => {
                record.fit_score = Some(candidate);
                info!(prospect = %id, score = candidate, "fit score assigned");
                Ok(candidate)
            }
        }
    }
}
