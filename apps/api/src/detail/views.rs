//! Registry of open detail views.
//!
//! The dashboard shows one detail view at a time, so the registry holds a single active
//! slot. Opening a view replaces the previous one. The AI narrative for a view arrives
//! after the view is opened; a response for a view that has since been closed or
//! replaced is dropped here so it can never land on a stale view.

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::Serialize;
use tracing::debug;
use uuid::Uuid;

use crate::detail::composer::DetailView;
use crate::models::ProspectId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum NarrativeState {
    Loading,
    Ready { text: String },
}

#[derive(Debug, Clone, Serialize)]
pub struct OpenDetailView {
    pub view_id: Uuid,
    pub prospect_id: ProspectId,
    pub opened_at: DateTime<Utc>,
    pub detail: DetailView,
    pub ai_fit_analysis: NarrativeState,
}

#[derive(Default)]
pub struct DetailViewRegistry {
    active: Mutex<Option<OpenDetailView>>,
}

impl DetailViewRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a freshly composed view with its narrative still loading, evicting
    /// whichever view was active before.
    pub fn open(&self, detail: DetailView) -> OpenDetailView {
        let view = OpenDetailView {
            view_id: Uuid::new_v4(),
            prospect_id: detail.prospect.id.clone(),
            opened_at: Utc::now(),
            detail,
            ai_fit_analysis: NarrativeState::Loading,
        };
        let evicted = self.active.lock().replace(view.clone());
        debug!(
            view_id = %view.view_id,
            prospect = %view.prospect_id,
            replaced = ?evicted.map(|old| old.view_id),
            "detail view opened"
        );
        view
    }

    pub fn get(&self, view_id: &Uuid) -> Option<OpenDetailView> {
        self.active
            .lock()
            .as_ref()
            .filter(|view| &view.view_id == view_id)
            .cloned()
    }

    /// Stores the narrative if the view is still open. Returns false (and drops the text)
    /// otherwise.
    pub fn deliver(&self, view_id: &Uuid, text: String) -> bool {
        match self.active.lock().as_mut() {
            Some(view) if &view.view_id == view_id => {
                view.ai_fit_analysis = NarrativeState::Ready { text };
                true
            }
            _ => {
                debug!(view_id = %view_id, "narrative arrived after view closed; dropped");
                false
            }
        }
    }

    /// Returns false when no such view is open.
    pub fn close(&self, view_id: &Uuid) -> bool {
        let mut active = self.active.lock();
        if active.as_ref().is_some_and(|view| &view.view_id == view_id) {
            *active = None;
            true
        } else {
            false
        }
    }

    pub fn open_count(&self) -> usize {
        usize::from(self.active.lock().is_some())
    }
}
