//! AI Narrative Adapter: descriptive text for a prospect from an external model.
//!
//! The adapter never fails from the caller's point of view: an empty reply or any
//! transport/API error is replaced by a fixed degraded-service sentence.

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use tracing::{debug, warn};

use crate::llm_client::prompts::SCOUT_ANALYST_SYSTEM;
use crate::llm_client::{LlmClient, LlmError};
use crate::models::Prospect;

pub mod prompts;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NarrativeKind {
    FitAnalysis,
    ScoutingReport,
}

impl NarrativeKind {
    pub fn prompt(&self, prospect: &Prospect) -> String {
        match self {
            NarrativeKind::FitAnalysis => prompts::fit_analysis_prompt(prospect),
            NarrativeKind::ScoutingReport => prompts::scouting_report_prompt(prospect),
        }
    }

    /// Text used when the model answers with nothing.
    pub fn empty_fallback(&self) -> &'static str {
        match self {
            NarrativeKind::FitAnalysis => "Fit analysis results are currently unavailable.",
            NarrativeKind::ScoutingReport => "Unable to generate scouting report at this time.",
        }
    }

    /// Text used when the call itself fails.
    pub fn failure_fallback(&self) -> &'static str {
        match self {
            NarrativeKind::FitAnalysis => {
                "The fit analysis engine is experiencing high demand. Please try again shortly."
            }
            NarrativeKind::ScoutingReport => "Scouting report service is currently unavailable.",
        }
    }
}

#[async_trait]
pub trait NarrativeAdapter: Send + Sync {
    async fn narrate(&self, kind: NarrativeKind, prospect: &Prospect) -> String;

    /// The fit-analysis narrative shown on every detail view.
    async fn describe(&self, prospect: &Prospect) -> String {
        self.narrate(NarrativeKind::FitAnalysis, prospect).await
    }
}

pub struct GeminiNarrator {
    client: LlmClient,
}

impl GeminiNarrator {
    pub fn new(client: LlmClient) -> Self {
        Self { client }
    }

    pub fn from_credentials(
        api_key: String,
        base_url: String,
        timeout: Duration,
    ) -> Result<Self, LlmError> {
        Ok(Self::new(LlmClient::new(api_key, base_url, timeout)?))
    }
}

#[async_trait]
impl NarrativeAdapter for GeminiNarrator {
    async fn narrate(&self, kind: NarrativeKind, prospect: &Prospect) -> String {
        let prompt = kind.prompt(prospect);
        match self.client.generate(&prompt, SCOUT_ANALYST_SYSTEM).await {
            Ok(text) => {
                debug!(prospect = %prospect.id, ?kind, "narrative generated");
                text
            }
            Err(LlmError::EmptyContent) => {
                warn!(prospect = %prospect.id, ?kind, "model returned no narrative text");
                kind.empty_fallback().to_string()
            }
            Err(e) => {
                warn!(prospect = %prospect.id, ?kind, "narrative call failed: {}", e);
                kind.failure_fallback().to_string()
            }
        }
    }
}

/// Used when no API key is configured.
pub struct UnavailableNarrator;

#[async_trait]
impl NarrativeAdapter for UnavailableNarrator {
    async fn narrate(&self, kind: NarrativeKind, _prospect: &Prospect) -> String {
        kind.failure_fallback().to_string()
    }
}
