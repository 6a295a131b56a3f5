use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;

use crate::analysis::{AnalysisStatus, TriggerOutcome};
use crate::errors::AppError;
use crate::models::ProspectId;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct TriggerResponse {
    pub prospect_id: ProspectId,
    #[serde(flatten)]
    pub outcome: TriggerOutcome,
    pub analysis: AnalysisStatus,
}

/// POST /api/v1/prospects/:id/fit-analysis
/// 202 when a new analysis was scheduled, 200 when the call was a no-op.
pub async fn handle_trigger_fit_analysis(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<(StatusCode, Json<TriggerResponse>), AppError> {
    let id = ProspectId::new(id);
    let outcome = state.scheduler.trigger(&id)?;
    let analysis = state.scheduler.status(&id)?;

    let status = match outcome {
        TriggerOutcome::Scheduled => StatusCode::ACCEPTED,
        TriggerOutcome::AlreadyPending | TriggerOutcome::AlreadyScored { .. } => StatusCode::OK,
    };

    Ok((
        status,
        Json(TriggerResponse {
            prospect_id: id,
            outcome,
            analysis,
        }),
    ))
}
