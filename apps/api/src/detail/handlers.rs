use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use tracing::debug;
use uuid::Uuid;

use crate::detail::composer::compose;
use crate::detail::views::OpenDetailView;
use crate::errors::AppError;
use crate::models::ProspectId;
use crate::narrative::NarrativeKind;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ScoutingReportResponse {
    pub prospect_id: ProspectId,
    pub report: String,
}

/// POST /api/v1/prospects/:id/detail
/// Composes the view now; the AI fit narrative is filled in when the call returns.
pub async fn handle_open_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<(StatusCode, Json<OpenDetailView>), AppError> {
    let id = ProspectId::new(id);
    let prospect = state
        .store
        .get(&id)
        .ok_or_else(|| AppError::NotFound(format!("Prospect '{id}' not found")))?;

    let view = state.details.open(compose(&prospect, &state.rng));
    debug!(
        prospect = %id,
        alignment_locked = view.detail.alignment.is_locked(),
        "detail composed"
    );

    let narrator = state.narrator.clone();
    let details = state.details.clone();
    let view_id = view.view_id;
    tokio::spawn(async move {
        let text = narrator.describe(&prospect).await;
        if !details.deliver(&view_id, text) {
            debug!(%view_id, "fit narrative discarded");
        }
    });

    Ok((StatusCode::CREATED, Json(view)))
}

/// GET /api/v1/details/:view_id
pub async fn handle_get_detail(
    State(state): State<AppState>,
    Path(view_id): Path<Uuid>,
) -> Result<Json<OpenDetailView>, AppError> {
    state
        .details
        .get(&view_id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Detail view {view_id} not found")))
}

/// DELETE /api/v1/details/:view_id
pub async fn handle_close_detail(
    State(state): State<AppState>,
    Path(view_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if state.details.close(&view_id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("Detail view {view_id} not found")))
    }
}

/// GET /api/v1/prospects/:id/scouting-report
pub async fn handle_scouting_report(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ScoutingReportResponse>, AppError> {
    let id = ProspectId::new(id);
    let prospect = state
        .store
        .get(&id)
        .ok_or_else(|| AppError::NotFound(format!("Prospect '{id}' not found")))?;

    let report = state
        .narrator
        .narrate(NarrativeKind::ScoutingReport, &prospect)
        .await;

    Ok(Json(ScoutingReportResponse {
        prospect_id: id,
        report,
    }))
}
