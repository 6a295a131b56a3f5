use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::de::value::{Error as ValueError, StrDeserializer};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::ProspectId;
use crate::roster::dashboard::{DashboardState, FilterUpdate};
use crate::roster::pipeline::{
    project, CategoryFilter, FilterOptions, ProjectionCriteria, SortDirection, SortField,
    SortState, ViewMode,
};
use crate::roster::rows::{to_rows, ProspectRow};
use crate::state::AppState;

/// Query string for the stateless listing. Everything is optional.
#[derive(Debug, Default, Deserialize)]
pub struct ProjectionQuery {
    pub view: Option<String>,
    pub q: Option<String>,
    pub position: Option<String>,
    pub level: Option<String>,
    pub grad_year: Option<String>,
    pub sort: Option<String>,
    pub dir: Option<String>,
}

impl ProjectionQuery {
    pub fn into_criteria(self) -> Result<ProjectionCriteria, AppError> {
        let mut criteria = ProjectionCriteria::default();
        if let Some(view) = self.view {
            criteria.view = parse_token::<ViewMode>("view", &view)?;
        }
        criteria.query = self.q.unwrap_or_default();
        criteria.position = self.position.map(CategoryFilter::from).unwrap_or_default();
        criteria.level = self.level.map(CategoryFilter::from).unwrap_or_default();
        criteria.graduation_year = self.grad_year.map(CategoryFilter::from).unwrap_or_default();

        let sort_field = self
            .sort
            .map(|raw| parse_token::<SortField>("sort", &raw))
            .transpose()?;
        let direction = self
            .dir
            .map(|raw| parse_token::<SortDirection>("dir", &raw))
            .transpose()?;
        criteria.sort = match (sort_field, direction) {
            (Some(field), Some(direction)) => SortState { field, direction },
            (Some(field), None) => SortState {
                field,
                direction: field.default_direction(),
            },
            (None, Some(direction)) => SortState {
                direction,
                ..SortState::default()
            },
            (None, None) => SortState::default(),
        };
        Ok(criteria)
    }
}

fn parse_token<T: DeserializeOwned>(name: &str, raw: &str) -> Result<T, AppError> {
    T::deserialize(StrDeserializer::<ValueError>::new(raw))
        .map_err(|_| AppError::Validation(format!("Unsupported value '{raw}' for '{name}'")))
}

#[derive(Debug, Serialize)]
pub struct ProjectionResponse {
    pub criteria: ProjectionCriteria,
    pub rows: Vec<ProspectRow>,
    /// Size of the whole roster, before filtering.
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub state: DashboardState,
    pub rows: Vec<ProspectRow>,
    pub total: usize,
}

#[derive(Debug, Deserialize)]
pub struct SortClick {
    pub field: SortField,
}

/// GET /api/v1/prospects
pub async fn handle_list_prospects(
    State(state): State<AppState>,
    Query(params): Query<ProjectionQuery>,
) -> Result<Json<ProjectionResponse>, AppError> {
    let criteria = params.into_criteria()?;
    let rows = to_rows(project(&state.store.snapshot(), &criteria), &state.scheduler);
    Ok(Json(ProjectionResponse {
        criteria,
        rows,
        total: state.store.len(),
    }))
}

/// GET /api/v1/prospects/:id
pub async fn handle_get_prospect(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ProspectRow>, AppError> {
    let id = ProspectId::new(id);
    let prospect = state
        .store
        .get(&id)
        .ok_or_else(|| AppError::NotFound(format!("Prospect '{id}' not found")))?;
    let status = state.scheduler.status_of(&id, prospect.fit_score);
    Ok(Json(ProspectRow::new(prospect, status)))
}

/// POST /api/v1/prospects/:id/interest
pub async fn handle_toggle_interest(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ProspectRow>, AppError> {
    let id = ProspectId::new(id);
    let prospect = state.store.toggle_interest(&id)?;
    let status = state.scheduler.status_of(&id, prospect.fit_score);
    Ok(Json(ProspectRow::new(prospect, status)))
}

/// GET /api/v1/dashboard
pub async fn handle_get_dashboard(
    State(state): State<AppState>,
) -> Result<Json<DashboardResponse>, AppError> {
    let session = state.dashboard.lock().clone();
    Ok(Json(dashboard_response(&state, session)))
}

/// PUT /api/v1/dashboard/filters
pub async fn handle_update_filters(
    State(state): State<AppState>,
    Json(update): Json<FilterUpdate>,
) -> Result<Json<DashboardResponse>, AppError> {
    let session = {
        let mut dashboard = state.dashboard.lock();
        dashboard.apply(update);
        dashboard.clone()
    };
    Ok(Json(dashboard_response(&state, session)))
}

/// POST /api/v1/dashboard/filters/reset
pub async fn handle_reset_filters(
    State(state): State<AppState>,
) -> Result<Json<DashboardResponse>, AppError> {
    let session = {
        let mut dashboard = state.dashboard.lock();
        dashboard.reset_filters();
        dashboard.clone()
    };
    Ok(Json(dashboard_response(&state, session)))
}

/// POST /api/v1/dashboard/sort
pub async fn handle_sort_click(
    State(state): State<AppState>,
    Json(click): Json<SortClick>,
) -> Result<Json<DashboardResponse>, AppError> {
    let session = {
        let mut dashboard = state.dashboard.lock();
        dashboard.click_sort(click.field);
        dashboard.clone()
    };
    Ok(Json(dashboard_response(&state, session)))
}

/// GET /api/v1/dashboard/options
pub async fn handle_filter_options() -> Json<FilterOptions> {
    Json(FilterOptions::catalogue())
}

fn dashboard_response(state: &AppState, session: DashboardState) -> DashboardResponse {
    let records = state.store.snapshot();
    let rows = to_rows(session.visible(&records), &state.scheduler);
    DashboardResponse {
        state: session,
        rows,
        total: records.len(),
    }
}
