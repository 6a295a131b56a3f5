pub mod health;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::analysis::handlers as analysis;
use crate::detail::handlers as detail;
use crate::roster::handlers as roster;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Roster
        .route("/api/v1/prospects", get(roster::handle_list_prospects))
        .route("/api/v1/prospects/:id", get(roster::handle_get_prospect))
        .route(
            "/api/v1/prospects/:id/interest",
            post(roster::handle_toggle_interest),
        )
        // Fit analysis
        .route(
            "/api/v1/prospects/:id/fit-analysis",
            post(analysis::handle_trigger_fit_analysis),
        )
        // Detail views and narratives
        .route(
            "/api/v1/prospects/:id/scouting-report",
            get(detail::handle_scouting_report),
        )
        .route("/api/v1/prospects/:id/detail", post(detail::handle_open_detail))
        .route(
            "/api/v1/details/:view_id",
            get(detail::handle_get_detail).delete(detail::handle_close_detail),
        )
        // Dashboard session
        .route("/api/v1/dashboard", get(roster::handle_get_dashboard))
        .route(
            "/api/v1/dashboard/filters",
            put(roster::handle_update_filters),
        )
        .route(
            "/api/v1/dashboard/filters/reset",
            post(roster::handle_reset_filters),
        )
        .route("/api/v1/dashboard/sort", post(roster::handle_sort_click))
        .route(
            "/api/v1/dashboard/options",
            get(roster::handle_filter_options),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use axum::body::{to_bytes, Body};
    use axum::http::{Method, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::narrative::tests::CannedNarrator;
    use crate::roster::seed::seed_prospects;
    use crate::roster::store::ProspectStore;

    const CANNED: &str = "High Impact fit with late-inning upside.";

    fn app() -> Router {
        let config = Config {
            fit_analysis_delay: Duration::from_secs(5),
            random_seed: Some(11),
            ..Config::default()
        };
        let store = ProspectStore::seed(seed_prospects().unwrap()).unwrap();
        build_router(AppState::new(store, Arc::new(CannedNarrator(CANNED)), &config))
    }

    async fn send(
        app: &Router,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    fn ids(rows: &Value) -> Vec<String> {
        rows.as_array()
            .unwrap()
            .iter()
            .map(|row| row["id"].as_str().unwrap().to_string())
            .collect()
    }

    #[tokio::test]
    async fn test_health() {
        let app = app();
        let (status, body) = send(&app, Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "scout-api");
    }

    #[tokio::test]
    async fn test_default_listing_sorted_by_clutch_desc() {
        let app = app();
        let (status, body) = send(&app, Method::GET, "/api/v1/prospects", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 18);
        let clutch: Vec<i64> = body["rows"]
            .as_array()
            .unwrap()
            .iter()
            .map(|row| row["clutch_factor"].as_i64().unwrap())
            .collect();
        assert_eq!(clutch.len(), 18);
        assert!(clutch.windows(2).all(|w| w[0] >= w[1]));
        assert_eq!(body["rows"][0]["id"], "p-006");
    }

    #[tokio::test]
    async fn test_listing_query_and_filters() {
        let app = app();
        let (_, body) = send(&app, Method::GET, "/api/v1/prospects?q=SMITH", None).await;
        assert_eq!(ids(&body["rows"]), vec!["p-018"]);

        let (_, body) = send(
            &app,
            Method::GET,
            "/api/v1/prospects?position=Pitcher&level=JUCO",
            None,
        )
        .await;
        assert_eq!(ids(&body["rows"]), vec!["p-017"]);

        let (status, body) =
            send(&app, Method::GET, "/api/v1/prospects?position=Rover", None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["rows"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_listing_rejects_unknown_sort() {
        let app = app();
        let (status, body) = send(&app, Method::GET, "/api/v1/prospects?sort=speed", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_unknown_prospect_is_404() {
        let app = app();
        let (status, body) = send(&app, Method::GET, "/api/v1/prospects/p-999", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");

        let (status, _) = send(&app, Method::POST, "/api/v1/prospects/p-999/interest", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_interest_toggle_drives_interested_view() {
        let app = app();
        let (status, body) =
            send(&app, Method::POST, "/api/v1/prospects/p-003/interest", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["is_interested"], true);

        let (_, body) = send(&app, Method::GET, "/api/v1/prospects?view=interested", None).await;
        assert_eq!(ids(&body["rows"]), vec!["p-003"]);

        let (_, body) = send(&app, Method::POST, "/api/v1/prospects/p-003/interest", None).await;
        assert_eq!(body["is_interested"], false);
        let (_, body) = send(&app, Method::GET, "/api/v1/prospects?view=interested", None).await;
        assert!(body["rows"].as_array().unwrap().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_fit_analysis_lifecycle() {
        let app = app();
        let uri = "/api/v1/prospects/p-001/fit-analysis";

        let (status, body) = send(&app, Method::POST, uri, None).await;
        assert_eq!(status, StatusCode::ACCEPTED);
        assert_eq!(body["outcome"], "scheduled");
        assert_eq!(body["analysis"]["state"], "pending");

        let (status, body) = send(&app, Method::POST, uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["outcome"], "already_pending");

        tokio::time::sleep(Duration::from_secs(6)).await;

        let (_, body) = send(&app, Method::GET, "/api/v1/prospects/p-001", None).await;
        assert_eq!(body["analysis"]["state"], "scored");
        let score = body["fit_score"].as_u64().unwrap();
        assert!((10..=90).contains(&score));
        assert!(body["fit_band"].is_string());

        let (status, body) = send(&app, Method::POST, uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["outcome"], "already_scored");
        assert_eq!(body["fit_score"].as_u64(), Some(score));
    }

    #[tokio::test]
    async fn test_detail_view_lifecycle() {
        let app = app();
        let (status, body) = send(&app, Method::POST, "/api/v1/prospects/p-002/detail", None).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["detail"]["alignment"]["state"], "locked");
        assert_eq!(body["detail"]["leaderboards"].as_array().unwrap().len(), 3);
        let view_id = body["view_id"].as_str().unwrap().to_string();
        let uri = format!("/api/v1/details/{view_id}");

        let mut narrative = Value::Null;
        for _ in 0..50 {
            let (_, body) = send(&app, Method::GET, &uri, None).await;
            narrative = body["ai_fit_analysis"].clone();
            if narrative["state"] == "ready" {
                break;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        assert_eq!(narrative["state"], "ready");
        assert_eq!(narrative["text"], CANNED);

        let (status, _) = send(&app, Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        let (status, _) = send(&app, Method::GET, &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let (status, _) = send(&app, Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_opening_a_detail_view_replaces_the_previous_one() {
        let app = app();
        let mut view_ids = Vec::new();
        for _ in 0..50 {
            let (status, body) =
                send(&app, Method::POST, "/api/v1/prospects/p-001/detail", None).await;
            assert_eq!(status, StatusCode::CREATED);
            view_ids.push(body["view_id"].as_str().unwrap().to_string());
        }

        let first = format!("/api/v1/details/{}", view_ids[0]);
        let (status, _) = send(&app, Method::GET, &first, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let last = format!("/api/v1/details/{}", view_ids[49]);
        let (status, body) = send(&app, Method::GET, &last, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["prospect_id"], "p-001");
    }

    #[tokio::test]
    async fn test_scouting_report() {
        let app = app();
        let (status, body) = send(
            &app,
            Method::GET,
            "/api/v1/prospects/p-006/scouting-report",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["prospect_id"], "p-006");
        assert_eq!(body["report"], CANNED);
    }

    #[tokio::test]
    async fn test_dashboard_session() {
        let app = app();
        let (status, body) = send(&app, Method::GET, "/api/v1/dashboard", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 18);
        assert_eq!(body["state"]["criteria"]["sort"]["field"], "clutch_factor");
        assert_eq!(body["state"]["criteria"]["position"], "All");

        let (status, body) = send(
            &app,
            Method::PUT,
            "/api/v1/dashboard/filters",
            Some(json!({"position": "Catcher", "graduation_year": "2025"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(ids(&body["rows"]), vec!["p-018"]);

        let (_, body) = send(
            &app,
            Method::POST,
            "/api/v1/dashboard/sort",
            Some(json!({"field": "name"})),
        )
        .await;
        assert_eq!(body["state"]["criteria"]["sort"]["direction"], "asc");

        let (_, body) = send(&app, Method::POST, "/api/v1/dashboard/filters/reset", None).await;
        assert_eq!(body["rows"].as_array().unwrap().len(), 18);
        assert_eq!(body["rows"][0]["id"], "p-001");
        assert_eq!(body["state"]["criteria"]["sort"]["field"], "name");

        let (_, body) = send(&app, Method::GET, "/api/v1/dashboard/options", None).await;
        assert_eq!(body["levels"][0], "All");
        assert_eq!(body["positions"].as_array().unwrap().len(), 8);
    }
}
