use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;

use super::domain::{BusinessId, ScorecardDraft, ScorecardId, ScorecardSubmission};
use super::repository::{RepositoryError, ReviewAlertPublisher, ScorecardRecord, ScorecardRepository};
use super::service::{ScorecardService, ScorecardServiceError};

/// Router builder exposing the scorecard HTTP endpoints.
pub fn scorecard_router<R, A>(service: Arc<ScorecardService<R, A>>) -> Router
where
    R: ScorecardRepository + 'static,
    A: ReviewAlertPublisher + 'static,
{
    Router::new()
        .route("/api/v1/scorecards", post(submit_handler::<R, A>))
        .route(
            "/api/v1/scorecards/preview",
            post(preview_handler::<R, A>),
        )
        .route(
            "/api/v1/scorecards/:scorecard_id",
            get(fetch_handler::<R, A>),
        )
        .route(
            "/api/v1/businesses/:business_id/scorecards",
            get(history_handler::<R, A>),
        )
        .route(
            "/api/v1/portfolio/summary",
            get(portfolio_handler::<R, A>),
        )
        .with_state(service)
}

pub(crate) async fn submit_handler<R, A>(
    State(service): State<Arc<ScorecardService<R, A>>>,
    axum::Json(submission): axum::Json<ScorecardSubmission>,
) -> Response
where
    R: ScorecardRepository + 'static,
    A: ReviewAlertPublisher + 'static,
{
    match service.submit(submission) {
        Ok(record) => (StatusCode::CREATED, axum::Json(record.view())).into_response(),
        Err(ScorecardServiceError::Submission(error)) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(ScorecardServiceError::Repository(RepositoryError::Conflict)) => {
            let payload = json!({ "error": "a scorecard already exists for this period" });
            (StatusCode::CONFLICT, axum::Json(payload)).into_response()
        }
        Err(other) => internal_error(other),
    }
}

pub(crate) async fn preview_handler<R, A>(
    State(service): State<Arc<ScorecardService<R, A>>>,
    axum::Json(draft): axum::Json<ScorecardDraft>,
) -> Response
where
    R: ScorecardRepository + 'static,
    A: ReviewAlertPublisher + 'static,
{
    let preview = service.preview(&draft);
    (StatusCode::OK, axum::Json(preview)).into_response()
}

pub(crate) async fn fetch_handler<R, A>(
    State(service): State<Arc<ScorecardService<R, A>>>,
    Path(scorecard_id): Path<String>,
) -> Response
where
    R: ScorecardRepository + 'static,
    A: ReviewAlertPublisher + 'static,
{
    let id = ScorecardId(scorecard_id);
    match service.get(&id) {
        Ok(record) => (StatusCode::OK, axum::Json(record.view())).into_response(),
        Err(ScorecardServiceError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({ "error": "scorecard not found", "scorecard_id": id.0 });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(other) => internal_error(other),
    }
}

pub(crate) async fn history_handler<R, A>(
    State(service): State<Arc<ScorecardService<R, A>>>,
    Path(business_id): Path<String>,
) -> Response
where
    R: ScorecardRepository + 'static,
    A: ReviewAlertPublisher + 'static,
{
    let business = BusinessId(business_id);
    match service.history(&business) {
        Ok(records) => {
            let views: Vec<_> = records.iter().map(ScorecardRecord::view).collect();
            (StatusCode::OK, axum::Json(views)).into_response()
        }
        Err(other) => internal_error(other),
    }
}

pub(crate) async fn portfolio_handler<R, A>(
    State(service): State<Arc<ScorecardService<R, A>>>,
) -> Response
where
    R: ScorecardRepository + 'static,
    A: ReviewAlertPublisher + 'static,
{
    match service.portfolio() {
        Ok(summary) => (StatusCode::OK, axum::Json(summary)).into_response(),
        Err(other) => internal_error(other),
    }
}

fn internal_error(error: ScorecardServiceError) -> Response {
    let payload = json!({ "error": error.to_string() });
    (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
}
