use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use tower::ServiceExt;

use super::common::*;
use crate::scorecards::repository::ScorecardRepository;
use crate::scorecards::router::scorecard_router;

fn json_request(method: &str, uri: &str, payload: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .expect("request builds")
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .expect("request builds")
}

#[tokio::test]
async fn submit_endpoint_returns_the_scored_view() {
    let (service, _repository, _alerts) = build_service();
    let app = scorecard_router(Arc::new(service));
    let payload =
        serde_json::to_value(strong_submission("acme", period(2026, 7))).expect("serializes");

    let response = app
        .oneshot(json_request("POST", "/api/v1/scorecards", payload))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = read_json_body(response).await;
    assert_eq!(body["total_score"], 100.0);
    assert_eq!(body["rag_status"], "green");
    assert_eq!(body["business_id"], "acme");
    assert_eq!(body["period"], "2026-07");
    assert_eq!(body["components"].as_array().map(Vec::len), Some(11));
}

#[tokio::test]
async fn submit_endpoint_rejects_a_blank_business() {
    let (service, _repository, _alerts) = build_service();
    let app = scorecard_router(Arc::new(service));
    let mut payload =
        serde_json::to_value(strong_submission("acme", period(2026, 7))).expect("serializes");
    payload["business_id"] = serde_json::json!("");

    let response = app
        .oneshot(json_request("POST", "/api/v1/scorecards", payload))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn duplicate_submission_conflicts_over_http() {
    let (service, _repository, _alerts) = build_service();
    let app = scorecard_router(Arc::new(service));
    let payload =
        serde_json::to_value(strong_submission("acme", period(2026, 7))).expect("serializes");

    let first = app
        .clone()
        .oneshot(json_request("POST", "/api/v1/scorecards", payload.clone()))
        .await
        .expect("router responds");
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = app
        .oneshot(json_request("POST", "/api/v1/scorecards", payload))
        .await
        .expect("router responds");
    assert_eq!(second.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn preview_endpoint_scores_partial_drafts() {
    let (service, repository, _alerts) = build_service();
    let app = scorecard_router(Arc::new(service));
    // A half-filled form: one financial figure, one unknown choice string.
    let payload = serde_json::json!({
        "financial": { "revenue": 12.0 },
        "qualitative": { "leadership": "aligned", "marketing": "viral" }
    });

    let response = app
        .oneshot(json_request("POST", "/api/v1/scorecards/preview", payload))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    // Revenue 10 + three defaulted financials at 6 + productivity 6 +
    // leadership 10; the unrecognized marketing choice scores nothing.
    assert_eq!(body["summary"]["total_score"], 44.0);
    assert_eq!(body["summary"]["rag_status"], "red");
    assert!(repository
        .all()
        .expect("repository reachable")
        .is_empty());
}

#[tokio::test]
async fn fetch_endpoint_returns_404_for_unknown_ids() {
    let (service, _repository, _alerts) = build_service();
    let app = scorecard_router(Arc::new(service));

    let response = app
        .oneshot(get_request("/api/v1/scorecards/sc-404404"))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn fetch_endpoint_round_trips_a_submission() {
    let (service, _repository, _alerts) = build_service();
    let record = service
        .submit(amber_submission("acme", period(2026, 7)))
        .expect("submission stores");
    let app = scorecard_router(Arc::new(service));

    let response = app
        .oneshot(get_request(&format!(
            "/api/v1/scorecards/{}",
            record.scorecard_id.0
        )))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["scorecard_id"], record.scorecard_id.0);
    assert_eq!(body["total_score"], 65.0);
    assert_eq!(body["rag_status"], "amber");
}

#[tokio::test]
async fn history_endpoint_lists_newest_first() {
    let (service, _repository, _alerts) = build_service();
    service
        .submit(neutral_submission("acme", period(2026, 6)))
        .expect("stores");
    service
        .submit(strong_submission("acme", period(2026, 7)))
        .expect("stores");
    let app = scorecard_router(Arc::new(service));

    let response = app
        .oneshot(get_request("/api/v1/businesses/acme/scorecards"))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    let cards = body.as_array().expect("array body");
    assert_eq!(cards.len(), 2);
    assert_eq!(cards[0]["period"], "2026-07");
    assert_eq!(cards[1]["period"], "2026-06");
    assert_eq!(cards[0]["trend"]["direction"], "up");
}

#[tokio::test]
async fn portfolio_endpoint_summarizes_the_book() {
    let (service, _repository, _alerts) = build_service();
    service
        .submit(strong_submission("acme", period(2026, 7)))
        .expect("stores");
    service
        .submit(neutral_submission("fading", period(2026, 7)))
        .expect("stores");
    let app = scorecard_router(Arc::new(service));

    let response = app
        .oneshot(get_request("/api/v1/portfolio/summary"))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["businesses"], 2);
    assert_eq!(body["rag_distribution"]["green"], 1);
    assert_eq!(body["rag_distribution"]["red"], 1);
    assert_eq!(body["at_risk"][0]["business_id"], "fading");
}
