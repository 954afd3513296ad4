//! HTTP request handlers for the ILR Qualifying Period Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use serde::Serialize;
use tracing::{Span, field, info, instrument, warn};
use uuid::Uuid;

use crate::calculation::evaluate_with_rules;
use crate::models::{AssessmentInput, AssessmentResult};

use super::request::AssessmentRequest;
use super::response::{
    ApiError, ApiErrorResponse, AssessmentResponse, PRACTICE_DISCLAIMER, RouteCatalog,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/assess", post(assess_handler))
        .route("/routes", get(routes_handler))
        .route("/health", get(health_handler))
        .with_state(state)
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

/// Handler for POST /assess endpoint.
///
/// Accepts the form answers and returns the estimated qualifying period.
/// The correlation id is recorded on the `assess` span, so every event raised
/// while evaluating carries it.
#[instrument(name = "assess", skip_all, fields(correlation_id = tracing::field::Empty))]
async fn assess_handler(
    State(state): State<AppState>,
    payload: Result<Json<AssessmentRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    Span::current().record("correlation_id", field::display(correlation_id));
    info!("Processing assessment request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(error = %body_text, "JSON data error");
                    ApiError::validation_error(body_text)
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(error = %err, "JSON syntax error");
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error,
            }
            .into_response();
        }
    };

    let input = match AssessmentInput::try_from(request) {
        Ok(input) => input,
        Err(err) => {
            warn!(error = %err, "Invalid assessment input");
            return ApiErrorResponse::from(err).into_response();
        }
    };

    let rules = state.rules().rules();
    let start_time = Instant::now();
    let result = evaluate_with_rules(&input, rules);
    let duration = start_time.elapsed();

    match result {
        AssessmentResult::Complete(period) => {
            info!(
                route = %period.route,
                base_years = period.base_years,
                years = period.years,
                duration_us = duration.as_micros(),
                "Assessment completed successfully"
            );
            json_response(
                StatusCode::OK,
                AssessmentResponse {
                    assessment_id: correlation_id,
                    timestamp: Utc::now(),
                    engine_version: env!("CARGO_PKG_VERSION").to_string(),
                    rule_set_version: rules.metadata.version.clone(),
                    result: period,
                    disclaimer: PRACTICE_DISCLAIMER.to_string(),
                    duration_us: duration.as_micros() as u64,
                },
            )
        }
        AssessmentResult::Incomplete => {
            warn!("Assessment incomplete: no route selected");
            ApiErrorResponse::incomplete().into_response()
        }
    }
}

/// Handler for GET /routes endpoint.
async fn routes_handler(State(state): State<AppState>) -> Response {
    json_response(StatusCode::OK, RouteCatalog::from_rules(state.rules().rules()))
}

/// Handler for GET /health endpoint.
async fn health_handler() -> Response {
    json_response(StatusCode::OK, serde_json::json!({ "status": "ok" }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Route;
    use axum::{body::Body, http::Request};
    use std::sync::{Arc, Mutex};
    use tower::ServiceExt;
    use tracing::field::{Field, Visit};
    use tracing::span::{Attributes, Id, Record};
    use tracing::{Event, Subscriber};
    use tracing_subscriber::layer::{Context, SubscriberExt};
    use tracing_subscriber::registry::LookupSpan;
    use tracing_subscriber::Layer;

    /// Captures `correlation_id` values recorded on spans and the span each
    /// evaluator event was raised in.
    #[derive(Clone, Default)]
    struct CapturedSpans {
        correlation_ids: Arc<Mutex<Vec<String>>>,
        evaluator_event_spans: Arc<Mutex<Vec<String>>>,
    }

    struct CorrelationVisitor<'a>(&'a Mutex<Vec<String>>);

    impl Visit for CorrelationVisitor<'_> {
        fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
            if field.name() == "correlation_id" {
                self.0.lock().unwrap().push(format!("{:?}", value));
            }
        }
    }

    impl<S> Layer<S> for CapturedSpans
    where
        S: Subscriber + for<'a> LookupSpan<'a>,
    {
        fn on_new_span(&self, attrs: &Attributes<'_>, _id: &Id, _ctx: Context<'_, S>) {
            attrs.record(&mut CorrelationVisitor(&self.correlation_ids));
        }

        fn on_record(&self, _id: &Id, values: &Record<'_>, _ctx: Context<'_, S>) {
            values.record(&mut CorrelationVisitor(&self.correlation_ids));
        }

        fn on_event(&self, event: &Event<'_>, ctx: Context<'_, S>) {
            if event.metadata().target().ends_with("evaluator") {
                let span_name = ctx
                    .event_span(event)
                    .map(|span| span.name().to_string())
                    .unwrap_or_default();
                self.evaluator_event_spans.lock().unwrap().push(span_name);
            }
        }
    }

    async fn send(request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let router = create_router(AppState::default());
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    fn post_assess(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/assess")
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_valid_request_returns_200() {
        let router = create_router(AppState::default());
        let response = router
            .oneshot(post_assess(r#"{ "route": "public_service", "has_c1_english": true }"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers().get("content-type").unwrap();
        assert_eq!(content_type, "application/json");

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let result: AssessmentResponse = serde_json::from_slice(&body).unwrap();

        assert_eq!(result.result.route, Route::PublicService);
        assert_eq!(result.result.years, 4);
        assert_eq!(result.rule_set_version, "2025-11");
        assert_eq!(result.disclaimer, PRACTICE_DISCLAIMER);
    }

    #[tokio::test]
    async fn test_missing_route_returns_422() {
        let (status, body) = send(post_assess(r#"{ "has_c1_english": true }"#)).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["code"], "INCOMPLETE_INPUT");
    }

    #[tokio::test]
    async fn test_malformed_json_returns_400() {
        let (status, body) = send(post_assess("{invalid json")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_unknown_route_returns_validation_error() {
        let (status, body) = send(post_assess(r#"{ "route": "tourist" }"#)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_negative_salary_returns_validation_error() {
        let (status, body) =
            send(post_assess(r#"{ "route": "high_earner", "salary": "-1" }"#)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "VALIDATION_ERROR");
        assert!(body["message"].as_str().unwrap().contains("salary"));
    }

    #[tokio::test]
    async fn test_routes_endpoint_lists_catalog() {
        let request = Request::builder()
            .uri("/routes")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["routes"].as_array().unwrap().len(), 8);
        assert_eq!(body["routes"][4]["route"], "lower_paid");
        assert_eq!(body["routes"][4]["fixed_base_years"], 15);
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let request = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_correlation_id_is_recorded_on_assess_span() {
        let captured = CapturedSpans::default();
        let subscriber = tracing_subscriber::registry().with(captured.clone());
        let _guard = tracing::subscriber::set_default(subscriber);

        let router = create_router(AppState::default());
        let response = router
            .oneshot(post_assess(r#"{ "route": "fast_track" }"#))
            .await
            .unwrap();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let result: AssessmentResponse = serde_json::from_slice(&body).unwrap();

        let ids = captured.correlation_ids.lock().unwrap();
        assert_eq!(*ids, vec![result.assessment_id.to_string()]);

        let spans = captured.evaluator_event_spans.lock().unwrap();
        assert!(!spans.is_empty());
        assert!(spans.iter().all(|name| name == "assess"));
    }
}
