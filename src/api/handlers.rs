//! HTTP request handlers for the timecard engine API.
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
use chrono::{DateTime, NaiveDate, Utc};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{WorkDayCalculation, calculate_work_day, format_duration_ms};
use crate::models::{AuditTrace, DayCalculationResult};

use super::request::CalculationRequest;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/shifts", get(shifts_handler))
        .route("/leave-codes", get(leave_codes_handler))
        .with_state(state)
}

/// Handler for POST /calculate endpoint.
///
/// Classifies one day of clock entries and returns the breakdown together
/// with its audit trail.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            return ApiErrorResponse::bad_request(rejection_error(correlation_id, rejection))
                .into_response();
        }
    };

    let config = state.config();
    if let Err(err) = request.validate(config.catalog()) {
        warn!(
            correlation_id = %correlation_id,
            error = %err,
            "Request validation failed"
        );
        return ApiErrorResponse::from(err).into_response();
    }

    let settings = request.settings.as_ref().unwrap_or_else(|| config.settings());

    let start_time = Instant::now();
    let calculation = calculate_work_day(
        request.date,
        &request.entries,
        settings,
        request.day_info.as_ref(),
        request.next_day_info.as_ref(),
        &request.manual_entries,
    );
    let duration_us = start_time.elapsed().as_micros() as u64;

    let result = build_result(request.date, calculation, duration_us, Utc::now());
    info!(
        correlation_id = %correlation_id,
        calculation_id = %result.calculation_id,
        date = %result.date,
        entries_count = request.entries.len(),
        intervals_count = result.intervals.len(),
        total_work = %format_duration_ms(result.summary.total_work_ms),
        overtime = %format_duration_ms(result.summary.overtime_ms()),
        duration_us,
        "Calculation completed successfully"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(result),
    )
        .into_response()
}

/// Handler for GET /shifts endpoint.
///
/// Returns the configured shift catalog.
async fn shifts_handler(State(state): State<AppState>) -> Response {
    Json(state.config().settings().shifts.clone()).into_response()
}

/// Handler for GET /leave-codes endpoint.
///
/// Returns the configured leave code catalog.
async fn leave_codes_handler(State(state): State<AppState>) -> Response {
    Json(state.config().catalog().clone()).into_response()
}

/// Maps a JSON extraction failure to an API error.
fn rejection_error(correlation_id: Uuid, rejection: JsonRejection) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    }
}

/// Wraps a day calculation into the response document.
///
/// `now` is the timestamp recorded as `calculated_at`.
pub fn build_result(
    date: NaiveDate,
    calculation: WorkDayCalculation,
    duration_us: u64,
    now: DateTime<Utc>,
) -> DayCalculationResult {
    DayCalculationResult {
        calculation_id: Uuid::new_v4(),
        calculated_at: now,
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        date,
        summary: calculation.summary,
        intervals: calculation.intervals,
        audit_trace: AuditTrace {
            steps: calculation.audit_steps,
            duration_us,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigLoader, LeaveCatalog};
    use crate::models::{EntryType, Shift, TimeEntry, WorkSettings};
    use axum::body::Body;
    use axum::http::Request;
    use chrono::NaiveDateTime;
    use tower::ServiceExt;

    const HOUR: i64 = 3_600_000;

    fn create_test_state() -> AppState {
        let config = ConfigLoader::load("./config/default").expect("Failed to load config");
        AppState::new(config)
    }

    fn make_datetime(date_str: &str, time_str: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("{} {}", date_str, time_str), "%Y-%m-%d %H:%M:%S")
            .unwrap()
    }

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn create_valid_request() -> CalculationRequest {
        CalculationRequest {
            date: make_date("2026-01-13"),
            entries: vec![
                TimeEntry {
                    id: "1".to_string(),
                    timestamp: make_datetime("2026-01-13", "09:00:00"),
                    entry_type: EntryType::In,
                },
                TimeEntry {
                    id: "2".to_string(),
                    timestamp: make_datetime("2026-01-13", "17:00:00"),
                    entry_type: EntryType::Out,
                },
            ],
            settings: None,
            day_info: None,
            next_day_info: None,
            manual_entries: vec![],
        }
    }

    async fn post_calculate(router: Router, body: String) -> Response {
        router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/calculate")
                    .header("Content-Type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_api_001_valid_request_returns_200() {
        let router = create_router(create_test_state());
        let body = serde_json::to_string(&create_valid_request()).unwrap();

        let response = post_calculate(router, body).await;
        assert_eq!(response.status(), StatusCode::OK);

        let content_type = response.headers().get("content-type").unwrap();
        assert_eq!(content_type, "application/json");

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let result: DayCalculationResult = serde_json::from_slice(&body).unwrap();

        assert_eq!(result.date, make_date("2026-01-13"));
        assert_eq!(result.summary.standard_work_ms, 8 * HOUR);
        assert_eq!(result.intervals.len(), 1);
        assert!(!result.audit_trace.steps.is_empty());
    }

    #[tokio::test]
    async fn test_api_002_malformed_json_returns_400() {
        let router = create_router(create_test_state());

        let response = post_calculate(router, "{invalid json".to_string()).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_api_003_missing_entries_returns_validation_error() {
        let router = create_router(create_test_state());

        let response = post_calculate(router, r#"{"date": "2026-01-13"}"#.to_string()).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "VALIDATION_ERROR");
        assert!(error.message.contains("missing field"));
    }

    #[tokio::test]
    async fn test_api_004_unknown_catalog_code_returns_400() {
        let router = create_router(create_test_state());
        let body = r#"{
            "date": "2026-01-13",
            "entries": [],
            "manual_entries": [{"id": "m1", "duration_ms": 3600000, "type": "code-999"}]
        }"#;

        let response = post_calculate(router, body.to_string()).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "CATALOG_CODE_NOT_FOUND");
    }

    #[tokio::test]
    async fn test_request_settings_override_configuration() {
        let router = create_router(create_test_state());
        let mut request = create_valid_request();
        request.settings = Some(WorkSettings {
            standard_day_hours: rust_decimal::Decimal::new(6, 0),
            ..WorkSettings::default()
        });

        let response = post_calculate(router, serde_json::to_string(&request).unwrap()).await;
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let result: DayCalculationResult = serde_json::from_slice(&body).unwrap();

        assert_eq!(result.summary.standard_work_ms, 6 * HOUR);
        assert_eq!(result.summary.overtime_diurnal_ms, 2 * HOUR);
    }

    #[tokio::test]
    async fn test_get_shifts_returns_catalog() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(Request::builder().uri("/shifts").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let shifts: Vec<Shift> = serde_json::from_slice(&body).unwrap();
        assert!(shifts.iter().any(|s| s.id == "night" && s.is_overnight()));
    }

    #[tokio::test]
    async fn test_get_leave_codes_returns_catalog() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(
                Request::builder()
                    .uri("/leave-codes")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let catalog: LeaveCatalog = serde_json::from_slice(&body).unwrap();
        assert!(catalog.get(1).is_some_and(|c| c.counts_as_holiday));
    }

    #[test]
    fn test_build_result_uses_injected_timestamp() {
        let now = DateTime::parse_from_rfc3339("2026-01-13T18:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let request = create_valid_request();
        let calculation = calculate_work_day(
            request.date,
            &request.entries,
            &WorkSettings::default(),
            None,
            None,
            &[],
        );
        let step_count = calculation.audit_steps.len();

        let result = build_result(request.date, calculation, 42, now);

        assert_eq!(result.calculated_at, now);
        assert_eq!(result.engine_version, env!("CARGO_PKG_VERSION"));
        assert_eq!(result.audit_trace.duration_us, 42);
        assert_eq!(result.audit_trace.steps.len(), step_count);
    }
}
