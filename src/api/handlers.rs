//! HTTP request handlers for the shift sheet API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::export::{export_month, merged_view};

use super::request::MonthQuery;
use super::response::{
    ApiErrorResponse, HolidayRefreshResponse, SimulationShiftEntry, SimulationShiftsResponse,
    content_disposition,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/api/export", post(export_handler))
        .route("/api/shifts/simulation", get(simulation_shifts_handler))
        .route("/api/holidays/refresh", post(refresh_holidays_handler))
        .with_state(state)
}

/// Handler for GET /health.
async fn health_handler() -> &'static str {
    "ok"
}

/// Handler for POST /api/export.
///
/// Streams the month's workbook back as an attachment.
async fn export_handler(
    State(state): State<AppState>,
    Query(query): Query<MonthQuery>,
) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        year_month = ?query.year_month,
        "Processing export request"
    );

    // Reject a malformed token before touching the store
    let month = match query.resolve() {
        Ok(month) => month,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Rejected year-month");
            return ApiErrorResponse::from(err).into_response();
        }
    };

    // Build the sheet and hand it to the sink
    let start_time = Instant::now();
    let result = export_month(
        state.repository(),
        state.holidays(),
        state.holiday_source(),
        state.sink(),
        month,
    )
    .await;

    // Return the artifact as a download, or map the sink failure
    match result {
        Ok(artifact) => {
            info!(
                correlation_id = %correlation_id,
                year_month = %month,
                filename = %artifact.filename,
                size = artifact.bytes.len(),
                duration_us = start_time.elapsed().as_micros(),
                "Export completed successfully"
            );
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, artifact.content_type.clone()),
                    (
                        header::CONTENT_DISPOSITION,
                        content_disposition(&artifact.filename),
                    ),
                ],
                artifact.bytes,
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                year_month = %month,
                error = %err,
                "Export failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for GET /api/shifts/simulation.
///
/// Returns the merged simulation-facing view of the month.
async fn simulation_shifts_handler(
    State(state): State<AppState>,
    Query(query): Query<MonthQuery>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let month = match query.resolve() {
        Ok(month) => month,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Rejected year-month");
            return ApiErrorResponse::from(err).into_response();
        }
    };

    // Excluded committed records are served with their visible pattern
    let shifts: Vec<SimulationShiftEntry> = merged_view(state.repository(), month)
        .to_sorted_vec()
        .iter()
        .map(SimulationShiftEntry::from)
        .collect();
    info!(
        correlation_id = %correlation_id,
        year_month = %month,
        shifts_count = shifts.len(),
        "Served simulation shifts"
    );

    (
        StatusCode::OK,
        Json(SimulationShiftsResponse {
            year_month: month,
            shifts,
        }),
    )
        .into_response()
}

/// Handler for POST /api/holidays/refresh.
///
/// A failed fetch still answers 200 with `refreshed: false`; the cache
/// keeps its previous entries.
async fn refresh_holidays_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Refreshing holidays");

    // A failed fetch leaves the cache as it was
    let refreshed = state
        .holidays()
        .refresh(state.holiday_source())
        .await
        .is_ok();
    let count = state.holidays().len().await;

    info!(
        correlation_id = %correlation_id,
        refreshed,
        count,
        "Holiday refresh finished"
    );

    (
        StatusCode::OK,
        Json(HolidayRefreshResponse { refreshed, count }),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiError;
    use crate::error::{SheetError, SheetResult};
    use crate::export::{ExportArtifact, ExportSink, XLSX_CONTENT_TYPE, XlsxSink};
    use crate::holidays::{HolidayFuture, HolidaySource, StaticHolidaySource};
    use crate::models::{
        AttendancePattern, ShiftAssignment, SimulationShiftAssignment, StaffMember, TimeSlot,
        YearMonth,
    };
    use crate::repository::{MemoryStore, ShiftRepository, StoreSnapshot};
    use crate::sheet::SheetGrid;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use chrono::NaiveDate;
    use serde_json::Value;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn create_snapshot() -> StoreSnapshot {
        StoreSnapshot {
            staff: vec![StaffMember {
                id: 1,
                name: "佐藤".to_string(),
                display_order: 1,
            }],
            patterns: vec![AttendancePattern {
                id: 5,
                name: "早番".to_string(),
                description: String::new(),
            }],
            shifts: vec![
                ShiftAssignment {
                    staff_id: 1,
                    date: make_date("2025-03-02"),
                    slot: TimeSlot::Morning,
                    pattern_id: 5,
                    excluded: false,
                },
                ShiftAssignment {
                    staff_id: 1,
                    date: make_date("2025-03-04"),
                    slot: TimeSlot::Morning,
                    pattern_id: 5,
                    excluded: true,
                },
            ],
            simulation_shifts: vec![SimulationShiftAssignment {
                staff_id: 1,
                date: make_date("2025-03-03"),
                slot: TimeSlot::Evening,
                pattern_id: 5,
            }],
            ..Default::default()
        }
    }

    fn create_test_state() -> AppState {
        let holidays = HashMap::from([(make_date("2025-03-20"), "春分の日".to_string())]);
        AppState::new(
            ShiftRepository::new(MemoryStore::new(create_snapshot())),
            Arc::new(StaticHolidaySource::new(holidays)),
            Arc::new(XlsxSink::new()),
        )
    }

    struct RejectingSink;

    impl ExportSink for RejectingSink {
        fn export(&self, _: &SheetGrid, _: YearMonth) -> SheetResult<ExportArtifact> {
            Err(SheetError::export("grid rejected"))
        }
    }

    struct FailingSource;

    impl HolidaySource for FailingSource {
        fn fetch(&self) -> HolidayFuture<'_> {
            Box::pin(async {
                Err(SheetError::HolidayFetch {
                    message: "503".to_string(),
                })
            })
        }
    }

    async fn send(router: Router, method: &str, uri: &str) -> Response {
        router
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    async fn body_bytes(response: Response) -> Vec<u8> {
        axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
            .to_vec()
    }

    /// API-001: export returns the workbook with download headers
    #[tokio::test]
    async fn test_api_001_export_returns_workbook() {
        let router = create_router(create_test_state());
        let response = send(router, "POST", "/api/export?yearMonth=2025-03").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            XLSX_CONTENT_TYPE
        );
        let disposition = response
            .headers()
            .get("content-disposition")
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();
        assert!(disposition.starts_with("attachment;"));
        assert!(disposition.contains("filename*=UTF-8''"));

        let body = body_bytes(response).await;
        assert_eq!(&body[..2], b"PK");
    }

    /// API-002: malformed year-month returns 400
    #[tokio::test]
    async fn test_api_002_malformed_year_month_returns_400() {
        let router = create_router(create_test_state());
        let response = send(router, "POST", "/api/export?yearMonth=2025-13").await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_bytes(response).await;
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "INVALID_YEAR_MONTH");
    }

    /// API-003: sink failure returns 500
    #[tokio::test]
    async fn test_api_003_sink_failure_returns_500() {
        let state = AppState::new(
            ShiftRepository::new(MemoryStore::new(create_snapshot())),
            Arc::new(StaticHolidaySource::default()),
            Arc::new(RejectingSink),
        );
        let response = send(create_router(state), "POST", "/api/export?yearMonth=2025-03").await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_bytes(response).await;
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "EXPORT_FAILED");
    }

    /// API-004: export without a token uses the current month
    #[tokio::test]
    async fn test_api_004_export_defaults_to_current_month() {
        let router = create_router(create_test_state());
        let response = send(router, "POST", "/api/export").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    /// API-005: simulation view is merged and sorted
    #[tokio::test]
    async fn test_api_005_simulation_shifts() {
        let router = create_router(create_test_state());
        let response = send(router, "GET", "/api/shifts/simulation?yearMonth=2025-03").await;

        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(body["yearMonth"], "2025-03");

        let shifts = body["shifts"].as_array().unwrap();
        assert_eq!(shifts.len(), 3);
        assert_eq!(shifts[0]["date"], "2025-03-02");
        assert_eq!(shifts[0]["source"], "committed");
        assert_eq!(shifts[0]["pattern_id"], 5);
        assert_eq!(shifts[1]["source"], "simulation");

        // Excluded committed record stays listed but shows no pattern
        assert_eq!(shifts[2]["date"], "2025-03-04");
        assert_eq!(shifts[2]["excluded"], true);
        assert_eq!(shifts[2]["pattern_id"], 0);
    }

    /// API-006: explicit holiday refresh reports the cache size
    #[tokio::test]
    async fn test_api_006_refresh_holidays() {
        let state = create_test_state();
        let response = send(create_router(state.clone()), "POST", "/api/holidays/refresh").await;

        assert_eq!(response.status(), StatusCode::OK);
        let body: HolidayRefreshResponse =
            serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(
            body,
            HolidayRefreshResponse {
                refreshed: true,
                count: 1
            }
        );
        assert!(state.holidays().is_holiday(make_date("2025-03-20")).await);
    }

    /// API-007: failed refresh answers refreshed=false
    #[tokio::test]
    async fn test_api_007_failed_refresh() {
        let state = AppState::new(
            ShiftRepository::new(MemoryStore::default()),
            Arc::new(FailingSource),
            Arc::new(XlsxSink::new()),
        );
        let response = send(create_router(state), "POST", "/api/holidays/refresh").await;

        assert_eq!(response.status(), StatusCode::OK);
        let body: HolidayRefreshResponse =
            serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert!(!body.refreshed);
        assert_eq!(body.count, 0);
    }

    /// API-008: holiday outage never blocks an export
    #[tokio::test]
    async fn test_api_008_export_survives_holiday_outage() {
        let state = AppState::new(
            ShiftRepository::new(MemoryStore::new(create_snapshot())),
            Arc::new(FailingSource),
            Arc::new(XlsxSink::new()),
        );
        let response = send(create_router(state), "POST", "/api/export?yearMonth=2025-03").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health() {
        let response = send(create_router(create_test_state()), "GET", "/health").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_bytes(response).await, b"ok");
    }
}
