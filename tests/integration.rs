//! Integration tests for the shift sheet service.
//!
//! This test suite covers:
//! - Export over HTTP against the bundled configuration
//! - Sheet content built from the bundled seed store
//! - The HTTP holiday source against a local endpoint
//! - Holiday cache behaviour across an outage

use std::collections::HashMap;
use std::net::SocketAddr;
use std::time::Duration;

use axum::{
    Json, Router,
    body::Body,
    http::{Request, StatusCode},
    routing::get,
};
use chrono::NaiveDate;
use serde_json::Value;
use tower::ServiceExt;

use shift_sheet::api::{AppState, create_router};
use shift_sheet::config::ConfigLoader;
use shift_sheet::error::SheetError;
use shift_sheet::export::build_sheet;
use shift_sheet::holidays::{HolidayCache, HolidayIndex, HolidaySource, HttpHolidaySource};
use shift_sheet::models::YearMonth;
use shift_sheet::repository::{MemoryStore, ShiftRepository};
use shift_sheet::sheet::{EMPHASIS_RED, HEADER_ROW, data_row};

// =============================================================================
// Test Helpers
// =============================================================================

fn make_date(date_str: &str) -> NaiveDate {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
}

fn march_2025() -> YearMonth {
    YearMonth::new(2025, 3).unwrap()
}

fn load_bundled() -> ConfigLoader {
    let mut loader = ConfigLoader::load("./config/default").expect("Failed to load config");
    loader.app_mut().holidays.enabled = false;
    loader
}

fn create_test_state() -> AppState {
    let (app, store) = load_bundled().into_parts();
    AppState::from_config(&app, store).expect("Failed to build state")
}

fn bundled_repository() -> ShiftRepository {
    let (_, store) = load_bundled().into_parts();
    ShiftRepository::new(MemoryStore::new(store))
}

async fn request(router: Router, method: &str, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = router
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, body.to_vec())
}

/// Serves `router` on an ephemeral local port.
async fn spawn_server(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

fn http_source(addr: SocketAddr, path: &str) -> HttpHolidaySource {
    HttpHolidaySource::new(format!("http://{}{}", addr, path), Duration::from_secs(5)).unwrap()
}

// =============================================================================
// Export over HTTP
// =============================================================================

/// INT-001: bundled config exports a workbook
#[tokio::test]
async fn test_int_001_export_bundled_month() {
    let (status, body) = request(
        create_router(create_test_state()),
        "POST",
        "/api/export?yearMonth=2025-03",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(&body[..2], b"PK");
}

/// INT-002: bad token never reaches the store
#[tokio::test]
async fn test_int_002_bad_token_rejected() {
    for token in ["2025-3-1", "2025", "abcd-ef", "2025-00", "300000-01"] {
        let (status, body) = request(
            create_router(create_test_state()),
            "POST",
            &format!("/api/export?yearMonth={}", token),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "token {}", token);
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["code"], "INVALID_YEAR_MONTH");
    }
}

/// INT-003: simulation view reflects the bundled overlay
#[tokio::test]
async fn test_int_003_simulation_view() {
    let (status, body) = request(
        create_router(create_test_state()),
        "GET",
        "/api/shifts/simulation?yearMonth=2025-03",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let json: Value = serde_json::from_slice(&body).unwrap();
    let shifts = json["shifts"].as_array().unwrap();

    // 9 committed + 1 new simulation key; the other simulation record overrides.
    assert_eq!(shifts.len(), 10);

    let overridden = shifts
        .iter()
        .find(|s| s["staff_id"] == 3 && s["date"] == "2025-03-03" && s["slot"] == "morning")
        .unwrap();
    assert_eq!(overridden["pattern_id"], 2);
    assert_eq!(overridden["source"], "simulation");

    let excluded = shifts
        .iter()
        .find(|s| s["staff_id"] == 5 && s["date"] == "2025-03-05")
        .unwrap();
    assert_eq!(excluded["excluded"], true);
    // The committed pattern (研修) stays hidden from the simulation side
    assert_eq!(excluded["pattern_id"], 0);
}

// =============================================================================
// Sheet content from the bundled store
// =============================================================================

/// INT-004: roster split by black_bar into two sections
#[test]
fn test_int_004_bundled_layout() {
    let grid = build_sheet(&bundled_repository(), &HolidayIndex::default(), march_2025());

    assert_eq!(grid.text(HEADER_ROW, 2), Some("佐藤"));
    assert_eq!(grid.text(HEADER_ROW, 4), Some("高橋"));
    assert_eq!(grid.text(HEADER_ROW, 5), Some("日付"));
    assert_eq!(grid.text(HEADER_ROW, 7), Some("田中"));
    assert_eq!(grid.text(HEADER_ROW, 8), Some("伊藤"));
    assert_eq!(grid.text(HEADER_ROW, 10), Some("日付"));
    assert!(
        (0..12).all(|column| grid.text(HEADER_ROW, column) != Some("black_bar"))
    );
}

/// INT-005: merged labels, colours and memo on 2025-03-03
#[test]
fn test_int_005_bundled_cells() {
    let grid = build_sheet(&bundled_repository(), &HolidayIndex::default(), march_2025());
    let row = data_row(3);

    assert_eq!(grid.text(row, 2), Some("早番"));
    assert_eq!(grid.text(row, 3), Some("日勤 遅番"));
    // Simulation overrides the committed 休み.
    assert_eq!(grid.text(row, 4), Some("日勤"));
    assert_eq!(grid.text(row, 9), Some("月初ミーティング"));

    let label_cell = grid.cell(row, 3).unwrap();
    assert!(label_cell.style.bold);
}

/// INT-006: excluded committed record renders blank
#[test]
fn test_int_006_excluded_record_blank() {
    let grid = build_sheet(&bundled_repository(), &HolidayIndex::default(), march_2025());
    assert_eq!(grid.text(data_row(5), 8).unwrap_or(""), "");
}

/// INT-007: deleted date and Sundays are emphasized
#[test]
fn test_int_007_deleted_date_emphasized() {
    let grid = build_sheet(&bundled_repository(), &HolidayIndex::default(), march_2025());

    for day in [2, 31] {
        let cell = grid.cell(data_row(day), 0).unwrap();
        assert_eq!(cell.style.font_colour, Some(EMPHASIS_RED), "day {}", day);
    }
    let weekday = grid.cell(data_row(3), 0).unwrap();
    assert_ne!(weekday.style.font_colour, Some(EMPHASIS_RED));
}

// =============================================================================
// HTTP holiday source
// =============================================================================

/// INT-008: JSON holiday payload is parsed
#[tokio::test]
async fn test_int_008_http_source_parses_payload() {
    let router = Router::new().route(
        "/holidays.json",
        get(|| async {
            Json(HashMap::from([
                ("2025-03-20", "春分の日"),
                ("2025-04-29", "昭和の日"),
                ("bogus", "???"),
            ]))
        }),
    );
    let addr = spawn_server(router).await;

    let holidays = http_source(addr, "/holidays.json").fetch().await.unwrap();
    assert_eq!(holidays.len(), 2);
    assert_eq!(
        holidays.get(&make_date("2025-03-20")).map(String::as_str),
        Some("春分の日")
    );
}

/// INT-009: non-success status is a fetch error
#[tokio::test]
async fn test_int_009_http_source_status_error() {
    let router = Router::new().route(
        "/holidays.json",
        get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "down") }),
    );
    let addr = spawn_server(router).await;

    let result = http_source(addr, "/holidays.json").fetch().await;
    assert!(matches!(result, Err(SheetError::HolidayFetch { .. })));
}

/// INT-010: malformed payload is a fetch error
#[tokio::test]
async fn test_int_010_http_source_malformed_payload() {
    let router = Router::new().route("/holidays.json", get(|| async { "not json" }));
    let addr = spawn_server(router).await;

    let result = http_source(addr, "/holidays.json").fetch().await;
    assert!(matches!(result, Err(SheetError::HolidayFetch { .. })));
}

/// INT-011: failed refresh keeps the cached entries
#[tokio::test]
async fn test_int_011_refresh_failure_keeps_cache() {
    let good = Router::new().route(
        "/holidays.json",
        get(|| async { Json(HashMap::from([("2025-03-20", "春分の日")])) }),
    );
    let bad = Router::new().route(
        "/holidays.json",
        get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
    );
    let good_addr = spawn_server(good).await;
    let bad_addr = spawn_server(bad).await;

    let cache = HolidayCache::new();
    cache
        .ensure_initialized(&http_source(good_addr, "/holidays.json"))
        .await;
    assert_eq!(cache.len().await, 1);

    let result = cache.refresh(&http_source(bad_addr, "/holidays.json")).await;
    assert!(result.is_err());
    assert!(cache.is_holiday(make_date("2025-03-20")).await);
}

/// INT-012: export with an unreachable holiday endpoint still succeeds
#[tokio::test]
async fn test_int_012_export_with_holiday_outage() {
    let mut loader = ConfigLoader::load("./config/default").unwrap();
    loader.app_mut().holidays.url = "http://127.0.0.1:9/holidays.json".to_string();
    loader.app_mut().holidays.timeout_secs = 1;
    let (app, store) = loader.into_parts();
    let state = AppState::from_config(&app, store).unwrap();

    let (status, body) = request(
        create_router(state.clone()),
        "POST",
        "/api/export?yearMonth=2025-03",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(&body[..2], b"PK");
    assert!(state.holidays().is_initialized());
    assert!(state.holidays().is_empty().await);
}
