//! Response types for the shift sheet API.
//!
//! This module defines the JSON bodies returned by the API, the error
//! response structure, and the `Content-Disposition` value for downloads.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::{Deserialize, Serialize};

use chrono::NaiveDate;

use crate::error::SheetError;
use crate::merge::{MergedShift, ShiftSource};
use crate::models::{TimeSlot, YearMonth};

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }
}

/// API error with HTTP status code.
#[derive(Debug)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<SheetError> for ApiErrorResponse {
    fn from(error: SheetError) -> Self {
        match error {
            SheetError::InvalidYearMonth { input, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_YEAR_MONTH",
                    format!("Invalid year-month '{}'", input),
                    message,
                ),
            },
            SheetError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            SheetError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            SheetError::Store { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("STORE_ERROR", "Store read failed", message),
            },
            SheetError::HolidayFetch { message } => ApiErrorResponse {
                status: StatusCode::BAD_GATEWAY,
                error: ApiError::with_details(
                    "HOLIDAY_FETCH_FAILED",
                    "Holiday source could not be read",
                    message,
                ),
            },
            SheetError::Export { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("EXPORT_FAILED", "Export failed", message),
            },
        }
    }
}

/// One entry of the simulation feed, as the simulation calendar sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationShiftEntry {
    /// The staff member the shift belongs to.
    pub staff_id: u32,
    /// The calendar date of the shift.
    pub date: NaiveDate,
    /// The time slot within the date.
    pub slot: TimeSlot,
    /// The pattern to display; 0 for an excluded committed record.
    pub pattern_id: u32,
    /// The schedule the entry came from.
    pub source: ShiftSource,
    /// The committed record is hidden from the simulation side.
    pub excluded: bool,
}

impl From<&MergedShift> for SimulationShiftEntry {
    fn from(shift: &MergedShift) -> Self {
        Self {
            staff_id: shift.staff_id,
            date: shift.date,
            slot: shift.slot,
            pattern_id: shift.visible_pattern_id(),
            source: shift.source,
            excluded: shift.excluded,
        }
    }
}

/// Body of `GET /api/shifts/simulation`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationShiftsResponse {
    /// The month the view covers.
    pub year_month: YearMonth,
    /// Entries sorted by staff, date and slot.
    pub shifts: Vec<SimulationShiftEntry>,
}

/// Body of `POST /api/holidays/refresh`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayRefreshResponse {
    /// Whether the fetch succeeded.
    pub refreshed: bool,
    /// Number of cached holidays after the attempt.
    pub count: usize,
}

/// RFC 5987 `attr-char` set: everything else is percent-encoded.
const ATTR_CHAR: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'!')
    .remove(b'#')
    .remove(b'$')
    .remove(b'&')
    .remove(b'+')
    .remove(b'-')
    .remove(b'.')
    .remove(b'^')
    .remove(b'_')
    .remove(b'`')
    .remove(b'|')
    .remove(b'~');

/// Builds an attachment `Content-Disposition` for a UTF-8 filename.
///
/// Carries an ASCII-only `filename` for old clients and the exact name in
/// `filename*`.
///
/// # Example
///
/// ```
/// use shift_sheet::api::content_disposition;
///
/// assert_eq!(
///     content_disposition("report.xlsx"),
///     "attachment; filename=\"report.xlsx\"; filename*=UTF-8''report.xlsx"
/// );
/// ```
pub fn content_disposition(filename: &str) -> String {
    let fallback: String = filename
        .chars()
        .map(|c| {
            if (c.is_ascii_graphic() && c != '"' && c != '\\') || c == ' ' {
                c
            } else {
                '_'
            }
        })
        .collect();
    let encoded = utf8_percent_encode(filename, ATTR_CHAR);
    format!(
        "attachment; filename=\"{}\"; filename*=UTF-8''{}",
        fallback, encoded
    )
}
