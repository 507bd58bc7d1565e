//! HTTP API module for the shift sheet service.
//!
//! This module provides the REST endpoints for exporting a month's shift
//! sheet, reading the merged simulation view and refreshing holidays.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::MonthQuery;
pub use response::{
    ApiError, ApiErrorResponse, HolidayRefreshResponse, SimulationShiftEntry,
    SimulationShiftsResponse, content_disposition,
};
pub use state::AppState;
