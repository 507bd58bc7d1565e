//! Application state for the shift sheet API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use tracing::info;

use crate::config::AppConfig;
use crate::error::SheetResult;
use crate::export::{ExportSink, XlsxSink};
use crate::holidays::{HolidayCache, HolidaySource, HttpHolidaySource, StaticHolidaySource};
use crate::repository::{MemoryStore, ShiftRepository, StoreSnapshot};

/// Shared application state.
///
/// Holds the repository, the process-scoped holiday cache with the source
/// that fills it, and the export sink.
#[derive(Clone)]
pub struct AppState {
    repository: ShiftRepository,
    holidays: Arc<HolidayCache>,
    holiday_source: Arc<dyn HolidaySource>,
    sink: Arc<dyn ExportSink>,
}

impl AppState {
    /// Creates a state with an empty, uninitialised holiday cache.
    pub fn new(
        repository: ShiftRepository,
        holiday_source: Arc<dyn HolidaySource>,
        sink: Arc<dyn ExportSink>,
    ) -> Self {
        Self {
            repository,
            holidays: Arc::new(HolidayCache::new()),
            holiday_source,
            sink,
        }
    }

    /// Wires the state from loaded configuration.
    ///
    /// Uses the in-memory store seeded with `store`, the HTTP holiday source
    /// unless holidays are disabled, and the xlsx sink.
    pub fn from_config(config: &AppConfig, store: StoreSnapshot) -> SheetResult<Self> {
        let holiday_source: Arc<dyn HolidaySource> = if config.holidays.enabled {
            info!(url = %config.holidays.url, "Using HTTP holiday source");
            Arc::new(HttpHolidaySource::new(
                config.holidays.url.clone(),
                config.holidays.timeout(),
            )?)
        } else {
            info!("Holiday source disabled");
            Arc::new(StaticHolidaySource::default())
        };

        Ok(Self::new(
            ShiftRepository::new(MemoryStore::new(store)),
            holiday_source,
            Arc::new(XlsxSink::new()),
        ))
    }

    /// Replaces the holiday cache, e.g. to share one across routers.
    pub fn with_holiday_cache(mut self, cache: Arc<HolidayCache>) -> Self {
        self.holidays = cache;
        self
    }

    /// The degrading repository.
    pub fn repository(&self) -> &ShiftRepository {
        &self.repository
    }

    /// The process-scoped holiday cache.
    pub fn holidays(&self) -> &HolidayCache {
        &self.holidays
    }

    /// The source the holiday cache is filled from.
    pub fn holiday_source(&self) -> &dyn HolidaySource {
        self.holiday_source.as_ref()
    }

    /// The export sink.
    pub fn sink(&self) -> &dyn ExportSink {
        self.sink.as_ref()
    }
}
