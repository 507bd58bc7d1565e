//! Process-scoped holiday cache.

use chrono::NaiveDate;
use tokio::sync::{OnceCell, RwLock};
use tracing::{info, warn};

use crate::error::SheetResult;

use super::{HolidayIndex, HolidayMap, HolidaySource};

/// Caches the holiday mapping for the lifetime of the process.
///
/// The first call to [`HolidayCache::ensure_initialized`] fetches from the
/// source; every later call reuses the cached entries, even when that first
/// fetch failed. Readers share the lock freely while a refresh holds it
/// exclusively.
#[derive(Debug, Default)]
pub struct HolidayCache {
    entries: RwLock<HolidayMap>,
    initialized: OnceCell<()>,
}

impl HolidayCache {
    /// Creates an empty, uninitialised cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs the one-shot initial fetch if nobody has yet.
    ///
    /// Concurrent first callers wait for the same fetch.
    pub async fn ensure_initialized(&self, source: &dyn HolidaySource) {
        self.initialized
            .get_or_init(|| async {
                info!("Initialising holiday cache");
                // Failures are logged by refresh and leave the cache empty.
                let _ = self.refresh(source).await;
            })
            .await;
    }

    /// Returns `true` once the one-shot fetch has run.
    pub fn is_initialized(&self) -> bool {
        self.initialized.initialized()
    }

    /// Fetches from `source` and merges the result into the cache.
    ///
    /// Returns the number of cached holidays after the merge. On failure the
    /// error is logged and the cache is left untouched.
    pub async fn refresh(&self, source: &dyn HolidaySource) -> SheetResult<usize> {
        let fetched = match source.fetch().await {
            Ok(fetched) => fetched,
            Err(err) => {
                warn!(error = %err, "Holiday refresh failed, keeping cached entries");
                return Err(err);
            }
        };

        let mut entries = self.entries.write().await;
        entries.extend(fetched);
        info!(count = entries.len(), "Cached holidays");
        Ok(entries.len())
    }

    /// Copies the current entries into an immutable index.
    pub async fn snapshot(&self) -> HolidayIndex {
        HolidayIndex::new(self.entries.read().await.clone())
    }

    /// Returns `true` if `date` is a cached holiday.
    pub async fn is_holiday(&self, date: NaiveDate) -> bool {
        self.entries.read().await.contains_key(&date)
    }

    /// Number of cached holidays.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Returns `true` if nothing is cached.
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}
