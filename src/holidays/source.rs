//! Holiday source collaborators.

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::error::{SheetError, SheetResult};

use super::HolidayMap;

/// Boxed future returned by [`HolidaySource::fetch`].
pub type HolidayFuture<'a> = Pin<Box<dyn Future<Output = SheetResult<HolidayMap>> + Send + 'a>>;

/// Something that can return the full `date -> holiday name` mapping.
pub trait HolidaySource: Send + Sync {
    /// Fetches every known holiday. There is no incremental variant.
    fn fetch(&self) -> HolidayFuture<'_>;
}

/// Converts a raw `"YYYY-MM-DD" -> name` payload into a [`HolidayMap`].
///
/// Keys that are not valid dates are skipped with a warning.
///
/// # Example
///
/// ```
/// use shift_sheet::holidays::parse_holiday_map;
/// use std::collections::HashMap;
///
/// let raw = HashMap::from([
///     ("2025-01-01".to_string(), "元日".to_string()),
///     ("not-a-date".to_string(), "???".to_string()),
/// ]);
/// assert_eq!(parse_holiday_map(raw).len(), 1);
/// ```
pub fn parse_holiday_map(raw: HashMap<String, String>) -> HolidayMap {
    raw.into_iter()
        .filter_map(
            |(key, name)| match NaiveDate::parse_from_str(&key, "%Y-%m-%d") {
                Ok(date) => Some((date, name)),
                Err(err) => {
                    warn!(key = %key, error = %err, "Skipping malformed holiday date");
                    None
                }
            },
        )
        .collect()
}

/// Fetches holidays from a JSON endpoint over HTTP.
///
/// The endpoint must answer with a flat object mapping `YYYY-MM-DD` to the
/// holiday name.
#[derive(Debug, Clone)]
pub struct HttpHolidaySource {
    client: reqwest::Client,
    url: String,
}

impl HttpHolidaySource {
    /// Creates a source for `url` with a per-request timeout.
    pub fn new(url: impl Into<String>, timeout: Duration) -> SheetResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SheetError::HolidayFetch {
                message: format!("failed to build HTTP client: {}", e),
            })?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    /// The endpoint this source reads from.
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl HolidaySource for HttpHolidaySource {
    fn fetch(&self) -> HolidayFuture<'_> {
        Box::pin(async move {
            debug!(url = %self.url, "Fetching holidays");

            let response = self
                .client
                .get(&self.url)
                .send()
                .await
                .map_err(|e| SheetError::HolidayFetch {
                    message: format!("request to {} failed: {}", self.url, e),
                })?;

            let status = response.status();
            if !status.is_success() {
                return Err(SheetError::HolidayFetch {
                    message: format!("{} returned status {}", self.url, status.as_u16()),
                });
            }

            let raw: HashMap<String, String> =
                response.json().await.map_err(|e| SheetError::HolidayFetch {
                    message: format!("malformed payload from {}: {}", self.url, e),
                })?;

            Ok(parse_holiday_map(raw))
        })
    }
}

/// A fixed holiday mapping.
///
/// Used when the HTTP source is disabled in configuration.
#[derive(Debug, Clone, Default)]
pub struct StaticHolidaySource {
    holidays: HolidayMap,
}

impl StaticHolidaySource {
    /// Creates a source that always returns `holidays`.
    pub fn new(holidays: HolidayMap) -> Self {
        Self { holidays }
    }
}

impl HolidaySource for StaticHolidaySource {
    fn fetch(&self) -> HolidayFuture<'_> {
        let holidays = self.holidays.clone();
        Box::pin(async move { Ok(holidays) })
    }
}
