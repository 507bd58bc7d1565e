//! Holiday lookup for date highlighting.
//!
//! The holiday source is an external collaborator that returns a full
//! `date -> name` mapping. [`HolidayCache`] fetches it once per process and
//! hands out immutable [`HolidayIndex`] snapshots to export requests.
//!
//! # Example
//!
//! ```
//! use shift_sheet::holidays::{HolidayCache, StaticHolidaySource};
//! use chrono::NaiveDate;
//! use std::collections::HashMap;
//!
//! # tokio_test_block_on(async {
//! let new_year = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
//! let source = StaticHolidaySource::new(HashMap::from([(new_year, "元日".to_string())]));
//! let cache = HolidayCache::new();
//! cache.ensure_initialized(&source).await;
//! assert!(cache.snapshot().await.contains(new_year));
//! # });
//! # fn tokio_test_block_on<F: std::future::Future>(f: F) -> F::Output {
//! #     tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(f)
//! # }
//! ```

mod cache;
mod index;
mod source;

pub use cache::HolidayCache;
pub use index::{HolidayIndex, HolidayMap};
pub use source::{
    HolidayFuture, HolidaySource, HttpHolidaySource, StaticHolidaySource, parse_holiday_map,
};
