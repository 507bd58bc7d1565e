//! Configuration loading for the shift sheet server.
//!
//! This module loads the server settings (`app.yaml`) and the seed data of
//! the bundled in-memory store (`store.yaml`) from a configuration
//! directory.
//!
//! # Example
//!
//! ```no_run
//! use shift_sheet::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Holiday feed: {}", config.app().holidays.url);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{AppConfig, DEFAULT_HOLIDAY_URL, HolidayConfig, ServerConfig};
