//! Configuration types for the shift sheet server.
//!
//! These structures are deserialized from `app.yaml`. Every section and
//! field has a default, so an empty file is a valid configuration.

use std::net::{Ipv4Addr, SocketAddr};
use std::time::Duration;

use serde::Deserialize;

/// Public holiday feed used when none is configured.
pub const DEFAULT_HOLIDAY_URL: &str = "https://holidays-jp.github.io/api/v1/date.json";

/// Top-level contents of `app.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AppConfig {
    /// HTTP listener settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Holiday source settings.
    #[serde(default)]
    pub holidays: HolidayConfig,
}

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerConfig {
    /// Address the server binds to.
    #[serde(default = "default_bind")]
    pub bind: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

fn default_bind() -> SocketAddr {
    SocketAddr::from((Ipv4Addr::LOCALHOST, 8080))
}

/// Holiday source settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HolidayConfig {
    /// JSON endpoint returning `{ "YYYY-MM-DD": "name", ... }`.
    #[serde(default = "default_holiday_url")]
    pub url: String,
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// When `false` no request is made and no date is a holiday.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

impl HolidayConfig {
    /// The request timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for HolidayConfig {
    fn default() -> Self {
        Self {
            url: default_holiday_url(),
            timeout_secs: default_timeout_secs(),
            enabled: default_enabled(),
        }
    }
}

fn default_holiday_url() -> String {
    DEFAULT_HOLIDAY_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_enabled() -> bool {
    true
}
