//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for reading the server
//! settings and the seed data of the bundled store from YAML files.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{SheetError, SheetResult};
use crate::repository::StoreSnapshot;

use super::types::AppConfig;

/// Loads and provides access to the application configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── app.yaml    # Server and holiday source settings
/// └── store.yaml  # Staff, patterns, shifts, memos and removed dates
/// ```
///
/// # Example
///
/// ```no_run
/// use shift_sheet::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// println!("Binding to {}", loader.app().server.bind);
/// println!("{} staff rows", loader.store().staff.len());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    app: AppConfig,
    store: StoreSnapshot,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - `app.yaml` or `store.yaml` is missing ([`SheetError::ConfigNotFound`])
    /// - either file contains invalid YAML ([`SheetError::ConfigParseError`])
    pub fn load<P: AsRef<Path>>(path: P) -> SheetResult<Self> {
        let path = path.as_ref();

        let app = Self::load_yaml::<AppConfig>(&path.join("app.yaml"))?;
        let store = Self::load_yaml::<StoreSnapshot>(&path.join("store.yaml"))?;

        info!(
            path = %path.display(),
            staff = store.staff.len(),
            patterns = store.patterns.len(),
            shifts = store.shifts.len(),
            simulation_shifts = store.simulation_shifts.len(),
            "Loaded configuration"
        );

        Ok(Self { app, store })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> SheetResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| SheetError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| SheetError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Server and holiday settings.
    pub fn app(&self) -> &AppConfig {
        &self.app
    }

    /// Mutable settings, for command-line overrides.
    pub fn app_mut(&mut self) -> &mut AppConfig {
        &mut self.app
    }

    /// Seed data for the in-memory store.
    pub fn store(&self) -> &StoreSnapshot {
        &self.store
    }

    /// Splits the loader into its two parts.
    pub fn into_parts(self) -> (AppConfig, StoreSnapshot) {
        (self.app, self.store)
    }
}
