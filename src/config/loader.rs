//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the default
//! work settings and the leave code catalog from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::{Shift, WorkSettings};

use super::types::{LeaveCatalog, LeaveCode, TimecardConfig};

/// Loads and provides access to timecard configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── settings.yaml     # Default work settings and shift catalog
/// └── leave_codes.yaml  # Leave/status code catalog
/// ```
///
/// # Example
///
/// ```no_run
/// use timecard_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default")?;
/// let holiday = loader.get_leave_code(1)?;
/// println!("Code 1: {}", holiday.label);
/// # Ok::<(), timecard_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: TimecardConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns `ConfigNotFound` when either file is missing and
    /// `ConfigParseError` when either contains invalid YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let settings = Self::load_yaml::<WorkSettings>(&path.join("settings.yaml"))?;
        let catalog = Self::load_yaml::<LeaveCatalog>(&path.join("leave_codes.yaml"))?;

        Ok(Self {
            config: TimecardConfig::new(settings, catalog),
        })
    }

    /// Builds a loader from already-parsed parts.
    pub fn from_parts(settings: WorkSettings, catalog: LeaveCatalog) -> Self {
        Self {
            config: TimecardConfig::new(settings, catalog),
        }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &TimecardConfig {
        &self.config
    }

    /// Returns the default work settings.
    pub fn settings(&self) -> &WorkSettings {
        self.config.settings()
    }

    /// Returns the leave code catalog.
    pub fn catalog(&self) -> &LeaveCatalog {
        self.config.catalog()
    }

    /// Gets a leave code by its number.
    ///
    /// Returns `CatalogCodeNotFound` when the catalog has no such code.
    pub fn get_leave_code(&self, code: u32) -> EngineResult<&LeaveCode> {
        self.catalog()
            .get(code)
            .ok_or(EngineError::CatalogCodeNotFound { code })
    }

    /// Finds a shift in the default settings by id.
    pub fn find_shift(&self, id: &str) -> Option<&Shift> {
        crate::calculation::find_shift(self.settings(), id)
    }
}
