//! Configuration types for the timecard engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::WorkSettings;

/// A leave or status code in the catalog.
///
/// Manual entries reference these as `code-N`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveCode {
    /// The human-readable name of the code.
    pub label: String,
    /// Short label shown in compact calendar cells.
    pub short_label: String,
    /// Whether a day carrying this code is treated as a holiday.
    #[serde(default)]
    pub counts_as_holiday: bool,
}

/// The read-only catalog of leave and status codes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveCatalog {
    /// Map of numeric code to its descriptor.
    pub leave_codes: BTreeMap<u32, LeaveCode>,
}

impl LeaveCatalog {
    /// Looks up a code.
    pub fn get(&self, code: u32) -> Option<&LeaveCode> {
        self.leave_codes.get(&code)
    }

    /// Returns true when the catalog holds `code`.
    pub fn contains(&self, code: u32) -> bool {
        self.leave_codes.contains_key(&code)
    }

    /// Returns the number of codes in the catalog.
    pub fn len(&self) -> usize {
        self.leave_codes.len()
    }

    /// Returns true when the catalog has no codes.
    pub fn is_empty(&self) -> bool {
        self.leave_codes.is_empty()
    }
}

/// The complete configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct TimecardConfig {
    settings: WorkSettings,
    catalog: LeaveCatalog,
}

impl TimecardConfig {
    /// Creates a new TimecardConfig from its component parts.
    pub fn new(settings: WorkSettings, catalog: LeaveCatalog) -> Self {
        Self { settings, catalog }
    }

    /// Returns the default work settings.
    pub fn settings(&self) -> &WorkSettings {
        &self.settings
    }

    /// Returns the leave code catalog.
    pub fn catalog(&self) -> &LeaveCatalog {
        &self.catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_parses_integer_keys() {
        let yaml = r#"
leave_codes:
  1:
    label: Holiday
    short_label: H
    counts_as_holiday: true
  4:
    label: Training
    short_label: T
"#;
        let catalog: LeaveCatalog = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(catalog.len(), 2);
        assert!(catalog.get(1).unwrap().counts_as_holiday);
        assert!(!catalog.get(4).unwrap().counts_as_holiday);
        assert!(!catalog.contains(2));
    }
}
