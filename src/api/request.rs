//! Request types for the timecard engine API.
//!
//! This module defines the JSON request structure for the `/calculate`
//! endpoint and its validation against the leave code catalog.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::LeaveCatalog;
use crate::error::{EngineError, EngineResult};
use crate::models::{DayInfo, ManualEntryKind, ManualOvertimeEntry, TimeEntry, WorkSettings};

/// Request body for the `/calculate` endpoint.
///
/// Contains one calendar day of clock entries plus the metadata needed to
/// classify them. When `settings` is omitted the server's configured
/// defaults are used.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The calendar day being classified.
    pub date: NaiveDate,
    /// Clock entries for the day, in any order.
    pub entries: Vec<TimeEntry>,
    /// Work settings overriding the configured defaults.
    #[serde(default)]
    pub settings: Option<WorkSettings>,
    /// Leave and shift metadata for the day.
    #[serde(default)]
    pub day_info: Option<DayInfo>,
    /// Metadata for the following day.
    #[serde(default)]
    pub next_day_info: Option<DayInfo>,
    /// Manual overtime entries for the day.
    #[serde(default)]
    pub manual_entries: Vec<ManualOvertimeEntry>,
}

impl CalculationRequest {
    /// Checks the request against the leave code catalog.
    ///
    /// Overridden settings must use clock hours from 0 to 23. Manual entries
    /// must have a non-negative duration, and any `code-N` they reference
    /// must exist in `catalog`.
    pub fn validate(&self, catalog: &LeaveCatalog) -> EngineResult<()> {
        if let Some(settings) = &self.settings {
            validate_settings_hours(settings)?;
        }
        for (index, entry) in self.manual_entries.iter().enumerate() {
            if entry.duration_ms < 0 {
                return Err(EngineError::InvalidRequest {
                    field: format!("manual_entries[{}].duration_ms", index),
                    message: "must not be negative".to_string(),
                });
            }
            if let ManualEntryKind::CatalogCode(code) = entry.kind {
                if !catalog.contains(code) {
                    return Err(EngineError::CatalogCodeNotFound { code });
                }
            }
        }
        Ok(())
    }
}

fn validate_settings_hours(settings: &WorkSettings) -> EngineResult<()> {
    check_clock_hour("settings.night_time_start_hour", settings.night_time_start_hour)?;
    check_clock_hour("settings.night_time_end_hour", settings.night_time_end_hour)?;
    for (index, shift) in settings.shifts.iter().enumerate() {
        if let Some(hour) = shift.start_hour {
            check_clock_hour(&format!("settings.shifts[{}].start_hour", index), hour)?;
        }
        if let Some(hour) = shift.end_hour {
            check_clock_hour(&format!("settings.shifts[{}].end_hour", index), hour)?;
        }
    }
    Ok(())
}

fn check_clock_hour(field: &str, hour: u32) -> EngineResult<()> {
    if hour > 23 {
        return Err(EngineError::InvalidRequest {
            field: field.to_string(),
            message: format!("must be a clock hour from 0 to 23, got {}", hour),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LeaveCode;
    use crate::models::{EntryType, OvertimeTag};

    fn catalog() -> LeaveCatalog {
        let mut catalog = LeaveCatalog::default();
        catalog.leave_codes.insert(
            1,
            LeaveCode {
                label: "Holiday".to_string(),
                short_label: "HOL".to_string(),
                counts_as_holiday: true,
            },
        );
        catalog
    }

    #[test]
    fn test_deserialize_minimal_request() {
        let json = r#"{
            "date": "2026-01-13",
            "entries": [
                {"id": "1", "timestamp": "2026-01-13T09:00:00", "type": "in"},
                {"id": "2", "timestamp": "2026-01-13T17:00:00", "type": "out"}
            ]
        }"#;

        let request: CalculationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.entries.len(), 2);
        assert_eq!(request.entries[1].entry_type, EntryType::Out);
        assert!(request.settings.is_none());
        assert!(request.manual_entries.is_empty());
    }

    #[test]
    fn test_deserialize_manual_entry_kinds() {
        let json = r#"{
            "date": "2026-01-13",
            "entries": [],
            "manual_entries": [
                {"id": "m1", "duration_ms": 3600000, "type": "nocturnal-holiday"},
                {"id": "m2", "duration_ms": 1800000, "type": "code-1", "used_entry_ids": ["2"]}
            ]
        }"#;

        let request: CalculationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(
            request.manual_entries[0].kind,
            ManualEntryKind::Legacy(OvertimeTag::NocturnalHoliday)
        );
        assert_eq!(request.manual_entries[1].kind, ManualEntryKind::CatalogCode(1));
        assert!(request.manual_entries[1].used_entry_ids.contains("2"));
    }

    #[test]
    fn test_validate_known_catalog_code() {
        let json = r#"{
            "date": "2026-01-13",
            "entries": [],
            "manual_entries": [{"id": "m1", "duration_ms": 60000, "type": "code-1"}]
        }"#;
        let request: CalculationRequest = serde_json::from_str(json).unwrap();
        assert!(request.validate(&catalog()).is_ok());
    }

    #[test]
    fn test_validate_unknown_catalog_code() {
        let json = r#"{
            "date": "2026-01-13",
            "entries": [],
            "manual_entries": [{"id": "m1", "duration_ms": 60000, "type": "code-9"}]
        }"#;
        let request: CalculationRequest = serde_json::from_str(json).unwrap();

        match request.validate(&catalog()) {
            Err(EngineError::CatalogCodeNotFound { code }) => assert_eq!(code, 9),
            other => panic!("Expected CatalogCodeNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_negative_duration() {
        let json = r#"{
            "date": "2026-01-13",
            "entries": [],
            "manual_entries": [{"id": "m1", "duration_ms": -5, "type": "diurnal"}]
        }"#;
        let request: CalculationRequest = serde_json::from_str(json).unwrap();

        assert!(matches!(
            request.validate(&catalog()),
            Err(EngineError::InvalidRequest { .. })
        ));
    }

    #[test]
    fn test_validate_night_hour_out_of_range() {
        let json = r#"{
            "date": "2026-01-13",
            "entries": [],
            "settings": {"night_time_start_hour": 4000000000}
        }"#;
        let request: CalculationRequest = serde_json::from_str(json).unwrap();

        match request.validate(&catalog()) {
            Err(EngineError::InvalidRequest { field, .. }) => {
                assert_eq!(field, "settings.night_time_start_hour")
            }
            other => panic!("Expected InvalidRequest, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_shift_hour_out_of_range() {
        let json = r#"{
            "date": "2026-01-13",
            "entries": [],
            "settings": {
                "shifts": [
                    {"id": "ok", "name": "Ok", "start_hour": 0, "end_hour": 23},
                    {"id": "bad", "name": "Bad", "start_hour": 9, "end_hour": 24}
                ]
            }
        }"#;
        let request: CalculationRequest = serde_json::from_str(json).unwrap();

        match request.validate(&catalog()) {
            Err(EngineError::InvalidRequest { field, .. }) => {
                assert_eq!(field, "settings.shifts[1].end_hour")
            }
            other => panic!("Expected InvalidRequest, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_settings_override_in_range() {
        let json = r#"{
            "date": "2026-01-13",
            "entries": [],
            "settings": {"night_time_start_hour": 23, "night_time_end_hour": 0}
        }"#;
        let request: CalculationRequest = serde_json::from_str(json).unwrap();
        assert!(request.validate(&catalog()).is_ok());
    }
}
