//! Clock-in/clock-out entry model.
//!
//! This module defines the [`TimeEntry`] struct and [`EntryType`] enum for
//! representing the raw timestamps recorded on a timecard.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Direction of a clock event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryType {
    /// Clock-in.
    In,
    /// Clock-out.
    Out,
}

/// A single raw timestamp recorded on the timecard.
///
/// Entries for a day are expected to alternate in/out once sorted by
/// timestamp; pairs that do not are skipped rather than rejected.
///
/// # Example
///
/// ```
/// use timecard_engine::models::{EntryType, TimeEntry};
/// use chrono::NaiveDateTime;
///
/// let entry = TimeEntry {
///     id: "e1".to_string(),
///     timestamp: NaiveDateTime::parse_from_str("2026-01-13 09:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     entry_type: EntryType::In,
/// };
/// assert!(entry.is_in());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeEntry {
    /// Stable, unique identifier of the entry.
    pub id: String,
    /// When the event happened (local wall-clock time).
    pub timestamp: NaiveDateTime,
    /// Whether this is a clock-in or clock-out.
    #[serde(rename = "type")]
    pub entry_type: EntryType,
}

impl TimeEntry {
    /// Returns true for a clock-in entry.
    pub fn is_in(&self) -> bool {
        self.entry_type == EntryType::In
    }

    /// Returns true for a clock-out entry.
    pub fn is_out(&self) -> bool {
        self.entry_type == EntryType::Out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_entry_with_type_field() {
        let json = r#"{
            "id": "e1",
            "timestamp": "2026-01-13T09:00:00",
            "type": "in"
        }"#;

        let entry: TimeEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.id, "e1");
        assert_eq!(entry.entry_type, EntryType::In);
        assert!(entry.is_in());
        assert!(!entry.is_out());
    }

    #[test]
    fn test_serialize_out_entry() {
        let entry = TimeEntry {
            id: "e2".to_string(),
            timestamp: NaiveDateTime::parse_from_str("2026-01-13 17:00:00", "%Y-%m-%d %H:%M:%S")
                .unwrap(),
            entry_type: EntryType::Out,
        };

        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"type\":\"out\""));
    }
}
