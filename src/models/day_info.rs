//! Per-day metadata: leave and assigned shift.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Leave tag that marks a public holiday.
pub const HOLIDAY_LEAVE_TAG: &str = "holiday";

/// Catalog code that legacy data uses for a public holiday.
pub const LEGACY_HOLIDAY_LEAVE_CODE: &str = "code-1";

/// Leave recorded against a day.
///
/// When `hours` is present the leave is partial and reduces the day's
/// standard budget; otherwise it covers the full day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leave {
    /// Raw leave type, either a symbolic tag or a `code-<N>` catalog reference.
    #[serde(rename = "type")]
    pub leave_type: String,
    /// Hours of partial leave.
    #[serde(default)]
    pub hours: Option<Decimal>,
}

impl Leave {
    /// Returns true when the leave marks a public holiday.
    ///
    /// Both the symbolic tag and the legacy catalog code are accepted.
    ///
    /// # Example
    ///
    /// ```
    /// use timecard_engine::models::Leave;
    ///
    /// let tagged = Leave { leave_type: "holiday".to_string(), hours: None };
    /// let legacy = Leave { leave_type: "code-1".to_string(), hours: None };
    /// let sick = Leave { leave_type: "sick".to_string(), hours: None };
    /// assert!(tagged.is_holiday());
    /// assert!(legacy.is_holiday());
    /// assert!(!sick.is_holiday());
    /// ```
    pub fn is_holiday(&self) -> bool {
        self.leave_type == HOLIDAY_LEAVE_TAG || self.leave_type == LEGACY_HOLIDAY_LEAVE_CODE
    }

    /// Returns the hours to deduct from the standard budget.
    ///
    /// Full-day leave deducts nothing here.
    pub fn partial_hours(&self) -> Decimal {
        self.hours.unwrap_or(Decimal::ZERO)
    }
}

/// Optional metadata attached to a calendar day.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayInfo {
    /// Leave taken on the day.
    #[serde(default)]
    pub leave: Option<Leave>,
    /// Identifier of the scheduled shift.
    #[serde(default)]
    pub shift: Option<String>,
}

impl DayInfo {
    /// Returns true when the day's leave marks a public holiday.
    pub fn is_holiday_leave(&self) -> bool {
        self.leave.as_ref().is_some_and(Leave::is_holiday)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_leave_hours() {
        let leave = Leave {
            leave_type: "permit".to_string(),
            hours: Some(Decimal::new(4, 0)),
        };
        assert_eq!(leave.partial_hours(), Decimal::new(4, 0));
    }

    #[test]
    fn test_full_day_leave_deducts_nothing() {
        let leave = Leave {
            leave_type: "vacation".to_string(),
            hours: None,
        };
        assert_eq!(leave.partial_hours(), Decimal::ZERO);
    }

    #[test]
    fn test_deserialize_day_info() {
        let json = r#"{ "leave": { "type": "holiday" }, "shift": "morning" }"#;
        let info: DayInfo = serde_json::from_str(json).unwrap();

        assert!(info.is_holiday_leave());
        assert_eq!(info.shift.as_deref(), Some("morning"));
    }

    #[test]
    fn test_empty_day_info_is_not_holiday() {
        let info: DayInfo = serde_json::from_str("{}").unwrap();
        assert!(!info.is_holiday_leave());
        assert!(info.shift.is_none());
    }
}
