//! Work settings and shift catalog models.
//!
//! [`WorkSettings`] carries the contractual parameters that drive
//! classification: the standard day length, the night window, the shift
//! catalog and the automatic break rule.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A scheduled shift in the catalog.
///
/// A shift only anchors the day when both `start_hour` and `end_hour` are set.
/// An `end_hour` lower than `start_hour` denotes an overnight shift.
///
/// # Example
///
/// ```
/// use timecard_engine::models::Shift;
///
/// let night = Shift {
///     id: "night".to_string(),
///     name: "Night".to_string(),
///     start_hour: Some(22),
///     end_hour: Some(6),
///     color: None,
///     short_code: Some("N".to_string()),
/// };
/// assert!(night.is_overnight());
/// assert!(night.has_bounds());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shift {
    /// Identifier referenced by [`DayInfo::shift`](crate::models::DayInfo).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Clock hour (0-23) the shift starts.
    #[serde(default)]
    pub start_hour: Option<u32>,
    /// Clock hour (0-23) the shift ends.
    #[serde(default)]
    pub end_hour: Option<u32>,
    /// Display colour, e.g. `#3366ff`.
    #[serde(default)]
    pub color: Option<String>,
    /// Short label shown in compact calendar cells.
    #[serde(default)]
    pub short_code: Option<String>,
}

impl Shift {
    /// Returns true when both bounds are set.
    pub fn has_bounds(&self) -> bool {
        self.start_hour.is_some() && self.end_hour.is_some()
    }

    /// Returns true when the shift ends on the following calendar day.
    pub fn is_overnight(&self) -> bool {
        matches!((self.start_hour, self.end_hour), (Some(start), Some(end)) if end < start)
    }
}

/// Settings that drive the classification of a day's work.
///
/// Every field has a default so that partial YAML or JSON documents
/// deserialize cleanly. Values are not validated.
///
/// # Example
///
/// ```
/// use timecard_engine::models::WorkSettings;
/// use rust_decimal::Decimal;
///
/// let settings = WorkSettings::default();
/// assert_eq!(settings.standard_day_hours, Decimal::new(8, 0));
/// assert!(settings.night_window_wraps());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkSettings {
    /// Contractual hours for a standard working day.
    pub standard_day_hours: Decimal,
    /// Clock hour the night window opens.
    pub night_time_start_hour: u32,
    /// Clock hour the night window closes; lower than the start wraps midnight.
    pub night_time_end_hour: u32,
    /// Shift catalog, in display order.
    pub shifts: Vec<Shift>,
    /// Whether holiday leave days count as holiday overtime.
    pub treat_holiday_as_overtime: bool,
    /// Whether the unpaid automatic break is deducted.
    pub deduct_auto_break: bool,
    /// Worked hours that must be exceeded before the break is deducted.
    pub auto_break_threshold_hours: Decimal,
    /// Length of the automatic break in minutes.
    pub auto_break_minutes: i64,
}

impl Default for WorkSettings {
    fn default() -> Self {
        Self {
            standard_day_hours: Decimal::new(8, 0),
            night_time_start_hour: 22,
            night_time_end_hour: 6,
            shifts: Vec::new(),
            treat_holiday_as_overtime: true,
            deduct_auto_break: false,
            auto_break_threshold_hours: Decimal::new(6, 0),
            auto_break_minutes: 30,
        }
    }
}

impl WorkSettings {
    /// Returns true when the night window spans midnight.
    pub fn night_window_wraps(&self) -> bool {
        self.night_time_end_hour < self.night_time_start_hour
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shift(start: Option<u32>, end: Option<u32>) -> Shift {
        Shift {
            id: "s".to_string(),
            name: "S".to_string(),
            start_hour: start,
            end_hour: end,
            color: None,
            short_code: None,
        }
    }

    #[test]
    fn test_day_shift_is_not_overnight() {
        let s = shift(Some(8), Some(16));
        assert!(s.has_bounds());
        assert!(!s.is_overnight());
    }

    #[test]
    fn test_half_set_shift_has_no_bounds() {
        assert!(!shift(Some(8), None).has_bounds());
        assert!(!shift(None, Some(16)).has_bounds());
        assert!(!shift(None, Some(2)).is_overnight());
    }

    #[test]
    fn test_partial_settings_fill_defaults() {
        let json = r#"{ "standard_day_hours": "7.5", "deduct_auto_break": true }"#;
        let settings: WorkSettings = serde_json::from_str(json).unwrap();

        assert_eq!(settings.standard_day_hours, Decimal::new(75, 1));
        assert!(settings.deduct_auto_break);
        assert_eq!(settings.night_time_start_hour, 22);
        assert_eq!(settings.auto_break_minutes, 30);
        assert!(settings.shifts.is_empty());
    }

    #[test]
    fn test_non_wrapping_night_window() {
        let settings = WorkSettings {
            night_time_start_hour: 0,
            night_time_end_hour: 5,
            ..WorkSettings::default()
        };
        assert!(!settings.night_window_wraps());
    }
}
