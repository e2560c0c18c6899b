//! Night-window and holiday detection.
//!
//! This module decides whether a clock hour falls inside the configured night
//! window and whether a calendar day counts as a holiday.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::models::{DayInfo, WorkSettings};

/// Why a day counts as a holiday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HolidayReason {
    /// The day is a Sunday.
    Sunday,
    /// The day carries holiday leave and holidays are treated as overtime.
    HolidayLeave,
}

impl std::fmt::Display for HolidayReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HolidayReason::Sunday => write!(f, "Sunday"),
            HolidayReason::HolidayLeave => write!(f, "holiday leave"),
        }
    }
}

/// Returns true when `hour` falls inside the night window.
///
/// A window whose end is lower than its start wraps midnight.
///
/// # Example
///
/// ```
/// use timecard_engine::calculation::is_night_hour;
///
/// assert!(is_night_hour(23, 22, 6));
/// assert!(is_night_hour(2, 22, 6));
/// assert!(!is_night_hour(14, 22, 6));
/// assert!(is_night_hour(3, 0, 5));
/// assert!(!is_night_hour(5, 0, 5));
/// ```
pub fn is_night_hour(hour: u32, night_start_hour: u32, night_end_hour: u32) -> bool {
    if night_end_hour < night_start_hour {
        hour >= night_start_hour || hour < night_end_hour
    } else {
        night_start_hour <= hour && hour < night_end_hour
    }
}

/// Determines whether a day counts as a holiday.
///
/// Sundays always do. Holiday leave (the symbolic tag or the legacy code)
/// only does when `treat_holiday_as_overtime` is set.
///
/// # Example
///
/// ```
/// use timecard_engine::calculation::{detect_holiday, HolidayReason};
/// use timecard_engine::models::WorkSettings;
/// use chrono::NaiveDate;
///
/// let settings = WorkSettings::default();
/// // 2026-01-18 is a Sunday
/// let sunday = NaiveDate::from_ymd_opt(2026, 1, 18).unwrap();
/// assert_eq!(detect_holiday(sunday, None, &settings), Some(HolidayReason::Sunday));
///
/// let monday = NaiveDate::from_ymd_opt(2026, 1, 19).unwrap();
/// assert_eq!(detect_holiday(monday, None, &settings), None);
/// ```
pub fn detect_holiday(
    date: NaiveDate,
    day_info: Option<&DayInfo>,
    settings: &WorkSettings,
) -> Option<HolidayReason> {
    let holiday_leave = day_info.is_some_and(DayInfo::is_holiday_leave);

    if holiday_leave && settings.treat_holiday_as_overtime {
        Some(HolidayReason::HolidayLeave)
    } else if date.weekday() == Weekday::Sun {
        Some(HolidayReason::Sunday)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Leave;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn leave_day(leave_type: &str) -> DayInfo {
        DayInfo {
            leave: Some(Leave {
                leave_type: leave_type.to_string(),
                hours: None,
            }),
            shift: None,
        }
    }

    // ==========================================================================
    // NW: night window
    // ==========================================================================
    #[test]
    fn test_nw_001_wrapping_window_every_hour() {
        let night: Vec<u32> = (0..24).filter(|h| is_night_hour(*h, 22, 6)).collect();
        assert_eq!(night, vec![0, 1, 2, 3, 4, 5, 22, 23]);
    }

    #[test]
    fn test_nw_002_non_wrapping_window_every_hour() {
        let night: Vec<u32> = (0..24).filter(|h| is_night_hour(*h, 1, 4)).collect();
        assert_eq!(night, vec![1, 2, 3]);
    }

    #[test]
    fn test_nw_003_empty_window() {
        assert!((0..24).all(|h| !is_night_hour(h, 5, 5)));
    }

    // ==========================================================================
    // HD: holiday detection
    // ==========================================================================
    #[test]
    fn test_hd_001_holiday_tag_with_overtime_flag() {
        let settings = WorkSettings::default();
        let info = leave_day("holiday");
        assert_eq!(
            detect_holiday(make_date("2026-01-14"), Some(&info), &settings),
            Some(HolidayReason::HolidayLeave)
        );
    }

    #[test]
    fn test_hd_002_legacy_code_with_overtime_flag() {
        let settings = WorkSettings::default();
        let info = leave_day("code-1");
        assert_eq!(
            detect_holiday(make_date("2026-01-14"), Some(&info), &settings),
            Some(HolidayReason::HolidayLeave)
        );
    }

    #[test]
    fn test_hd_003_holiday_leave_ignored_without_flag() {
        let settings = WorkSettings {
            treat_holiday_as_overtime: false,
            ..WorkSettings::default()
        };
        let info = leave_day("holiday");
        assert_eq!(
            detect_holiday(make_date("2026-01-14"), Some(&info), &settings),
            None
        );
    }

    #[test]
    fn test_hd_004_sunday_regardless_of_flag() {
        let settings = WorkSettings {
            treat_holiday_as_overtime: false,
            ..WorkSettings::default()
        };
        assert_eq!(
            detect_holiday(make_date("2026-01-18"), None, &settings),
            Some(HolidayReason::Sunday)
        );
    }

    #[test]
    fn test_hd_005_other_leave_is_not_holiday() {
        let settings = WorkSettings::default();
        let info = leave_day("sick");
        assert_eq!(
            detect_holiday(make_date("2026-01-17"), Some(&info), &settings),
            None
        );
    }
}
