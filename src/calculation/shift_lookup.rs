//! Shift catalog lookup.
//!
//! Resolves the shift identifier stored on a day to its catalog entry.

use crate::models::{DayInfo, Shift, WorkSettings};

/// Finds a shift in the catalog by id.
///
/// # Example
///
/// ```
/// use timecard_engine::calculation::find_shift;
/// use timecard_engine::models::{Shift, WorkSettings};
///
/// let settings = WorkSettings {
///     shifts: vec![Shift {
///         id: "morning".to_string(),
///         name: "Morning".to_string(),
///         start_hour: Some(6),
///         end_hour: Some(14),
///         color: None,
///         short_code: Some("M".to_string()),
///     }],
///     ..WorkSettings::default()
/// };
///
/// assert_eq!(find_shift(&settings, "morning").map(|s| s.name.as_str()), Some("Morning"));
/// assert!(find_shift(&settings, "evening").is_none());
/// ```
pub fn find_shift<'a>(settings: &'a WorkSettings, shift_id: &str) -> Option<&'a Shift> {
    settings.shifts.iter().find(|s| s.id == shift_id)
}

/// Returns the shift assigned to a day, if any is named and known.
pub fn shift_for_day<'a>(
    settings: &'a WorkSettings,
    day_info: Option<&DayInfo>,
) -> Option<&'a Shift> {
    let shift_id = day_info?.shift.as_deref()?;
    find_shift(settings, shift_id)
}

/// Returns `(start_hour, end_hour)` when both bounds are set.
pub fn shift_hours(shift: &Shift) -> Option<(u32, u32)> {
    Some((shift.start_hour?, shift.end_hour?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings_with(shifts: Vec<Shift>) -> WorkSettings {
        WorkSettings {
            shifts,
            ..WorkSettings::default()
        }
    }

    fn shift(id: &str, start: Option<u32>, end: Option<u32>) -> Shift {
        Shift {
            id: id.to_string(),
            name: id.to_uppercase(),
            start_hour: start,
            end_hour: end,
            color: Some("#ffcc00".to_string()),
            short_code: None,
        }
    }

    #[test]
    fn test_shift_for_day_resolves_named_shift() {
        let settings = settings_with(vec![
            shift("a", Some(6), Some(14)),
            shift("b", Some(14), Some(22)),
        ]);
        let info = DayInfo {
            leave: None,
            shift: Some("b".to_string()),
        };

        let found = shift_for_day(&settings, Some(&info)).unwrap();
        assert_eq!(found.name, "B");
        assert_eq!(shift_hours(found), Some((14, 22)));
    }

    #[test]
    fn test_shift_for_day_without_info_or_name() {
        let settings = settings_with(vec![shift("a", Some(6), Some(14))]);
        assert!(shift_for_day(&settings, None).is_none());
        assert!(shift_for_day(&settings, Some(&DayInfo::default())).is_none());
    }

    #[test]
    fn test_unknown_shift_id_is_none() {
        let settings = settings_with(vec![shift("a", Some(6), Some(14))]);
        let info = DayInfo {
            leave: None,
            shift: Some("zzz".to_string()),
        };
        assert!(shift_for_day(&settings, Some(&info)).is_none());
    }

    #[test]
    fn test_half_set_shift_has_no_hours() {
        assert_eq!(shift_hours(&shift("a", Some(6), None)), None);
        assert_eq!(shift_hours(&shift("a", None, Some(14))), None);
    }
}
