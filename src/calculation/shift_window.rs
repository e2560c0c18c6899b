//! Shift-boundary resolution.
//!
//! Anchors the day's scheduled shift to concrete timestamps, derives the floor
//! of the standard-hours window and decides whether post-shift work counts as
//! overtime.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::models::{AuditStep, DayInfo, WorkSettings};

use super::calendar::{MS_PER_MINUTE, at_hour, format_duration_ms, hours_to_ms};
use super::interval_builder::RawInterval;
use super::shift_lookup::{shift_for_day, shift_hours};

/// Post-shift work up to this total is plain excess; beyond it, overtime.
pub const POST_SHIFT_TOLERANCE_MS: i64 = 15 * MS_PER_MINUTE;

/// A shift anchored to concrete timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftWindow {
    /// Catalog id of the shift.
    pub shift_id: String,
    /// Start of the shift on the day.
    pub start: NaiveDateTime,
    /// End of the shift; on the next day for overnight shifts.
    pub end: NaiveDateTime,
}

impl ShiftWindow {
    /// Length of the shift in milliseconds.
    pub fn span_ms(&self) -> i64 {
        (self.end - self.start).num_milliseconds()
    }
}

/// The result of resolving the shift for a day.
#[derive(Debug, Clone)]
pub struct ShiftResolution {
    /// The anchored shift, when one is named and has both bounds.
    pub shift: Option<ShiftWindow>,
    /// Work before this instant is null time.
    pub standard_floor: Option<NaiveDateTime>,
    /// Total time worked after the shift end across all intervals.
    pub post_shift_ms: i64,
    /// Whether post-shift work is overtime rather than excess.
    pub post_shift_overtime: bool,
    /// The audit step recording this resolution.
    pub audit_step: AuditStep,
}

/// Anchors the day's shift, if any, to timestamps.
///
/// Returns `None` when no shift is named, the id is unknown, or either bound
/// is missing.
pub fn anchor_shift(
    date: NaiveDate,
    settings: &WorkSettings,
    day_info: Option<&DayInfo>,
) -> Option<ShiftWindow> {
    let shift = shift_for_day(settings, day_info)?;
    let (start_hour, end_hour) = shift_hours(shift)?;

    let start = at_hour(date, start_hour);
    let end = if end_hour < start_hour {
        at_hour(date, end_hour.saturating_add(24))
    } else {
        at_hour(date, end_hour)
    };

    Some(ShiftWindow {
        shift_id: shift.id.clone(),
        start,
        end,
    })
}

/// Returns the start of the standard window for an anchored shift.
///
/// A shift longer than the standard day keeps only its last
/// `standard_day_ms` as the standard window.
pub fn standard_window_floor(shift: &ShiftWindow, standard_day_ms: i64) -> NaiveDateTime {
    if shift.span_ms() > standard_day_ms {
        shift.end - Duration::milliseconds(standard_day_ms)
    } else {
        shift.start
    }
}

/// Sums the time worked after `shift_end` across all intervals.
pub fn post_shift_ms(intervals: &[RawInterval], shift_end: NaiveDateTime) -> i64 {
    intervals
        .iter()
        .map(|i| (i.end - i.start.max(shift_end)).num_milliseconds().max(0))
        .sum()
}

/// Resolves the shift for a day and everything derived from it.
///
/// # Example
///
/// ```
/// use timecard_engine::calculation::resolve_shift;
/// use timecard_engine::models::WorkSettings;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2026, 1, 13).unwrap();
/// let resolution = resolve_shift(date, &WorkSettings::default(), None, &[], 1);
/// assert!(resolution.shift.is_none());
/// assert!(resolution.standard_floor.is_none());
/// assert!(!resolution.post_shift_overtime);
/// ```
pub fn resolve_shift(
    date: NaiveDate,
    settings: &WorkSettings,
    day_info: Option<&DayInfo>,
    intervals: &[RawInterval],
    step_number: u32,
) -> ShiftResolution {
    let requested = day_info.and_then(|d| d.shift.clone());
    let shift = anchor_shift(date, settings, day_info);
    let standard_day_ms = hours_to_ms(settings.standard_day_hours);

    let standard_floor = shift.as_ref().map(|s| standard_window_floor(s, standard_day_ms));
    let post_shift = shift
        .as_ref()
        .map(|s| post_shift_ms(intervals, s.end))
        .unwrap_or(0);
    let post_shift_overtime = shift.is_some() && post_shift > POST_SHIFT_TOLERANCE_MS;

    let reasoning = match (&shift, &requested) {
        (Some(s), _) => format!(
            "Shift '{}' anchored {} to {}; standard window starts at {}; {} worked after shift end is {}",
            s.shift_id,
            s.start,
            s.end,
            standard_floor.map(|f| f.to_string()).unwrap_or_default(),
            format_duration_ms(post_shift),
            if post_shift_overtime {
                "overtime"
            } else {
                "within tolerance"
            }
        ),
        (None, Some(id)) => format!(
            "Shift '{}' is unknown or has no complete bounds; no standard window floor",
            id
        ),
        (None, None) => "No shift scheduled; no standard window floor".to_string(),
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "shift_resolution".to_string(),
        rule_name: "Shift Boundary Resolution".to_string(),
        input: serde_json::json!({
            "shift": requested,
            "standard_day_ms": standard_day_ms,
        }),
        output: serde_json::json!({
            "shift_start": shift.as_ref().map(|s| s.start),
            "shift_end": shift.as_ref().map(|s| s.end),
            "standard_floor": standard_floor,
            "post_shift_ms": post_shift,
            "post_shift_overtime": post_shift_overtime,
        }),
        reasoning,
    };

    ShiftResolution {
        shift,
        standard_floor,
        post_shift_ms: post_shift,
        post_shift_overtime,
        audit_step,
    }
}
