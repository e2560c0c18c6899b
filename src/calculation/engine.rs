//! Day classification entry point.
//!
//! [`calculate_work_day`] runs the full pipeline for one calendar day:
//! interval building, shift resolution, per-interval segmentation with a
//! threaded standard budget, daily aggregation and break deduction.

use chrono::NaiveDate;
use tracing::debug;

use crate::models::{
    AuditStep, DayInfo, ManualOvertimeEntry, TimeEntry, WorkDaySummary, WorkIntervalSummary,
    WorkSettings,
};

use super::aggregation::aggregate_day;
use super::break_deduction::apply_auto_break;
use super::day_detection::detect_holiday;
use super::interval_builder::build_intervals;
use super::segmentation::{
    IntervalClassification, SegmentationContext, classify_interval, initial_standard_budget,
};
use super::shift_window::resolve_shift;

/// The classification of one calendar day.
#[derive(Debug, Clone)]
pub struct WorkDayCalculation {
    /// Final day totals.
    pub summary: WorkDaySummary,
    /// Per-interval breakdowns in chronological order.
    pub intervals: Vec<WorkIntervalSummary>,
    /// Audit trail of every stage, in order.
    pub audit_steps: Vec<AuditStep>,
}

impl WorkDayCalculation {
    /// Splits the calculation into the day summary and interval detail.
    pub fn into_parts(self) -> (WorkDaySummary, Vec<WorkIntervalSummary>) {
        (self.summary, self.intervals)
    }
}

/// Classifies one calendar day of clock entries.
///
/// This is a pure function of its inputs: nothing is mutated and identical
/// inputs give identical outputs. It never fails; malformed pairs are skipped
/// and empty input gives an all-zero summary. `next_day_info` is accepted for
/// callers that already have it but does not affect the result.
///
/// # Example
///
/// ```
/// use timecard_engine::calculation::calculate_work_day;
/// use timecard_engine::models::{EntryType, TimeEntry, WorkSettings};
/// use chrono::{NaiveDate, NaiveDateTime};
///
/// let at = |s: &str| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap();
/// let entries = vec![
///     TimeEntry { id: "1".into(), timestamp: at("2026-01-13 09:00"), entry_type: EntryType::In },
///     TimeEntry { id: "2".into(), timestamp: at("2026-01-13 17:00"), entry_type: EntryType::Out },
/// ];
///
/// let (summary, intervals) = calculate_work_day(
///     NaiveDate::from_ymd_opt(2026, 1, 13).unwrap(),
///     &entries,
///     &WorkSettings::default(),
///     None,
///     None,
///     &[],
/// )
/// .into_parts();
///
/// assert_eq!(summary.standard_work_ms, 8 * 3_600_000);
/// assert_eq!(intervals.len(), 1);
/// ```
pub fn calculate_work_day(
    date: NaiveDate,
    entries: &[TimeEntry],
    settings: &WorkSettings,
    day_info: Option<&DayInfo>,
    _next_day_info: Option<&DayInfo>,
    manual_entries: &[ManualOvertimeEntry],
) -> WorkDayCalculation {
    let mut audit_steps = Vec::new();
    let mut step_number: u32 = 1;

    let built = build_intervals(entries, manual_entries, step_number);
    if !built.consumed_pairs.is_empty() {
        debug!(
            date = %date,
            consumed = built.consumed_pairs.len(),
            "Excluded pairs already justified by manual entries"
        );
    }
    audit_steps.push(built.audit_step);
    step_number += 1;

    let resolution = resolve_shift(date, settings, day_info, &built.intervals, step_number);
    debug!(
        date = %date,
        shift = ?resolution.shift.as_ref().map(|s| s.shift_id.as_str()),
        post_shift_ms = resolution.post_shift_ms,
        post_shift_overtime = resolution.post_shift_overtime,
        "Resolved shift window"
    );
    let holiday = detect_holiday(date, day_info, settings);
    let ctx = SegmentationContext::new(date, settings, holiday.is_some(), &resolution);
    audit_steps.push(resolution.audit_step);
    step_number += 1;

    let budget = initial_standard_budget(settings, day_info);
    let (classified, remaining_standard_ms) = built.intervals.iter().fold(
        (Vec::<IntervalClassification>::new(), budget),
        |(mut done, remaining), raw| {
            let next_step = step_number + done.len() as u32;
            let classification = classify_interval(raw, &ctx, remaining, next_step);
            let remaining = classification.remaining_standard_ms;
            done.push(classification);
            (done, remaining)
        },
    );
    step_number += classified.len() as u32;

    let mut intervals = Vec::with_capacity(classified.len());
    for classification in classified {
        intervals.push(classification.summary);
        audit_steps.push(classification.audit_step);
    }

    let aggregation = aggregate_day(&intervals, manual_entries, step_number);
    audit_steps.push(aggregation.audit_step);
    step_number += 1;

    let deduction = apply_auto_break(aggregation.summary, settings, step_number);
    if deduction.deducted_ms > 0 {
        debug!(
            date = %date,
            deducted_ms = deduction.deducted_ms,
            "Deducted automatic break"
        );
    }
    audit_steps.push(deduction.audit_step);

    debug!(
        date = %date,
        intervals = intervals.len(),
        holiday = ?holiday,
        remaining_standard_ms,
        total_work_ms = deduction.summary.total_work_ms,
        "Classified work day"
    );

    WorkDayCalculation {
        summary: deduction.summary,
        intervals,
        audit_steps,
    }
}
