//! Breakpoint segmentation of raw work intervals.
//!
//! Each raw interval is cut at the night-window boundaries and the shift end,
//! and every resulting chunk is classified at its midpoint. Standard time is
//! drawn from a running budget that the caller threads through the day's
//! intervals in chronological order.

use chrono::{NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::models::{AuditStep, DayInfo, TimeBucket, WorkIntervalSummary, WorkSettings};

use super::calendar::{at_hour, format_duration_ms, hours_to_ms};
use super::day_detection::is_night_hour;
use super::interval_builder::RawInterval;
use super::shift_window::ShiftResolution;

/// Day-level facts every interval of the day is classified against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentationContext {
    /// Clock hour the night window opens.
    pub night_start_hour: u32,
    /// Clock hour the night window closes.
    pub night_end_hour: u32,
    /// Night window start anchored to the day.
    pub night_start: NaiveDateTime,
    /// Night window end anchored to the day, or the next day when it wraps.
    pub night_end: NaiveDateTime,
    /// Whether the day counts as a holiday.
    pub is_holiday: bool,
    /// Work before this instant is null time.
    pub standard_floor: Option<NaiveDateTime>,
    /// End of the anchored shift.
    pub shift_end: Option<NaiveDateTime>,
    /// Whether post-shift work is overtime rather than excess.
    pub post_shift_overtime: bool,
}

impl SegmentationContext {
    /// Builds the context for a day from its settings and shift resolution.
    pub fn new(
        date: NaiveDate,
        settings: &WorkSettings,
        is_holiday: bool,
        resolution: &ShiftResolution,
    ) -> Self {
        let night_start_hour = settings.night_time_start_hour;
        let night_end_hour = settings.night_time_end_hour;
        let night_end = if settings.night_window_wraps() {
            at_hour(date, night_end_hour.saturating_add(24))
        } else {
            at_hour(date, night_end_hour)
        };

        Self {
            night_start_hour,
            night_end_hour,
            night_start: at_hour(date, night_start_hour),
            night_end,
            is_holiday,
            standard_floor: resolution.standard_floor,
            shift_end: resolution.shift.as_ref().map(|s| s.end),
            post_shift_overtime: resolution.post_shift_overtime,
        }
    }

    fn has_shift(&self) -> bool {
        self.shift_end.is_some()
    }
}

/// A chunk of an interval between two consecutive breakpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkClassification {
    /// Start of the chunk.
    pub start: NaiveDateTime,
    /// End of the chunk.
    pub end: NaiveDateTime,
    /// Whether the chunk midpoint is inside the night window.
    pub is_night: bool,
    /// Whether the chunk midpoint is at or after the shift end.
    pub is_post_shift: bool,
    /// How the chunk's time was distributed.
    pub allocations: Vec<(TimeBucket, i64)>,
}

/// The result of classifying one raw interval.
#[derive(Debug, Clone)]
pub struct IntervalClassification {
    /// The interval breakdown.
    pub summary: WorkIntervalSummary,
    /// The classified chunks in order.
    pub chunks: Vec<ChunkClassification>,
    /// Standard budget left for later intervals.
    pub remaining_standard_ms: i64,
    /// The audit step recording this classification.
    pub audit_step: AuditStep,
}

/// Returns the standard-time budget for the day.
///
/// Partial leave hours are deducted from the standard day; the result is
/// floored at zero.
///
/// # Example
///
/// ```
/// use timecard_engine::calculation::initial_standard_budget;
/// use timecard_engine::models::{DayInfo, Leave, WorkSettings};
/// use rust_decimal::Decimal;
///
/// let info = DayInfo {
///     leave: Some(Leave { leave_type: "permit".to_string(), hours: Some(Decimal::new(3, 0)) }),
///     shift: None,
/// };
/// assert_eq!(initial_standard_budget(&WorkSettings::default(), Some(&info)), 5 * 3_600_000);
/// assert_eq!(initial_standard_budget(&WorkSettings::default(), None), 8 * 3_600_000);
/// ```
pub fn initial_standard_budget(settings: &WorkSettings, day_info: Option<&DayInfo>) -> i64 {
    let leave_ms = day_info
        .and_then(|d| d.leave.as_ref())
        .map(|l| hours_to_ms(l.partial_hours()))
        .unwrap_or(0);
    hours_to_ms(settings.standard_day_hours)
        .saturating_sub(leave_ms)
        .max(0)
}

/// Returns the sorted, de-duplicated cut points of `start..end`.
///
/// The bounds are always included; night boundaries and the shift end are
/// included only when strictly inside. A wrapping night window contributes
/// only its anchored pair (start today, end tomorrow), so the same-day end
/// hour is not a cut point and an early-morning interval is classified by its
/// midpoint alone.
pub fn breakpoints(
    start: NaiveDateTime,
    end: NaiveDateTime,
    ctx: &SegmentationContext,
) -> Vec<NaiveDateTime> {
    let mut points = vec![start, end];
    points.extend(
        [Some(ctx.night_start), Some(ctx.night_end), ctx.shift_end]
            .into_iter()
            .flatten()
            .filter(|p| *p > start && *p < end),
    );
    points.sort();
    points.dedup();
    points
}

/// Classifies a raw interval against the day context.
///
/// Time before the standard floor is null. The rest is cut at breakpoints and
/// each chunk is routed by its midpoint:
///
/// - post-shift with the tolerance exceeded: overtime by holiday/night
/// - post-shift within tolerance: excess
/// - otherwise: standard while budget remains, then excess when a shift is
///   scheduled or overtime by holiday/night when not
///
/// `total_work_ms` is always the full raw span, and the seven buckets always
/// sum to it.
///
/// # Example
///
/// ```
/// use timecard_engine::calculation::{
///     classify_interval, resolve_shift, RawInterval, SegmentationContext,
/// };
/// use timecard_engine::models::WorkSettings;
/// use chrono::{NaiveDate, NaiveDateTime};
///
/// let at = |s: &str| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap();
/// let date = NaiveDate::from_ymd_opt(2026, 1, 13).unwrap();
/// let settings = WorkSettings::default();
/// let resolution = resolve_shift(date, &settings, None, &[], 1);
/// let ctx = SegmentationContext::new(date, &settings, false, &resolution);
///
/// let interval = RawInterval {
///     start: at("2026-01-13 09:00"),
///     end: at("2026-01-13 19:00"),
///     opening_entry_id: "1".to_string(),
///     closing_entry_id: "2".to_string(),
/// };
///
/// let result = classify_interval(&interval, &ctx, 8 * 3_600_000, 2);
/// assert_eq!(result.summary.standard_work_ms, 8 * 3_600_000);
/// assert_eq!(result.summary.overtime_diurnal_ms, 2 * 3_600_000);
/// assert_eq!(result.remaining_standard_ms, 0);
/// ```
pub fn classify_interval(
    interval: &RawInterval,
    ctx: &SegmentationContext,
    remaining_standard_ms: i64,
    step_number: u32,
) -> IntervalClassification {
    let mut summary =
        WorkIntervalSummary::empty(interval.start, interval.end, &interval.closing_entry_id);
    let mut remaining = remaining_standard_ms.max(0);
    let mut chunks = Vec::new();

    let effective_start = match ctx.standard_floor {
        Some(floor) => interval.start.max(floor),
        None => interval.start,
    };

    if interval.end <= effective_start {
        summary.add(TimeBucket::Null, summary.total_work_ms);
    } else {
        let null_ms = (effective_start - interval.start).num_milliseconds().max(0);
        summary.add(TimeBucket::Null, null_ms);

        for window in breakpoints(effective_start, interval.end, ctx).windows(2) {
            let chunk = classify_chunk(window[0], window[1], ctx, &mut remaining);
            for (bucket, ms) in &chunk.allocations {
                summary.add(*bucket, *ms);
            }
            chunks.push(chunk);
        }
    }

    let audit_step = AuditStep {
        step_number,
        rule_id: "interval_classification".to_string(),
        rule_name: "Interval Classification".to_string(),
        input: serde_json::json!({
            "start": interval.start,
            "end": interval.end,
            "closing_entry_id": interval.closing_entry_id,
            "effective_start": effective_start,
            "remaining_standard_ms": remaining_standard_ms,
        }),
        output: serde_json::json!({
            "chunks": chunks,
            "summary": summary,
            "remaining_standard_ms": remaining,
        }),
        reasoning: format!(
            "{} worked from {} to {}: {} null, {} standard, {} excess, {} overtime",
            format_duration_ms(summary.total_work_ms),
            interval.start,
            interval.end,
            format_duration_ms(summary.null_hours_ms),
            format_duration_ms(summary.standard_work_ms),
            format_duration_ms(summary.excess_hours_ms),
            format_duration_ms(summary.overtime_ms())
        ),
    };

    IntervalClassification {
        summary,
        chunks,
        remaining_standard_ms: remaining,
        audit_step,
    }
}

fn classify_chunk(
    start: NaiveDateTime,
    end: NaiveDateTime,
    ctx: &SegmentationContext,
    remaining: &mut i64,
) -> ChunkClassification {
    let duration_ms = (end - start).num_milliseconds();
    let midpoint = start + (end - start) / 2;
    let is_night = is_night_hour(midpoint.hour(), ctx.night_start_hour, ctx.night_end_hour);
    let is_post_shift = ctx.shift_end.is_some_and(|shift_end| midpoint >= shift_end);
    let overtime = TimeBucket::overtime(ctx.is_holiday, is_night);

    let mut allocations = Vec::new();

    if is_post_shift {
        let bucket = if ctx.post_shift_overtime {
            overtime
        } else {
            TimeBucket::Excess
        };
        allocations.push((bucket, duration_ms));
    } else {
        let standard_ms = duration_ms.min(*remaining);
        *remaining -= standard_ms;
        if standard_ms > 0 {
            allocations.push((TimeBucket::Standard, standard_ms));
        }

        let leftover_ms = duration_ms - standard_ms;
        if leftover_ms > 0 {
            let bucket = if ctx.has_shift() {
                TimeBucket::Excess
            } else {
                overtime
            };
            allocations.push((bucket, leftover_ms));
        }
    }

    ChunkClassification {
        start,
        end,
        is_night,
        is_post_shift,
        allocations,
    }
}
