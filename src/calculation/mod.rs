//! Calculation logic for the timecard engine.
//!
//! This module contains the stages of daily time accounting: pairing clock
//! entries into intervals, resolving the scheduled shift, detecting holidays
//! and night hours, segmenting intervals into time buckets, folding in manual
//! overtime entries and deducting the automatic break. [`calculate_work_day`]
//! runs them all in order.

mod aggregation;
mod break_deduction;
mod calendar;
mod day_detection;
mod engine;
mod interval_builder;
mod reconciliation;
mod segmentation;
mod shift_lookup;
mod shift_window;

pub use aggregation::{DailyAggregation, aggregate_day, manual_entry_bucket};
pub use break_deduction::{BreakDeductionResult, apply_auto_break};
pub use calendar::{
    MS_PER_HOUR, MS_PER_MINUTE, add_days, add_months, at_hour, date_key, days_in_month,
    format_duration_clock, format_duration_ms, hours_to_ms, month_dates, parse_date_key,
    start_of_week, week_dates,
};
pub use day_detection::{HolidayReason, detect_holiday, is_night_hour};
pub use engine::{WorkDayCalculation, calculate_work_day};
pub use interval_builder::{IntervalBuildResult, RawInterval, build_intervals};
pub use reconciliation::{is_pair_consumed, used_entry_ids};
pub use segmentation::{
    ChunkClassification, IntervalClassification, SegmentationContext, breakpoints,
    classify_interval, initial_standard_budget,
};
pub use shift_lookup::{find_shift, shift_for_day, shift_hours};
pub use shift_window::{
    POST_SHIFT_TOLERANCE_MS, ShiftResolution, ShiftWindow, anchor_shift, post_shift_ms,
    resolve_shift, standard_window_floor,
};
