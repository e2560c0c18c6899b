//! Core data models for the timecard engine.
//!
//! This module contains all the domain models used throughout the engine.

mod calculation_result;
mod day_info;
mod manual_entry;
mod settings;
mod time_entry;
mod work_summary;

pub use calculation_result::{AuditStep, AuditTrace, DayCalculationResult};
pub use day_info::{DayInfo, HOLIDAY_LEAVE_TAG, LEGACY_HOLIDAY_LEAVE_CODE, Leave};
pub use manual_entry::{ManualEntryKind, ManualOvertimeEntry, OvertimeTag};
pub use settings::{Shift, WorkSettings};
pub use time_entry::{EntryType, TimeEntry};
pub use work_summary::{TimeBucket, WorkDaySummary, WorkIntervalSummary};
