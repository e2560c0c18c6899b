//! Derived per-interval and per-day time breakdowns.
//!
//! All durations are milliseconds. Within a [`WorkIntervalSummary`] the seven
//! buckets always add up to `total_work_ms`.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::OvertimeTag;

/// One of the buckets worked time is classified into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeBucket {
    /// Before the effective start of the standard window.
    Null,
    /// Counted against the standard day.
    Standard,
    /// Beyond standard but not overtime.
    Excess,
    /// Daytime overtime.
    OvertimeDiurnal,
    /// Night-time overtime.
    OvertimeNocturnal,
    /// Daytime holiday overtime.
    OvertimeHoliday,
    /// Night-time holiday overtime.
    OvertimeNocturnalHoliday,
}

impl TimeBucket {
    /// Picks the overtime bucket for a holiday/night combination.
    ///
    /// # Example
    ///
    /// ```
    /// use timecard_engine::models::TimeBucket;
    ///
    /// assert_eq!(TimeBucket::overtime(false, false), TimeBucket::OvertimeDiurnal);
    /// assert_eq!(TimeBucket::overtime(true, true), TimeBucket::OvertimeNocturnalHoliday);
    /// ```
    pub fn overtime(is_holiday: bool, is_night: bool) -> Self {
        match (is_holiday, is_night) {
            (false, false) => TimeBucket::OvertimeDiurnal,
            (false, true) => TimeBucket::OvertimeNocturnal,
            (true, false) => TimeBucket::OvertimeHoliday,
            (true, true) => TimeBucket::OvertimeNocturnalHoliday,
        }
    }
}

impl From<OvertimeTag> for TimeBucket {
    fn from(tag: OvertimeTag) -> Self {
        match tag {
            OvertimeTag::Diurnal => TimeBucket::OvertimeDiurnal,
            OvertimeTag::Nocturnal => TimeBucket::OvertimeNocturnal,
            OvertimeTag::Holiday => TimeBucket::OvertimeHoliday,
            OvertimeTag::NocturnalHoliday => TimeBucket::OvertimeNocturnalHoliday,
        }
    }
}

/// Classification of a single worked interval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkIntervalSummary {
    /// Clock-in time.
    pub start: NaiveDateTime,
    /// Clock-out time.
    pub end: NaiveDateTime,
    /// Id of the clock-out entry that closed the interval.
    pub closing_entry_id: String,
    /// Full raw span of the interval.
    pub total_work_ms: i64,
    /// Time before the effective start of the standard window.
    pub null_hours_ms: i64,
    /// Standard time.
    pub standard_work_ms: i64,
    /// Excess time.
    pub excess_hours_ms: i64,
    /// Daytime overtime.
    pub overtime_diurnal_ms: i64,
    /// Night-time overtime.
    pub overtime_nocturnal_ms: i64,
    /// Daytime holiday overtime.
    pub overtime_holiday_ms: i64,
    /// Night-time holiday overtime.
    pub overtime_nocturnal_holiday_ms: i64,
}

impl WorkIntervalSummary {
    /// Creates an empty summary spanning `start..end`.
    ///
    /// `total_work_ms` is set from the span; every bucket starts at zero.
    pub fn empty(start: NaiveDateTime, end: NaiveDateTime, closing_entry_id: &str) -> Self {
        Self {
            start,
            end,
            closing_entry_id: closing_entry_id.to_string(),
            total_work_ms: (end - start).num_milliseconds(),
            null_hours_ms: 0,
            standard_work_ms: 0,
            excess_hours_ms: 0,
            overtime_diurnal_ms: 0,
            overtime_nocturnal_ms: 0,
            overtime_holiday_ms: 0,
            overtime_nocturnal_holiday_ms: 0,
        }
    }

    /// Adds `ms` to a bucket. `total_work_ms` is not touched.
    pub fn add(&mut self, bucket: TimeBucket, ms: i64) {
        *bucket_slot(
            bucket,
            &mut self.null_hours_ms,
            &mut self.standard_work_ms,
            &mut self.excess_hours_ms,
            [
                &mut self.overtime_diurnal_ms,
                &mut self.overtime_nocturnal_ms,
                &mut self.overtime_holiday_ms,
                &mut self.overtime_nocturnal_holiday_ms,
            ],
        ) += ms;
    }

    /// Sum of all seven buckets.
    pub fn bucket_sum(&self) -> i64 {
        self.null_hours_ms
            + self.standard_work_ms
            + self.excess_hours_ms
            + self.overtime_ms()
    }

    /// Sum of the four overtime buckets.
    pub fn overtime_ms(&self) -> i64 {
        self.overtime_diurnal_ms
            + self.overtime_nocturnal_ms
            + self.overtime_holiday_ms
            + self.overtime_nocturnal_holiday_ms
    }
}

/// Day-level totals after manual entries and break deduction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkDaySummary {
    /// Total worked time, including manual entries.
    pub total_work_ms: i64,
    /// Time before the effective start of the standard window.
    pub null_hours_ms: i64,
    /// Standard time.
    pub standard_work_ms: i64,
    /// Excess time.
    pub excess_hours_ms: i64,
    /// Daytime overtime.
    pub overtime_diurnal_ms: i64,
    /// Night-time overtime.
    pub overtime_nocturnal_ms: i64,
    /// Daytime holiday overtime.
    pub overtime_holiday_ms: i64,
    /// Night-time holiday overtime.
    pub overtime_nocturnal_holiday_ms: i64,
}

impl WorkDaySummary {
    /// Adds `ms` to a bucket, saturating at the `i64` bounds. `total_work_ms`
    /// is not touched.
    pub fn add(&mut self, bucket: TimeBucket, ms: i64) {
        let slot = bucket_slot(
            bucket,
            &mut self.null_hours_ms,
            &mut self.standard_work_ms,
            &mut self.excess_hours_ms,
            [
                &mut self.overtime_diurnal_ms,
                &mut self.overtime_nocturnal_ms,
                &mut self.overtime_holiday_ms,
                &mut self.overtime_nocturnal_holiday_ms,
            ],
        );
        *slot = slot.saturating_add(ms);
    }

    /// Adds `ms` to `total_work_ms`, saturating at the `i64` bounds.
    pub fn add_total(&mut self, ms: i64) {
        self.total_work_ms = self.total_work_ms.saturating_add(ms);
    }

    /// Adds every bucket and the total of an interval.
    pub fn absorb(&mut self, interval: &WorkIntervalSummary) {
        self.add_total(interval.total_work_ms);
        self.add(TimeBucket::Null, interval.null_hours_ms);
        self.add(TimeBucket::Standard, interval.standard_work_ms);
        self.add(TimeBucket::Excess, interval.excess_hours_ms);
        self.add(TimeBucket::OvertimeDiurnal, interval.overtime_diurnal_ms);
        self.add(TimeBucket::OvertimeNocturnal, interval.overtime_nocturnal_ms);
        self.add(TimeBucket::OvertimeHoliday, interval.overtime_holiday_ms);
        self.add(
            TimeBucket::OvertimeNocturnalHoliday,
            interval.overtime_nocturnal_holiday_ms,
        );
    }

    /// Sum of the four overtime buckets, saturating at the `i64` bounds.
    pub fn overtime_ms(&self) -> i64 {
        self.overtime_diurnal_ms
            .saturating_add(self.overtime_nocturnal_ms)
            .saturating_add(self.overtime_holiday_ms)
            .saturating_add(self.overtime_nocturnal_holiday_ms)
    }

    /// Returns true when nothing was recorded.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

fn bucket_slot<'a>(
    bucket: TimeBucket,
    null: &'a mut i64,
    standard: &'a mut i64,
    excess: &'a mut i64,
    overtime: [&'a mut i64; 4],
) -> &'a mut i64 {
    let [diurnal, nocturnal, holiday, nocturnal_holiday] = overtime;
    match bucket {
        TimeBucket::Null => null,
        TimeBucket::Standard => standard,
        TimeBucket::Excess => excess,
        TimeBucket::OvertimeDiurnal => diurnal,
        TimeBucket::OvertimeNocturnal => nocturnal,
        TimeBucket::OvertimeHoliday => holiday,
        TimeBucket::OvertimeNocturnalHoliday => nocturnal_holiday,
    }
}
