//! Calendar and duration primitives.
//!
//! Date-key formatting, day/month/week arithmetic and duration formatting
//! shared by the engine and its callers.

use chrono::{Datelike, Duration, Months, NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

/// Milliseconds in one minute.
pub const MS_PER_MINUTE: i64 = 60_000;

/// Milliseconds in one hour.
pub const MS_PER_HOUR: i64 = 3_600_000;

const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// Formats a date as its storage key (`YYYY-MM-DD`).
///
/// # Example
///
/// ```
/// use timecard_engine::calculation::date_key;
/// use chrono::NaiveDate;
///
/// assert_eq!(date_key(NaiveDate::from_ymd_opt(2026, 3, 7).unwrap()), "2026-03-07");
/// ```
pub fn date_key(date: NaiveDate) -> String {
    date.format(DATE_KEY_FORMAT).to_string()
}

/// Parses a `YYYY-MM-DD` date key.
pub fn parse_date_key(key: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(key, DATE_KEY_FORMAT).ok()
}

/// Returns `date` shifted by `days` (negative goes back).
pub fn add_days(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    date.checked_add_signed(Duration::days(days))
}

/// Returns `date` shifted by `months`, clamped to the end of the target month.
///
/// # Example
///
/// ```
/// use timecard_engine::calculation::add_months;
/// use chrono::NaiveDate;
///
/// let jan_31 = NaiveDate::from_ymd_opt(2026, 1, 31).unwrap();
/// assert_eq!(add_months(jan_31, 1), NaiveDate::from_ymd_opt(2026, 2, 28));
/// assert_eq!(add_months(jan_31, -2), NaiveDate::from_ymd_opt(2025, 11, 30));
/// ```
pub fn add_months(date: NaiveDate, months: i32) -> Option<NaiveDate> {
    let delta = Months::new(months.unsigned_abs());
    if months >= 0 {
        date.checked_add_months(delta)
    } else {
        date.checked_sub_months(delta)
    }
}

/// Returns the Monday of the week containing `date`.
pub fn start_of_week(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}

/// Returns the seven dates (Monday to Sunday) of the week containing `date`.
pub fn week_dates(date: NaiveDate) -> Vec<NaiveDate> {
    start_of_week(date).iter_days().take(7).collect()
}

/// Returns the number of days in a month, or `None` for an invalid month.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = first.checked_add_months(Months::new(1))?;
    u32::try_from((next - first).num_days()).ok()
}

/// Returns every date of a month in order.
pub fn month_dates(year: i32, month: u32) -> Vec<NaiveDate> {
    match NaiveDate::from_ymd_opt(year, month, 1) {
        Some(first) => first.iter_days().take_while(|d| d.month() == month).collect(),
        None => Vec::new(),
    }
}

/// Returns `date` at the given clock hour.
///
/// Hours of 24 or more roll over into the following days. An hour past the
/// representable range saturates at [`NaiveDateTime::MAX`].
pub fn at_hour(date: NaiveDate, hour: u32) -> NaiveDateTime {
    date.and_time(NaiveTime::default())
        .checked_add_signed(Duration::hours(i64::from(hour)))
        .unwrap_or(NaiveDateTime::MAX)
}

/// Converts decimal hours to whole milliseconds.
///
/// Values that cannot be represented yield zero.
///
/// # Example
///
/// ```
/// use timecard_engine::calculation::hours_to_ms;
/// use rust_decimal::Decimal;
///
/// assert_eq!(hours_to_ms(Decimal::new(75, 1)), 27_000_000);
/// ```
pub fn hours_to_ms(hours: Decimal) -> i64 {
    hours
        .checked_mul(Decimal::from(MS_PER_HOUR))
        .and_then(|ms| ms.round().to_i64())
        .unwrap_or(0)
}

/// Formats milliseconds as `"7h 30m"`, with a leading `-` when negative.
///
/// # Example
///
/// ```
/// use timecard_engine::calculation::format_duration_ms;
///
/// assert_eq!(format_duration_ms(27_000_000), "7h 30m");
/// assert_eq!(format_duration_ms(-300_000), "-0h 05m");
/// ```
pub fn format_duration_ms(ms: i64) -> String {
    let (sign, hours, minutes) = split_duration(ms);
    format!("{}{}h {:02}m", sign, hours, minutes)
}

/// Formats milliseconds as a clock-style `"07:30"`, with a leading `-` when negative.
pub fn format_duration_clock(ms: i64) -> String {
    let (sign, hours, minutes) = split_duration(ms);
    format!("{}{:02}:{:02}", sign, hours, minutes)
}

fn split_duration(ms: i64) -> (&'static str, i64, i64) {
    let sign = if ms < 0 { "-" } else { "" };
    let total_minutes = (ms / MS_PER_MINUTE).abs();
    (sign, total_minutes / 60, total_minutes % 60)
}
