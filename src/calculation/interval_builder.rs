//! Raw work interval construction.
//!
//! Sorted clock entries are walked two at a time. Each in/out pair becomes a
//! [`RawInterval`] unless a manual entry already justified one of its ends.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::models::{AuditStep, ManualOvertimeEntry, TimeEntry};

use super::reconciliation::{is_pair_consumed, used_entry_ids};

/// A clock-in/clock-out pair that contributes automatic work time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawInterval {
    /// Clock-in time.
    pub start: NaiveDateTime,
    /// Clock-out time.
    pub end: NaiveDateTime,
    /// Id of the clock-in entry.
    pub opening_entry_id: String,
    /// Id of the clock-out entry.
    pub closing_entry_id: String,
}

impl RawInterval {
    /// Length of the interval in milliseconds.
    pub fn duration_ms(&self) -> i64 {
        (self.end - self.start).num_milliseconds()
    }
}

/// The result of pairing a day's entries.
#[derive(Debug, Clone)]
pub struct IntervalBuildResult {
    /// Kept intervals in chronological order.
    pub intervals: Vec<RawInterval>,
    /// Number of pairs skipped because they were not in/out.
    pub malformed_pairs: usize,
    /// `(in, out)` ids of pairs dropped because a manual entry used them.
    pub consumed_pairs: Vec<(String, String)>,
    /// The audit step recording this stage.
    pub audit_step: AuditStep,
}

/// Pairs a day's entries into raw work intervals.
///
/// Entries are sorted by timestamp (ties keep their input order) and walked
/// as consecutive pairs. A pair is kept only when it is an `in` followed by an
/// `out` and neither id appears in any manual entry's `used_entry_ids`. An
/// unpaired trailing entry is ignored.
///
/// # Example
///
/// ```
/// use timecard_engine::calculation::build_intervals;
/// use timecard_engine::models::{EntryType, TimeEntry};
/// use chrono::NaiveDateTime;
///
/// let at = |s: &str| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap();
/// let entries = vec![
///     TimeEntry { id: "2".into(), timestamp: at("2026-01-13 17:00"), entry_type: EntryType::Out },
///     TimeEntry { id: "1".into(), timestamp: at("2026-01-13 09:00"), entry_type: EntryType::In },
///     TimeEntry { id: "3".into(), timestamp: at("2026-01-13 18:00"), entry_type: EntryType::In },
/// ];
///
/// let result = build_intervals(&entries, &[], 1);
/// assert_eq!(result.intervals.len(), 1);
/// assert_eq!(result.intervals[0].closing_entry_id, "2");
/// ```
pub fn build_intervals(
    entries: &[TimeEntry],
    manual_entries: &[ManualOvertimeEntry],
    step_number: u32,
) -> IntervalBuildResult {
    let used = used_entry_ids(manual_entries);

    let mut sorted: Vec<&TimeEntry> = entries.iter().collect();
    sorted.sort_by_key(|e| e.timestamp);

    let mut intervals = Vec::new();
    let mut malformed_pairs = 0;
    let mut consumed_pairs = Vec::new();

    for pair in sorted.chunks_exact(2) {
        let (first, second) = (pair[0], pair[1]);

        if !(first.is_in() && second.is_out()) {
            malformed_pairs += 1;
            continue;
        }

        if is_pair_consumed(&used, &first.id, &second.id) {
            consumed_pairs.push((first.id.clone(), second.id.clone()));
            continue;
        }

        intervals.push(RawInterval {
            start: first.timestamp,
            end: second.timestamp,
            opening_entry_id: first.id.clone(),
            closing_entry_id: second.id.clone(),
        });
    }

    let trailing = sorted.len() % 2;

    let audit_step = AuditStep {
        step_number,
        rule_id: "interval_building".to_string(),
        rule_name: "Interval Building".to_string(),
        input: serde_json::json!({
            "entries": entries.len(),
            "used_entry_ids": used.iter().collect::<Vec<_>>(),
        }),
        output: serde_json::json!({
            "intervals": intervals.len(),
            "malformed_pairs": malformed_pairs,
            "consumed_pairs": consumed_pairs,
            "trailing_entries": trailing,
        }),
        reasoning: format!(
            "{} entries paired into {} intervals; {} malformed pairs skipped, {} pairs already justified manually, {} trailing entry ignored",
            entries.len(),
            intervals.len(),
            malformed_pairs,
            consumed_pairs.len(),
            trailing
        ),
    };

    IntervalBuildResult {
        intervals,
        malformed_pairs,
        consumed_pairs,
        audit_step,
    }
}
