//! Daily aggregation of interval breakdowns and manual entries.

use crate::models::{
    AuditStep, ManualEntryKind, ManualOvertimeEntry, TimeBucket, WorkDaySummary,
    WorkIntervalSummary,
};

use super::calendar::format_duration_ms;

/// The result of folding a day's intervals and manual entries together.
#[derive(Debug, Clone)]
pub struct DailyAggregation {
    /// Day totals before break deduction.
    pub summary: WorkDaySummary,
    /// The audit step recording the manual entry folding.
    pub audit_step: AuditStep,
}

/// Returns the bucket a manual entry is credited to.
///
/// Catalog codes and unrecognized tags count as excess; legacy tags go to the
/// matching overtime bucket.
///
/// # Example
///
/// ```
/// use timecard_engine::calculation::manual_entry_bucket;
/// use timecard_engine::models::{ManualEntryKind, OvertimeTag, TimeBucket};
///
/// assert_eq!(manual_entry_bucket(&ManualEntryKind::CatalogCode(4)), TimeBucket::Excess);
/// assert_eq!(
///     manual_entry_bucket(&ManualEntryKind::Legacy(OvertimeTag::Nocturnal)),
///     TimeBucket::OvertimeNocturnal
/// );
/// ```
pub fn manual_entry_bucket(kind: &ManualEntryKind) -> TimeBucket {
    match kind {
        ManualEntryKind::Legacy(tag) => TimeBucket::from(*tag),
        ManualEntryKind::CatalogCode(_) | ManualEntryKind::Unrecognized(_) => TimeBucket::Excess,
    }
}

/// Sums interval breakdowns and folds in manual entries.
///
/// Every manual entry adds its duration to `total_work_ms` and to its bucket.
/// Sums saturate at `i64::MAX` rather than wrapping.
pub fn aggregate_day(
    intervals: &[WorkIntervalSummary],
    manual_entries: &[ManualOvertimeEntry],
    step_number: u32,
) -> DailyAggregation {
    let mut summary = WorkDaySummary::default();
    for interval in intervals {
        summary.absorb(interval);
    }
    let automatic_total_ms = summary.total_work_ms;

    let mut credited = Vec::with_capacity(manual_entries.len());
    for entry in manual_entries {
        let bucket = manual_entry_bucket(&entry.kind);
        summary.add_total(entry.duration_ms);
        summary.add(bucket, entry.duration_ms);
        credited.push(serde_json::json!({
            "id": entry.id,
            "type": entry.kind.to_string(),
            "duration_ms": entry.duration_ms,
            "bucket": bucket,
        }));
    }

    let manual_total_ms = manual_entries
        .iter()
        .fold(0i64, |acc, m| acc.saturating_add(m.duration_ms));

    let audit_step = AuditStep {
        step_number,
        rule_id: "manual_entry_folding".to_string(),
        rule_name: "Manual Entry Folding".to_string(),
        input: serde_json::json!({
            "intervals": intervals.len(),
            "automatic_total_ms": automatic_total_ms,
            "manual_entries": manual_entries.len(),
        }),
        output: serde_json::json!({
            "credited": credited,
            "total_work_ms": summary.total_work_ms,
        }),
        reasoning: format!(
            "{} from {} intervals plus {} from {} manual entries",
            format_duration_ms(automatic_total_ms),
            intervals.len(),
            format_duration_ms(manual_total_ms),
            manual_entries.len()
        ),
    };

    DailyAggregation {
        summary,
        audit_step,
    }
}
