//! Automatic unpaid break deduction.

use crate::models::{AuditStep, WorkDaySummary, WorkSettings};

use super::calendar::{MS_PER_MINUTE, format_duration_ms, hours_to_ms};

/// The result of applying the automatic break rule.
#[derive(Debug, Clone)]
pub struct BreakDeductionResult {
    /// Day totals after the deduction.
    pub summary: WorkDaySummary,
    /// Milliseconds removed from standard and total time.
    pub deducted_ms: i64,
    /// The audit step recording this deduction.
    pub audit_step: AuditStep,
}

/// Deducts the automatic break once the day exceeds the threshold.
///
/// When `deduct_auto_break` is set and `total_work_ms` is strictly greater
/// than the threshold, `min(standard_work_ms, break)` is removed from both
/// `standard_work_ms` and `total_work_ms`. Other buckets are untouched and
/// standard time never goes negative.
///
/// # Example
///
/// ```
/// use timecard_engine::calculation::apply_auto_break;
/// use timecard_engine::models::{WorkDaySummary, WorkSettings};
///
/// let settings = WorkSettings { deduct_auto_break: true, ..WorkSettings::default() };
/// let day = WorkDaySummary {
///     total_work_ms: 7 * 3_600_000,
///     standard_work_ms: 7 * 3_600_000,
///     ..WorkDaySummary::default()
/// };
///
/// let result = apply_auto_break(day, &settings, 1);
/// assert_eq!(result.deducted_ms, 30 * 60_000);
/// assert_eq!(result.summary.standard_work_ms, 6 * 3_600_000 + 30 * 60_000);
/// ```
pub fn apply_auto_break(
    summary: WorkDaySummary,
    settings: &WorkSettings,
    step_number: u32,
) -> BreakDeductionResult {
    let threshold_ms = hours_to_ms(settings.auto_break_threshold_hours);
    let break_ms = settings.auto_break_minutes.saturating_mul(MS_PER_MINUTE);
    let applies = settings.deduct_auto_break && summary.total_work_ms > threshold_ms;

    let mut summary = summary;
    let deducted_ms = if applies {
        summary.standard_work_ms.min(break_ms).max(0)
    } else {
        0
    };
    summary.standard_work_ms -= deducted_ms;
    summary.total_work_ms -= deducted_ms;

    let reasoning = if !settings.deduct_auto_break {
        "Automatic break deduction is disabled".to_string()
    } else if applies {
        format!(
            "Worked time exceeds {} threshold; deducted {} from standard time",
            format_duration_ms(threshold_ms),
            format_duration_ms(deducted_ms)
        )
    } else {
        format!(
            "Worked time does not exceed {} threshold; no break deducted",
            format_duration_ms(threshold_ms)
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "auto_break_deduction".to_string(),
        rule_name: "Automatic Break Deduction".to_string(),
        input: serde_json::json!({
            "enabled": settings.deduct_auto_break,
            "threshold_ms": threshold_ms,
            "break_ms": break_ms,
            "total_work_ms": summary.total_work_ms + deducted_ms,
        }),
        output: serde_json::json!({
            "deducted_ms": deducted_ms,
            "standard_work_ms": summary.standard_work_ms,
            "total_work_ms": summary.total_work_ms,
        }),
        reasoning,
    };

    BreakDeductionResult {
        summary,
        deducted_ms,
        audit_step,
    }
}
