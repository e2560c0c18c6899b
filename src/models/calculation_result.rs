//! Calculation result models.
//!
//! This module contains the [`DayCalculationResult`] type returned by the HTTP
//! surface, together with the audit trail recorded while a day is classified.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{WorkDaySummary, WorkIntervalSummary};

/// A single step in the audit trail recording a classification decision.
///
/// Each step captures the input, output, and reasoning for one stage.
///
/// # Example
///
/// ```
/// use timecard_engine::models::AuditStep;
///
/// let step = AuditStep {
///     step_number: 1,
///     rule_id: "interval_building".to_string(),
///     rule_name: "Interval Building".to_string(),
///     input: serde_json::json!({"entries": 2}),
///     output: serde_json::json!({"intervals": 1}),
///     reasoning: "1 pair kept".to_string(),
/// };
/// assert_eq!(step.rule_id, "interval_building");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// The complete audit trail for a day calculation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// The complete result of classifying one day, as served over HTTP.
///
/// # Example
///
/// ```
/// use timecard_engine::models::{AuditTrace, DayCalculationResult, WorkDaySummary};
/// use chrono::{NaiveDate, Utc};
/// use uuid::Uuid;
///
/// let result = DayCalculationResult {
///     calculation_id: Uuid::new_v4(),
///     calculated_at: Utc::now(),
///     engine_version: "0.1.0".to_string(),
///     date: NaiveDate::from_ymd_opt(2026, 1, 13).unwrap(),
///     summary: WorkDaySummary::default(),
///     intervals: vec![],
///     audit_trace: AuditTrace::default(),
/// };
/// assert!(result.summary.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayCalculationResult {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub calculated_at: DateTime<Utc>,
    /// The engine version that produced the result.
    pub engine_version: String,
    /// The calendar day that was classified.
    pub date: NaiveDate,
    /// Day-level totals.
    pub summary: WorkDaySummary,
    /// Per-interval detail in chronological order.
    pub intervals: Vec<WorkIntervalSummary>,
    /// Audit trail of the classification.
    pub audit_trace: AuditTrace,
}
