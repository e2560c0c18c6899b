//! Manually entered overtime and leave adjustments.
//!
//! A [`ManualOvertimeEntry`] adds a fixed duration to one bucket of the day
//! and may justify (and thereby consume) raw time entries.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// The four legacy overtime categories a manual entry can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OvertimeTag {
    /// Daytime overtime on an ordinary day.
    Diurnal,
    /// Night-time overtime on an ordinary day.
    Nocturnal,
    /// Daytime overtime on a holiday.
    Holiday,
    /// Night-time overtime on a holiday.
    NocturnalHoliday,
}

impl OvertimeTag {
    /// Returns the wire name of the tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            OvertimeTag::Diurnal => "diurnal",
            OvertimeTag::Nocturnal => "nocturnal",
            OvertimeTag::Holiday => "holiday",
            OvertimeTag::NocturnalHoliday => "nocturnal-holiday",
        }
    }

    /// Parses a wire name.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "diurnal" => Some(OvertimeTag::Diurnal),
            "nocturnal" => Some(OvertimeTag::Nocturnal),
            "holiday" => Some(OvertimeTag::Holiday),
            "nocturnal-holiday" => Some(OvertimeTag::NocturnalHoliday),
            _ => None,
        }
    }
}

/// What a manual entry counts as.
///
/// On the wire this is a single string: one of the legacy overtime tags or
/// `code-<N>` for a leave/status catalog code. Anything else is kept as
/// [`ManualEntryKind::Unrecognized`] so that the engine stays total.
///
/// # Example
///
/// ```
/// use timecard_engine::models::{ManualEntryKind, OvertimeTag};
///
/// assert_eq!(ManualEntryKind::from("nocturnal".to_string()), ManualEntryKind::Legacy(OvertimeTag::Nocturnal));
/// assert_eq!(ManualEntryKind::from("code-12".to_string()), ManualEntryKind::CatalogCode(12));
/// assert_eq!(ManualEntryKind::CatalogCode(12).to_string(), "code-12");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ManualEntryKind {
    /// One of the four overtime buckets.
    Legacy(OvertimeTag),
    /// A leave/status catalog code.
    CatalogCode(u32),
    /// A tag the engine does not know.
    Unrecognized(String),
}

impl From<String> for ManualEntryKind {
    fn from(value: String) -> Self {
        if let Some(tag) = OvertimeTag::parse(&value) {
            return ManualEntryKind::Legacy(tag);
        }
        match value.strip_prefix("code-").map(str::parse::<u32>) {
            Some(Ok(code)) => ManualEntryKind::CatalogCode(code),
            _ => ManualEntryKind::Unrecognized(value),
        }
    }
}

impl From<ManualEntryKind> for String {
    fn from(kind: ManualEntryKind) -> Self {
        kind.to_string()
    }
}

impl fmt::Display for ManualEntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ManualEntryKind::Legacy(tag) => write!(f, "{}", tag.as_str()),
            ManualEntryKind::CatalogCode(code) => write!(f, "code-{}", code),
            ManualEntryKind::Unrecognized(raw) => write!(f, "{}", raw),
        }
    }
}

/// A manually entered duration for the day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManualOvertimeEntry {
    /// Unique identifier of the manual entry.
    pub id: String,
    /// Duration in milliseconds.
    pub duration_ms: i64,
    /// Target bucket or catalog code.
    #[serde(rename = "type")]
    pub kind: ManualEntryKind,
    /// Free-form note.
    #[serde(default)]
    pub note: Option<String>,
    /// Ids of raw time entries this entry justifies.
    #[serde(default)]
    pub used_entry_ids: BTreeSet<String>,
}
