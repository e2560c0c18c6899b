//! Manual adjustment reconciliation.
//!
//! Manual entries may justify raw clock entries. Those entries are "spent":
//! the automatic classifier must not count the time a second time.

use std::collections::BTreeSet;

use crate::models::ManualOvertimeEntry;

/// Collects the ids of every time entry justified by a manual entry.
///
/// Ids that do not match any time entry are harmless.
///
/// # Example
///
/// ```
/// use timecard_engine::calculation::used_entry_ids;
/// use timecard_engine::models::{ManualEntryKind, ManualOvertimeEntry, OvertimeTag};
/// use std::collections::BTreeSet;
///
/// let manual = ManualOvertimeEntry {
///     id: "m1".to_string(),
///     duration_ms: 3_600_000,
///     kind: ManualEntryKind::Legacy(OvertimeTag::Diurnal),
///     note: None,
///     used_entry_ids: BTreeSet::from(["e3".to_string(), "e4".to_string()]),
/// };
///
/// let manuals = [manual];
/// let used = used_entry_ids(&manuals);
/// assert!(used.contains("e3"));
/// assert!(!used.contains("e1"));
/// ```
pub fn used_entry_ids(manual_entries: &[ManualOvertimeEntry]) -> BTreeSet<&str> {
    manual_entries
        .iter()
        .flat_map(|m| m.used_entry_ids.iter().map(String::as_str))
        .collect()
}

/// Returns true when either end of a pair was already justified manually.
pub fn is_pair_consumed(used: &BTreeSet<&str>, in_id: &str, out_id: &str) -> bool {
    used.contains(in_id) || used.contains(out_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ManualEntryKind;

    fn manual(id: &str, used: &[&str]) -> ManualOvertimeEntry {
        ManualOvertimeEntry {
            id: id.to_string(),
            duration_ms: 0,
            kind: ManualEntryKind::CatalogCode(3),
            note: None,
            used_entry_ids: used.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_union_across_manual_entries() {
        let entries = vec![manual("m1", &["a", "b"]), manual("m2", &["b", "c"])];
        let used = used_entry_ids(&entries);
        assert_eq!(used.into_iter().collect::<Vec<_>>(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_no_manual_entries_yields_empty_set() {
        assert!(used_entry_ids(&[]).is_empty());
    }

    #[test]
    fn test_pair_consumed_by_either_end() {
        let entries = vec![manual("m1", &["out1"])];
        let used = used_entry_ids(&entries);
        assert!(is_pair_consumed(&used, "in1", "out1"));
        assert!(!is_pair_consumed(&used, "in2", "out2"));
    }
}
