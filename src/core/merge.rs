//! Import merge policy: first-write-wins on event ids.

use crate::models::event::CareEvent;
use std::collections::HashSet;

/// Outcome of merging an imported batch into the existing log.
#[derive(Debug, Clone)]
pub struct MergeOutcome {
    /// The merged log, sorted timestamp-descending.
    pub merged: Vec<CareEvent>,
    /// Records from the batch that were actually appended.
    pub added: Vec<CareEvent>,
    /// Count of batch records dropped because their id already existed.
    pub duplicates: usize,
}

/// Merge `imported` into `existing`.
///
/// Existing records are never overwritten: a batch record whose id is
/// already present is discarded. Survivors are appended and the whole
/// collection re-sorted newest-first before being handed back to storage.
pub fn merge_imported(existing: Vec<CareEvent>, imported: Vec<CareEvent>) -> MergeOutcome {
    let mut seen: HashSet<String> = existing.iter().map(|e| e.id.clone()).collect();

    let mut merged = existing;
    let mut added = Vec::new();
    let mut duplicates = 0;

    for ev in imported {
        if seen.insert(ev.id.clone()) {
            merged.push(ev.clone());
            added.push(ev);
        } else {
            duplicates += 1;
        }
    }

    sort_newest_first(&mut merged);

    MergeOutcome {
        merged,
        added,
        duplicates,
    }
}

/// Sort events timestamp-descending.
///
/// Stable, so equal timestamps keep their relative order; events with
/// unreadable timestamps sink to the end.
pub fn sort_newest_first(events: &mut [CareEvent]) {
    events.sort_by(|a, b| b.parsed_at().cmp(&a.parsed_at()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::category::Category;

    fn ev(id: &str, ts: &str, amount: Option<&str>) -> CareEvent {
        CareEvent {
            id: id.to_string(),
            category: Category::Feeding,
            timestamp: ts.to_string(),
            amount: amount.map(str::to_string),
            note: None,
        }
    }

    #[test]
    fn duplicate_ids_keep_the_existing_record() {
        let existing = vec![ev("x", "2026-08-27T08:00:00+00:00", Some("120"))];
        let imported = vec![ev("x", "2026-08-27T11:00:00+00:00", Some("999"))];

        let out = merge_imported(existing, imported);
        assert_eq!(out.merged.len(), 1);
        assert_eq!(out.duplicates, 1);
        assert!(out.added.is_empty());
        // first write wins: the field values are untouched
        assert_eq!(out.merged[0].amount.as_deref(), Some("120"));
        assert_eq!(out.merged[0].timestamp, "2026-08-27T08:00:00+00:00");
    }

    #[test]
    fn survivors_are_appended_and_resorted() {
        let existing = vec![ev("a", "2026-08-27T08:00:00+00:00", None)];
        let imported = vec![
            ev("b", "2026-08-27T10:00:00+00:00", None),
            ev("c", "2026-08-27T06:00:00+00:00", None),
        ];

        let out = merge_imported(existing, imported);
        let ids: Vec<&str> = out.merged.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["b", "a", "c"]);
        assert_eq!(out.added.len(), 2);
        assert_eq!(out.duplicates, 0);
    }

    #[test]
    fn duplicates_inside_one_batch_collapse_to_the_first() {
        let imported = vec![
            ev("dup", "2026-08-27T08:00:00+00:00", Some("first")),
            ev("dup", "2026-08-27T09:00:00+00:00", Some("second")),
        ];
        let out = merge_imported(Vec::new(), imported);
        assert_eq!(out.merged.len(), 1);
        assert_eq!(out.merged[0].amount.as_deref(), Some("first"));
        assert_eq!(out.duplicates, 1);
    }

    #[test]
    fn unreadable_timestamps_sort_last() {
        let mut events = vec![
            ev("bad", "sometime", None),
            ev("new", "2026-08-27T10:00:00+00:00", None),
            ev("old", "2026-08-27T01:00:00+00:00", None),
        ];
        sort_newest_first(&mut events);
        let ids: Vec<&str> = events.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["new", "old", "bad"]);
    }
}
