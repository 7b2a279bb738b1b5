//! The derived-schedule engine.
//!
//! Given a snapshot of the event log and the configured per-category
//! intervals, computes the most recent event of each category and the
//! timestamp at which each category is next due. Both computations are
//! pure: they never mutate their inputs and are recomputed from scratch
//! on every change rather than cached.

use crate::config::Intervals;
use crate::models::category::{ALL_CATEGORIES, Category};
use crate::models::event::CareEvent;
use crate::utils::time::add_hours;

/// Most recent event per category, or none where a category was never
/// logged (or only logged with unreadable timestamps).
#[derive(Debug, Clone, Default)]
pub struct LastByCategory {
    entries: [Option<CareEvent>; 4],
}

impl LastByCategory {
    pub fn get(&self, category: Category) -> Option<&CareEvent> {
        self.entries[category.index()].as_ref()
    }

    fn set_if_empty(&mut self, category: Category, event: &CareEvent) {
        let slot = &mut self.entries[category.index()];
        if slot.is_none() {
            *slot = Some(event.clone());
        }
    }
}

/// Next due timestamp per category; none when the category has no last
/// event or its reminder interval is zero.
#[derive(Debug, Clone, Default)]
pub struct NextDue {
    entries: [Option<String>; 4],
}

impl NextDue {
    pub fn get(&self, category: Category) -> Option<&str> {
        self.entries[category.index()].as_deref()
    }
}

/// Result of [`last_by_category`], carrying the ids of events that were
/// skipped because their stored timestamp did not parse.
#[derive(Debug, Clone, Default)]
pub struct LastReport {
    pub last: LastByCategory,
    pub skipped: Vec<String>,
}

/// Compute the most recent event of each category.
///
/// Deterministic even under equal timestamps: candidates are sorted
/// timestamp-descending with a stable sort, so ties resolve to input
/// order. Events whose timestamp does not parse never win; they are
/// reported in `skipped` and aggregation carries on without them.
pub fn last_by_category(events: &[CareEvent]) -> LastReport {
    let mut report = LastReport::default();

    let mut candidates: Vec<&CareEvent> = Vec::with_capacity(events.len());
    for ev in events {
        if ev.parsed_at().is_some() {
            candidates.push(ev);
        } else {
            report.skipped.push(ev.id.clone());
        }
    }

    candidates.sort_by(|a, b| b.parsed_at().cmp(&a.parsed_at()));

    for ev in candidates {
        report.last.set_if_empty(ev.category, ev);
    }

    report
}

/// Compute the next due timestamp for each category.
///
/// A category is due `interval` hours after its last event; a zero
/// interval means reminders are disabled and always yields none, even
/// when a last event exists.
pub fn next_due(last: &LastByCategory, intervals: &Intervals) -> NextDue {
    let mut due = NextDue::default();

    for cat in ALL_CATEGORIES {
        let hours = intervals.hours_for(cat);
        if hours <= 0.0 {
            continue;
        }
        if let Some(ev) = last.get(cat) {
            due.entries[cat.index()] = add_hours(&ev.timestamp, hours);
        }
    }

    due
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ev(id: &str, category: Category, ts: &str) -> CareEvent {
        CareEvent {
            id: id.to_string(),
            category,
            timestamp: ts.to_string(),
            amount: None,
            note: None,
        }
    }

    #[test]
    fn picks_the_newest_event_per_category() {
        let log = vec![
            ev("a", Category::Feeding, "2026-08-27T08:00:00+00:00"),
            ev("b", Category::Feeding, "2026-08-27T09:00:00+00:00"),
            ev("c", Category::DiaperChange, "2026-08-27T07:30:00+00:00"),
        ];

        let report = last_by_category(&log);
        assert_eq!(report.last.get(Category::Feeding).unwrap().id, "b");
        assert_eq!(report.last.get(Category::DiaperChange).unwrap().id, "c");
        assert!(report.last.get(Category::VitaminDose).is_none());
        assert!(report.skipped.is_empty());
    }

    #[test]
    fn last_events_match_their_category_slot() {
        let log = vec![
            ev("a", Category::Feeding, "2026-08-27T08:00:00+00:00"),
            ev("b", Category::VitaminDose, "2026-08-27T09:00:00+00:00"),
        ];
        let report = last_by_category(&log);
        for cat in ALL_CATEGORIES {
            if let Some(winner) = report.last.get(cat) {
                assert_eq!(winner.category, cat);
            }
        }
    }

    #[test]
    fn equal_timestamps_resolve_to_input_order() {
        let log = vec![
            ev("first", Category::Feeding, "2026-08-27T09:00:00+00:00"),
            ev("second", Category::Feeding, "2026-08-27T09:00:00+00:00"),
        ];
        let report = last_by_category(&log);
        assert_eq!(report.last.get(Category::Feeding).unwrap().id, "first");
    }

    #[test]
    fn malformed_timestamps_lose_and_are_reported() {
        let log = vec![
            ev("bad", Category::Feeding, "around breakfast"),
            ev("good", Category::Feeding, "2026-08-27T06:00:00+00:00"),
        ];
        let report = last_by_category(&log);
        assert_eq!(report.last.get(Category::Feeding).unwrap().id, "good");
        assert_eq!(report.skipped, vec!["bad".to_string()]);
    }

    #[test]
    fn only_malformed_timestamps_leaves_the_category_empty() {
        let log = vec![ev("bad", Category::Feeding, "???")];
        let report = last_by_category(&log);
        assert!(report.last.get(Category::Feeding).is_none());
        assert_eq!(report.skipped.len(), 1);
    }

    #[test]
    fn next_due_adds_the_interval_to_the_last_event() {
        // log: feeding at T-2h and T-1h; interval 3h => due at T+2h
        let log = vec![
            ev("older", Category::Feeding, "2026-08-27T08:00:00+00:00"),
            ev("newer", Category::Feeding, "2026-08-27T09:00:00+00:00"),
        ];
        let report = last_by_category(&log);
        assert_eq!(report.last.get(Category::Feeding).unwrap().id, "newer");

        let intervals = Intervals {
            feeding: 3.0,
            ..Intervals::default()
        };
        let due = next_due(&report.last, &intervals);
        assert_eq!(
            due.get(Category::Feeding),
            Some("2026-08-27T12:00:00+00:00")
        );
    }

    #[test]
    fn zero_interval_suppresses_next_due_even_with_a_last_event() {
        let log = vec![ev("v", Category::VitaminDose, "2026-08-27T09:00:00+00:00")];
        let report = last_by_category(&log);
        assert!(report.last.get(Category::VitaminDose).is_some());

        let intervals = Intervals {
            vitamin_dose: 0.0,
            ..Intervals::default()
        };
        let due = next_due(&report.last, &intervals);
        assert!(due.get(Category::VitaminDose).is_none());
    }

    #[test]
    fn never_logged_categories_have_no_due_time() {
        let due = next_due(&LastByCategory::default(), &Intervals::default());
        for cat in ALL_CATEGORIES {
            assert!(due.get(cat).is_none());
        }
    }
}
