use super::category::Category;
use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

// Process-local tail for generated ids; the timestamp part keeps ids
// unique across runs, the counter keeps them unique within one.
static ID_SEQ: AtomicU64 = AtomicU64::new(0);

/// One recorded caregiving event.
///
/// Fields are immutable once the event exists; the log supports deletion
/// but never in-place edits. The timestamp is
/// kept as RFC 3339 text so that values imported from a CSV file survive
/// verbatim even when they do not parse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareEvent {
    pub id: String,
    pub category: Category,
    /// RFC 3339 timestamp with offset, e.g. `2026-08-27T09:30:00+02:00`.
    pub timestamp: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl CareEvent {
    /// Build a new event with a freshly assigned id.
    pub fn new(
        category: Category,
        timestamp: String,
        amount: Option<String>,
        note: Option<String>,
    ) -> Self {
        let nanos = Utc::now().timestamp_nanos_opt().unwrap_or_default();
        let seq = ID_SEQ.fetch_add(1, Ordering::Relaxed);
        Self {
            id: format!("ev-{:x}-{:x}", nanos, seq),
            category,
            timestamp,
            amount,
            note,
        }
    }

    /// Parsed timestamp, or `None` when the stored text is malformed.
    pub fn parsed_at(&self) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc3339(self.timestamp.trim()).ok()
    }
}
