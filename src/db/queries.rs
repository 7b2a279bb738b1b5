use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::category::Category;
use crate::models::event::CareEvent;
use rusqlite::{Result, Row, params};

pub fn map_row(row: &Row) -> Result<CareEvent> {
    let category_str: String = row.get("category")?;
    let category = Category::from_key(&category_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidCategory(category_str.clone())),
        )
    })?;

    Ok(CareEvent {
        id: row.get("id")?,
        category,
        timestamp: row.get("timestamp")?,
        amount: row.get("amount")?,
        note: row.get("note")?,
    })
}

/// Load the whole event log, newest first.
///
/// The textual ORDER BY is only a rough pre-sort; callers re-sort through
/// the core when the exact timestamp-descending order matters.
pub fn load_events(pool: &mut DbPool) -> AppResult<Vec<CareEvent>> {
    let mut stmt = pool
        .conn
        .prepare("SELECT * FROM events ORDER BY timestamp DESC")?;

    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Insert an event. Returns false when an event with the same id already
/// exists; existing records are never overwritten.
pub fn insert_event(pool: &mut DbPool, ev: &CareEvent) -> AppResult<bool> {
    let changed = pool.conn.execute(
        "INSERT OR IGNORE INTO events (id, category, timestamp, amount, note)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![ev.id, ev.category.key(), ev.timestamp, ev.amount, ev.note],
    )?;
    Ok(changed > 0)
}

/// Delete one event by id. Returns the number of rows removed (0 or 1).
pub fn delete_event(pool: &mut DbPool, id: &str) -> AppResult<usize> {
    let n = pool
        .conn
        .execute("DELETE FROM events WHERE id = ?1", [id])?;
    Ok(n)
}

/// Remove every event from the log.
pub fn clear_events(pool: &mut DbPool) -> AppResult<usize> {
    let n = pool.conn.execute("DELETE FROM events", [])?;
    Ok(n)
}

pub fn count_events(pool: &mut DbPool) -> AppResult<i64> {
    let n = pool
        .conn
        .query_row("SELECT COUNT(*) FROM events", [], |row| row.get(0))?;
    Ok(n)
}
