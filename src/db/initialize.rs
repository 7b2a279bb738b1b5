use crate::errors::AppResult;
use rusqlite::Connection;

/// Initialize the database schema.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS events (
            id        TEXT PRIMARY KEY,
            category  TEXT NOT NULL,
            timestamp TEXT NOT NULL,
            amount    TEXT,
            note      TEXT
        );",
    )?;
    Ok(())
}
