use crate::errors::{AppError, AppResult};
use crate::models::event::CareEvent;

/// Write the events as pretty-printed JSON.
pub fn write_json(path: &str, events: &[CareEvent]) -> AppResult<()> {
    let json = serde_json::to_string_pretty(events)
        .map_err(|e| AppError::Export(e.to_string()))?;
    std::fs::write(path, json)?;
    Ok(())
}
