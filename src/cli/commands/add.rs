use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::category::Category;
use crate::models::event::CareEvent;
use crate::ui::messages::success;
use crate::utils::time::{now_timestamp, parse_timestamp};

/// Register a new care event (append-only).
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        category,
        amount,
        note,
        at,
    } = cmd
    {
        let category = Category::from_key(category)
            .ok_or_else(|| AppError::InvalidCategory(category.clone()))?;

        // Event time: now, or an explicit --at that must parse.
        let timestamp = match at {
            Some(raw) => {
                let parsed = parse_timestamp(raw)
                    .ok_or_else(|| AppError::InvalidTimestamp(raw.clone()))?;
                parsed.to_rfc3339()
            }
            None => now_timestamp(),
        };

        let event = CareEvent::new(category, timestamp, amount.clone(), note.clone());

        let mut pool = DbPool::new(&cfg.database)?;
        queries::insert_event(&mut pool, &event)?;

        let unit = cfg.units.unit_for(category);
        let detail = match (&event.amount, unit.is_empty()) {
            (Some(a), false) => format!(" ({} {})", a, unit),
            (Some(a), true) => format!(" ({})", a),
            (None, _) => String::new(),
        };
        success(format!(
            "{} registered at {}{}",
            category.label(),
            event.timestamp,
            detail
        ));
    }

    Ok(())
}
