use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::merge::sort_newest_first;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::category::Category;
use crate::ui::messages::info;
use crate::utils::table::Table;

/// List recorded events, newest first.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { category, limit } = cmd {
        let filter = match category {
            Some(raw) => Some(
                Category::from_key(raw).ok_or_else(|| AppError::InvalidCategory(raw.clone()))?,
            ),
            None => None,
        };

        let mut pool = DbPool::new(&cfg.database)?;
        let mut events = queries::load_events(&mut pool)?;
        sort_newest_first(&mut events);

        if let Some(cat) = filter {
            events.retain(|e| e.category == cat);
        }
        if let Some(n) = limit {
            events.truncate(*n);
        }

        if events.is_empty() {
            info("No events recorded.");
            return Ok(());
        }

        let mut table = Table::new(&["ID", "Category", "Time", "Amount", "Note"]);
        for ev in &events {
            table.add_row(vec![
                ev.id.clone(),
                ev.category.label().to_string(),
                ev.timestamp.clone(),
                ev.amount.clone().unwrap_or_else(|| "-".to_string()),
                ev.note.clone().unwrap_or_else(|| "-".to_string()),
            ]);
        }
        print!("{}", table.render());
    }

    Ok(())
}
