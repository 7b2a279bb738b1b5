use super::ask_confirmation;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

/// Delete a single event by id, after confirmation.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        if !*yes
            && !ask_confirmation(&format!("Delete event {}? This action is irreversible.", id))
        {
            info("Operation cancelled.");
            return Ok(());
        }

        let mut pool = DbPool::new(&cfg.database)?;
        let removed = queries::delete_event(&mut pool, id)?;

        if removed > 0 {
            success(format!("Event {} has been deleted.", id));
        } else {
            warning(format!("No event found with id {}.", id));
        }
    }

    Ok(())
}
