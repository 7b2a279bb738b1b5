use super::ask_confirmation;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Wipe the entire event log, after confirmation.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Clear { yes } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;
        let total = queries::count_events(&mut pool)?;

        if total == 0 {
            info("The event log is already empty.");
            return Ok(());
        }

        let prompt = format!(
            "Delete ALL {} recorded event(s)? This action is irreversible.",
            total
        );
        if !*yes && !ask_confirmation(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        let removed = queries::clear_events(&mut pool)?;
        success(format!("{} event(s) deleted.", removed));
    }

    Ok(())
}
