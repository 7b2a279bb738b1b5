use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::merge::merge_imported;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::interchange::csv;
use crate::ui::messages::{success, warning};
use std::fs;

/// Import events from a CSV file and merge them into the log.
///
/// Records whose id already exists are discarded (existing data wins);
/// rows the codec could not parse are reported and skipped.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { file } = cmd {
        let text = fs::read_to_string(file)
            .map_err(|e| AppError::Import(format!("cannot read {}: {}", file, e)))?;
        let decoded = csv::decode(&text)?;

        for (row, reason) in &decoded.skipped {
            warning(format!("Skipped row {}: {}", row, reason));
        }

        let mut pool = DbPool::new(&cfg.database)?;
        let existing = queries::load_events(&mut pool)?;
        let outcome = merge_imported(existing, decoded.records);

        for ev in &outcome.added {
            queries::insert_event(&mut pool, ev)?;
        }

        success(format!(
            "Import completed: {} added, {} duplicate(s) ignored, {} row(s) skipped",
            outcome.added.len(),
            outcome.duplicates,
            decoded.skipped.len()
        ));
    }

    Ok(())
}
