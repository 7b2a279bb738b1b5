use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::merge::sort_newest_first;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::interchange::{ExportFormat, csv, json};
use crate::ui::messages::success;
use std::fs;
use std::path::Path;

/// Export the event log to a CSV or JSON file.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        if Path::new(file).exists() && !*force {
            return Err(AppError::Export(format!(
                "{} already exists (use --force to overwrite)",
                file
            )));
        }

        let mut pool = DbPool::new(&cfg.database)?;
        let mut events = queries::load_events(&mut pool)?;
        sort_newest_first(&mut events);

        match format {
            ExportFormat::Csv => fs::write(file, csv::encode(&events))?,
            ExportFormat::Json => json::write_json(file, &events)?,
        }

        success(format!(
            "{} export completed: {} ({} event(s))",
            format.as_str().to_uppercase(),
            file,
            events.len()
        ));
    }

    Ok(())
}
