use crate::config::Config;
use crate::core::schedule::{last_by_category, next_due};
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::models::category::ALL_CATEGORIES;
use crate::ui::messages::warning;
use crate::utils::table::Table;
use crate::utils::time::format_countdown;
use chrono::Local;

/// Per-category schedule: last event, configured interval, next due time
/// and a live countdown.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut pool = DbPool::new(&cfg.database)?;
    let events = queries::load_events(&mut pool)?;

    let report = last_by_category(&events);
    let due = next_due(&report.last, &cfg.intervals);
    let now = Local::now();

    let mut table = Table::new(&["Category", "Last", "Every", "Next due", "Countdown"]);
    for cat in ALL_CATEGORIES {
        let last = report
            .last
            .get(cat)
            .map(|ev| ev.timestamp.clone())
            .unwrap_or_else(|| "-".to_string());

        let hours = cfg.intervals.hours_for(cat);
        let every = if hours > 0.0 {
            format!("{}h", hours)
        } else {
            "off".to_string()
        };

        let target = due.get(cat);
        table.add_row(vec![
            cat.label().to_string(),
            last,
            every,
            target.unwrap_or("-").to_string(),
            format_countdown(target, now),
        ]);
    }
    print!("{}", table.render());

    if !report.skipped.is_empty() {
        warning(format!(
            "{} event(s) with unreadable timestamps were ignored: {}",
            report.skipped.len(),
            report.skipped.join(", ")
        ));
    }

    Ok(())
}
