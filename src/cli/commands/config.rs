use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::category::Category;
use crate::ui::messages::{info, success};

/// View or edit the configuration (reminder intervals, amount units).
pub fn handle(cmd: &Commands, cfg: &Config, is_test: bool) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        set_interval,
        set_unit,
    } = cmd
    {
        let mut updated = cfg.clone();
        let mut changed = false;

        if let Some(args) = set_interval {
            // clap guarantees exactly two values
            let category = parse_category(&args[0])?;
            updated.intervals.set_hours(category, &args[1]);
            let hours = updated.intervals.hours_for(category);
            if hours > 0.0 {
                success(format!(
                    "{} reminder set to every {}h",
                    category.label(),
                    hours
                ));
            } else {
                success(format!("{} reminders disabled", category.label()));
            }
            changed = true;
        }

        if let Some(args) = set_unit {
            let category = parse_category(&args[0])?;
            updated.units.set_unit(category, &args[1]);
            success(format!("{} unit set to '{}'", category.label(), args[1].trim()));
            changed = true;
        }

        if changed && !is_test {
            updated.save()?;
        }

        if *print_config || !changed {
            info("Current configuration:");
            println!(
                "{}",
                serde_yaml::to_string(&updated).map_err(|_| AppError::ConfigLoad)?
            );
        }
    }

    Ok(())
}

fn parse_category(raw: &str) -> AppResult<Category> {
    Category::from_key(raw).ok_or_else(|| AppError::InvalidCategory(raw.to_string()))
}
