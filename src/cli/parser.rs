use crate::interchange::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for nidolog
/// CLI application to track infant care events with SQLite
#[derive(Parser)]
#[command(
    name = "nidolog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track infant care events (feedings, doses, diaper changes) and the time until each is next due",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// View or edit the configuration (intervals, units)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        /// Set the reminder interval for a category, in hours.
        /// Zero (or anything that is not a positive number) disables it.
        #[arg(
            long = "set-interval",
            num_args = 2,
            value_names = ["CATEGORY", "HOURS"]
        )]
        set_interval: Option<Vec<String>>,

        /// Set the amount unit for a category (e.g. ml, gotas)
        #[arg(
            long = "set-unit",
            num_args = 2,
            value_names = ["CATEGORY", "UNIT"]
        )]
        set_unit: Option<Vec<String>>,
    },

    /// Register a care event
    Add {
        /// Category: feeding, gas-relief-dose, vitamin-dose or diaper-change
        category: String,

        /// Quantity, e.g. "120" for a feeding in ml
        #[arg(long = "amount")]
        amount: Option<String>,

        /// Free-form note, e.g. a diaper descriptor
        #[arg(long = "note")]
        note: Option<String>,

        /// Event time as RFC 3339 (default: now)
        #[arg(long = "at", value_name = "TIMESTAMP")]
        at: Option<String>,
    },

    /// List recorded events, newest first
    List {
        /// Only show events of one category
        #[arg(long = "category", short = 'c')]
        category: Option<String>,

        /// Show at most N events
        #[arg(long = "limit", short = 'n', value_name = "N")]
        limit: Option<usize>,
    },

    /// Show, per category, the last event and when the next one is due
    Status,

    /// Delete a single event by id
    Del {
        /// Event id (as shown by `list`)
        id: String,

        /// Skip the confirmation prompt
        #[arg(long = "yes", short = 'y')]
        yes: bool,
    },

    /// Delete the entire event log
    Clear {
        /// Skip the confirmation prompt
        #[arg(long = "yes", short = 'y')]
        yes: bool,
    },

    /// Export the event log to a file
    Export {
        /// Export format: csv, json
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Output file path
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Overwrite the output file if it exists
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Import events from a CSV file (existing ids win over imported ones)
    Import {
        /// Input file path
        #[arg(long, value_name = "FILE")]
        file: String,
    },
}
