use crate::export::ExportFormat;
use crate::models::Period;
use clap::{Parser, Subcommand};

/// Command-line interface definition for sugarlog
/// CLI application to log blood glucose and insulin readings in JSON
#[derive(Parser)]
#[command(
    name = "sugarlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple daily log CLI: record blood glucose and insulin per period of the day",
    long_about = None
)]
pub struct Cli {
    /// Override the store file (useful for tests or a second log)
    #[arg(global = true, long = "store")]
    pub store: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and an empty store
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// List the fields, their period and allowed range
    Fields,

    /// Tell whether today's log already exists
    Status,

    /// Save the readings of one period, keeping the rest of the day
    Save {
        /// Period of the day
        #[arg(value_enum)]
        period: Period,

        /// Date of the readings (YYYY-MM-DD, default: today)
        #[arg(long = "date")]
        date: Option<String>,

        /// Reading as NAME=VALUE (field name or key); prompts when omitted
        #[arg(long = "value", short = 'v', value_name = "NAME=VALUE")]
        values: Vec<String>,
    },

    /// Save all readings of the day at once
    Today {
        /// Date of the readings (YYYY-MM-DD, default: today)
        #[arg(long = "date")]
        date: Option<String>,

        /// Reading as NAME=VALUE (field name or key); prompts when omitted
        #[arg(long = "value", short = 'v', value_name = "NAME=VALUE")]
        values: Vec<String>,

        #[arg(long = "yes", short = 'y', help = "Overwrite an existing day without asking")]
        yes: bool,
    },

    /// Show the log of one date
    Show {
        /// Date to look up (YYYY-MM-DD)
        date: String,
    },

    /// Show one week of readings for a period
    Week {
        /// Any date inside the week (YYYY-MM-DD, default: today)
        #[arg(long = "date")]
        date: Option<String>,

        /// Period to show (default from configuration)
        #[arg(long = "period", short = 'p', value_enum)]
        period: Option<Period>,

        #[arg(long = "prev", value_name = "WEEKS", conflicts_with = "next", help = "Go back N weeks")]
        prev: Option<u32>,

        #[arg(long = "next", value_name = "WEEKS", help = "Go forward N weeks")]
        next: Option<u32>,

        #[arg(long = "all", conflicts_with = "period", help = "Show every period")]
        all: bool,
    },

    /// Print the audit log
    Log {
        #[arg(long = "print", help = "Print the audit log entries")]
        print: bool,
    },

    /// Create a backup copy of the store
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },

    /// Export logged days
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range (A:B)"
        )]
        range: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
