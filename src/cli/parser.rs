use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rDriverLog
#[derive(Parser)]
#[command(
    name = "rdriverlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Render driver's daily duty-status logs as 24-hour grid timelines",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Only print warnings and errors on stderr
    #[arg(global = true, long = "quiet", short = 'q')]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render daily log sheets from a trip planner response
    Render {
        /// JSON file: planner response, a daily log, or an array of daily logs
        input: String,

        /// Render only this day of the trip (1-based)
        #[arg(long, short = 'd')]
        day: Option<usize>,

        /// Output format (default from config, normally text)
        #[arg(long, short = 'f', value_enum)]
        format: Option<ExportFormat>,

        /// Output file path (stdout if omitted; required for pdf)
        #[arg(long, short = 'o', value_name = "FILE")]
        file: Option<String>,

        /// Overwrite output file without confirmation
        #[arg(long)]
        force: bool,
    },

    /// Check daily logs for inconsistencies without rendering them
    Check {
        /// JSON file: planner response, a daily log, or an array of daily logs
        input: String,

        /// Exit with an error if any warning is found
        #[arg(long)]
        strict: bool,
    },

    /// Show or initialize the configuration file
    Config {
        /// Print the effective configuration
        #[arg(long = "print")]
        print_config: bool,

        /// Write a configuration file with default values
        #[arg(long = "init")]
        init: bool,
    },
}
