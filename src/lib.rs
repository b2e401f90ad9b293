//! rDriverLog library root.
//! Exposes the timeline renderer, the CLI parser, a high-level run()
//! function and the export layer.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::PathBuf;
use ui::messages::warning;
use utils::path::expand_tilde;

pub use crate::core::logic::Renderer;
pub use crate::models::daily_log::DailyLog;
pub use crate::models::duty_status::DutyStatus;
pub use crate::models::log_event::LogEvent;
pub use crate::models::log_sheet::LogSheet;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Render { .. } => cli::commands::render::handle(&cli.command, cfg),
        Commands::Check { .. } => cli::commands::check::handle(&cli.command, cfg),
        Commands::Config { .. } => {
            cli::commands::config::handle(&cli.command, cfg, cli.config.as_deref(), cli.test)
        }
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();
    ui::messages::set_quiet(cli.quiet);

    // 2️⃣ load config once (custom path if given)
    let cfg_path: Option<PathBuf> = cli.config.as_deref().map(expand_tilde);
    let cfg = match Config::load(cfg_path.as_deref()) {
        Ok(cfg) => cfg,
        // a broken file must not prevent rewriting it
        Err(e) if matches!(cli.command, Commands::Config { init: true, .. }) => {
            warning(format!("Ignoring current configuration: {e}"));
            Config::default()
        }
        Err(e) => return Err(e),
    };

    // 3️⃣ hand everything to the dispatcher
    dispatch(&cli, &cfg)
}
