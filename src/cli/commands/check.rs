use crate::cli::commands::load_plan;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Renderer;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{sheet_warnings, success};

/// Handle the `check` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Check { input, strict } = cmd {
        let plan = load_plan(input)?;
        let sheets = Renderer::new(cfg).render_all(&plan.daily_logs)?;

        let mut total = 0;
        for sheet in &sheets {
            if sheet.warnings.is_empty() {
                success(format!("{}: OK", sheet.date_str()));
                continue;
            }
            sheet_warnings(&sheet.date_str(), &sheet.warnings);
            total += sheet.warnings.len();
        }

        println!("{} daily log(s) checked, {} warning(s)", sheets.len(), total);

        if *strict && total > 0 {
            return Err(AppError::Validation(total));
        }
    }
    Ok(())
}
