use crate::cli::parser::Commands;
use crate::cli::commands::load_plan;
use crate::config::Config;
use crate::core::logic::Renderer;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::ui::messages::{info, sheet_warnings};
use crate::utils::path::expand_tilde;

/// Handle the `render` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Render {
        input,
        day,
        format,
        file,
        force,
    } = cmd
    {
        let plan = load_plan(input)?;
        let logs = plan.select(*day)?;

        info(format!("Rendering {} daily log(s) from {}", logs.len(), input));

        let sheets = Renderer::new(cfg).render_all(&logs)?;

        for sheet in &sheets {
            sheet_warnings(&sheet.date_str(), &sheet.warnings);
        }

        let format = format.unwrap_or(cfg.default_format);
        let target = file.as_deref().map(expand_tilde);
        ExportLogic::export(&sheets, format, target.as_deref(), *force, cfg)?;
    }
    Ok(())
}
