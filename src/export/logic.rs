// src/export/logic.rs

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::{ensure_writable, write_file};
use crate::export::json_csv::{to_csv, to_json};
use crate::export::notify_export_success;
use crate::export::pdf::PdfManager;
use crate::export::svg::render_svg;
use crate::export::text::render_text;
use crate::models::log_sheet::LogSheet;
use crate::ui::messages::info;
use std::io::{self, IsTerminal, Write};
use std::path::Path;

/// High level export of rendered sheets.
pub struct ExportLogic;

impl ExportLogic {
    /// Produce the bytes of `sheets` in the given format.
    /// `color` only affects the text format.
    pub fn to_bytes(
        sheets: &[LogSheet],
        format: ExportFormat,
        cfg: &Config,
        color: bool,
    ) -> AppResult<Vec<u8>> {
        let bytes = match format {
            ExportFormat::Text => render_text(sheets, cfg, color).into_bytes(),
            ExportFormat::Json => to_json(sheets)?.into_bytes(),
            ExportFormat::Csv => to_csv(sheets)?.into_bytes(),
            ExportFormat::Svg => render_svg(sheets, cfg).into_bytes(),
            ExportFormat::Pdf => {
                let mut pdf = PdfManager::new(&cfg.stroke_color);
                pdf.write_sheets(sheets);
                pdf.finish()
            }
        };
        Ok(bytes)
    }

    /// Export to `file`, or to stdout when no file is given.
    ///
    /// - `format`: text | json | csv | svg | pdf
    /// - `file`: output path; pdf requires one
    /// - `force`: overwrite an existing file without asking
    pub fn export(
        sheets: &[LogSheet],
        format: ExportFormat,
        file: Option<&Path>,
        force: bool,
        cfg: &Config,
    ) -> AppResult<()> {
        match file {
            None => {
                if format.requires_file() {
                    return Err(AppError::Export(format!(
                        "format '{}' needs an output file (--file)",
                        format.as_str()
                    )));
                }

                let color = format == ExportFormat::Text && io::stdout().is_terminal();
                let bytes = Self::to_bytes(sheets, format, cfg, color)?;

                let mut out = io::stdout().lock();
                out.write_all(&bytes)?;
                out.flush()?;
                Ok(())
            }
            Some(path) => {
                ensure_writable(path, force)?;
                info(format!(
                    "Exporting {} sheet(s) to {}: {}",
                    sheets.len(),
                    format.as_str().to_uppercase(),
                    path.display()
                ));

                let bytes = Self::to_bytes(sheets, format, cfg, false)?;
                write_file(path, &bytes)?;

                notify_export_success(&format.as_str().to_uppercase(), path);
                Ok(())
            }
        }
    }
}
