// src/export/json_csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::sheet_to_rows;
use crate::models::log_sheet::LogSheet;

/// Sheets as pretty-printed JSON.
pub(crate) fn to_json(sheets: &[LogSheet]) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(sheets)?)
}

/// Edges of all sheets as CSV (header included thanks to serde).
pub(crate) fn to_csv(sheets: &[LogSheet]) -> AppResult<String> {
    let mut wtr = csv::Writer::from_writer(Vec::new());

    for sheet in sheets {
        for row in sheet_to_rows(sheet) {
            wtr.serialize(row)?;
        }
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| AppError::Export(format!("CSV flush error: {e}")))?;

    String::from_utf8(bytes).map_err(|e| AppError::Export(format!("CSV encoding error: {e}")))
}
