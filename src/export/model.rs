// src/export/model.rs

use crate::models::log_sheet::LogSheet;
use serde::Serialize;

/// Flat row for the CSV export: one line per drawn edge.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct EdgeExport {
    pub date: String,
    pub index: usize,
    pub event_index: usize,
    pub kind: &'static str,
    pub status: &'static str,
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

pub(crate) fn sheet_to_rows(sheet: &LogSheet) -> Vec<EdgeExport> {
    let date = sheet.date_str();
    sheet
        .edges
        .iter()
        .enumerate()
        .map(|(i, e)| EdgeExport {
            date: date.clone(),
            index: i,
            event_index: e.event_index,
            kind: e.kind.as_str(),
            status: e.status.label(),
            x1: e.from.x,
            y1: e.from.y,
            x2: e.to.x,
            y2: e.to.y,
        })
        .collect()
}
