// src/export/text.rs

//! Terminal rendering: one character per quarter hour.

use crate::config::Config;
use crate::core::calculator::totals::format_total;
use crate::core::grid::{
    GRID_UNITS, HOURS_PER_DAY, MINUTES_PER_DAY, MINUTES_PER_UNIT, grid_unit,
};
use crate::models::duty_status::DutyStatus;
use crate::models::log_sheet::LogSheet;
use crate::utils::colors::{colorize_optional, status_colour};
use crate::utils::formatting::{bold, pad_left, pad_right};
use crate::utils::table::{Align, Column, Table};
use crate::utils::time::format_minutes;

const LABEL_W: usize = 21; // "On Duty (Not Driving)"
const FILLED: char = '█';
const EMPTY: char = '·';

/// Fraction back to minutes, snapped so 840/1440*1440 stays 840.
fn minutes_at(x: f64) -> f64 {
    (x * MINUTES_PER_DAY * 1e6).round() / 1e6
}

/// Quarter-hour cells of one status row that the path passes through.
fn row_cells(sheet: &LogSheet, status: DutyStatus) -> [bool; GRID_UNITS] {
    let mut cells = [false; GRID_UNITS];

    for e in sheet.edges.iter().filter(|e| e.is_horizontal() && e.status == status) {
        let start = minutes_at(e.from.x);
        let end = minutes_at(e.to.x);
        let last = ((end / MINUTES_PER_UNIT).ceil() as usize).min(GRID_UNITS);
        for cell in cells.iter_mut().take(last).skip(grid_unit(start)) {
            *cell = true;
        }
    }

    cells
}

/// Short hour label for the character grid: four columns per hour.
fn ruler_label(hour: u32) -> String {
    match hour {
        0 | 24 => "MID".to_string(),
        12 => "NOON".to_string(),
        h => h.to_string(),
    }
}

/// Two ruler lines, even hours on top and odd hours below, each label starting
/// at its hour's column so that every hour is labelled.
fn hour_ruler() -> [String; 2] {
    let mut lines = [String::new(), String::new()];
    for h in 0..=HOURS_PER_DAY {
        let line = &mut lines[(h % 2) as usize];
        let col = (h * 4) as usize;
        let used = line.chars().count();
        if used > col {
            continue;
        }
        line.push_str(&" ".repeat(col - used));
        line.push_str(&ruler_label(h));
    }
    lines
}

fn render_sheet(sheet: &LogSheet, cfg: &Config, color: bool) -> String {
    let mut out = String::new();

    let title = format!("{}    DATE: {}", sheet.header, sheet.date_str());
    out.push_str(&if color { bold(&title) } else { title });
    out.push_str("\n\n");

    // Grid
    for ruler in hour_ruler() {
        out.push_str(&format!("{}{}\n", " ".repeat(LABEL_W + 2), ruler));
    }
    for status in DutyStatus::ALL {
        let cells: String = row_cells(sheet, status)
            .iter()
            .map(|c| if *c { FILLED } else { EMPTY })
            .collect();

        let label = pad_right(status.label(), LABEL_W);
        let (label, cells) = if color {
            let c = status_colour(status);
            (c.paint(label).to_string(), c.paint(cells).to_string())
        } else {
            (label, cells)
        };

        let total = format_total(sheet.totals.value(status));
        let total = if color { colorize_optional(&total) } else { total };

        out.push_str(&format!("{} |{}| {}\n", label, cells, pad_left(&total, 7)));
    }
    out.push_str(&format!(
        "{} {}= {}\n\n",
        " ".repeat(LABEL_W),
        " ".repeat(GRID_UNITS + 2),
        format_total(sheet.totals.grand_total)
    ));

    // Totals table
    let mut table = Table::new(vec![
        Column {
            header: "Status".into(),
            align: Align::Left,
        },
        Column {
            header: format!("Total ({})", sheet.totals.unit.suffix()),
            align: Align::Right,
        },
        Column {
            header: "From events".into(),
            align: Align::Right,
        },
    ]);
    for row in &sheet.totals.rows {
        table.add_row(vec![
            row.label.to_string(),
            format_total(row.value),
            format_minutes(row.recomputed_minutes),
        ]);
    }
    table.add_row(vec![
        "Total".into(),
        format_total(sheet.totals.grand_total),
        format_minutes(sheet.totals.covered_minutes()),
    ]);
    out.push_str(&table.render());
    out.push('\n');

    // Remarks
    out.push_str("REMARKS\n");
    if sheet.remarks.is_empty() {
        out.push_str("  (none)\n");
    }
    let indent = " ".repeat(2 + 8 + 2);
    let text_width = cfg.wrap_width.saturating_sub(indent.len()).max(10);
    for r in &sheet.remarks {
        for (i, line) in textwrap::wrap(&r.text, text_width).iter().enumerate() {
            if i == 0 {
                out.push_str(&format!("  {}  {}\n", pad_right(&r.clock, 8), line));
            } else {
                out.push_str(&format!("{indent}{line}\n"));
            }
        }
    }

    if sheet.has_warnings() {
        out.push_str("\nWARNINGS\n");
        for w in &sheet.warnings {
            out.push_str(&format!("  ! {w}\n"));
        }
    }

    out
}

/// Render all sheets for a terminal. `color` enables ANSI sequences.
pub fn render_text(sheets: &[LogSheet], cfg: &Config, color: bool) -> String {
    sheets
        .iter()
        .map(|s| render_sheet(s, cfg, color))
        .collect::<Vec<_>>()
        .join("\n")
}
