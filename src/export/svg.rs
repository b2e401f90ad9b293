// src/export/svg.rs

use crate::config::Config;
use crate::core::calculator::totals::format_total;
use crate::core::grid::{GRID_UNITS, STATUS_ROWS, hour_label, hour_lines, quarter_ticks, row_top};
use crate::models::duty_status::DutyStatus;
use crate::models::log_sheet::LogSheet;
use crate::utils::colors::status_hex;
use crate::utils::formatting::xml_escape;

const MARGIN: f64 = 20.0;
const LABEL_W: f64 = 170.0;
const TOTALS_W: f64 = 80.0;
const HEADER_H: f64 = 48.0;
const LINE_H: f64 = 18.0;

/// Pixel frame of one sheet's grid.
struct Frame {
    left: f64,
    top: f64,
    width: f64,
    height: f64,
}

impl Frame {
    fn x(&self, fx: f64) -> f64 {
        self.left + fx * self.width
    }

    fn y(&self, fy: f64) -> f64 {
        self.top + fy * self.height
    }

    fn bottom(&self) -> f64 {
        self.top + self.height
    }

    fn right(&self) -> f64 {
        self.left + self.width
    }
}

fn sheet_height(sheet: &LogSheet, cfg: &Config) -> f64 {
    let grid_h = cfg.svg_row_height * f64::from(STATUS_ROWS);
    let remark_lines = sheet.remarks.len().max(1) as f64;
    MARGIN + HEADER_H + grid_h + 2.0 * LINE_H + LINE_H * (remark_lines + 1.0) + MARGIN
}

fn line(out: &mut String, x1: f64, y1: f64, x2: f64, y2: f64, stroke: &str, width: f64) {
    out.push_str(&format!(
        "<line x1=\"{x1:.2}\" y1=\"{y1:.2}\" x2=\"{x2:.2}\" y2=\"{y2:.2}\" stroke=\"{stroke}\" stroke-width=\"{width}\"/>\n"
    ));
}

fn text(out: &mut String, x: f64, y: f64, size: f64, anchor: &str, content: &str) {
    out.push_str(&format!(
        "<text x=\"{x:.2}\" y=\"{y:.2}\" font-size=\"{size}\" text-anchor=\"{anchor}\">{}</text>\n",
        xml_escape(content)
    ));
}

fn render_sheet(out: &mut String, sheet: &LogSheet, cfg: &Config, offset_y: f64) {
    let frame = Frame {
        left: MARGIN + LABEL_W,
        top: offset_y + MARGIN + HEADER_H,
        width: cfg.svg_width,
        height: cfg.svg_row_height * f64::from(STATUS_ROWS),
    };

    out.push_str(&format!("<g class=\"log-sheet\" data-date=\"{}\">\n", sheet.date_str()));

    // Header
    text(out, MARGIN, offset_y + MARGIN + 14.0, 16.0, "start", &sheet.header);
    text(
        out,
        frame.right() + TOTALS_W,
        offset_y + MARGIN + 14.0,
        13.0,
        "end",
        &format!("DATE: {}", sheet.date_str()),
    );

    // Row bands + labels
    for status in DutyStatus::ALL {
        let top = frame.y(row_top(status.row()));
        out.push_str(&format!(
            "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" fill=\"{}\" fill-opacity=\"0.08\" stroke=\"#999999\" stroke-width=\"1\"/>\n",
            frame.left,
            top,
            frame.width,
            cfg.svg_row_height,
            status_hex(status)
        ));
        let mid = top + cfg.svg_row_height / 2.0 + 4.0;
        text(out, MARGIN, mid, 12.0, "start", status.label());
        text(
            out,
            frame.right() + TOTALS_W - 8.0,
            mid,
            12.0,
            "end",
            &format_total(sheet.totals.value(status)),
        );
    }
    text(
        out,
        frame.right() + TOTALS_W - 8.0,
        frame.bottom() + LINE_H,
        12.0,
        "end",
        &format!("={}", format_total(sheet.totals.grand_total)),
    );

    // Hour lines + labels
    for (h, fx) in hour_lines().into_iter().enumerate() {
        let x = frame.x(fx);
        line(out, x, frame.top, x, frame.bottom(), "#666666", 1.0);
        text(out, x, frame.top - 6.0, 9.0, "middle", &hour_label(h as u32));
    }

    // Quarter-hour ticks hanging from each band's top
    for fx in quarter_ticks() {
        let half_hour = ((fx * GRID_UNITS as f64).round() as usize) % 2 == 0;
        let len = cfg.svg_row_height * if half_hour { 0.4 } else { 0.25 };
        let x = frame.x(fx);
        for row in 1..=STATUS_ROWS {
            let top = frame.y(row_top(row));
            line(out, x, top, x, top + len, "#aaaaaa", 0.5);
        }
    }

    // Duty-status path
    for e in &sheet.edges {
        out.push_str(&format!(
            "<line class=\"{}\" x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" stroke=\"{}\" stroke-width=\"2\" stroke-linecap=\"square\"/>\n",
            e.kind.as_str(),
            frame.x(e.from.x),
            frame.y(e.from.y),
            frame.x(e.to.x),
            frame.y(e.to.y),
            xml_escape(&cfg.stroke_color)
        ));
    }

    // Remarks
    let mut y = frame.bottom() + 2.0 * LINE_H;
    text(out, MARGIN, y, 12.0, "start", "REMARKS");
    if sheet.remarks.is_empty() {
        y += LINE_H;
        text(out, MARGIN + 10.0, y, 11.0, "start", "(none)");
    }
    for r in &sheet.remarks {
        y += LINE_H;
        text(out, MARGIN + 10.0, y, 11.0, "start", &format!("{}: {}", r.clock, r.text));
    }

    out.push_str("</g>\n");
}

/// Standalone SVG document, sheets stacked top to bottom.
pub fn render_svg(sheets: &[LogSheet], cfg: &Config) -> String {
    let width = MARGIN * 2.0 + LABEL_W + cfg.svg_width + TOTALS_W;
    let height: f64 = sheets.iter().map(|s| sheet_height(s, cfg)).sum::<f64>().max(MARGIN * 2.0);

    let mut out = String::new();
    out.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width:.0}\" height=\"{height:.0}\" viewBox=\"0 0 {width:.0} {height:.0}\" font-family=\"Helvetica, Arial, sans-serif\">\n"
    ));
    out.push_str(&format!(
        "<rect x=\"0\" y=\"0\" width=\"{width:.0}\" height=\"{height:.0}\" fill=\"#ffffff\"/>\n"
    ));

    let mut offset = 0.0;
    for sheet in sheets {
        render_sheet(&mut out, sheet, cfg, offset);
        offset += sheet_height(sheet, cfg);
    }

    out.push_str("</svg>\n");
    out
}
