use crate::core::calculator::totals::format_total;
use crate::core::grid::{
    GRID_UNITS, STATUS_ROWS, hour_label, hour_lines, quarter_ticks, row_top, status_y,
};
use crate::models::duty_status::DutyStatus;
use crate::models::log_sheet::LogSheet;
use crate::utils::colors::hex_to_rgb;
use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};

/// One landscape A4 page per daily log.
pub struct PdfManager {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    page_refs: Vec<Ref>,
    current_content_id: Option<Ref>,

    page_w: f32,
    page_h: f32,
    margin: f32,
    label_w: f32,
    totals_w: f32,
    row_h: f32,

    next_id: i32,
    font_id: Ref,

    font_size: f32,
    small_font_size: f32,
    title_font_size: f32,

    stroke: (f32, f32, f32),
}

impl Default for PdfManager {
    fn default() -> Self {
        Self::new("#0056b3")
    }
}

impl PdfManager {
    pub fn new(stroke_color: &str) -> Self {
        let mut pdf = Pdf::new();

        // IDs are assigned by hand
        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let font_id = Ref::new(3);
        let next_id = 4;

        pdf.type1_font(font_id)
            .base_font(Name(b"Helvetica"))
            .encoding_predefined(Name(b"WinAnsiEncoding"));

        Self {
            pdf,
            catalog_id,
            pages_id,
            page_refs: Vec::new(),
            current_content_id: None,

            page_w: 842.0,
            page_h: 595.0,
            margin: 40.0,
            label_w: 120.0,
            totals_w: 60.0,
            row_h: 32.0,

            next_id,
            font_id,

            font_size: 10.0,
            small_font_size: 7.0,
            title_font_size: 14.0,

            stroke: hex_to_rgb(stroke_color),
        }
    }

    fn fresh_ref(&mut self) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        Ref::new(id)
    }

    /// Create a new page and its content object
    fn new_page(&mut self) -> Content {
        let page_id = self.fresh_ref();
        let content_id = self.fresh_ref();

        self.page_refs.push(page_id);

        let mut page = self.pdf.page(page_id);
        page.parent(self.pages_id)
            .media_box(Rect::new(0.0, 0.0, self.page_w, self.page_h))
            .contents(content_id);

        page.resources().fonts().pair(Name(b"F1"), self.font_id);

        self.current_content_id = Some(content_id);

        Content::new()
    }

    fn finalize_page(&mut self, content: Content) {
        if let Some(id) = self.current_content_id {
            self.pdf.stream(id, &content.finish());
        }
    }

    fn build_pages_tree(&mut self) {
        let mut pages = self.pdf.pages(self.pages_id);
        pages.count(self.page_refs.len() as i32);
        pages.kids(self.page_refs.clone());
    }

    fn draw_text(&self, content: &mut Content, x: f32, y: f32, size: f32, text: &str) {
        let bytes = pdf_bytes(text);
        content.begin_text();
        content.set_font(Name(b"F1"), size);
        content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
        content.show(Str(&bytes));
        content.end_text();
    }

    fn draw_line(&self, content: &mut Content, from: (f32, f32), to: (f32, f32)) {
        content.move_to(from.0, from.1);
        content.line_to(to.0, to.1);
        content.stroke();
    }

    fn grid_left(&self) -> f32 {
        self.margin + self.label_w
    }

    fn grid_w(&self) -> f32 {
        self.page_w - 2.0 * self.margin - self.label_w - self.totals_w
    }

    fn grid_top(&self) -> f32 {
        self.page_h - self.margin - 60.0
    }

    fn grid_h(&self) -> f32 {
        self.row_h * f32::from(STATUS_ROWS)
    }

    /// Fractional → page coordinates (PDF origin is bottom-left).
    fn to_page(&self, fx: f64, fy: f64) -> (f32, f32) {
        (
            self.grid_left() + fx as f32 * self.grid_w(),
            self.grid_top() - fy as f32 * self.grid_h(),
        )
    }

    fn draw_grid(&self, content: &mut Content) {
        let left = self.grid_left();
        let right = left + self.grid_w();
        let top = self.grid_top();
        let bottom = top - self.grid_h();

        content.save_state();
        content.set_line_width(0.5);
        content.set_stroke_rgb(0.4, 0.4, 0.4);

        // row bands
        for row in 1..=STATUS_ROWS {
            let (_, y) = self.to_page(0.0, row_top(row));
            self.draw_line(content, (left, y), (right, y));
        }
        self.draw_line(content, (left, bottom), (right, bottom));

        // hours
        for (h, fx) in hour_lines().into_iter().enumerate() {
            let (x, _) = self.to_page(fx, 0.0);
            self.draw_line(content, (x, top), (x, bottom));
            let label = hour_label(h as u32);
            let w = label.len() as f32 * self.small_font_size * 0.5;
            self.draw_text(content, x - w / 2.0, top + 4.0, self.small_font_size, &label);
        }

        // quarter ticks
        content.set_stroke_rgb(0.65, 0.65, 0.65);
        for fx in quarter_ticks() {
            let half_hour = ((fx * GRID_UNITS as f64).round() as usize) % 2 == 0;
            let len = self.row_h * if half_hour { 0.4 } else { 0.25 };
            for row in 1..=STATUS_ROWS {
                let (x, y) = self.to_page(fx, row_top(row));
                self.draw_line(content, (x, y), (x, y - len));
            }
        }

        content.restore_state();
    }

    fn draw_sheet(&self, content: &mut Content, sheet: &LogSheet) {
        // Header
        self.draw_text(
            content,
            self.margin,
            self.page_h - self.margin - 10.0,
            self.title_font_size,
            &sheet.header,
        );
        let date = format!("DATE: {}", sheet.date_str());
        self.draw_text(
            content,
            self.page_w - self.margin - 110.0,
            self.page_h - self.margin - 10.0,
            self.font_size,
            &date,
        );

        self.draw_grid(content);

        // Row labels + totals
        let totals_x = self.grid_left() + self.grid_w() + 8.0;
        for status in DutyStatus::ALL {
            let (_, y) = self.to_page(0.0, status_y(status));
            self.draw_text(content, self.margin, y - 3.0, self.font_size, status.label());
            self.draw_text(
                content,
                totals_x,
                y - 3.0,
                self.font_size,
                &format_total(sheet.totals.value(status)),
            );
        }
        let bottom = self.grid_top() - self.grid_h();
        self.draw_text(
            content,
            totals_x,
            bottom - 14.0,
            self.font_size,
            &format!("={}", format_total(sheet.totals.grand_total)),
        );

        // Duty-status path
        content.save_state();
        content.set_line_width(2.0);
        content.set_stroke_rgb(self.stroke.0, self.stroke.1, self.stroke.2);
        for e in &sheet.edges {
            let from = self.to_page(e.from.x, e.from.y);
            let to = self.to_page(e.to.x, e.to.y);
            self.draw_line(content, from, to);
        }
        content.restore_state();

        // Remarks
        let mut y = bottom - 40.0;
        self.draw_text(content, self.margin, y, self.font_size + 1.0, "REMARKS");
        for r in &sheet.remarks {
            y -= 14.0;
            if y < self.margin {
                break;
            }
            let line = format!("{}: {}", r.clock, r.text);
            self.draw_text(content, self.margin + 10.0, y, self.font_size, &line);
        }
    }

    /// Add one page per sheet.
    pub fn write_sheets(&mut self, sheets: &[LogSheet]) {
        for sheet in sheets {
            let mut content = self.new_page();
            self.draw_sheet(&mut content, sheet);
            self.finalize_page(content);
        }
    }

    pub fn finish(mut self) -> Vec<u8> {
        // Catalog + Pages are built once, here
        self.pdf.catalog(self.catalog_id).pages(self.pages_id);
        self.build_pages_tree();
        self.pdf.finish()
    }
}

/// WinAnsiEncoding agrees with Latin-1 outside 0x80..=0x9F; everything else
/// becomes '?'.
fn pdf_bytes(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match u8::try_from(u32::from(c)) {
            Ok(b) if !(0x80..=0x9F).contains(&b) => b,
            _ => b'?',
        })
        .collect()
}
