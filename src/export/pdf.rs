//! Ranking report renderer: A4 portrait, fixed columns, one table split
//! across as many pages as needed, Helvetica with WinAnsi text.

use crate::export::RankingRow;
use crate::export::model::{report_headers, report_row};
use crate::utils::fmt_money;
use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};

const PAGE_W: f32 = 595.0;
const PAGE_H: f32 = 842.0;
const MARGIN: f32 = 50.0;
const ROW_H: f32 = 18.0;
const PAD: f32 = 4.0;

const TITLE_SIZE: f32 = 14.0;
const HEAD_SIZE: f32 = 9.5;
const BODY_SIZE: f32 = 9.0;

const FONT: Name<'static> = Name(b"F1");

/// Average Helvetica advance, as a fraction of the font size.
const AVG_GLYPH: f32 = 0.52;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Align {
    Left,
    Right,
}

/// Width and alignment of each column, in `report_headers` order.
/// The widths add up to the printable width (495 pt).
const COLUMNS: [(f32, Align); 8] = [
    (30.0, Align::Right),  // Pos
    (135.0, Align::Left),  // User
    (70.0, Align::Left),   // Role
    (70.0, Align::Left),   // Site
    (45.0, Align::Right),  // Entries
    (50.0, Align::Right),  // Points
    (45.0, Align::Right),  // % Goal
    (50.0, Align::Right),  // Bonus
];

const HEADER_FILL: (f32, f32, f32) = (0.85, 0.87, 0.90);
const ELIGIBLE_FILL: (f32, f32, f32) = (0.87, 0.95, 0.87);

/// Texts printed around the table.
pub(crate) struct ReportText<'a> {
    pub title: &'a str,
    pub subtitle: &'a str,
    pub currency: &'a str,
}

fn table_top() -> f32 {
    PAGE_H - MARGIN - 45.0
}

/// Data rows that fit under the header row, leaving room for the totals line
/// and the page footer.
fn rows_per_page() -> usize {
    let bottom = MARGIN + 2.0 * ROW_H;
    ((table_top() - ROW_H - bottom) / ROW_H).floor() as usize
}

/// Rows split by page; an empty ranking still gets one page of headers.
fn page_chunks(rows: &[RankingRow]) -> Vec<&[RankingRow]> {
    if rows.is_empty() {
        vec![rows]
    } else {
        rows.chunks(rows_per_page()).collect()
    }
}

/// Render the whole report. Object numbering: catalog 1, page tree 2,
/// font 3, then a (page, content) pair per page.
pub(crate) fn render_report(text: &ReportText, rows: &[RankingRow]) -> Vec<u8> {
    let headers = report_headers(text.currency);
    let chunks = page_chunks(rows);
    let total = chunks.len();

    let catalog_id = Ref::new(1);
    let tree_id = Ref::new(2);
    let font_id = Ref::new(3);
    let page_id = |i: usize| Ref::new(4 + 2 * i as i32);
    let content_id = |i: usize| Ref::new(5 + 2 * i as i32);

    let mut pdf = Pdf::new();
    pdf.catalog(catalog_id).pages(tree_id);
    pdf.pages(tree_id)
        .kids((0..total).map(page_id))
        .count(total as i32);
    pdf.type1_font(font_id)
        .base_font(Name(b"Helvetica"))
        .encoding_predefined(Name(b"WinAnsiEncoding"));

    for (i, chunk) in chunks.iter().enumerate() {
        {
            let mut page = pdf.page(page_id(i));
            page.parent(tree_id)
                .media_box(Rect::new(0.0, 0.0, PAGE_W, PAGE_H))
                .contents(content_id(i));
            page.resources().fonts().pair(FONT, font_id);
        }

        let mut content = Content::new();
        draw_heading(&mut content, text);
        let y = draw_table(&mut content, &headers, chunk);
        if i + 1 == total {
            draw_totals(&mut content, y - 1.5 * ROW_H, rows, text.currency);
        }
        draw_text(
            &mut content,
            PAGE_W - MARGIN - 50.0,
            MARGIN - 20.0,
            BODY_SIZE,
            &format!("Page {}/{}", i + 1, total),
        );

        pdf.stream(content_id(i), &content.finish());
    }

    pdf.finish()
}

fn draw_heading(c: &mut Content, text: &ReportText) {
    draw_text(c, MARGIN, PAGE_H - MARGIN, TITLE_SIZE, text.title);
    draw_text(c, MARGIN, PAGE_H - MARGIN - 18.0, BODY_SIZE, text.subtitle);
}

/// Header row plus `rows`; returns the y of the last row drawn.
fn draw_table(c: &mut Content, headers: &[String], rows: &[RankingRow]) -> f32 {
    let mut y = table_top();
    fill_row(c, y, HEADER_FILL);
    draw_cells(c, y, headers, HEAD_SIZE);

    for r in rows {
        y -= ROW_H;
        if r.is_bonus_eligible() {
            fill_row(c, y, ELIGIBLE_FILL);
        }
        draw_cells(c, y, &report_row(r), BODY_SIZE);
    }
    y
}

fn draw_totals(c: &mut Content, y: f32, rows: &[RankingRow], currency: &str) {
    let eligible = rows.iter().filter(|r| r.is_bonus_eligible()).count();
    let bonus: f64 = rows.iter().map(|r| r.bonus).sum();
    let line = format!(
        "{eligible} of {} eligible · total bonus {}",
        rows.len(),
        fmt_money(bonus, currency)
    );
    draw_text(c, MARGIN, y, BODY_SIZE, &line);
}

fn fill_row(c: &mut Content, y: f32, (r, g, b): (f32, f32, f32)) {
    let width: f32 = COLUMNS.iter().map(|(w, _)| w).sum();
    c.save_state();
    c.set_fill_rgb(r, g, b);
    c.rect(MARGIN, y, width, ROW_H);
    c.fill_nonzero();
    c.restore_state();
}

fn draw_cells(c: &mut Content, y: f32, cells: &[String], size: f32) {
    let mut x = MARGIN;
    for (&(width, align), cell) in COLUMNS.iter().zip(cells) {
        let shown = clip(cell, width - 2.0 * PAD, size);
        let tx = match align {
            Align::Left => x + PAD,
            Align::Right => x + width - PAD - text_width(&shown, size),
        };
        draw_text(c, tx, y + 5.0, size, &shown);

        c.save_state();
        c.set_stroke_rgb(0.65, 0.65, 0.65);
        c.rect(x, y, width, ROW_H);
        c.stroke();
        c.restore_state();

        x += width;
    }
}

fn draw_text(c: &mut Content, x: f32, y: f32, size: f32, text: &str) {
    c.begin_text();
    c.set_font(FONT, size);
    c.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
    c.show(Str(&to_win_ansi(text)));
    c.end_text();
}

fn text_width(text: &str, size: f32) -> f32 {
    text.chars().count() as f32 * size * AVG_GLYPH
}

/// Shorten `text` with an ellipsis so it fits in `avail` points.
fn clip(text: &str, avail: f32, size: f32) -> String {
    let max = (avail / (size * AVG_GLYPH)).floor() as usize;
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max.saturating_sub(1)).collect();
    out.push('…');
    out
}

/// Encode text for the WinAnsi-encoded standard font. Characters outside
/// the encoding become `?`.
fn to_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            '€' => 0x80,
            '…' => 0x85,
            '–' => 0x96,
            '—' => 0x97,
            c if (c as u32) < 0x80 || (0xA0..=0xFF).contains(&(c as u32)) => c as u32 as u8,
            _ => b'?',
        })
        .collect()
}
