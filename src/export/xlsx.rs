// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{report_headers, report_row};
use crate::export::{RankingRow, notify_export_success};
use crate::ui::messages::info;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::io;
use std::path::Path;
use unicode_width::UnicodeWidthStr;

/// Export XLSX with a styled header, banded rows and auto-sized columns.
/// Numeric columns are written as numbers; the goal percentage as a fraction
/// with a percent format.
pub(crate) fn export_xlsx(rows: &[RankingRow], title: &str, currency: &str, path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Ranking").map_err(to_io_app_error)?;

    let title_format = Format::new().set_bold().set_font_size(14);
    worksheet
        .write_with_format(0, 0, title, &title_format)
        .map_err(to_io_app_error)?;

    // ---------------------------
    // Header
    // ---------------------------
    let headers = report_headers(currency);
    let header_row = 2;

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_with_format(header_row, col as u16, header.as_str(), &header_format)
            .map_err(to_io_app_error)?;
    }

    worksheet.set_freeze_panes(header_row + 1, 0).ok();

    let mut col_widths: Vec<usize> = headers.iter().map(|h| UnicodeWidthStr::width(h.as_str())).collect();

    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);

    // ---------------------------
    // Rows
    // ---------------------------
    for (i, r) in rows.iter().enumerate() {
        let row = header_row + 1 + i as u32;
        let bg = if i % 2 == 0 { band1 } else { band2 };

        write_number(worksheet, row, 0, r.position as f64, "0", bg)?;
        write_text(worksheet, row, 1, &r.name, bg)?;
        write_text(worksheet, row, 2, &r.role, bg)?;
        write_text(worksheet, row, 3, if r.site.is_empty() { "-" } else { &r.site }, bg)?;
        write_number(worksheet, row, 4, r.entries as f64, "0", bg)?;
        write_number(worksheet, row, 5, r.points, "0.00", bg)?;
        write_number(worksheet, row, 6, r.goal_percentage / 100.0, "0%", bg)?;
        write_number(worksheet, row, 7, r.bonus, "#,##0.00", bg)?;

        for (w, cell) in col_widths.iter_mut().zip(report_row(r)) {
            *w = (*w).max(UnicodeWidthStr::width(cell.as_str()));
        }
    }

    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_io_app_error)?;
    }

    workbook.save(path).map_err(to_io_app_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

fn cell_format(bg: Color) -> Format {
    Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin)
}

fn write_number(ws: &mut Worksheet, row: u32, col: u16, value: f64, num_format: &str, bg: Color) -> AppResult<()> {
    let fmt = cell_format(bg)
        .set_num_format(num_format)
        .set_align(FormatAlign::Right);
    ws.write_with_format(row, col, value, &fmt)
        .map_err(to_io_app_error)?;
    Ok(())
}

fn write_text(ws: &mut Worksheet, row: u32, col: u16, value: &str, bg: Color) -> AppResult<()> {
    ws.write_with_format(row, col, value, &cell_format(bg))
        .map_err(to_io_app_error)?;
    Ok(())
}

fn to_io_app_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::from(io::Error::other(e.to_string()))
}
