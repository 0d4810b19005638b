// src/export/pdf_export.rs

use crate::errors::AppResult;
use crate::export::pdf::{ReportText, render_report};
use crate::export::{RankingRow, notify_export_success};
use crate::ui::messages::info;
use std::fs;
use std::path::Path;

/// Export PDF: title, incentive line, then the ranking table.
pub(crate) fn export_pdf(
    rows: &[RankingRow],
    path: &Path,
    title: &str,
    subtitle: &str,
    currency: &str,
) -> AppResult<()> {
    info(format!("Exporting to PDF: {}", path.display()));

    let text = ReportText {
        title,
        subtitle,
        currency,
    };
    fs::write(path, render_report(&text, rows))?;

    notify_export_success("PDF", path);
    Ok(())
}
