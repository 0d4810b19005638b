// src/export/json_csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{summary_headers, summary_row};
use crate::export::{RankingRow, notify_export_success};
use crate::ui::messages::info;
use serde::Serialize;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

#[derive(Serialize)]
struct JsonReport<'a> {
    month: &'a str,
    daily_point_target: f64,
    monthly_bonus: f64,
    ranking: &'a [RankingRow],
}

/// Export JSON pretty-printed, with the scheme the figures were computed under.
pub(crate) fn export_json(
    rows: &[RankingRow],
    month: &str,
    daily_point_target: f64,
    monthly_bonus: f64,
    path: &Path,
) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let report = JsonReport {
        month,
        daily_point_target,
        monthly_bonus,
        ranking: rows,
    };
    let json_data = serde_json::to_string_pretty(&report)?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Export CSV: every field quoted, header row first.
pub(crate) fn export_csv(rows: &[RankingRow], currency: &str, path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Always)
        .from_path(path)
        .map_err(|e| AppError::from(io::Error::other(format!("CSV open error: {e}"))))?;

    wtr.write_record(summary_headers(currency))?;
    for r in rows {
        wtr.write_record(summary_row(r))?;
    }

    wtr.flush()?;

    notify_export_success("CSV", path);
    Ok(())
}
