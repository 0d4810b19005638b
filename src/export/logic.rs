// src/export/logic.rs

use crate::core::stats::stats_for;
use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::ranking_rows;
use crate::export::pdf_export::export_pdf;
use crate::export::xlsx::export_xlsx;
use crate::export::{ExportFormat, ExportScope, RankingRow};
use crate::models::context::DataContext;
use crate::models::user::normalize_email;
use crate::models::year_month::YearMonth;
use crate::ui::messages::warning;
use crate::utils::fmt_money;
use std::path::{Path, PathBuf};

/// What to export and where.
#[derive(Debug, Clone)]
pub struct ExportRequest {
    pub format: ExportFormat,
    pub month: YearMonth,
    pub scope: ExportScope,
    pub user_email: Option<String>,
    pub file: Option<PathBuf>,
    pub force: bool,
}

/// High-level export of the monthly ranking.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the ranking of `req.month`. Returns the path written.
    pub fn export(ctx: &DataContext, req: &ExportRequest, currency: &str) -> AppResult<PathBuf> {
        let email = match req.scope {
            ExportScope::Department => None,
            ExportScope::User => {
                let e = req
                    .user_email
                    .as_deref()
                    .map(normalize_email)
                    .filter(|e| !e.is_empty())
                    .ok_or_else(|| AppError::MissingField("--user (required with --scope user)".into()))?;
                if ctx.user_by_email(&e).is_none() {
                    return Err(AppError::UserNotFound(e));
                }
                Some(e)
            }
        };

        let path = req
            .file
            .clone()
            .unwrap_or_else(|| PathBuf::from(default_file_name(req.format, req.month, email.as_deref())));

        ensure_writable(&path, req.force)?;

        let stats = stats_for(ctx, req.month, email.as_deref());
        let rows = ranking_rows(&stats, &ctx.incentive);

        if rows.is_empty() {
            warning("No users found; the report will only contain headers.");
        }

        Self::write(ctx, req, email.as_deref(), &rows, &path, currency)?;
        Ok(path)
    }

    fn write(
        ctx: &DataContext,
        req: &ExportRequest,
        email: Option<&str>,
        rows: &[RankingRow],
        path: &Path,
        currency: &str,
    ) -> AppResult<()> {
        let month = req.month.to_string();
        match req.format {
            ExportFormat::Csv => export_csv(rows, currency, path),
            ExportFormat::Json => export_json(
                rows,
                &month,
                ctx.incentive.daily_point_target,
                ctx.incentive.monthly_bonus,
                path,
            ),
            ExportFormat::Xlsx => export_xlsx(rows, &report_title(req.month, email), currency, path),
            ExportFormat::Pdf => {
                let subtitle = format!(
                    "Daily target: {} pts - Monthly bonus: {}",
                    ctx.incentive.daily_point_target,
                    fmt_money(ctx.incentive.monthly_bonus, currency)
                );
                export_pdf(rows, path, &report_title(req.month, email), &subtitle, currency)
            }
        }
    }
}

pub fn report_title(month: YearMonth, email: Option<&str>) -> String {
    match email {
        Some(e) => format!("Performance report {e} - {month}"),
        None => format!("Department report - {month}"),
    }
}

/// `ranking_2024-02.csv`, `report_2024-02.pdf`, `report_ana_2024-02.pdf`.
pub fn default_file_name(format: ExportFormat, month: YearMonth, email: Option<&str>) -> String {
    let ext = format.as_str();
    match format {
        ExportFormat::Pdf => {
            let suffix = email
                .map(|e| format!("{}_", e.split('@').next().unwrap_or(e)))
                .unwrap_or_default();
            format!("report_{suffix}{month}.{ext}")
        }
        _ => format!("ranking_{month}.{ext}"),
    }
}
