use crate::db::log::{audit, replace_changes};
use crate::db::pool::DbPool;
use crate::db::{entries, entry_types, holidays, settings, users};
use crate::errors::{AppError, AppResult};
use crate::models::user::User;
use crate::sheet::decode::{DecodedWorkbook, parse_dump};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Row counts of an import, reported by the CLI.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImportSummary {
    pub users: usize,
    pub entry_types: usize,
    pub entries: usize,
    pub changes: usize,
    pub holidays: usize,
    pub skipped: usize,
    pub users_index: usize,
    pub types_index: usize,
    pub entries_index: usize,
}

pub struct ImportLogic;

/// Keep the first record for each key; later duplicates are counted as skipped.
fn dedup_by<T, F>(items: Vec<T>, key: F, skipped: &mut usize) -> Vec<T>
where
    F: Fn(&T) -> String,
{
    let mut seen = HashSet::new();
    let before = items.len();
    let out: Vec<T> = items.into_iter().filter(|i| seen.insert(key(i))).collect();
    *skipped += before - out.len();
    out
}

impl ImportLogic {
    /// Replace every local table with the content of a workbook dump.
    ///
    /// An empty store can be seeded by anyone; once users exist only a
    /// supervisor may overwrite it.
    pub fn import_file(pool: &mut DbPool, actor_email: &str, path: &Path) -> AppResult<ImportSummary> {
        let text = fs::read_to_string(path)?;
        let wb = parse_dump(&text)
            .map_err(|e| AppError::Import(format!("{}: {e}", path.display())))?;

        let current = users::load_users(&pool.conn)?;
        if !current.is_empty() {
            let actor_email = actor_email.trim().to_lowercase();
            let allowed = current
                .iter()
                .any(|u: &User| u.email == actor_email && u.is_supervisor());
            if !allowed {
                return Err(AppError::PermissionDenied(
                    "only a supervisor can replace existing data".into(),
                ));
            }
        }

        Self::apply(pool, actor_email, wb)
    }

    pub fn apply(pool: &mut DbPool, actor_email: &str, wb: DecodedWorkbook) -> AppResult<ImportSummary> {
        let mut skipped = 0;
        let user_rows = dedup_by(wb.users, |u| u.email.clone(), &mut skipped);
        let user_rows = dedup_by(user_rows, |u| u.id.clone(), &mut skipped);
        let type_rows = dedup_by(wb.entry_types, |t| t.id.clone(), &mut skipped);
        let entry_rows = dedup_by(wb.entries, |e| e.id.clone(), &mut skipped);
        let holiday_rows = dedup_by(
            wb.holidays,
            |h| format!("{}|{}", h.date, h.site),
            &mut skipped,
        );

        let tx = pool.conn.transaction()?;
        users::replace_all(&tx, &user_rows)?;
        entry_types::replace_all(&tx, &type_rows)?;
        settings::save_incentive(&tx, &wb.incentive)?;
        entries::replace_all(&tx, &entry_rows)?;
        holidays::replace_all(&tx, &holiday_rows)?;
        replace_changes(&tx, &wb.changes)?;
        tx.commit()?;

        let summary = ImportSummary {
            users: user_rows.len(),
            entry_types: type_rows.len(),
            entries: entry_rows.len(),
            changes: wb.changes.len(),
            holidays: holiday_rows.len(),
            skipped,
            users_index: wb.users_index.len(),
            types_index: wb.types_index.len(),
            entries_index: wb.entries_index.len(),
        };

        audit(
            &pool.conn,
            actor_email,
            "import",
            &format!(
                "users={} types={} entries={} holidays={} history={}",
                summary.users, summary.entry_types, summary.entries, summary.holidays, summary.changes
            ),
        );

        Ok(summary)
    }
}
