use crate::errors::AppResult;
use crate::models::change::ChangeRecord;
use crate::ui::messages::warning;
use chrono::Local;
use rusqlite::{Connection, params};

/// Append a row to the change history (`historial` table).
pub fn record_change(conn: &Connection, user: &str, action: &str, detail: &str) -> AppResult<()> {
    let now = Local::now().to_rfc3339();

    let mut stmt = conn.prepare_cached(
        "INSERT INTO historial (fecha, usuario, accion, detalle)
         VALUES (?1, ?2, ?3, ?4)",
    )?;

    stmt.execute(params![now, user, action, detail])?;
    Ok(())
}

/// Same as `record_change`, but a failure only produces a warning:
/// the mutation it describes has already been committed.
pub fn audit(conn: &Connection, user: &str, action: &str, detail: &str) {
    if let Err(e) = record_change(conn, user, action, detail) {
        warning(format!("Failed to write change history: {e}"));
    }
}

pub fn load_changes(conn: &Connection) -> AppResult<Vec<ChangeRecord>> {
    let mut stmt = conn.prepare(
        "SELECT id, fecha, usuario, accion, detalle FROM historial ORDER BY id ASC",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok(ChangeRecord {
            id: row.get(0)?,
            date: row.get(1)?,
            user: row.get(2)?,
            action: row.get(3)?,
            detail: row.get(4)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Replace the whole history (used by `import`). Migration markers are kept.
pub fn replace_changes(conn: &Connection, changes: &[ChangeRecord]) -> AppResult<()> {
    conn.execute("DELETE FROM historial WHERE accion <> 'migration_applied'", [])?;
    let mut stmt = conn.prepare_cached(
        "INSERT INTO historial (fecha, usuario, accion, detalle) VALUES (?1, ?2, ?3, ?4)",
    )?;
    for c in changes {
        stmt.execute(params![c.date, c.user, c.action, c.detail])?;
    }
    Ok(())
}
