use crate::errors::AppResult;
use crate::models::entry::Entry;
use rusqlite::{Connection, OptionalExtension, Row, params};

const SELECT_ENTRIES: &str =
    "SELECT id, usuario, email, fecha, expediente, tipo_id, puntos, comentario FROM entradas";

pub fn map_row(row: &Row) -> rusqlite::Result<Entry> {
    Ok(Entry {
        id: row.get("id")?,
        owner_name: row.get("usuario")?,
        owner_email: row.get("email")?,
        date: row.get("fecha")?,
        case_reference: row.get("expediente")?,
        entry_type_id: row.get("tipo_id")?,
        points: row.get("puntos")?,
        comment: row.get("comentario")?,
    })
}

/// All entries in insertion order.
pub fn load_entries(conn: &Connection) -> AppResult<Vec<Entry>> {
    let mut stmt = conn.prepare(&format!("{SELECT_ENTRIES} ORDER BY rowid ASC"))?;
    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Entries of one owner within a `YYYY-MM` month.
pub fn load_entries_for_month(conn: &Connection, email: &str, month_key: &str) -> AppResult<Vec<Entry>> {
    let mut stmt = conn.prepare(&format!(
        "{SELECT_ENTRIES} WHERE email = ?1 AND fecha LIKE ?2 ORDER BY rowid ASC"
    ))?;
    let rows = stmt.query_map(params![email, format!("{month_key}-%")], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn find_entry(conn: &Connection, id: &str) -> AppResult<Option<Entry>> {
    let mut stmt = conn.prepare(&format!("{SELECT_ENTRIES} WHERE id = ?1"))?;
    Ok(stmt.query_row([id], map_row).optional()?)
}

pub fn insert_entry(conn: &Connection, e: &Entry) -> AppResult<()> {
    conn.execute(
        "INSERT INTO entradas (id, usuario, email, fecha, expediente, tipo_id, puntos, comentario)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            e.id,
            e.owner_name,
            e.owner_email,
            e.date,
            e.case_reference,
            e.entry_type_id,
            e.points,
            e.comment
        ],
    )?;
    Ok(())
}

/// Full-row replacement keyed by id. Entries are never partially updated.
pub fn replace_entry(conn: &Connection, e: &Entry) -> AppResult<()> {
    conn.execute(
        "UPDATE entradas
         SET usuario = ?2, email = ?3, fecha = ?4, expediente = ?5,
             tipo_id = ?6, puntos = ?7, comentario = ?8
         WHERE id = ?1",
        params![
            e.id,
            e.owner_name,
            e.owner_email,
            e.date,
            e.case_reference,
            e.entry_type_id,
            e.points,
            e.comment
        ],
    )?;
    Ok(())
}

pub fn delete_entry(conn: &Connection, id: &str) -> AppResult<usize> {
    Ok(conn.execute("DELETE FROM entradas WHERE id = ?1", [id])?)
}

pub fn id_exists(conn: &Connection, id: &str) -> AppResult<bool> {
    let mut stmt = conn.prepare("SELECT 1 FROM entradas WHERE id = ?1")?;
    Ok(stmt.exists([id])?)
}

pub fn replace_all(conn: &Connection, entries: &[Entry]) -> AppResult<()> {
    conn.execute("DELETE FROM entradas", [])?;
    for e in entries {
        insert_entry(conn, e)?;
    }
    Ok(())
}
