use crate::errors::AppResult;
use crate::models::entry_type::EntryType;
use rusqlite::{Connection, OptionalExtension, Row, params};

fn map_row(row: &Row) -> rusqlite::Result<EntryType> {
    Ok(EntryType {
        id: row.get("id")?,
        name: row.get("nombre")?,
        points: row.get("puntuacion")?,
        active: row.get::<_, i32>("activo")? != 0,
    })
}

pub fn load_entry_types(conn: &Connection) -> AppResult<Vec<EntryType>> {
    let mut stmt =
        conn.prepare("SELECT id, nombre, puntuacion, activo FROM tipos ORDER BY rowid ASC")?;
    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn find_entry_type(conn: &Connection, id: &str) -> AppResult<Option<EntryType>> {
    let mut stmt =
        conn.prepare("SELECT id, nombre, puntuacion, activo FROM tipos WHERE id = ?1")?;
    Ok(stmt.query_row([id], map_row).optional()?)
}

pub fn insert_entry_type(conn: &Connection, t: &EntryType) -> AppResult<()> {
    conn.execute(
        "INSERT INTO tipos (id, nombre, puntuacion, activo) VALUES (?1, ?2, ?3, ?4)",
        params![t.id, t.name, t.points, if t.active { 1 } else { 0 }],
    )?;
    Ok(())
}

pub fn replace_entry_type(conn: &Connection, t: &EntryType) -> AppResult<()> {
    conn.execute(
        "UPDATE tipos SET nombre = ?2, puntuacion = ?3, activo = ?4 WHERE id = ?1",
        params![t.id, t.name, t.points, if t.active { 1 } else { 0 }],
    )?;
    Ok(())
}

pub fn delete_entry_type(conn: &Connection, id: &str) -> AppResult<usize> {
    Ok(conn.execute("DELETE FROM tipos WHERE id = ?1", [id])?)
}

/// True when at least one entry references the type.
pub fn is_in_use(conn: &Connection, id: &str) -> AppResult<bool> {
    let mut stmt = conn.prepare("SELECT 1 FROM entradas WHERE tipo_id = ?1 LIMIT 1")?;
    Ok(stmt.exists([id])?)
}

pub fn replace_all(conn: &Connection, types: &[EntryType]) -> AppResult<()> {
    conn.execute("DELETE FROM tipos", [])?;
    for t in types {
        insert_entry_type(conn, t)?;
    }
    Ok(())
}
