use crate::errors::AppResult;
use crate::models::holiday::Holiday;
use rusqlite::{Connection, params};

pub fn load_holidays(conn: &Connection) -> AppResult<Vec<Holiday>> {
    let mut stmt =
        conn.prepare("SELECT fecha, sede, descripcion FROM calendario ORDER BY fecha ASC, sede ASC")?;

    let rows = stmt.query_map([], |row| {
        Ok(Holiday {
            date: row.get(0)?,
            site: row.get(1)?,
            description: row.get(2)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Insert or replace the holiday for (date, site).
pub fn upsert_holiday(conn: &Connection, h: &Holiday) -> AppResult<()> {
    conn.execute(
        "INSERT OR REPLACE INTO calendario (fecha, sede, descripcion) VALUES (?1, ?2, ?3)",
        params![h.date, h.site, h.description],
    )?;
    Ok(())
}

pub fn delete_holiday(conn: &Connection, date: &str, site: &str) -> AppResult<usize> {
    Ok(conn.execute(
        "DELETE FROM calendario WHERE fecha = ?1 AND sede = ?2",
        params![date, site],
    )?)
}

pub fn replace_all(conn: &Connection, holidays: &[Holiday]) -> AppResult<()> {
    conn.execute("DELETE FROM calendario", [])?;
    for h in holidays {
        upsert_holiday(conn, h)?;
    }
    Ok(())
}
