use crate::errors::AppResult;
use crate::models::role::Role;
use crate::models::user::{User, normalize_site, split_vacations};
use rusqlite::{Connection, OptionalExtension, Row, params};

const SELECT_USERS: &str = "SELECT id, nombre, email, rol, sede, vacaciones FROM usuarios";

fn map_row(row: &Row) -> rusqlite::Result<User> {
    let rol: String = row.get("rol")?;
    let sede: String = row.get("sede")?;
    let vacaciones: String = row.get("vacaciones")?;

    Ok(User {
        id: row.get("id")?,
        name: row.get("nombre")?,
        email: row.get("email")?,
        role: Role::from_db_str(&rol),
        site: normalize_site(&sede),
        vacation_dates: split_vacations(&vacaciones),
    })
}

/// All users in insertion order (the seed order of the ranking).
pub fn load_users(conn: &Connection) -> AppResult<Vec<User>> {
    let mut stmt = conn.prepare(&format!("{SELECT_USERS} ORDER BY rowid ASC"))?;
    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn find_by_email(conn: &Connection, email: &str) -> AppResult<Option<User>> {
    let mut stmt = conn.prepare(&format!("{SELECT_USERS} WHERE email = ?1"))?;
    let user = stmt
        .query_row([email.trim().to_lowercase()], map_row)
        .optional()?;
    Ok(user)
}

pub fn find_by_id(conn: &Connection, id: &str) -> AppResult<Option<User>> {
    let mut stmt = conn.prepare(&format!("{SELECT_USERS} WHERE id = ?1"))?;
    Ok(stmt.query_row([id], map_row).optional()?)
}

pub fn insert_user(conn: &Connection, u: &User) -> AppResult<()> {
    conn.execute(
        "INSERT INTO usuarios (id, nombre, email, rol, sede, vacaciones)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            u.id,
            u.name,
            u.email,
            u.role.as_str(),
            u.site_str(),
            u.vacations_csv()
        ],
    )?;
    Ok(())
}

/// Full-row replacement keyed by id.
pub fn replace_user(conn: &Connection, u: &User) -> AppResult<()> {
    conn.execute(
        "UPDATE usuarios
         SET nombre = ?2, email = ?3, rol = ?4, sede = ?5, vacaciones = ?6
         WHERE id = ?1",
        params![
            u.id,
            u.name,
            u.email,
            u.role.as_str(),
            u.site_str(),
            u.vacations_csv()
        ],
    )?;
    Ok(())
}

pub fn replace_all(conn: &Connection, users: &[User]) -> AppResult<()> {
    conn.execute("DELETE FROM usuarios", [])?;
    for u in users {
        insert_user(conn, u)?;
    }
    Ok(())
}
