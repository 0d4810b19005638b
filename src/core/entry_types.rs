use crate::core::fresh_id;
use crate::core::identity::require_supervisor;
use crate::db::entry_types::{
    delete_entry_type, find_entry_type, insert_entry_type, is_in_use, replace_entry_type,
};
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::entry_type::EntryType;
use crate::models::user::User;

/// Replacement values for `EntryTypeLogic::edit`. `None` keeps the stored value.
#[derive(Debug, Default, Clone)]
pub struct EntryTypeEdit {
    pub name: Option<String>,
    pub points: Option<f64>,
    pub active: Option<bool>,
}

/// Supervisor management of entry types. Editing a type never touches the
/// points already snapshotted on entries.
pub struct EntryTypeLogic;

impl EntryTypeLogic {
    pub fn add(pool: &mut DbPool, actor: &User, name: &str, points: f64, active: bool) -> AppResult<EntryType> {
        require_supervisor(actor)?;
        let conn = &pool.conn;

        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::MissingField("name".into()));
        }
        if !points.is_finite() || points < 0.0 {
            return Err(AppError::InvalidNumber(points.to_string()));
        }

        let id = fresh_id(|id| Ok(find_entry_type(conn, id)?.is_some()))?;
        let t = EntryType {
            id,
            name: name.to_string(),
            points,
            active,
        };

        insert_entry_type(conn, &t)?;
        audit(conn, &actor.email, "type-add", &format!("{} {} ({} pts)", t.id, t.name, t.points));
        Ok(t)
    }

    pub fn edit(pool: &mut DbPool, actor: &User, id: &str, changes: &EntryTypeEdit) -> AppResult<EntryType> {
        require_supervisor(actor)?;
        let conn = &pool.conn;

        let mut t = find_entry_type(conn, id)?
            .ok_or_else(|| AppError::EntryTypeNotFound(id.to_string()))?;

        if let Some(n) = &changes.name {
            let n = n.trim();
            if n.is_empty() {
                return Err(AppError::MissingField("name".into()));
            }
            t.name = n.to_string();
        }
        if let Some(p) = changes.points {
            if !p.is_finite() || p < 0.0 {
                return Err(AppError::InvalidNumber(p.to_string()));
            }
            t.points = p;
        }
        if let Some(a) = changes.active {
            t.active = a;
        }

        replace_entry_type(conn, &t)?;
        audit(
            conn,
            &actor.email,
            "type-edit",
            &format!("{} {} ({} pts, active={})", t.id, t.name, t.points, t.active),
        );
        Ok(t)
    }

    /// Types referenced by any entry cannot be deleted, only deactivated.
    pub fn delete(pool: &mut DbPool, actor: &User, id: &str) -> AppResult<EntryType> {
        require_supervisor(actor)?;
        let conn = &pool.conn;

        let t = find_entry_type(conn, id)?
            .ok_or_else(|| AppError::EntryTypeNotFound(id.to_string()))?;
        if is_in_use(conn, id)? {
            return Err(AppError::EntryTypeInUse(t.name));
        }

        delete_entry_type(conn, id)?;
        audit(conn, &actor.email, "type-del", &format!("{} {}", t.id, t.name));
        Ok(t)
    }
}
