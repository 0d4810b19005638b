use crate::core::fresh_id;
use crate::core::identity::require_owner_or_supervisor;
use crate::db::entries::{
    delete_entry, find_entry, id_exists, insert_entry, load_entries_for_month, replace_entry,
};
use crate::db::entry_types::find_entry_type;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::entry::{Entry, is_case_duplicate};
use crate::models::entry_type::EntryType;
use crate::models::user::User;
use crate::utils::date::parse_date;
use rusqlite::Connection;

/// Replacement values for `EntryLogic::edit`. `None` keeps the stored value.
#[derive(Debug, Default, Clone)]
pub struct EntryEdit {
    pub date: Option<String>,
    pub case_reference: Option<String>,
    pub entry_type_id: Option<String>,
    pub comment: Option<String>,
}

/// High-level business logic for registering, editing and deleting entries.
pub struct EntryLogic;

fn validated_date(date: &str) -> AppResult<String> {
    let d = parse_date(date).ok_or_else(|| AppError::InvalidDate(date.to_string()))?;
    Ok(d.format("%Y-%m-%d").to_string())
}

fn validated_case(case_reference: &str) -> AppResult<String> {
    let case = case_reference.trim();
    if case.is_empty() {
        return Err(AppError::MissingField("case reference".into()));
    }
    Ok(case.to_string())
}

/// Only active types may be picked for new or re-typed entries.
fn active_type(conn: &Connection, type_id: &str) -> AppResult<EntryType> {
    let t = find_entry_type(conn, type_id)?
        .ok_or_else(|| AppError::EntryTypeNotFound(type_id.to_string()))?;
    if !t.active {
        return Err(AppError::InactiveEntryType(t.name));
    }
    Ok(t)
}

fn ensure_unique_case(
    conn: &Connection,
    email: &str,
    date: &str,
    case_reference: &str,
    ignore_id: Option<&str>,
) -> AppResult<()> {
    let month_key = date.get(0..7).unwrap_or(date);
    let existing = load_entries_for_month(conn, email, month_key)?;

    if is_case_duplicate(&existing, email, month_key, case_reference, ignore_id) {
        return Err(AppError::DuplicateCase {
            case: case_reference.to_string(),
            month: month_key.to_string(),
        });
    }
    Ok(())
}

impl EntryLogic {
    /// Register a new entry for `actor`. Its points are the type's value now.
    pub fn register(
        pool: &mut DbPool,
        actor: &User,
        date: &str,
        case_reference: &str,
        entry_type_id: &str,
        comment: Option<&str>,
    ) -> AppResult<Entry> {
        let conn = &pool.conn;

        let date = validated_date(date)?;
        let case = validated_case(case_reference)?;
        let etype = active_type(conn, entry_type_id.trim())?;

        ensure_unique_case(conn, &actor.email, &date, &case, None)?;

        let id = fresh_id(|id| id_exists(conn, id))?;
        let entry = Entry {
            id,
            owner_name: actor.name.clone(),
            owner_email: actor.email.clone(),
            date,
            case_reference: case,
            entry_type_id: etype.id.clone(),
            points: etype.points,
            comment: comment.map(str::trim).unwrap_or("").to_string(),
        };

        insert_entry(conn, &entry)?;
        audit(
            conn,
            &actor.email,
            "add",
            &format!(
                "entry {} | {} | {} | {} ({} pts)",
                entry.id, entry.date, entry.case_reference, etype.name, entry.points
            ),
        );

        Ok(entry)
    }

    /// Replace an entry as a whole row. Points are taken again from the type
    /// only when the type changes; otherwise the stored snapshot is kept.
    pub fn edit(pool: &mut DbPool, actor: &User, id: &str, changes: &EntryEdit) -> AppResult<Entry> {
        let conn = &pool.conn;

        let current =
            find_entry(conn, id)?.ok_or_else(|| AppError::EntryNotFound(id.to_string()))?;
        require_owner_or_supervisor(actor, &current.owner_email)?;

        let mut updated = current.clone();

        if let Some(d) = &changes.date {
            updated.date = validated_date(d)?;
        }
        if let Some(c) = &changes.case_reference {
            updated.case_reference = validated_case(c)?;
        }
        if let Some(c) = &changes.comment {
            updated.comment = c.trim().to_string();
        }
        if let Some(t) = &changes.entry_type_id
            && t.trim() != current.entry_type_id
        {
            let etype = active_type(conn, t.trim())?;
            updated.entry_type_id = etype.id;
            updated.points = etype.points;
        }

        ensure_unique_case(
            conn,
            &updated.owner_email,
            &updated.date,
            &updated.case_reference,
            Some(&updated.id),
        )?;

        replace_entry(conn, &updated)?;
        audit(
            conn,
            &actor.email,
            "edit",
            &format!(
                "entry {} | {} | {} | type {} ({} pts)",
                updated.id,
                updated.date,
                updated.case_reference,
                updated.entry_type_id,
                updated.points
            ),
        );

        Ok(updated)
    }

    pub fn delete(pool: &mut DbPool, actor: &User, id: &str) -> AppResult<Entry> {
        let conn = &pool.conn;

        let current =
            find_entry(conn, id)?.ok_or_else(|| AppError::EntryNotFound(id.to_string()))?;
        require_owner_or_supervisor(actor, &current.owner_email)?;

        delete_entry(conn, id)?;
        audit(
            conn,
            &actor.email,
            "del",
            &format!(
                "entry {} | {} | {} (owner {})",
                current.id, current.date, current.case_reference, current.owner_email
            ),
        );

        Ok(current)
    }
}
