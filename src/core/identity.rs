use crate::core::fresh_id;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::users::{find_by_email, find_by_id, insert_user};
use crate::errors::{AppError, AppResult};
use crate::models::role::Role;
use crate::models::user::{User, normalize_email};
use crate::ui::messages::info;

/// Resolve the acting user. Authentication is delegated, so the identity is
/// whatever email the config (or `--as`) names. An unknown email is enrolled
/// as a member on first use.
pub fn resolve_actor(pool: &mut DbPool, email: &str) -> AppResult<User> {
    let email = normalize_email(email);
    if email.is_empty() {
        return Err(AppError::Config(
            "no acting user: set 'user_email' in the config file or pass --as <EMAIL>".into(),
        ));
    }

    if let Some(u) = find_by_email(&pool.conn, &email)? {
        return Ok(u);
    }

    let conn = &pool.conn;
    let id = fresh_id(|id| Ok(find_by_id(conn, id)?.is_some()))?;
    let name = email.split('@').next().unwrap_or(&email).to_string();
    let user = User::new(&id, &name, &email, Role::Member);

    insert_user(conn, &user)?;
    audit(conn, &email, "user-enroll", &format!("enrolled {email} as member"));
    info(format!("Registered new user {email} (member)"));

    Ok(user)
}

pub fn require_supervisor(actor: &User) -> AppResult<()> {
    if actor.is_supervisor() {
        Ok(())
    } else {
        Err(AppError::PermissionDenied(format!(
            "{} is not a supervisor",
            actor.email
        )))
    }
}

/// Owners may change their own records; supervisors may change any record.
pub fn require_owner_or_supervisor(actor: &User, owner_email: &str) -> AppResult<()> {
    if actor.is_supervisor() || actor.email == normalize_email(owner_email) {
        Ok(())
    } else {
        Err(AppError::PermissionDenied(format!(
            "{} cannot modify records owned by {}",
            actor.email, owner_email
        )))
    }
}
