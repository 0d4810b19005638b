use crate::core::fresh_id;
use crate::core::identity::require_supervisor;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::users::{find_by_email, find_by_id, insert_user, replace_user};
use crate::errors::{AppError, AppResult};
use crate::models::role::Role;
use crate::models::user::{User, normalize_email, normalize_site, split_vacations};
use crate::utils::date::parse_date;

/// Replacement values for `UserLogic::edit`. `None` keeps the stored value.
#[derive(Debug, Default, Clone)]
pub struct UserEdit {
    pub name: Option<String>,
    pub role: Option<String>,
    pub site: Option<String>,
    pub vacations: Option<String>,
}

pub struct UserLogic;

fn parse_role(s: &str) -> AppResult<Role> {
    Role::from_code(s).ok_or_else(|| AppError::InvalidRole(s.to_string()))
}

/// Every vacation item must be an ISO date; blanks are dropped.
fn parse_vacations(csv: &str) -> AppResult<Vec<String>> {
    split_vacations(csv)
        .into_iter()
        .map(|v| {
            parse_date(&v)
                .map(|d| d.format("%Y-%m-%d").to_string())
                .ok_or(AppError::InvalidDate(v))
        })
        .collect()
}

impl UserLogic {
    pub fn add(
        pool: &mut DbPool,
        actor: &User,
        email: &str,
        name: &str,
        role: Option<&str>,
        site: Option<&str>,
        vacations: Option<&str>,
    ) -> AppResult<User> {
        require_supervisor(actor)?;
        let conn = &pool.conn;

        let email = normalize_email(email);
        if email.is_empty() {
            return Err(AppError::MissingField("email".into()));
        }
        if find_by_email(conn, &email)?.is_some() {
            return Err(AppError::Other(format!("user {email} already exists")));
        }

        let id = fresh_id(|id| Ok(find_by_id(conn, id)?.is_some()))?;
        let mut user = User::new(&id, name, &email, role.map(parse_role).transpose()?.unwrap_or_default());
        user.site = site.and_then(normalize_site);
        user.vacation_dates = vacations.map(parse_vacations).transpose()?.unwrap_or_default();

        insert_user(conn, &user)?;
        audit(
            conn,
            &actor.email,
            "user-add",
            &format!("{} ({}) role={}", user.email, user.id, user.role.as_str()),
        );
        Ok(user)
    }

    /// Supervisor-only full-row replacement of a user.
    pub fn edit(pool: &mut DbPool, actor: &User, id: &str, changes: &UserEdit) -> AppResult<User> {
        require_supervisor(actor)?;
        let conn = &pool.conn;

        let mut user = find_by_id(conn, id)?.ok_or_else(|| AppError::UserNotFound(id.to_string()))?;

        if let Some(n) = &changes.name {
            user.name = n.trim().to_string();
        }
        if let Some(r) = &changes.role {
            user.role = parse_role(r)?;
        }
        if let Some(s) = &changes.site {
            user.site = normalize_site(s);
        }
        if let Some(v) = &changes.vacations {
            user.vacation_dates = parse_vacations(v)?;
        }

        replace_user(conn, &user)?;
        audit(
            conn,
            &actor.email,
            "user-edit",
            &format!(
                "{} role={} site={} vacations={}",
                user.email,
                user.role.as_str(),
                user.site_str(),
                user.vacation_dates.len()
            ),
        );
        Ok(user)
    }
}
