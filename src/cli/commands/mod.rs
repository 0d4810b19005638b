pub mod add;
pub mod config;
pub mod dashboard;
pub mod del;
pub mod edit;
pub mod export;
pub mod history;
pub mod holiday;
pub mod import;
pub mod init;
pub mod log;
pub mod ranking;
pub mod settings;
pub mod types;
pub mod user;

use crate::config::Config;
use crate::core::identity::resolve_actor;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::user::User;
use crate::models::year_month::YearMonth;

/// Open the configured database, applying any pending migration.
pub(crate) fn open_db(cfg: &Config) -> AppResult<DbPool> {
    let pool = DbPool::new(&cfg.database)?;
    init_db(&pool.conn)?;
    Ok(pool)
}

/// Open the database and resolve the acting user.
pub(crate) fn open_as_actor(cfg: &Config) -> AppResult<(DbPool, User)> {
    let mut pool = open_db(cfg)?;
    let actor = resolve_actor(&mut pool, &cfg.user_email)?;
    Ok((pool, actor))
}

/// `--month` value, or the current month.
pub(crate) fn month_or_current(month: &Option<String>) -> AppResult<YearMonth> {
    match month {
        Some(m) => YearMonth::parse(m),
        None => Ok(YearMonth::current()),
    }
}
