use crate::db::pool::DbPool;
use crate::db::{entries, entry_types, holidays, settings, users};
use crate::errors::AppResult;
use crate::models::entry::Entry;
use crate::models::entry_type::EntryType;
use crate::models::holiday::Holiday;
use crate::models::incentive::IncentiveConfig;
use crate::models::user::User;

/// Caller-owned snapshot of every table the reports read.
/// It is built once per command and passed by reference to the core.
#[derive(Debug, Clone, Default)]
pub struct DataContext {
    pub users: Vec<User>,
    pub entry_types: Vec<EntryType>,
    pub incentive: IncentiveConfig,
    pub entries: Vec<Entry>,
    pub holidays: Vec<Holiday>,
}

impl DataContext {
    pub fn load(pool: &mut DbPool) -> AppResult<Self> {
        let conn = &pool.conn;
        Ok(Self {
            users: users::load_users(conn)?,
            entry_types: entry_types::load_entry_types(conn)?,
            incentive: settings::load_incentive(conn)?,
            entries: entries::load_entries(conn)?,
            holidays: holidays::load_holidays(conn)?,
        })
    }

    pub fn user_by_email(&self, email: &str) -> Option<&User> {
        let email = email.trim().to_lowercase();
        self.users.iter().find(|u| u.email == email)
    }

    pub fn entry_type(&self, id: &str) -> Option<&EntryType> {
        self.entry_types.iter().find(|t| t.id == id)
    }

    /// Types offered when registering a new entry.
    pub fn active_entry_types(&self) -> impl Iterator<Item = &EntryType> {
        self.entry_types.iter().filter(|t| t.active)
    }
}
