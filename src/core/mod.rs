pub mod calendar;
pub mod dashboard;
pub mod entries;
pub mod entry_types;
pub mod history;
pub mod holidays;
pub mod identity;
pub mod import;
pub mod log;
pub mod settings;
pub mod stats;
pub mod users;

use crate::errors::AppResult;
use chrono::Utc;

/// New record id: creation timestamp in milliseconds, bumped until `exists`
/// reports it free.
pub(crate) fn fresh_id<F>(exists: F) -> AppResult<String>
where
    F: Fn(&str) -> AppResult<bool>,
{
    let mut n = Utc::now().timestamp_millis();
    loop {
        let id = n.to_string();
        if !exists(&id)? {
            return Ok(id);
        }
        n += 1;
    }
}
