//! Entry history listing with date and type filters.

use crate::errors::{AppError, AppResult};
use crate::models::entry::Entry;
use crate::models::user::User;
use crate::utils::date::parse_date;

#[derive(Debug, Default, Clone)]
pub struct HistoryFilter {
    pub from: Option<String>,
    pub to: Option<String>,
    pub entry_type_id: Option<String>,
}

impl HistoryFilter {
    /// Validates the date bounds (inclusive, `YYYY-MM-DD`).
    pub fn new(
        from: Option<&str>,
        to: Option<&str>,
        entry_type_id: Option<&str>,
    ) -> AppResult<Self> {
        let check = |d: Option<&str>| -> AppResult<Option<String>> {
            match d {
                None => Ok(None),
                Some(s) => parse_date(s)
                    .map(|d| Some(d.format("%Y-%m-%d").to_string()))
                    .ok_or_else(|| AppError::InvalidDate(s.to_string())),
            }
        };

        Ok(Self {
            from: check(from)?,
            to: check(to)?,
            entry_type_id: entry_type_id
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
        })
    }
}

/// Entries visible to `actor`, newest first.
///
/// Members see only their own entries; supervisors see everyone's.
pub fn filter_history<'a>(entries: &'a [Entry], actor: &User, filter: &HistoryFilter) -> Vec<&'a Entry> {
    let mut out: Vec<&Entry> = entries
        .iter()
        .filter(|e| actor.is_supervisor() || e.owner_email == actor.email)
        .filter(|e| filter.from.as_deref().is_none_or(|f| e.date.as_str() >= f))
        .filter(|e| filter.to.as_deref().is_none_or(|t| e.date.as_str() <= t))
        .filter(|e| {
            filter
                .entry_type_id
                .as_deref()
                .is_none_or(|t| e.entry_type_id == t)
        })
        .collect();

    out.sort_by(|a, b| b.date.cmp(&a.date));
    out
}
