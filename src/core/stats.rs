//! Monthly points aggregation and bonus rule.

use crate::core::calendar::working_days;
use crate::models::context::DataContext;
use crate::models::entry::Entry;
use crate::models::entry_type::EntryType;
use crate::models::holiday::Holiday;
use crate::models::incentive::IncentiveConfig;
use crate::models::user::User;
use crate::models::user_stat::UserStat;
use crate::models::year_month::YearMonth;
use std::collections::{BTreeMap, HashMap};

/// Point value of an entry: its own snapshot when non-zero, otherwise the
/// current value of its type (legacy rows without a snapshot), otherwise 0.
pub fn entry_points(entry: &Entry, types: &HashMap<&str, &EntryType>) -> f64 {
    if entry.points.is_finite() && entry.points != 0.0 {
        return entry.points;
    }
    types
        .get(entry.entry_type_id.as_str())
        .map(|t| t.points)
        .filter(|p| p.is_finite())
        .unwrap_or(0.0)
}

pub fn type_index(entry_types: &[EntryType]) -> HashMap<&str, &EntryType> {
    entry_types.iter().map(|t| (t.id.as_str(), t)).collect()
}

/// points / (working_days × daily target) × 100, or 0 without a target.
pub fn goal_percentage(points: f64, working_days: usize, daily_point_target: f64) -> f64 {
    let required = working_days as f64 * daily_point_target;
    if required > 0.0 {
        points / required * 100.0
    } else {
        0.0
    }
}

/// Bonus eligibility: the monthly goal is met at 100% or more.
pub fn is_eligible(goal_percentage: f64) -> bool {
    goal_percentage >= 100.0
}

/// Bonus for a goal percentage: the monthly bonus when eligible, else 0.
pub fn bonus_amount(goal_percentage: f64, config: &IncentiveConfig) -> f64 {
    if is_eligible(goal_percentage) {
        config.monthly_bonus
    } else {
        0.0
    }
}

/// Bonus earned by a row. Every surface (ranking, exports) goes through here.
pub fn bonus_for(stat: &UserStat, config: &IncentiveConfig) -> f64 {
    bonus_amount(stat.goal_percentage, config)
}

/// Ranked per-user statistics for `ym`.
///
/// Every known user gets a row, even without activity. When `email_filter`
/// is given only that user's row is returned. Rows are sorted by points,
/// descending. Ties keep the order of `users`.
pub fn build_stats(
    ym: YearMonth,
    entries: &[Entry],
    users: &[User],
    entry_types: &[EntryType],
    holidays: &[Holiday],
    config: &IncentiveConfig,
    email_filter: Option<&str>,
) -> Vec<UserStat> {
    let filter = email_filter
        .map(|e| e.trim().to_lowercase())
        .filter(|e| !e.is_empty());
    let types = type_index(entry_types);

    let mut stats: Vec<UserStat> = Vec::with_capacity(users.len());
    let mut by_email: HashMap<&str, usize> = HashMap::new();

    for u in users {
        if by_email.contains_key(u.email.as_str()) {
            continue;
        }
        by_email.insert(u.email.as_str(), stats.len());
        stats.push(UserStat {
            name: u.name.clone(),
            email: u.email.clone(),
            role: u.role,
            site: u.site.clone(),
            points: 0.0,
            entry_count: 0,
            working_days: 0,
            goal_percentage: 0.0,
        });
    }

    for e in entries
        .iter()
        .filter(|e| ym.contains_iso(&e.date))
        .filter(|e| filter.as_deref().is_none_or(|f| e.owner_email == f))
    {
        let Some(&idx) = by_email.get(e.owner_email.as_str()) else {
            continue;
        };
        stats[idx].points += entry_points(e, &types);
        stats[idx].entry_count += 1;
    }

    let users_by_email: HashMap<&str, &User> =
        users.iter().map(|u| (u.email.as_str(), u)).collect();

    let mut ranked: Vec<UserStat> = stats
        .into_iter()
        .filter(|st| filter.as_deref().is_none_or(|f| st.email == f))
        .map(|mut st| {
            if let Some(u) = users_by_email.get(st.email.as_str()) {
                st.working_days =
                    working_days(ym, holidays, u.site.as_deref(), &u.vacation_dates).len();
            }
            st.goal_percentage =
                goal_percentage(st.points, st.working_days, config.daily_point_target);
            st
        })
        .collect();

    // stable: ties keep seed order
    ranked.sort_by(|a, b| b.points.total_cmp(&a.points));
    ranked
}

/// Points per day of month for one user's entries in `ym`.
pub fn daily_points(
    ym: YearMonth,
    entries: &[Entry],
    entry_types: &[EntryType],
    email: &str,
) -> BTreeMap<u32, f64> {
    let email = email.trim().to_lowercase();
    let types = type_index(entry_types);
    let mut out = BTreeMap::new();

    for e in entries
        .iter()
        .filter(|e| e.owner_email == email && ym.contains_iso(&e.date))
    {
        if let Some(day) = e.day() {
            *out.entry(day).or_insert(0.0) += entry_points(e, &types);
        }
    }
    out
}

/// `build_stats` over a loaded data context.
pub fn stats_for(ctx: &DataContext, ym: YearMonth, email_filter: Option<&str>) -> Vec<UserStat> {
    build_stats(
        ym,
        &ctx.entries,
        &ctx.users,
        &ctx.entry_types,
        &ctx.holidays,
        &ctx.incentive,
        email_filter,
    )
}
