//! Working-day calendar.
//!
//! A working day is a weekday of the month that is neither a holiday for the
//! user's site (or a site-wide holiday) nor one of the user's vacation days.

use crate::models::holiday::Holiday;
use crate::models::user::User;
use crate::models::year_month::YearMonth;
use crate::utils::date::{self, parse_date};
use chrono::{Datelike, NaiveDate, Weekday};
use std::collections::HashSet;

pub fn days_in_month(ym: YearMonth) -> u32 {
    date::days_in_month(ym.year(), ym.month())
}

/// Holidays of `ym` that apply to `site`.
///
/// A site-wide holiday (empty site) always applies. A site-specific holiday
/// applies when its site matches, case-insensitively. With no site, every
/// holiday of the month applies. Holidays with an unparseable date are skipped.
pub fn holidays_for<'a>(ym: YearMonth, holidays: &'a [Holiday], site: Option<&str>) -> Vec<&'a Holiday> {
    let site = site.map(|s| s.trim().to_lowercase()).unwrap_or_default();

    holidays
        .iter()
        .filter(|h| parse_date(&h.date).is_some_and(|d| ym.contains(d)))
        .filter(|h| site.is_empty() || h.is_sitewide() || h.site.trim().to_lowercase() == site)
        .collect()
}

/// Ordered day-of-month numbers of the working days in `ym`.
pub fn working_days(
    ym: YearMonth,
    holidays: &[Holiday],
    site: Option<&str>,
    vacation_dates: &[String],
) -> Vec<u32> {
    let holiday_set: HashSet<NaiveDate> = holidays_for(ym, holidays, site)
        .into_iter()
        .filter_map(|h| parse_date(&h.date))
        .collect();

    let vacation_set: HashSet<NaiveDate> = vacation_dates
        .iter()
        .filter_map(|v| parse_date(v))
        .collect();

    (1..=days_in_month(ym))
        .filter_map(|d| NaiveDate::from_ymd_opt(ym.year(), ym.month(), d))
        .filter(|d| !matches!(d.weekday(), Weekday::Sat | Weekday::Sun))
        .filter(|d| !holiday_set.contains(d))
        .filter(|d| !vacation_set.contains(d))
        .map(|d| d.day())
        .collect()
}

/// `working_days` using the user's own site and vacation set.
pub fn working_days_for_user(ym: YearMonth, holidays: &[Holiday], user: &User) -> Vec<u32> {
    working_days(ym, holidays, user.site.as_deref(), &user.vacation_dates)
}
