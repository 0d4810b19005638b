//! Personal monthly dashboard: totals, goal progress and per-day chips.

use crate::core::calendar::working_days;
use crate::core::stats::{bonus_amount, daily_points, entry_points, goal_percentage, type_index};
use crate::models::context::DataContext;
use crate::models::entry::Entry;
use crate::models::year_month::YearMonth;
use crate::utils::date::relative_today;
use chrono::NaiveDate;
use serde::Serialize;
use std::cmp::Reverse;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ProgressStatus {
    GoalReached,
    OnTrack,
    Behind,
}

impl ProgressStatus {
    /// Thresholds apply to the rounded percentage.
    pub fn from_percentage(pct: f64) -> Self {
        let rounded = pct.round().clamp(0.0, 100.0);
        if rounded >= 100.0 {
            ProgressStatus::GoalReached
        } else if rounded >= 75.0 {
            ProgressStatus::OnTrack
        } else {
            ProgressStatus::Behind
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProgressStatus::GoalReached => "Goal reached",
            ProgressStatus::OnTrack => "On track",
            ProgressStatus::Behind => "Behind",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayChip {
    pub day: u32,
    pub points: f64,
    pub target_met: bool,
    /// Day lies after today within the current month.
    pub upcoming: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecentEntry {
    pub entry: Entry,
    pub type_name: String,
    pub points: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub month: YearMonth,
    pub email: String,
    pub total_points: f64,
    pub working_days: usize,
    pub monthly_target: f64,
    pub goal_percentage: f64,
    pub bonus: f64,
    pub status: ProgressStatus,
    pub days: Vec<DayChip>,
    pub recent: Vec<RecentEntry>,
}

/// Dashboard of `email` for `ym`. `recent_limit` caps the recent list.
pub fn build_dashboard(
    ctx: &DataContext,
    ym: YearMonth,
    email: &str,
    today: NaiveDate,
    recent_limit: usize,
) -> Dashboard {
    let email = email.trim().to_lowercase();
    let user = ctx.user_by_email(&email);

    let work_days = working_days(
        ym,
        &ctx.holidays,
        user.and_then(|u| u.site.as_deref()),
        user.map(|u| u.vacation_dates.as_slice()).unwrap_or(&[]),
    );

    // points on non-working days still count toward the total
    let per_day = daily_points(ym, &ctx.entries, &ctx.entry_types, &email);
    let total_points: f64 = per_day.values().sum();

    let daily_target = ctx.incentive.daily_point_target;
    let monthly_target = ctx.incentive.monthly_target(work_days.len());
    let pct = goal_percentage(total_points, work_days.len(), daily_target);
    let bonus = bonus_amount(pct, &ctx.incentive);

    let today_rel = relative_today(ym.year(), ym.month(), today);
    let days = work_days
        .iter()
        .map(|&d| {
            let points = per_day.get(&d).copied().unwrap_or(0.0);
            DayChip {
                day: d,
                points,
                target_met: points >= daily_target,
                upcoming: today_rel.is_some_and(|t| d > t),
            }
        })
        .collect();

    let types = type_index(&ctx.entry_types);

    // ids are creation timestamps; non-numeric ids keep reverse store order
    let mut mine: Vec<&Entry> = ctx
        .entries
        .iter()
        .filter(|e| e.owner_email == email && ym.contains_iso(&e.date))
        .rev()
        .collect();
    mine.sort_by_key(|e| Reverse(e.id.parse::<i64>().ok()));

    let recent = mine
        .into_iter()
        .take(recent_limit)
        .map(|e| RecentEntry {
            type_name: types
                .get(e.entry_type_id.as_str())
                .map(|t| t.name.clone())
                .unwrap_or_else(|| e.entry_type_id.clone()),
            points: entry_points(e, &types),
            entry: e.clone(),
        })
        .collect();

    Dashboard {
        month: ym,
        email,
        total_points,
        working_days: work_days.len(),
        monthly_target,
        goal_percentage: pct,
        bonus,
        status: ProgressStatus::from_percentage(pct),
        days,
        recent,
    }
}
