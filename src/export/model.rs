// src/export/model.rs

use crate::core::stats::bonus_for;
use crate::models::incentive::IncentiveConfig;
use crate::models::user_stat::UserStat;
use crate::utils::{fmt_percent, fmt_points};
use serde::Serialize;

/// One ranked line of a report, shared by every export format.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct RankingRow {
    pub position: usize,
    pub name: String,
    pub email: String,
    pub role: String,
    pub site: String,
    pub entries: usize,
    pub points: f64,
    pub goal_percentage: f64,
    pub bonus: f64,
}

impl RankingRow {
    pub fn is_bonus_eligible(&self) -> bool {
        crate::core::stats::is_eligible(self.goal_percentage)
    }
}

/// Rank rows in the order `build_stats` returned them, with the bonus applied.
pub fn ranking_rows(stats: &[UserStat], config: &IncentiveConfig) -> Vec<RankingRow> {
    stats
        .iter()
        .enumerate()
        .map(|(i, s)| RankingRow {
            position: i + 1,
            name: s.name.clone(),
            email: s.email.clone(),
            role: s.role.as_str().to_string(),
            site: s.site.clone().unwrap_or_default(),
            entries: s.entry_count,
            points: s.points,
            goal_percentage: s.goal_percentage,
            bonus: bonus_for(s, config),
        })
        .collect()
}

/// Compact ranking columns (CSV).
pub fn summary_headers(currency: &str) -> Vec<String> {
    ["Pos", "User", "Points", "Entries", "% Goal"]
        .iter()
        .map(|s| s.to_string())
        .chain(std::iter::once(format!("Bonus ({currency})")))
        .collect()
}

pub fn summary_row(r: &RankingRow) -> Vec<String> {
    vec![
        r.position.to_string(),
        r.name.clone(),
        fmt_points(r.points),
        r.entries.to_string(),
        fmt_percent(r.goal_percentage),
        format!("{:.2}", r.bonus),
    ]
}

/// Full report columns (PDF / XLSX).
pub fn report_headers(currency: &str) -> Vec<String> {
    ["Pos", "User", "Role", "Site", "Entries", "Points", "% Goal"]
        .iter()
        .map(|s| s.to_string())
        .chain(std::iter::once(format!("Bonus ({currency})")))
        .collect()
}

pub fn report_row(r: &RankingRow) -> Vec<String> {
    vec![
        r.position.to_string(),
        r.name.clone(),
        r.role.clone(),
        if r.site.is_empty() { "-".into() } else { r.site.clone() },
        r.entries.to_string(),
        fmt_points(r.points),
        fmt_percent(r.goal_percentage),
        format!("{:.2}", r.bonus),
    ]
}
