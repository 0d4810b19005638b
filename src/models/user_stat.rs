use super::role::Role;
use serde::Serialize;

/// Per-user monthly aggregate produced by `core::stats::build_stats`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserStat {
    pub name: String,
    pub email: String,
    pub role: Role,
    pub site: Option<String>,
    pub points: f64,
    pub entry_count: usize,
    pub working_days: usize,
    pub goal_percentage: f64,
}

impl UserStat {
    pub fn is_bonus_eligible(&self) -> bool {
        crate::core::stats::is_eligible(self.goal_percentage)
    }
}
