use crate::utils::date::today_iso;
use serde::Serialize;

pub const DEFAULT_DAILY_POINT_TARGET: f64 = 2.0;
pub const DEFAULT_MONTHLY_BONUS: f64 = 300.0;

/// The active incentive scheme (single `configuracion` row).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IncentiveConfig {
    pub daily_point_target: f64, // ⇔ configuracion.puntos_por_dia
    pub monthly_bonus: f64,      // ⇔ configuracion.bono_mensual
    pub effective_date: String,  // ⇔ configuracion.fecha_vigencia
}

impl Default for IncentiveConfig {
    fn default() -> Self {
        Self {
            daily_point_target: DEFAULT_DAILY_POINT_TARGET,
            monthly_bonus: DEFAULT_MONTHLY_BONUS,
            effective_date: today_iso(),
        }
    }
}

impl IncentiveConfig {
    /// Field-wise fallback. A non-positive daily target, a missing or negative
    /// bonus and an empty date are replaced by the defaults; a bonus of 0 is kept.
    pub fn with_fallbacks(daily_point_target: f64, monthly_bonus: Option<f64>, effective_date: &str) -> Self {
        let d = Self::default();
        Self {
            daily_point_target: if daily_point_target > 0.0 {
                daily_point_target
            } else {
                d.daily_point_target
            },
            monthly_bonus: monthly_bonus.filter(|b| *b >= 0.0).unwrap_or(d.monthly_bonus),
            effective_date: if effective_date.trim().is_empty() {
                d.effective_date
            } else {
                effective_date.trim().to_string()
            },
        }
    }

    pub fn monthly_target(&self, working_days: usize) -> f64 {
        working_days as f64 * self.daily_point_target
    }
}
