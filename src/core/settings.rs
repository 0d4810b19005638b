use crate::core::identity::require_supervisor;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::settings::{load_incentive, save_incentive};
use crate::errors::{AppError, AppResult};
use crate::models::incentive::IncentiveConfig;
use crate::models::user::User;
use crate::utils::date::parse_date;

pub struct SettingsLogic;

impl SettingsLogic {
    /// Update the incentive configuration. `None` keeps the stored value.
    pub fn update(
        pool: &mut DbPool,
        actor: &User,
        daily_point_target: Option<f64>,
        monthly_bonus: Option<f64>,
        effective_date: Option<&str>,
    ) -> AppResult<IncentiveConfig> {
        require_supervisor(actor)?;

        let mut cfg = load_incentive(&pool.conn)?;

        if let Some(p) = daily_point_target {
            if !p.is_finite() || p <= 0.0 {
                return Err(AppError::InvalidNumber(format!(
                    "{p} (points per day must be greater than 0)"
                )));
            }
            cfg.daily_point_target = p;
        }
        if let Some(b) = monthly_bonus {
            if !b.is_finite() || b < 0.0 {
                return Err(AppError::InvalidNumber(b.to_string()));
            }
            cfg.monthly_bonus = b;
        }
        if let Some(d) = effective_date {
            let parsed = parse_date(d).ok_or_else(|| AppError::InvalidDate(d.to_string()))?;
            cfg.effective_date = parsed.format("%Y-%m-%d").to_string();
        }

        save_incentive(&pool.conn, &cfg)?;
        audit(
            &pool.conn,
            &actor.email,
            "settings",
            &format!(
                "points/day={} bonus={} effective={}",
                cfg.daily_point_target, cfg.monthly_bonus, cfg.effective_date
            ),
        );
        Ok(cfg)
    }
}
